//! Model catalog and routing entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Domain, ModelProvider};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCatalog {
    pub id: String,
    pub name: String,
    pub provider: ModelProvider,
    /// Capability tag, e.g. `literary-analysis` or `market-research`
    pub capability: String,
    pub cost: ModelCost,
    pub health: ModelHealth,
    pub last_used: DateTime<Utc>,
    pub is_champion: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCost {
    pub input_cost_per_k: f64,
    pub output_cost_per_k: f64,
    pub estimated_cost_per_inference: f64,
    pub currency: Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    USD,
    EUR,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelHealth {
    pub status: ModelHealthState,
    pub latency_ms: u64,
    /// 0.0 to 1.0
    pub error_rate: f64,
    pub availability_percent: f64,
    pub last_health_check: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelHealthState {
    Healthy,
    Degraded,
    Unhealthy,
    Offline,
}

/// Currently preferred model for a domain, chosen by evaluation score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionModel {
    pub model_id: String,
    pub domain: Domain,
    pub score: f64,
    pub promoted_at: DateTime<Utc>,
    /// Seconds the champion has held its title
    pub reign_duration: u64,
    pub reason_for_selection: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPerformanceMetric {
    pub model_id: String,
    pub domain: Domain,
    pub quality_score: f64,
    pub latency_ms: u64,
    pub cost: f64,
    pub success_rate: f64,
    pub last_evaluated: DateTime<Utc>,
}
