//! Section types for the operator dashboard overview.
//!
//! Each section is independently sourced; the aggregator joins them into
//! one [`super::OverviewData`] snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::contract::{Domain, InferenceStatus, ModelProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTrend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallHealth {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealthMetric {
    pub id: String,
    pub label: String,
    /// Display value; the backend sends numbers and preformatted strings
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub status: MetricStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealthSummary {
    pub metrics: Vec<SystemHealthMetric>,
    pub overall_health: OverallHealth,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    Active,
    Inactive,
    Paused,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub id: String,
    pub domain: Domain,
    pub status: PipelineState,
    pub active_models: u32,
    pub total_models: u32,
    #[serde(rename = "requestsLast24h")]
    pub requests_last_24h: u64,
    pub average_latency_ms: u64,
    /// 0.0 to 1.0
    pub success_rate: f64,
    pub error_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_request: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelState {
    Healthy,
    Degraded,
    Unhealthy,
    Offline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStatus {
    pub id: String,
    pub name: String,
    pub provider: ModelProvider,
    pub domain: Domain,
    pub status: ModelState,
    pub latency_ms: u64,
    /// Requests per minute
    pub throughput: u32,
    /// 0.0 to 1.0
    pub error_rate: f64,
    pub cost_per_inference: f64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub is_champion: bool,
    pub last_health_check: DateTime<Utc>,
    /// 0.0 to 1.0
    pub availability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Inference,
    Evaluation,
    Error,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub domain: Domain,
    pub status: InferenceStatus,
    pub model_id: String,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_score: Option<f64>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvaluationMetrics {
    pub coherence: f64,
    pub relevance: f64,
    pub factuality: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAdapter {
    pub domain: Domain,
    pub is_active: bool,
    pub models_running: u32,
    pub requests_processed: u64,
    /// 0.0 to 1.0
    pub average_quality: f64,
    pub evaluation_metrics: DomainEvaluationMetrics,
    pub last_processed: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationHighlight {
    pub model_id: String,
    pub model_name: String,
    /// 0.0 to 1.0
    pub evaluation_score: f64,
    pub coherence_score: f64,
    pub relevance_score: f64,
    pub factuality_score: f64,
    /// Percentage change from the previous evaluation window
    pub improvement: f64,
    pub trend: ScoreTrend,
    pub domain: Domain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub top_models: Vec<EvaluationHighlight>,
    pub average_quality: f64,
    pub total_evaluations: u64,
    pub improvement_rate: f64,
}
