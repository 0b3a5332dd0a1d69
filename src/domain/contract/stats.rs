use serde::{Deserialize, Serialize};

/// Aggregate counters served by `/admin/dashboard`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_domains: u32,
    pub running_models: u32,
    pub recent_runs: u32,
    pub average_latency_ms: u64,
    pub error_rate: f64,
    pub total_cost: f64,
}

/// Plain (un-enveloped) body returned by `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
}
