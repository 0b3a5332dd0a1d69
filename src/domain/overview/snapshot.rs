use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sections::{
    ActivityEntry, DomainAdapter, EvaluationSummary, ModelStatus, PipelineSummary,
    SystemHealthSummary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionColor {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

/// Static dashboard shortcut; never fetched from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ActionColor>,
}

/// Point-in-time join of the six overview sections.
///
/// Never partially constructed: the aggregator either fills every section
/// or reports a failure envelope instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewData {
    pub system_health: SystemHealthSummary,
    pub pipelines: Vec<PipelineSummary>,
    pub models: Vec<ModelStatus>,
    pub activity: Vec<ActivityEntry>,
    pub domains: Vec<DomainAdapter>,
    pub evaluation_highlights: EvaluationSummary,
    pub quick_actions: Vec<QuickAction>,
    pub timestamp: DateTime<Utc>,
}
