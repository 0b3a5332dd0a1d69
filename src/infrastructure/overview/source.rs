use async_trait::async_trait;

use crate::domain::overview::{
    ActivityEntry, DomainAdapter, EvaluationSummary, ModelStatus, PipelineSummary,
    SystemHealthSummary,
};
use crate::domain::ConsoleError;

/// Pluggable backing for the six overview sections.
///
/// The aggregation service treats mock and live implementations
/// identically; callers cannot observe which one is wired in.
#[async_trait]
pub trait OverviewSource: Send + Sync {
    async fn system_health(&self) -> Result<SystemHealthSummary, ConsoleError>;

    async fn pipeline_summaries(&self) -> Result<Vec<PipelineSummary>, ConsoleError>;

    async fn model_statuses(&self) -> Result<Vec<ModelStatus>, ConsoleError>;

    async fn recent_activity(&self) -> Result<Vec<ActivityEntry>, ConsoleError>;

    async fn domain_adapters(&self) -> Result<Vec<DomainAdapter>, ConsoleError>;

    async fn evaluation_highlights(&self) -> Result<EvaluationSummary, ConsoleError>;
}
