//! Overview snapshot types - sections plus the composite join

mod sections;
mod snapshot;

pub use sections::{
    ActivityEntry, ActivityKind, DomainAdapter, DomainEvaluationMetrics, EvaluationHighlight,
    EvaluationSummary, MetricStatus, ModelState, ModelStatus, OverallHealth, PipelineState,
    PipelineSummary, ScoreTrend, SystemHealthMetric, SystemHealthSummary, Trend,
};
pub use snapshot::{ActionColor, OverviewData, QuickAction};
