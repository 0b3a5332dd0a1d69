//! Shared API contract types exchanged with the NeuroForge backend.
//!
//! Pure schema; all behavior lives in the infrastructure layer.

mod enums;
mod inference;
mod log;
mod model;
mod pipeline;
mod response;
mod stats;

pub use enums::{Domain, InferenceStatus, LogLevel, ModelProvider, RoutingStrategy, TaskType};
pub use inference::{
    EvaluationResult, EvaluationRun, EvaluationScore, InferenceRequest, InferenceResult,
    ProvenanceRecord, RunSummary,
};
pub use log::LogEntry;
pub use model::{
    ChampionModel, Currency, ModelCatalog, ModelCost, ModelHealth, ModelHealthState,
    ModelPerformanceMetric,
};
pub use pipeline::{
    DomainConfig, DomainConfigUpdate, EvaluationDimension, ModelReference, PipelineConfig,
    PipelineUpdate, PromptTemplate, RoutingRule, TemplateCategory,
};
pub use response::{ApiError, ApiResponse, ResponseMeta};
pub use stats::{DashboardStats, HealthCheck};
