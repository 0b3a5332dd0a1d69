//! Deterministic stand-in data for backend endpoints that do not exist yet.
//!
//! The shapes and figures here track what the dashboard expects to see once
//! the real section endpoints land; only the timestamps move.

use async_trait::async_trait;
use chrono::{Duration, Utc};

use super::source::OverviewSource;
use crate::domain::contract::{Domain, InferenceStatus, ModelProvider};
use crate::domain::overview::{
    ActivityEntry, ActivityKind, DomainAdapter, DomainEvaluationMetrics, EvaluationHighlight,
    EvaluationSummary, MetricStatus, ModelState, ModelStatus, OverallHealth, PipelineState,
    PipelineSummary, ScoreTrend, SystemHealthMetric, SystemHealthSummary, Trend,
};
use crate::domain::ConsoleError;

#[derive(Debug, Default, Clone)]
pub struct MockOverviewSource;

impl MockOverviewSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OverviewSource for MockOverviewSource {
    async fn system_health(&self) -> Result<SystemHealthSummary, ConsoleError> {
        Ok(SystemHealthSummary {
            metrics: vec![
                SystemHealthMetric {
                    id: "active-inferences".to_string(),
                    label: "Active Inferences".to_string(),
                    value: serde_json::json!(47),
                    unit: Some("requests".to_string()),
                    trend: Some(Trend::Up),
                    trend_value: Some(12.0),
                    icon: Some("⚡".to_string()),
                    status: MetricStatus::Healthy,
                },
                SystemHealthMetric {
                    id: "avg-latency".to_string(),
                    label: "Avg Latency".to_string(),
                    value: serde_json::json!(95),
                    unit: Some("ms".to_string()),
                    trend: Some(Trend::Down),
                    trend_value: Some(-5.0),
                    icon: Some("🚀".to_string()),
                    status: MetricStatus::Healthy,
                },
                SystemHealthMetric {
                    id: "success-rate".to_string(),
                    label: "Success Rate".to_string(),
                    value: serde_json::json!("98.7"),
                    unit: Some("%".to_string()),
                    trend: Some(Trend::Up),
                    trend_value: Some(1.2),
                    icon: Some("✅".to_string()),
                    status: MetricStatus::Healthy,
                },
                SystemHealthMetric {
                    id: "models-healthy".to_string(),
                    label: "Models Healthy".to_string(),
                    value: serde_json::json!("9/10"),
                    unit: Some("models".to_string()),
                    trend: Some(Trend::Neutral),
                    trend_value: None,
                    icon: Some("🧠".to_string()),
                    status: MetricStatus::Warning,
                },
            ],
            overall_health: OverallHealth::Healthy,
            last_updated: Utc::now(),
        })
    }

    async fn pipeline_summaries(&self) -> Result<Vec<PipelineSummary>, ConsoleError> {
        let now = Utc::now();
        Ok(vec![
            PipelineSummary {
                id: "pipeline-literary".to_string(),
                domain: Domain::Literary,
                status: PipelineState::Active,
                active_models: 3,
                total_models: 4,
                requests_last_24h: 1243,
                average_latency_ms: 87,
                success_rate: 0.987,
                error_count: 16,
                last_request: Some(now - Duration::seconds(2)),
            },
            PipelineSummary {
                id: "pipeline-market".to_string(),
                domain: Domain::Market,
                status: PipelineState::Active,
                active_models: 4,
                total_models: 5,
                requests_last_24h: 2156,
                average_latency_ms: 102,
                success_rate: 0.994,
                error_count: 12,
                last_request: Some(now - Duration::seconds(5)),
            },
            PipelineSummary {
                id: "pipeline-general".to_string(),
                domain: Domain::General,
                status: PipelineState::Active,
                active_models: 2,
                total_models: 3,
                requests_last_24h: 876,
                average_latency_ms: 98,
                success_rate: 0.979,
                error_count: 18,
                last_request: Some(now - Duration::seconds(3)),
            },
        ])
    }

    async fn model_statuses(&self) -> Result<Vec<ModelStatus>, ConsoleError> {
        let now = Utc::now();
        Ok(vec![
            ModelStatus {
                id: "model-neural-illm".to_string(),
                name: "Neural-ILM".to_string(),
                provider: ModelProvider::Ollama,
                domain: Domain::Literary,
                status: ModelState::Healthy,
                latency_ms: 78,
                throughput: 45,
                error_rate: 0.005,
                cost_per_inference: 0.0,
                successful_requests: 4521,
                failed_requests: 23,
                is_champion: true,
                last_health_check: now - Duration::seconds(10),
                availability: 0.998,
            },
            ModelStatus {
                id: "model-neural-market".to_string(),
                name: "Neural-Market".to_string(),
                provider: ModelProvider::Ollama,
                domain: Domain::Market,
                status: ModelState::Healthy,
                latency_ms: 92,
                throughput: 38,
                error_rate: 0.008,
                cost_per_inference: 0.0,
                successful_requests: 5234,
                failed_requests: 43,
                is_champion: true,
                last_health_check: now - Duration::seconds(12),
                availability: 0.993,
            },
            ModelStatus {
                id: "model-gpt4".to_string(),
                name: "GPT-4".to_string(),
                provider: ModelProvider::Openai,
                domain: Domain::General,
                status: ModelState::Degraded,
                latency_ms: 445,
                throughput: 12,
                error_rate: 0.032,
                cost_per_inference: 0.015,
                successful_requests: 567,
                failed_requests: 19,
                is_champion: false,
                last_health_check: now - Duration::seconds(8),
                availability: 0.945,
            },
            ModelStatus {
                id: "model-claude".to_string(),
                name: "Claude 3.5".to_string(),
                provider: ModelProvider::Anthropic,
                domain: Domain::General,
                status: ModelState::Healthy,
                latency_ms: 234,
                throughput: 25,
                error_rate: 0.012,
                cost_per_inference: 0.018,
                successful_requests: 892,
                failed_requests: 11,
                is_champion: false,
                last_health_check: now - Duration::seconds(9),
                availability: 0.987,
            },
        ])
    }

    async fn recent_activity(&self) -> Result<Vec<ActivityEntry>, ConsoleError> {
        Ok(vec![
            ActivityEntry {
                id: "activity-1".to_string(),
                kind: ActivityKind::Inference,
                domain: Domain::Literary,
                status: InferenceStatus::Completed,
                model_id: "model-neural-illm".to_string(),
                latency_ms: 76,
                tokens_used: Some(287),
                evaluation_score: Some(0.92),
                message: "Literary analysis completed".to_string(),
                correlation_id: Some("corr-001".to_string()),
            },
            ActivityEntry {
                id: "activity-2".to_string(),
                kind: ActivityKind::Inference,
                domain: Domain::Market,
                status: InferenceStatus::Completed,
                model_id: "model-neural-market".to_string(),
                latency_ms: 103,
                tokens_used: Some(512),
                evaluation_score: Some(0.87),
                message: "Market trend analysis completed".to_string(),
                correlation_id: Some("corr-002".to_string()),
            },
            ActivityEntry {
                id: "activity-3".to_string(),
                kind: ActivityKind::Inference,
                domain: Domain::General,
                status: InferenceStatus::Completed,
                model_id: "model-claude".to_string(),
                latency_ms: 234,
                tokens_used: Some(421),
                evaluation_score: Some(0.89),
                message: "General query processed".to_string(),
                correlation_id: Some("corr-003".to_string()),
            },
            ActivityEntry {
                id: "activity-4".to_string(),
                kind: ActivityKind::Error,
                domain: Domain::Market,
                status: InferenceStatus::Failed,
                model_id: "model-gpt4".to_string(),
                latency_ms: 0,
                tokens_used: None,
                evaluation_score: None,
                message: "Rate limit exceeded".to_string(),
                correlation_id: Some("corr-004".to_string()),
            },
            ActivityEntry {
                id: "activity-5".to_string(),
                kind: ActivityKind::Evaluation,
                domain: Domain::Literary,
                status: InferenceStatus::Completed,
                model_id: "model-neural-illm".to_string(),
                latency_ms: 0,
                tokens_used: None,
                evaluation_score: None,
                message: "Champion model evaluation updated".to_string(),
                correlation_id: Some("corr-005".to_string()),
            },
        ])
    }

    async fn domain_adapters(&self) -> Result<Vec<DomainAdapter>, ConsoleError> {
        let now = Utc::now();
        Ok(vec![
            DomainAdapter {
                domain: Domain::Literary,
                is_active: true,
                models_running: 3,
                requests_processed: 1243,
                average_quality: 0.91,
                evaluation_metrics: DomainEvaluationMetrics {
                    coherence: 0.94,
                    relevance: 0.89,
                    factuality: 0.9,
                },
                last_processed: now - Duration::seconds(2),
            },
            DomainAdapter {
                domain: Domain::Market,
                is_active: true,
                models_running: 4,
                requests_processed: 2156,
                average_quality: 0.88,
                evaluation_metrics: DomainEvaluationMetrics {
                    coherence: 0.91,
                    relevance: 0.85,
                    factuality: 0.88,
                },
                last_processed: now - Duration::seconds(5),
            },
            DomainAdapter {
                domain: Domain::General,
                is_active: true,
                models_running: 2,
                requests_processed: 876,
                average_quality: 0.87,
                evaluation_metrics: DomainEvaluationMetrics {
                    coherence: 0.89,
                    relevance: 0.84,
                    factuality: 0.88,
                },
                last_processed: now - Duration::seconds(3),
            },
        ])
    }

    async fn evaluation_highlights(&self) -> Result<EvaluationSummary, ConsoleError> {
        Ok(EvaluationSummary {
            top_models: vec![
                EvaluationHighlight {
                    model_id: "model-neural-illm".to_string(),
                    model_name: "Neural-ILM".to_string(),
                    evaluation_score: 0.936,
                    coherence_score: 0.94,
                    relevance_score: 0.93,
                    factuality_score: 0.93,
                    improvement: 2.3,
                    trend: ScoreTrend::Up,
                    domain: Domain::Literary,
                },
                EvaluationHighlight {
                    model_id: "model-neural-market".to_string(),
                    model_name: "Neural-Market".to_string(),
                    evaluation_score: 0.912,
                    coherence_score: 0.91,
                    relevance_score: 0.88,
                    factuality_score: 0.93,
                    improvement: 1.1,
                    trend: ScoreTrend::Stable,
                    domain: Domain::Market,
                },
                EvaluationHighlight {
                    model_id: "model-claude".to_string(),
                    model_name: "Claude 3.5".to_string(),
                    evaluation_score: 0.901,
                    coherence_score: 0.89,
                    relevance_score: 0.92,
                    factuality_score: 0.9,
                    improvement: -0.5,
                    trend: ScoreTrend::Down,
                    domain: Domain::General,
                },
            ],
            average_quality: 0.883,
            total_evaluations: 4275,
            improvement_rate: 1.3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sections_are_deterministic_in_shape() {
        let source = MockOverviewSource::new();

        let health = source.system_health().await.unwrap();
        assert_eq!(health.metrics.len(), 4);
        assert_eq!(health.overall_health, OverallHealth::Healthy);

        let pipelines = source.pipeline_summaries().await.unwrap();
        assert_eq!(pipelines.len(), 3);
        assert!(pipelines.iter().all(|p| p.status == PipelineState::Active));

        let models = source.model_statuses().await.unwrap();
        assert_eq!(models.len(), 4);
        assert_eq!(models.iter().filter(|m| m.is_champion).count(), 2);

        let activity = source.recent_activity().await.unwrap();
        assert_eq!(activity.len(), 5);

        let adapters = source.domain_adapters().await.unwrap();
        assert_eq!(adapters.len(), 3);

        let highlights = source.evaluation_highlights().await.unwrap();
        assert_eq!(highlights.top_models.len(), 3);
        assert_eq!(highlights.total_evaluations, 4275);
    }
}
