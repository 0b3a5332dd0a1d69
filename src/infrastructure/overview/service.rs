use chrono::Utc;
use once_cell::sync::Lazy;
use tracing::warn;

use super::source::OverviewSource;
use crate::domain::contract::ApiResponse;
use crate::domain::overview::{
    ActionColor, ActivityEntry, DomainAdapter, EvaluationSummary, ModelStatus, OverviewData,
    PipelineSummary, QuickAction, SystemHealthSummary,
};
use crate::domain::ConsoleError;

pub const FETCH_ERROR: &str = "FETCH_ERROR";
pub const PARTIAL_FETCH_ERROR: &str = "PARTIAL_FETCH_ERROR";

static QUICK_ACTIONS: Lazy<Vec<QuickAction>> = Lazy::new(|| {
    vec![
        QuickAction {
            id: "action-pipelines".to_string(),
            label: "Configure Pipelines".to_string(),
            href: "/pipelines".to_string(),
            icon: Some("⚙️".to_string()),
            description: Some("Manage domain pipelines".to_string()),
            color: Some(ActionColor::Primary),
        },
        QuickAction {
            id: "action-playground".to_string(),
            label: "Open Playground".to_string(),
            href: "/playground".to_string(),
            icon: Some("🎮".to_string()),
            description: Some("Test models directly".to_string()),
            color: Some(ActionColor::Secondary),
        },
        QuickAction {
            id: "action-evaluations".to_string(),
            label: "View Evaluations".to_string(),
            href: "/evaluations".to_string(),
            icon: Some("📊".to_string()),
            description: Some("Review model performance".to_string()),
            color: Some(ActionColor::Success),
        },
        QuickAction {
            id: "action-logs".to_string(),
            label: "Check Logs".to_string(),
            href: "/logs".to_string(),
            icon: Some("📋".to_string()),
            description: Some("Inspect pipeline logs".to_string()),
            color: Some(ActionColor::Warning),
        },
    ]
});

/// Static dashboard shortcuts, available without any network call
pub fn quick_actions() -> &'static [QuickAction] {
    &QUICK_ACTIONS
}

/// Aggregates the six overview sections into one snapshot.
///
/// Every section fetch is fault-isolated: an underlying failure becomes a
/// `FETCH_ERROR` envelope and never crosses this boundary as an `Err`.
/// The composite fetch fans out all six concurrently and reports
/// `PARTIAL_FETCH_ERROR` if any section failed, without returning the
/// surviving subset.
pub struct OverviewService<S> {
    source: S,
}

impl<S: OverviewSource> OverviewService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn fetch_system_health(&self) -> ApiResponse<SystemHealthSummary> {
        guard(self.source.system_health().await, "system health")
    }

    pub async fn fetch_pipelines_summary(&self) -> ApiResponse<Vec<PipelineSummary>> {
        guard(self.source.pipeline_summaries().await, "pipelines")
    }

    pub async fn fetch_model_status(&self) -> ApiResponse<Vec<ModelStatus>> {
        guard(self.source.model_statuses().await, "model status")
    }

    pub async fn fetch_recent_activity(&self) -> ApiResponse<Vec<ActivityEntry>> {
        guard(self.source.recent_activity().await, "recent activity")
    }

    pub async fn fetch_domain_summaries(&self) -> ApiResponse<Vec<DomainAdapter>> {
        guard(self.source.domain_adapters().await, "domain summaries")
    }

    pub async fn fetch_evaluation_highlights(&self) -> ApiResponse<EvaluationSummary> {
        guard(
            self.source.evaluation_highlights().await,
            "evaluation highlights",
        )
    }

    /// Fetch all six sections concurrently and join them.
    ///
    /// The aggregate failure does not name the section(s) that failed;
    /// that opacity is part of the current contract.
    pub async fn fetch_complete_overview(&self) -> ApiResponse<OverviewData> {
        let (health, pipelines, models, activity, domains, evaluations) = tokio::join!(
            self.fetch_system_health(),
            self.fetch_pipelines_summary(),
            self.fetch_model_status(),
            self.fetch_recent_activity(),
            self.fetch_domain_summaries(),
            self.fetch_evaluation_highlights(),
        );

        let (
            Ok(system_health),
            Ok(pipelines),
            Ok(models),
            Ok(activity),
            Ok(domains),
            Ok(evaluation_highlights),
        ) = (
            health.into_result(),
            pipelines.into_result(),
            models.into_result(),
            activity.into_result(),
            domains.into_result(),
            evaluations.into_result(),
        )
        else {
            return ApiResponse::err(
                PARTIAL_FETCH_ERROR,
                "Some overview sections failed to load",
            );
        };

        ApiResponse::ok(OverviewData {
            system_health,
            pipelines,
            models,
            activity,
            domains,
            evaluation_highlights,
            quick_actions: quick_actions().to_vec(),
            timestamp: Utc::now(),
        })
    }
}

fn guard<T>(result: Result<T, ConsoleError>, section: &str) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::ok(data),
        Err(e) => {
            warn!(section = section, error = %e, "Overview section fetch failed");
            ApiResponse::err(FETCH_ERROR, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::overview::MockOverviewSource;
    use async_trait::async_trait;

    /// Source wrapping the mock data with per-section failure switches
    #[derive(Default)]
    struct FlakySource {
        fail_health: bool,
        fail_pipelines: bool,
        fail_models: bool,
        fail_activity: bool,
        fail_domains: bool,
        fail_evaluations: bool,
    }

    impl FlakySource {
        fn fail(result: bool) -> Result<(), ConsoleError> {
            if result {
                Err(ConsoleError::transport("connection reset"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl OverviewSource for FlakySource {
        async fn system_health(
            &self,
        ) -> Result<crate::domain::overview::SystemHealthSummary, ConsoleError> {
            Self::fail(self.fail_health)?;
            MockOverviewSource::new().system_health().await
        }

        async fn pipeline_summaries(&self) -> Result<Vec<PipelineSummary>, ConsoleError> {
            Self::fail(self.fail_pipelines)?;
            MockOverviewSource::new().pipeline_summaries().await
        }

        async fn model_statuses(&self) -> Result<Vec<ModelStatus>, ConsoleError> {
            Self::fail(self.fail_models)?;
            MockOverviewSource::new().model_statuses().await
        }

        async fn recent_activity(&self) -> Result<Vec<ActivityEntry>, ConsoleError> {
            Self::fail(self.fail_activity)?;
            MockOverviewSource::new().recent_activity().await
        }

        async fn domain_adapters(&self) -> Result<Vec<DomainAdapter>, ConsoleError> {
            Self::fail(self.fail_domains)?;
            MockOverviewSource::new().domain_adapters().await
        }

        async fn evaluation_highlights(&self) -> Result<EvaluationSummary, ConsoleError> {
            Self::fail(self.fail_evaluations)?;
            MockOverviewSource::new().evaluation_highlights().await
        }
    }

    #[tokio::test]
    async fn test_section_fetch_converts_failure_into_envelope() {
        let service = OverviewService::new(FlakySource {
            fail_health: true,
            ..Default::default()
        });

        let response = service.fetch_system_health().await;
        assert!(!response.is_success());
        assert_eq!(response.error().unwrap().code, FETCH_ERROR);
    }

    #[tokio::test]
    async fn test_all_sections_succeed_yields_full_snapshot() {
        let start = Utc::now();
        let service = OverviewService::new(MockOverviewSource::new());

        let response = service.fetch_complete_overview().await;
        assert!(response.is_success());

        let data = response.data().unwrap();
        assert_eq!(data.pipelines.len(), 3);
        assert_eq!(data.models.len(), 4);
        assert_eq!(data.activity.len(), 5);
        assert_eq!(data.domains.len(), 3);
        assert_eq!(data.quick_actions.len(), 4);
        assert!(data.timestamp >= start);
    }

    #[tokio::test]
    async fn test_single_section_failure_collapses_to_partial_fetch_error() {
        let service = OverviewService::new(FlakySource {
            fail_models: true,
            ..Default::default()
        });

        let response = service.fetch_complete_overview().await;
        assert!(!response.is_success());
        assert!(response.data().is_none());

        let error = response.error().unwrap();
        assert_eq!(error.code, PARTIAL_FETCH_ERROR);
        assert_eq!(error.message, "Some overview sections failed to load");
    }

    #[tokio::test]
    async fn test_every_section_failing_still_reports_one_generic_error() {
        let service = OverviewService::new(FlakySource {
            fail_health: true,
            fail_pipelines: true,
            fail_models: true,
            fail_activity: true,
            fail_domains: true,
            fail_evaluations: true,
        });

        let response = service.fetch_complete_overview().await;
        assert_eq!(response.error().unwrap().code, PARTIAL_FETCH_ERROR);
    }

    #[test]
    fn test_quick_actions_are_constant_and_synchronous() {
        let first = quick_actions();
        let second = quick_actions();
        assert_eq!(first.len(), 4);
        assert_eq!(first[0].id, "action-pipelines");
        assert_eq!(first[3].id, "action-logs");
        assert_eq!(
            first.iter().map(|a| &a.id).collect::<Vec<_>>(),
            second.iter().map(|a| &a.id).collect::<Vec<_>>()
        );
    }
}
