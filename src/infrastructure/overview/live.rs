use async_trait::async_trait;

use super::source::OverviewSource;
use crate::domain::overview::{
    ActivityEntry, DomainAdapter, EvaluationSummary, ModelStatus, PipelineSummary,
    SystemHealthSummary,
};
use crate::domain::ConsoleError;
use crate::infrastructure::api::{ApiClient, ApiRequest, HttpTransport};

/// Overview source backed by the real backend.
///
/// The section endpoints follow the paths the backend is growing under
/// `/admin/overview`; until every one of them ships, deployments keep
/// [`super::MockOverviewSource`] wired in. A failure envelope from the
/// backend surfaces as an error here so the aggregation service applies
/// the same fault isolation to both outcomes.
pub struct LiveOverviewSource<T> {
    client: ApiClient<T>,
}

impl<T: HttpTransport> LiveOverviewSource<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    async fn section<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<R, ConsoleError> {
        let response = self.client.send::<R>(ApiRequest::get(path)).await?;
        response.into_result().map_err(ConsoleError::from)
    }
}

#[async_trait]
impl<T: HttpTransport> OverviewSource for LiveOverviewSource<T> {
    async fn system_health(&self) -> Result<SystemHealthSummary, ConsoleError> {
        self.section("/admin/overview/health").await
    }

    async fn pipeline_summaries(&self) -> Result<Vec<PipelineSummary>, ConsoleError> {
        self.section("/admin/overview/pipelines").await
    }

    async fn model_statuses(&self) -> Result<Vec<ModelStatus>, ConsoleError> {
        self.section("/admin/overview/models").await
    }

    async fn recent_activity(&self) -> Result<Vec<ActivityEntry>, ConsoleError> {
        self.section("/admin/overview/activity").await
    }

    async fn domain_adapters(&self) -> Result<Vec<DomainAdapter>, ConsoleError> {
        self.section("/admin/overview/domains").await
    }

    async fn evaluation_highlights(&self) -> Result<EvaluationSummary, ConsoleError> {
        self.section("/admin/overview/evaluations").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overview::OverallHealth;
    use crate::infrastructure::api::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_live_source_unwraps_success_envelope() {
        let transport = MockTransport::new().with_response(
            "/admin/overview/health",
            serde_json::json!({
                "success": true,
                "data": {
                    "metrics": [],
                    "overallHealth": "degraded",
                    "lastUpdated": "2026-08-25T10:00:00Z"
                }
            }),
        );
        let source = LiveOverviewSource::new(ApiClient::new(transport));

        let health = source.system_health().await.unwrap();
        assert_eq!(health.overall_health, OverallHealth::Degraded);
    }

    #[tokio::test]
    async fn test_live_source_surfaces_failure_envelope_as_error() {
        let transport = MockTransport::new().with_response(
            "/admin/overview/pipelines",
            serde_json::json!({
                "success": false,
                "error": {"code": "UPSTREAM_DOWN", "message": "router offline"}
            }),
        );
        let source = LiveOverviewSource::new(ApiClient::new(transport));

        let result = source.pipeline_summaries().await;
        match result {
            Err(ConsoleError::Api { code, .. }) => assert_eq!(code, "UPSTREAM_DOWN"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
