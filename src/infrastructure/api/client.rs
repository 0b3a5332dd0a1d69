use serde::de::DeserializeOwned;
use tracing::{debug, error};
use uuid::Uuid;

use super::transport::{ApiRequest, HttpTransport, ReqwestTransport};
use crate::config::AppConfig;
use crate::domain::contract::{
    ApiResponse, ChampionModel, DashboardStats, Domain, DomainConfig, DomainConfigUpdate,
    EvaluationRun, HealthCheck, InferenceRequest, InferenceResult, LogEntry, LogLevel,
    ModelCatalog, PipelineConfig, PipelineUpdate,
};
use crate::domain::ConsoleError;

pub const DEFAULT_HISTORY_LIMIT: u32 = 50;
pub const DEFAULT_LOG_LIMIT: u32 = 100;
pub const DEFAULT_EVALUATION_BATCH_SIZE: u32 = 10;
pub const DEFAULT_TIME_RANGE: &str = "24h";

/// Single point of contact to the NeuroForge backend.
///
/// One method per endpoint; every outbound call is stamped with a fresh
/// correlation identifier and every failure is logged before it is
/// propagated to the caller.
#[derive(Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn from_config(config: &AppConfig) -> Result<Self, ConsoleError> {
        let transport =
            ReqwestTransport::new(&config.backend.base_url, &config.backend.api_key)?;
        Ok(Self::new(transport))
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    // ------------------------------------------------------------------
    // Health & status
    // ------------------------------------------------------------------

    pub async fn get_health(&self) -> Result<HealthCheck, ConsoleError> {
        let body = self.dispatch(ApiRequest::get("/health")).await?;
        serde_json::from_value(body)
            .map_err(|e| ConsoleError::decode(format!("Invalid health body: {}", e)))
    }

    pub async fn get_dashboard_stats(
        &self,
    ) -> Result<ApiResponse<DashboardStats>, ConsoleError> {
        self.send(ApiRequest::get("/admin/dashboard")).await
    }

    // ------------------------------------------------------------------
    // Pipelines
    // ------------------------------------------------------------------

    pub async fn fetch_pipelines(
        &self,
    ) -> Result<ApiResponse<Vec<PipelineConfig>>, ConsoleError> {
        self.send(ApiRequest::get("/pipelines")).await
    }

    pub async fn fetch_pipeline(
        &self,
        id: &str,
    ) -> Result<ApiResponse<PipelineConfig>, ConsoleError> {
        self.send(ApiRequest::get(format!("/pipelines/{}", id))).await
    }

    pub async fn create_pipeline(
        &self,
        pipeline: &PipelineUpdate,
    ) -> Result<ApiResponse<PipelineConfig>, ConsoleError> {
        let body = serde_json::to_value(pipeline)
            .map_err(|e| ConsoleError::internal(format!("Failed to encode pipeline: {}", e)))?;
        self.send(ApiRequest::post("/pipelines", body)).await
    }

    pub async fn update_pipeline(
        &self,
        id: &str,
        updates: &PipelineUpdate,
    ) -> Result<ApiResponse<PipelineConfig>, ConsoleError> {
        let body = serde_json::to_value(updates)
            .map_err(|e| ConsoleError::internal(format!("Failed to encode pipeline: {}", e)))?;
        self.send(ApiRequest::put(format!("/pipelines/{}", id), body))
            .await
    }

    pub async fn delete_pipeline(&self, id: &str) -> Result<ApiResponse<()>, ConsoleError> {
        self.send(ApiRequest::delete(format!("/pipelines/{}", id)))
            .await
    }

    // ------------------------------------------------------------------
    // Domains & adapters
    // ------------------------------------------------------------------

    pub async fn fetch_domains(&self) -> Result<ApiResponse<Vec<DomainConfig>>, ConsoleError> {
        self.send(ApiRequest::get("/domains")).await
    }

    pub async fn fetch_domain(
        &self,
        domain: Domain,
    ) -> Result<ApiResponse<DomainConfig>, ConsoleError> {
        self.send(ApiRequest::get(format!("/domains/{}", domain)))
            .await
    }

    pub async fn update_domain(
        &self,
        domain: Domain,
        updates: &DomainConfigUpdate,
    ) -> Result<ApiResponse<DomainConfig>, ConsoleError> {
        let body = serde_json::to_value(updates)
            .map_err(|e| ConsoleError::internal(format!("Failed to encode domain: {}", e)))?;
        self.send(ApiRequest::put(format!("/domains/{}", domain), body))
            .await
    }

    // ------------------------------------------------------------------
    // Models & routing
    // ------------------------------------------------------------------

    pub async fn fetch_models(&self) -> Result<ApiResponse<Vec<ModelCatalog>>, ConsoleError> {
        self.send(ApiRequest::get("/models")).await
    }

    pub async fn fetch_model(&self, id: &str) -> Result<ApiResponse<ModelCatalog>, ConsoleError> {
        self.send(ApiRequest::get(format!("/models/{}", id))).await
    }

    pub async fn get_champion_models(
        &self,
    ) -> Result<ApiResponse<Vec<ChampionModel>>, ConsoleError> {
        self.send(ApiRequest::get("/models/champions")).await
    }

    // ------------------------------------------------------------------
    // Inference & playground
    // ------------------------------------------------------------------

    pub async fn run_inference(
        &self,
        request: &InferenceRequest,
    ) -> Result<ApiResponse<InferenceResult>, ConsoleError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ConsoleError::internal(format!("Failed to encode request: {}", e)))?;
        self.send(ApiRequest::post("/inference", body)).await
    }

    pub async fn get_inference_result(
        &self,
        inference_id: &str,
    ) -> Result<ApiResponse<InferenceResult>, ConsoleError> {
        self.send(ApiRequest::get(format!("/inference/{}", inference_id)))
            .await
    }

    pub async fn get_inference_history(
        &self,
        domain: Option<Domain>,
        limit: Option<u32>,
    ) -> Result<ApiResponse<Vec<InferenceResult>>, ConsoleError> {
        let request = ApiRequest::get("/inference/history")
            .with_optional_query("domain", domain.map(|d| d.as_str()))
            .with_query("limit", limit.unwrap_or(DEFAULT_HISTORY_LIMIT).to_string());
        self.send(request).await
    }

    // ------------------------------------------------------------------
    // Evaluations & experiments
    // ------------------------------------------------------------------

    pub async fn fetch_evaluation_runs(
        &self,
        domain: Option<Domain>,
        pipeline_id: Option<&str>,
    ) -> Result<ApiResponse<Vec<EvaluationRun>>, ConsoleError> {
        let request = ApiRequest::get("/evaluations")
            .with_optional_query("domain", domain.map(|d| d.as_str()))
            .with_optional_query("pipeline_id", pipeline_id);
        self.send(request).await
    }

    pub async fn fetch_evaluation_run(
        &self,
        id: &str,
    ) -> Result<ApiResponse<EvaluationRun>, ConsoleError> {
        self.send(ApiRequest::get(format!("/evaluations/{}", id)))
            .await
    }

    pub async fn create_evaluation_run(
        &self,
        pipeline_id: &str,
        batch_size: Option<u32>,
    ) -> Result<ApiResponse<EvaluationRun>, ConsoleError> {
        let body = serde_json::json!({
            "pipeline_id": pipeline_id,
            "batch_size": batch_size.unwrap_or(DEFAULT_EVALUATION_BATCH_SIZE),
        });
        self.send(ApiRequest::post("/evaluations", body)).await
    }

    // ------------------------------------------------------------------
    // Logs & audit trail
    // ------------------------------------------------------------------

    pub async fn fetch_logs(
        &self,
        domain: Option<Domain>,
        level: Option<LogLevel>,
        limit: Option<u32>,
    ) -> Result<ApiResponse<Vec<LogEntry>>, ConsoleError> {
        let request = ApiRequest::get("/admin/logs")
            .with_optional_query("domain", domain.map(|d| d.as_str()))
            .with_optional_query("level", level.map(|l| l.as_str()))
            .with_query("limit", limit.unwrap_or(DEFAULT_LOG_LIMIT).to_string());
        self.send(request).await
    }

    pub async fn get_audit_trail(
        &self,
    ) -> Result<ApiResponse<serde_json::Value>, ConsoleError> {
        self.send(ApiRequest::get("/admin/audit-trail")).await
    }

    // ------------------------------------------------------------------
    // Analytics
    // ------------------------------------------------------------------

    pub async fn get_performance_trends(
        &self,
        time_range: Option<&str>,
    ) -> Result<ApiResponse<serde_json::Value>, ConsoleError> {
        let request = ApiRequest::get("/admin/analytics/performance-over-time")
            .with_query("time_range", time_range.unwrap_or(DEFAULT_TIME_RANGE));
        self.send(request).await
    }

    pub async fn get_comparative_analysis(
        &self,
    ) -> Result<ApiResponse<serde_json::Value>, ConsoleError> {
        self.send(ApiRequest::get("/admin/analytics/comparative-analysis"))
            .await
    }

    pub async fn get_performance_predictions(
        &self,
        horizon: Option<&str>,
    ) -> Result<ApiResponse<serde_json::Value>, ConsoleError> {
        let request = ApiRequest::get("/admin/analytics/predictions")
            .with_query("horizon", horizon.unwrap_or(DEFAULT_TIME_RANGE));
        self.send(request).await
    }

    pub async fn get_anomalies(&self) -> Result<ApiResponse<serde_json::Value>, ConsoleError> {
        self.send(ApiRequest::get("/admin/analytics/anomalies")).await
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Send a request expecting the standard response envelope.
    ///
    /// Also used by the live overview source for section endpoints that
    /// have no dedicated method yet.
    pub(crate) async fn send<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse<R>, ConsoleError> {
        let path = request.path.clone();
        let body = self.dispatch(request).await?;
        serde_json::from_value(body).map_err(|e| {
            let err = ConsoleError::decode(format!("Invalid envelope from {}: {}", path, e));
            error!(path = %path, error = %err, "API response decode failed");
            err
        })
    }

    /// Stamp the request with a fresh correlation identifier, send it, and
    /// log any transport failure before rethrowing.
    async fn dispatch(&self, request: ApiRequest) -> Result<serde_json::Value, ConsoleError> {
        let request_id = Uuid::new_v4().to_string();
        let request = request.with_request_id(request_id.clone());
        debug!(path = %request.path, request_id = %request_id, "API request");

        self.transport.send(request).await.map_err(|e| {
            error!(request_id = %request_id, error = %e, "API request failed");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api::transport::mock::MockTransport;

    fn envelope(data: serde_json::Value) -> serde_json::Value {
        serde_json::json!({"success": true, "data": data})
    }

    #[tokio::test]
    async fn test_every_call_gets_a_fresh_correlation_id() {
        let transport = MockTransport::new()
            .with_response("/pipelines", envelope(serde_json::json!([])))
            .with_response("/models", envelope(serde_json::json!([])));
        let client = ApiClient::new(transport);

        client.fetch_pipelines().await.unwrap();
        client.fetch_models().await.unwrap();

        let requests = client.transport.recorded_requests();
        assert_eq!(requests.len(), 2);
        assert!(!requests[0].request_id.is_empty());
        assert!(!requests[1].request_id.is_empty());
        assert_ne!(requests[0].request_id, requests[1].request_id);
    }

    #[tokio::test]
    async fn test_history_without_filters_sends_only_default_limit() {
        let transport = MockTransport::new()
            .with_response("/inference/history", envelope(serde_json::json!([])));
        let client = ApiClient::new(transport);

        client.get_inference_history(None, None).await.unwrap();

        let requests = client.transport.recorded_requests();
        assert_eq!(
            requests[0].query,
            vec![("limit".to_string(), "50".to_string())]
        );
    }

    #[tokio::test]
    async fn test_log_filters_are_included_when_present() {
        let transport =
            MockTransport::new().with_response("/admin/logs", envelope(serde_json::json!([])));
        let client = ApiClient::new(transport);

        client
            .fetch_logs(Some(Domain::Market), Some(LogLevel::Error), Some(25))
            .await
            .unwrap();

        let requests = client.transport.recorded_requests();
        assert_eq!(
            requests[0].query,
            vec![
                ("domain".to_string(), "market".to_string()),
                ("level".to_string(), "ERROR".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_evaluation_run_body_uses_snake_case_and_default_batch() {
        let transport =
            MockTransport::new().with_response("/evaluations", envelope(serde_json::json!(null)));
        let client = ApiClient::new(transport);

        // The mock envelope has no data, so decoding the run payload is not
        // the point here; a malformed-success result is fine.
        let response = client.create_evaluation_run("pipeline-literary", None).await;
        assert!(response.is_ok());

        let requests = client.transport.recorded_requests();
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"pipeline_id": "pipeline-literary", "batch_size": 10}))
        );
    }

    #[tokio::test]
    async fn test_error_envelope_is_returned_as_data_not_error() {
        let transport = MockTransport::new().with_response(
            "/pipelines/missing",
            serde_json::json!({
                "success": false,
                "error": {"code": "NOT_FOUND", "message": "Pipeline 'missing' not found"}
            }),
        );
        let client = ApiClient::new(transport);

        let response = client.fetch_pipeline("missing").await.unwrap();
        assert!(!response.is_success());
        assert_eq!(response.error().unwrap().code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_to_caller() {
        let transport = MockTransport::new().with_error("/models", "connection refused");
        let client = ApiClient::new(transport);

        let result = client.fetch_models().await;
        assert!(matches!(result, Err(ConsoleError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_health_returns_plain_body() {
        let transport = MockTransport::new()
            .with_response("/health", serde_json::json!({"status": "ok"}));
        let client = ApiClient::new(transport);

        let health = client.get_health().await.unwrap();
        assert_eq!(health.status, "ok");
    }
}
