//! Inference and evaluation entities

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Domain, InferenceStatus, TaskType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRequest {
    pub domain: Domain,
    pub task_type: TaskType,
    pub context_pack_id: String,
    pub user_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_override: Option<String>,
}

/// Result of one inference run, correlated to its request by `inference_id`.
///
/// The snake_case duplicates of `model_id` / `latency_ms` and the flat
/// `evaluation_score` are a transitional shim while the backend contract
/// settles on one shape; both spellings stay until upstream confirms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    pub inference_id: String,
    pub status: InferenceStatus,
    pub output: String,
    pub model_id: String,
    #[serde(
        rename = "model_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub model_id_compat: Option<String>,
    pub latency_ms: u64,
    #[serde(
        rename = "latency_ms",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub latency_ms_compat: Option<u64>,
    pub tokens_used: u32,
    pub evaluation: EvaluationResult,
    #[serde(
        rename = "evaluation_score",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub evaluation_score: Option<f64>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub passed: bool,
    pub scores: Vec<EvaluationScore>,
    pub recommendations: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationScore {
    pub metric: String,
    /// 0.0 to 1.0
    pub score: f64,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRun {
    pub id: String,
    pub domain: Domain,
    pub pipeline_id: String,
    pub models_tested: Vec<String>,
    pub batch_size: u32,
    pub results: Vec<InferenceResult>,
    pub summary: RunSummary,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub average_quality_score: f64,
    pub average_latency_ms: u64,
    pub total_cost: f64,
    pub success_rate: f64,
    pub recommended_champion: String,
}

/// Full provenance trail for one inference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord {
    pub inference_id: String,
    pub dataforge_provenance_id: String,
    pub context: HashMap<String, serde_json::Value>,
    pub prompt: String,
    pub response: String,
    pub evaluation: EvaluationResult,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_result_keeps_both_field_spellings() {
        let json = serde_json::json!({
            "inferenceId": "inf-1",
            "status": "completed",
            "output": "analysis text",
            "modelId": "model-neural-illm",
            "model_id": "model-neural-illm",
            "latencyMs": 87,
            "latency_ms": 87,
            "tokensUsed": 120,
            "evaluation": {
                "passed": true,
                "scores": [{"metric": "coherence", "score": 0.9, "weight": 0.5}],
                "recommendations": [],
                "reasoning": "coherent and on-topic"
            },
            "evaluation_score": 0.9,
            "metadata": {},
            "createdAt": "2026-08-25T10:00:00Z"
        });

        let result: InferenceResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.model_id, "model-neural-illm");
        assert_eq!(result.model_id_compat.as_deref(), Some("model-neural-illm"));
        assert_eq!(result.latency_ms_compat, Some(87));
        assert_eq!(result.evaluation_score, Some(0.9));
    }

    #[test]
    fn test_inference_request_omits_absent_options() {
        let request = InferenceRequest {
            domain: Domain::Literary,
            task_type: TaskType::Analysis,
            context_pack_id: "ctx-1".to_string(),
            user_query: "Analyze this passage".to_string(),
            additional_context: None,
            max_tokens: None,
            model_override: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("additionalContext").is_none());
        assert!(json.get("modelOverride").is_none());
    }
}
