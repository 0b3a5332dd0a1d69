//! Domain and pipeline configuration entities.
//!
//! These are backend-owned; the console only mirrors them and pushes
//! explicit updates through the API client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Domain, ModelProvider, RoutingStrategy};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    pub id: String,
    pub name: Domain,
    pub label: String,
    pub description: String,
    pub prompt_templates: Vec<PromptTemplate>,
    pub policy_tokens: Vec<String>,
    pub context_scopes: Vec<String>,
    pub evaluation_rubric: Vec<EvaluationDimension>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub template: String,
    pub variables: Vec<String>,
    pub category: TemplateCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    System,
    User,
    Context,
}

/// One weighted dimension of a domain's evaluation rubric
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDimension {
    pub name: String,
    pub weight: f64,
    pub description: String,
    pub rubric: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    pub id: String,
    pub name: String,
    pub domain: Domain,
    pub description: String,
    pub adapter_name: String,
    pub routing_strategy: RoutingStrategy,
    pub models: Vec<ModelReference>,
    #[serde(rename = "contextTTL")]
    pub context_ttl: u64,
    pub max_tokens: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReference {
    pub model_id: String,
    pub provider: ModelProvider,
    pub priority: u32,
    pub enabled: bool,
}

/// Partial pipeline update, sent for create and update calls.
/// Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_strategy: Option<RoutingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ModelReference>>,
    #[serde(rename = "contextTTL", skip_serializing_if = "Option::is_none")]
    pub context_ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Partial domain-configuration update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_templates: Option<Vec<PromptTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_rubric: Option<Vec<EvaluationDimension>>,
}

/// Conditional routing rule attached to a pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRule {
    pub id: String,
    /// Condition expression, e.g. `domain == 'literary' && task_type == 'analysis'`
    pub condition: String,
    pub target_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_model: Option<String>,
    pub priority: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_update_omits_absent_fields() {
        let update = PipelineUpdate {
            name: Some("Literary v2".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Literary v2"}));
    }

    #[test]
    fn test_context_ttl_wire_name() {
        let update = PipelineUpdate {
            context_ttl: Some(3600),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["contextTTL"], 3600);
    }
}
