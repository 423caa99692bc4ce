//! Data structures for one build workflow run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input for one workflow run. Immutable for the duration of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRequest {
    pub project_id: String,
    pub prompt: String,
    pub platforms: Vec<String>,
}

/// One data model inside a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

/// The structured plan produced by the planning stage.
///
/// The model is asked for a fixed field set but is not trusted to deliver it:
/// every field is optional or defaulted, and unknown fields are kept in
/// `extra` so the plan round-trips verbatim into the generation prompt and
/// progress metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_models: Vec<DataModel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_endpoints: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Plan {
    /// App name for progress messages, with a fixed fallback when the model
    /// omitted one.
    pub fn display_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("app")
    }
}

/// Generated source files, keyed by file path. Contents are forwarded as-is;
/// only the entry count is ever reported.
pub type GeneratedCode = BTreeMap<String, String>;

/// Terminal value of one run. Exactly one variant is returned per invocation;
/// a failed run carries no partial plan or code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WorkflowResult {
    #[serde(rename_all = "camelCase")]
    Complete {
        plan: Plan,
        generated_code: GeneratedCode,
    },
    Failed { error: String },
}

impl WorkflowResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, WorkflowResult::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_tolerates_missing_and_unknown_fields() {
        let plan: Plan = serde_json::from_value(json!({
            "summary": "A todo app",
            "techStack": ["hono", "drizzle"]
        }))
        .unwrap();

        assert_eq!(plan.display_name(), "app");
        assert_eq!(plan.summary.as_deref(), Some("A todo app"));
        assert!(plan.features.is_empty());
        assert_eq!(plan.extra["techStack"], json!(["hono", "drizzle"]));
    }

    #[test]
    fn plan_round_trips_verbatim() {
        let original = json!({
            "appName": "Tracker",
            "summary": "Tracks things",
            "features": ["list", "add"],
            "dataModels": [{"name": "Item", "fields": ["id", "title"]}],
            "apiEndpoints": ["GET /api/items"],
            "theme": "dark"
        });

        let plan: Plan = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&plan).unwrap(), original);
    }

    #[test]
    fn complete_result_uses_status_tag() {
        let result = WorkflowResult::Complete {
            plan: Plan {
                app_name: Some("Tracker".to_string()),
                ..Default::default()
            },
            generated_code: GeneratedCode::from([(
                "schema.ts".to_string(),
                "export {}".to_string(),
            )]),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "complete");
        assert_eq!(json["plan"]["appName"], "Tracker");
        assert_eq!(json["generatedCode"]["schema.ts"], "export {}");
    }

    #[test]
    fn failed_result_has_no_partial_artifacts() {
        let result = WorkflowResult::Failed {
            error: "boom".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "boom");
        assert!(json.get("plan").is_none());
        assert!(json.get("generatedCode").is_none());
    }
}
