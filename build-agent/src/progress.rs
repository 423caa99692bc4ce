//! Progress callback protocol.
//!
//! The worker reports each stage transition to the API with
//! `POST {callback}/api/v1/agents/progress`. Delivery is best-effort: the
//! call carries a short timeout, failures are logged and swallowed, and the
//! workflow's own outcome is never affected by a lost notification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Timeout for a single progress notification.
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Path of the progress endpoint, relative to the callback base URL.
const PROGRESS_PATH: &str = "/api/v1/agents/progress";

/// Stage tag carried by a progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Planning,
    Generating,
    Failed,
}

/// One outbound progress notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub project_id: String,
    pub step: Step,
    pub message: String,
    #[serde(default)]
    pub metadata: Value,
}

impl ProgressEvent {
    /// Event with empty metadata.
    pub fn new(project_id: impl Into<String>, step: Step, message: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            step,
            message: message.into(),
            metadata: Value::Object(serde_json::Map::new()),
        }
    }

    /// Attach free-form metadata.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Destination for progress events.
///
/// Implementations are fire-and-forget: `report` settles when delivery has
/// been attempted and never propagates delivery errors to the workflow.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn report(&self, event: ProgressEvent);
}

#[async_trait]
impl<T: ProgressSink + ?Sized> ProgressSink for std::sync::Arc<T> {
    async fn report(&self, event: ProgressEvent) {
        (**self).report(event).await;
    }
}

/// Progress sink that posts events to the API callback endpoint.
pub struct CallbackClient {
    base_url: String,
}

impl CallbackClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PROGRESS_PATH)
    }
}

#[async_trait]
impl ProgressSink for CallbackClient {
    async fn report(&self, event: ProgressEvent) {
        // A fresh client per notification keeps each call fully scoped: no
        // shared connection state can outlive the notification that used it.
        let client = match reqwest::Client::builder().timeout(NOTIFY_TIMEOUT).build() {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!(error = %err, "could not build progress client");
                return;
            }
        };

        let result = client.post(self.endpoint()).json(&event).send().await;
        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    step = ?event.step,
                    "progress callback rejected"
                );
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, step = ?event.step, "progress callback failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_wire_format_matches_callback_contract() {
        let event = ProgressEvent::new("proj-1", Step::Planning, "Analyzing requirements...");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            json!({
                "projectId": "proj-1",
                "step": "planning",
                "message": "Analyzing requirements...",
                "metadata": {}
            })
        );
    }

    #[test]
    fn step_tags_are_lowercase() {
        assert_eq!(serde_json::to_value(Step::Generating).unwrap(), "generating");
        assert_eq!(serde_json::to_value(Step::Failed).unwrap(), "failed");
    }

    #[test]
    fn callback_endpoint_tolerates_trailing_slash() {
        let sink = CallbackClient::new("http://localhost:8787/");
        assert_eq!(sink.endpoint(), "http://localhost:8787/api/v1/agents/progress");
    }
}
