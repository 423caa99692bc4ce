//! Minimal client for the Anthropic Messages API.
//!
//! Covers exactly what the build worker needs: send one user-role text prompt,
//! get the text of the first content block back. No streaming, no retries,
//! no token counting — the hosting platform owns the overall deadline, so the
//! request itself carries no timeout of its own.

mod error;
mod types;

pub use error::Error;
pub use types::{ContentBlock, Message, MessageRequest, MessageResponse, Usage};

/// Messages API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Protocol version header required by the API.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API.
///
/// Cheap to clone-by-construction: holds one `reqwest::Client` and the
/// credentials/model it was created with.
pub struct Client {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the given API key and model identifier.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Model identifier this client sends with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a raw message request and return the parsed response.
    pub async fn messages(&self, request: &MessageRequest) -> Result<MessageResponse, Error> {
        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "messages request rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<MessageResponse>().await?)
    }

    /// Send a single user-role prompt and return the first text block of the
    /// response.
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, Error> {
        let request = MessageRequest {
            model: self.model.clone(),
            max_tokens,
            messages: vec![Message::user(prompt)],
        };
        let response = self.messages(&request).await?;
        response.first_text().ok_or(Error::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_api_shape() {
        let request = MessageRequest {
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 8000,
            messages: vec![Message::user("hello")],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-5-20250929");
        assert_eq!(json["max_tokens"], 8000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn response_parses_captured_body() {
        let body = r#"{
            "id": "msg_01ABC",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-5-20250929",
            "content": [{"type": "text", "text": "{\"appName\": \"Todo\"}"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 42, "output_tokens": 7}
        }"#;

        let response: MessageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("{\"appName\": \"Todo\"}"));
        assert_eq!(response.usage.as_ref().unwrap().input_tokens, 42);
    }

    #[test]
    fn empty_content_has_no_text() {
        let body = r#"{"id": "msg_02", "model": "m", "content": []}"#;
        let response: MessageResponse = serde_json::from_str(body).unwrap();
        assert!(response.first_text().is_none());
    }
}
