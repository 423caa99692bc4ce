//! Worker configuration from the environment.

use anyhow::{Context, Result};

/// Model used for both pipeline stages unless overridden.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Callback base address used when `CALLBACK_URL` is unset.
pub const DEFAULT_CALLBACK_URL: &str = "http://localhost:8787";

/// Parsed environment surface of the worker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the Anthropic API.
    pub api_key: String,
    /// Base URL the progress callbacks are posted to.
    pub callback_url: String,
    /// Model identifier for both LLM calls.
    pub model: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `ANTHROPIC_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .context("ANTHROPIC_API_KEY is not set")?;
        let callback_url = std::env::var("CALLBACK_URL")
            .unwrap_or_else(|_| DEFAULT_CALLBACK_URL.to_string());
        let model = std::env::var("AGENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            callback_url,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_url_and_model_have_defaults() {
        std::env::set_var("ANTHROPIC_API_KEY", "sk-test");
        std::env::remove_var("CALLBACK_URL");
        std::env::remove_var("AGENT_MODEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.callback_url, DEFAULT_CALLBACK_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
