//! Model backend seam.
//!
//! The runner talks to the model through this trait so tests can script
//! responses without touching the network.

use async_trait::async_trait;

/// A text-completion backend: one prompt in, one text answer out.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, anthropic_client::Error>;
}

#[async_trait]
impl<T: ModelBackend + ?Sized> ModelBackend for std::sync::Arc<T> {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, anthropic_client::Error> {
        (**self).complete(prompt, max_tokens).await
    }
}

#[async_trait]
impl ModelBackend for anthropic_client::Client {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, anthropic_client::Error> {
        anthropic_client::Client::complete(self, prompt, max_tokens).await
    }
}
