use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
pub mod local;
pub mod openai;
pub mod response;

pub use gemini::GeminiClient;
pub use local::LlamaServerClient;
pub use openai::OpenAiChatClient;
pub use response::RawResponse;

/// Sampling temperature shared by every generation backend.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(String),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for ProviderError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        ProviderError::Request(err.to_string())
    }
}

/// A text generation backend. Implementations wrap exactly one wire shape
/// and hand the payload back untouched; unwrapping to plain text lives on
/// [`RawResponse`] so every backend degrades the same way.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<RawResponse, ProviderError>;
}

/// Calls a provider with an upper bound on the wait. An elapsed bound maps
/// to [`ProviderError::Timeout`], so a hung backend is handled like any
/// other provider failure instead of stalling the caller's fallback chain.
pub async fn generate_bounded(
    provider: &dyn GenerationProvider,
    prompt: &str,
    timeout_seconds: u64,
) -> Result<RawResponse, ProviderError> {
    let limit = Duration::from_secs(timeout_seconds);
    match tokio::time::timeout(limit, provider.generate(prompt)).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(limit)),
    }
}
