use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::providers::{GenerationProvider, ProviderError, RawResponse, GENERATION_TEMPERATURE};

const MAX_COMPLETION_TOKENS: u32 = 2048;

/// Chat-completions client for OpenAI-compatible endpoints. Requests go
/// through the raw-JSON call path so the response shape stays untyped and
/// [`RawResponse`] owns the unwrapping.
pub struct OpenAiChatClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: &SecretString, api_base: Option<&str>, model: &str) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key.expose_secret());
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }
        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl GenerationProvider for OpenAiChatClient {
    async fn generate(&self, prompt: &str) -> Result<RawResponse, ProviderError> {
        let payload = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": GENERATION_TEMPERATURE,
            "max_tokens": MAX_COMPLETION_TOKENS
        });

        let value: Value = self.client.chat().create_byot(payload).await?;
        Ok(RawResponse::Chat(value))
    }
}
