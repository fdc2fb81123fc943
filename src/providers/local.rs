use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::providers::{GenerationProvider, ProviderError, RawResponse, GENERATION_TEMPERATURE};

/// Bounded completion length for the local engine, which otherwise rambles.
const COMPLETION_TOKENS: u32 = 200;

/// Client for a llama.cpp server (`llama-server`) running on the same box.
pub struct LlamaServerClient {
    http: Client,
    base_url: String,
}

impl LlamaServerClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GenerationProvider for LlamaServerClient {
    async fn generate(&self, prompt: &str) -> Result<RawResponse, ProviderError> {
        let url = format!("{}/completion", self.base_url);
        let body = json!({
            "prompt": prompt,
            "n_predict": COMPLETION_TOKENS,
            "temperature": GENERATION_TEMPERATURE,
            "stream": false
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        let content = value
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(RawResponse::Text(content.to_string()))
    }
}
