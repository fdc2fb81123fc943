use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::providers::{GenerationProvider, ProviderError, RawResponse, GENERATION_TEMPERATURE};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Gemini `generateContent` client. The API key travels as a query
/// parameter, which is why the full URL is never logged.
pub struct GeminiClient {
    http: Client,
    api_base: String,
    api_key: SecretString,
    model: String,
}

impl GeminiClient {
    pub fn new(http: Client, api_key: SecretString, model: &str) -> Self {
        Self {
            http,
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
            model: model.to_string(),
        }
    }

    /// Points the client at a different endpoint, used in tests to target a
    /// mock server.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<RawResponse, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base,
            self.model,
            self.api_key.expose_secret()
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": GENERATION_TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS
            }
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
        Ok(RawResponse::Candidates(value))
    }
}
