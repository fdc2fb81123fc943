use std::env;

use secrecy::SecretString;

use crate::repositories::DEFAULT_QUIZ_STORE_CAPACITY;

/// Which wire shape the remote generation tier speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteProviderKind {
    Gemini,
    OpenAi,
}

impl RemoteProviderKind {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "openai" => RemoteProviderKind::OpenAi,
            "gemini" => RemoteProviderKind::Gemini,
            other => {
                log::warn!("Unknown GENERATION_PROVIDER '{}', using gemini", other);
                RemoteProviderKind::Gemini
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub generation_model: String,
    pub generation_api_key: Option<SecretString>,
    pub remote_provider: RemoteProviderKind,
    pub openai_api_base: Option<String>,
    pub local_model_url: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub quiz_store_capacity: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            generation_api_key: env::var("GENERATION_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            remote_provider: RemoteProviderKind::parse(
                &env::var("GENERATION_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
            ),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            local_model_url: env::var("LOCAL_MODEL_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            quiz_store_capacity: env::var("QUIZ_STORE_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(DEFAULT_QUIZ_STORE_CAPACITY),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            generation_model: "gemini-2.0-flash".to_string(),
            generation_api_key: None,
            remote_provider: RemoteProviderKind::Gemini,
            openai_api_base: None,
            local_model_url: None,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            quiz_store_capacity: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.generation_model.is_empty());
        assert!(!config.web_server_host.is_empty());
    }

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!(RemoteProviderKind::parse("openai"), RemoteProviderKind::OpenAi);
        assert_eq!(RemoteProviderKind::parse(" OpenAI "), RemoteProviderKind::OpenAi);
        assert_eq!(RemoteProviderKind::parse("gemini"), RemoteProviderKind::Gemini);
        assert_eq!(RemoteProviderKind::parse("mystery"), RemoteProviderKind::Gemini);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(config.generation_api_key.is_none());
        assert!(config.local_model_url.is_none());
        assert_eq!(config.web_server_port, 8080);
    }
}
