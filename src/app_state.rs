use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::{Config, RemoteProviderKind},
    providers::{GeminiClient, GenerationProvider, LlamaServerClient, OpenAiChatClient},
    repositories::InMemoryQuizRepository,
    services::{ChatService, QuizService},
};

const HTTP_CONNECT_TIMEOUT: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = build_http_client();

        let remote = build_remote_provider(&config, http.clone());
        let local = build_local_provider(&config, http);

        let chat_service = Arc::new(ChatService::new(remote.clone(), local));

        let quiz_repository = Arc::new(InMemoryQuizRepository::new(config.quiz_store_capacity));
        let quiz_service = Arc::new(QuizService::new(remote, quiz_repository));

        Self {
            chat_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}

fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

fn build_remote_provider(
    config: &Config,
    http: reqwest::Client,
) -> Option<Arc<dyn GenerationProvider>> {
    let api_key = match &config.generation_api_key {
        Some(key) => key.clone(),
        None => {
            log::info!("GENERATION_API_KEY not set, remote generation tier disabled");
            return None;
        }
    };

    match config.remote_provider {
        RemoteProviderKind::Gemini => Some(Arc::new(GeminiClient::new(
            http,
            api_key,
            &config.generation_model,
        ))),
        RemoteProviderKind::OpenAi => Some(Arc::new(OpenAiChatClient::new(
            &api_key,
            config.openai_api_base.as_deref(),
            &config.generation_model,
        ))),
    }
}

fn build_local_provider(
    config: &Config,
    http: reqwest::Client,
) -> Option<Arc<dyn GenerationProvider>> {
    match &config.local_model_url {
        Some(url) => Some(Arc::new(LlamaServerClient::new(http, url))),
        None => {
            log::info!("LOCAL_MODEL_URL not set, local generation tier disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_without_providers() {
        let state = AppState::new(Config::test_config());

        assert!(state.config.generation_api_key.is_none());
        assert!(state.config.local_model_url.is_none());
    }
}
