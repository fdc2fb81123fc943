use std::sync::Arc;

use crate::constants::canned::{
    DEFAULT_LEVEL, EMPTY_MESSAGE_REPLY, ENGINE_UNAVAILABLE_REPLY, FAREWELL_REPLY, GREETING_REPLY,
};
use crate::constants::prompts::tutor_prompt;
use crate::models::domain::{ResolvedResponse, ResponseSource};
use crate::providers::{generate_bounded, GenerationProvider};
use crate::services::intent::{self, Intent};
use crate::services::text_helpers;

const REMOTE_GENERATION_TIMEOUT: u64 = 30;
const LOCAL_GENERATION_TIMEOUT: u64 = 60;

/// Position in the fallback chain while resolving a message. Each tier is
/// attempted at most once and only after the previous tier failed to
/// produce usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolutionState {
    TryRemote,
    TryLocal,
    Fallback,
}

/// Resolves chat messages through the tier chain: canned intent replies,
/// then remote generation, then local generation, then a fixed apology.
/// Providers are injected; a missing provider just skips its tier.
pub struct ChatService {
    remote: Option<Arc<dyn GenerationProvider>>,
    local: Option<Arc<dyn GenerationProvider>>,
}

impl ChatService {
    pub fn new(
        remote: Option<Arc<dyn GenerationProvider>>,
        local: Option<Arc<dyn GenerationProvider>>,
    ) -> Self {
        Self { remote, local }
    }

    /// Never fails: provider errors are logged and advance the chain, and
    /// the terminal tier always answers.
    pub async fn resolve(&self, message: &str, level: Option<&str>) -> ResolvedResponse {
        let message = message.trim();
        if message.is_empty() {
            return ResolvedResponse {
                text: EMPTY_MESSAGE_REPLY.to_string(),
                source: ResponseSource::Fallback,
            };
        }

        match intent::classify(message) {
            Intent::Greeting => {
                return ResolvedResponse {
                    text: GREETING_REPLY.to_string(),
                    source: ResponseSource::Local,
                }
            }
            Intent::Farewell => {
                return ResolvedResponse {
                    text: FAREWELL_REPLY.to_string(),
                    source: ResponseSource::Local,
                }
            }
            Intent::None => {}
        }

        let prompt = tutor_prompt(message, level.unwrap_or(DEFAULT_LEVEL));

        let mut state = ResolutionState::TryRemote;
        loop {
            match state {
                ResolutionState::TryRemote => {
                    if let Some(provider) = &self.remote {
                        match generate_bounded(provider.as_ref(), &prompt, REMOTE_GENERATION_TIMEOUT)
                            .await
                        {
                            Ok(raw) => {
                                let text = text_helpers::normalize(&raw.extract_text());
                                if !text.is_empty() {
                                    return ResolvedResponse {
                                        text,
                                        source: ResponseSource::Remote,
                                    };
                                }
                                log::warn!("Remote generation returned empty text");
                            }
                            Err(err) => log::warn!("Remote generation failed: {}", err),
                        }
                    }
                    state = ResolutionState::TryLocal;
                }
                ResolutionState::TryLocal => {
                    if let Some(provider) = &self.local {
                        match generate_bounded(provider.as_ref(), &prompt, LOCAL_GENERATION_TIMEOUT)
                            .await
                        {
                            Ok(raw) => {
                                let extracted = raw.extract_text();
                                let stripped = text_helpers::strip_prompt_echo(&extracted, &prompt);
                                let text = text_helpers::normalize(stripped);
                                if !text.is_empty() {
                                    return ResolvedResponse {
                                        text,
                                        source: ResponseSource::Local,
                                    };
                                }
                                log::warn!("Local generation returned empty text");
                            }
                            Err(err) => log::warn!("Local generation failed: {}", err),
                        }
                    }
                    state = ResolutionState::Fallback;
                }
                ResolutionState::Fallback => {
                    return ResolvedResponse {
                        text: ENGINE_UNAVAILABLE_REPLY.to_string(),
                        source: ResponseSource::Fallback,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{MockGenerationProvider, ProviderError, RawResponse};
    use async_trait::async_trait;
    use std::time::Duration;

    fn service(
        remote: Option<MockGenerationProvider>,
        local: Option<MockGenerationProvider>,
    ) -> ChatService {
        ChatService::new(
            remote.map(|m| Arc::new(m) as Arc<dyn GenerationProvider>),
            local.map(|m| Arc::new(m) as Arc<dyn GenerationProvider>),
        )
    }

    #[tokio::test]
    async fn empty_message_gets_canned_fallback() {
        let chat = service(None, None);
        let resolved = chat.resolve("   \n ", None).await;
        assert_eq!(resolved.text, EMPTY_MESSAGE_REPLY);
        assert_eq!(resolved.source, ResponseSource::Fallback);
    }

    #[tokio::test]
    async fn greeting_short_circuits_without_provider_calls() {
        let mut remote = MockGenerationProvider::new();
        remote.expect_generate().times(0);

        let chat = service(Some(remote), None);
        let resolved = chat.resolve("Hola profe", None).await;

        assert_eq!(resolved.text, GREETING_REPLY);
        assert_eq!(resolved.source, ResponseSource::Local);
    }

    #[tokio::test]
    async fn farewell_gets_canned_local_reply() {
        let chat = service(None, None);
        let resolved = chat.resolve("chao pues", None).await;
        assert_eq!(resolved.text, FAREWELL_REPLY);
        assert_eq!(resolved.source, ResponseSource::Local);
    }

    #[tokio::test]
    async fn remote_success_is_normalized_and_tagged_remote() {
        let mut remote = MockGenerationProvider::new();
        remote
            .expect_generate()
            .withf(|prompt| prompt.contains("Pregunta del estudiante: ¿qué es el adn?"))
            .returning(|_| Ok(RawResponse::Text("**El ADN**\n\n\nes la molécula.".to_string())));

        let chat = service(Some(remote), None);
        let resolved = chat.resolve("¿qué es el adn?", None).await;

        assert_eq!(resolved.text, "El ADN\nes la molécula.");
        assert_eq!(resolved.source, ResponseSource::Remote);
    }

    #[tokio::test]
    async fn level_reaches_the_prompt() {
        let mut remote = MockGenerationProvider::new();
        remote
            .expect_generate()
            .withf(|prompt| prompt.contains("nivel del estudiante: avanzado"))
            .returning(|_| Ok(RawResponse::Text("respuesta".to_string())));

        let chat = service(Some(remote), None);
        let resolved = chat.resolve("explícame integrales", Some("avanzado")).await;
        assert_eq!(resolved.source, ResponseSource::Remote);
    }

    #[tokio::test]
    async fn remote_failure_falls_through_to_local_with_echo_strip() {
        let mut remote = MockGenerationProvider::new();
        remote
            .expect_generate()
            .returning(|_| Err(ProviderError::Request("connection refused".to_string())));

        let mut local = MockGenerationProvider::new();
        local.expect_generate().returning(|prompt| {
            Ok(RawResponse::Text(format!(
                "{} La célula es la unidad básica.",
                prompt
            )))
        });

        let chat = service(Some(remote), Some(local));
        let resolved = chat.resolve("¿qué es la célula?", None).await;

        assert_eq!(resolved.text, "La célula es la unidad básica.");
        assert_eq!(resolved.source, ResponseSource::Local);
    }

    #[tokio::test]
    async fn remote_empty_text_falls_through_to_local() {
        let mut remote = MockGenerationProvider::new();
        remote
            .expect_generate()
            .returning(|_| Ok(RawResponse::Text("  \n\n ".to_string())));

        let mut local = MockGenerationProvider::new();
        local
            .expect_generate()
            .returning(|_| Ok(RawResponse::Text("respuesta local".to_string())));

        let chat = service(Some(remote), Some(local));
        let resolved = chat.resolve("¿qué es un mapa?", None).await;

        assert_eq!(resolved.text, "respuesta local");
        assert_eq!(resolved.source, ResponseSource::Local);
    }

    #[tokio::test]
    async fn exhausted_tiers_return_canned_apology() {
        let mut remote = MockGenerationProvider::new();
        remote
            .expect_generate()
            .returning(|_| Err(ProviderError::Request("down".to_string())));

        let mut local = MockGenerationProvider::new();
        local
            .expect_generate()
            .returning(|_| Err(ProviderError::Request("also down".to_string())));

        let chat = service(Some(remote), Some(local));
        let resolved = chat.resolve("¿qué es un número primo?", None).await;

        assert_eq!(resolved.text, ENGINE_UNAVAILABLE_REPLY);
        assert_eq!(resolved.source, ResponseSource::Fallback);
    }

    #[tokio::test]
    async fn no_providers_configured_returns_canned_apology() {
        let chat = service(None, None);
        let resolved = chat.resolve("¿qué es un número primo?", None).await;
        assert_eq!(resolved.text, ENGINE_UNAVAILABLE_REPLY);
        assert_eq!(resolved.source, ResponseSource::Fallback);
    }

    #[tokio::test(start_paused = true)]
    async fn hung_remote_tier_times_out_into_fallback() {
        struct SlowProvider;

        #[async_trait]
        impl GenerationProvider for SlowProvider {
            async fn generate(&self, _prompt: &str) -> Result<RawResponse, ProviderError> {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(RawResponse::Text("demasiado tarde".to_string()))
            }
        }

        let chat = ChatService::new(Some(Arc::new(SlowProvider)), None);
        let resolved = chat.resolve("explícame la fotosíntesis", None).await;

        assert_eq!(resolved.text, ENGINE_UNAVAILABLE_REPLY);
        assert_eq!(resolved.source, ResponseSource::Fallback);
    }
}
