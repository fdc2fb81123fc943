use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::canned::DEFAULT_TOPIC;
use crate::constants::prompts::quiz_json_prompt;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{Quiz, QuizOption, QuizQuestion};
use crate::providers::{generate_bounded, GenerationProvider};
use crate::repositories::QuizRepository;
use crate::services::json_salvage;

pub const DEFAULT_QUESTION_COUNT: usize = 5;

const QUIZ_GENERATION_TIMEOUT: u64 = 120;

/// Generates quizzes through the remote provider and falls back to a
/// synthetic quiz when the provider is missing, fails, or returns JSON
/// that cannot be salvaged into well-formed questions.
pub struct QuizService {
    provider: Option<Arc<dyn GenerationProvider>>,
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(
        provider: Option<Arc<dyn GenerationProvider>>,
        repository: Arc<dyn QuizRepository>,
    ) -> Self {
        Self {
            provider,
            repository,
        }
    }

    /// Generates, stores, and returns the new quiz id.
    pub async fn create_quiz(&self, topic: &str, question_count: usize) -> AppResult<String> {
        let quiz = self.generate_quiz(topic, question_count).await;
        self.repository.create(quiz).await
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    /// Never fails: any provider-side problem downgrades to the synthetic
    /// generator.
    pub async fn generate_quiz(&self, topic: &str, question_count: usize) -> Quiz {
        let topic = topic.trim();
        let topic = if topic.is_empty() { DEFAULT_TOPIC } else { topic };

        if let Some(provider) = &self.provider {
            let prompt = quiz_json_prompt(topic, question_count);
            match generate_bounded(provider.as_ref(), &prompt, QUIZ_GENERATION_TIMEOUT).await {
                Ok(raw) => {
                    if let Some(quiz) = parse_provider_quiz(&raw.extract_text(), topic) {
                        return quiz;
                    }
                    log::warn!("Provider quiz output for '{}' was unusable", topic);
                }
                Err(err) => log::warn!("Quiz generation for '{}' failed: {}", topic, err),
            }
        }

        synthetic_quiz(topic, question_count)
    }
}

#[derive(Debug, Deserialize)]
struct QuizPayload {
    #[serde(default)]
    topic: String,
    questions: Vec<QuizQuestion>,
}

/// Salvages provider output into a quiz. Returns None when no JSON object
/// can be recovered or any recovered question is malformed.
fn parse_provider_quiz(text: &str, requested_topic: &str) -> Option<Quiz> {
    if text.trim().is_empty() {
        return None;
    }

    let mut value = json_salvage::extract_json(text)?;
    normalize_plain_options(&mut value);

    let payload: QuizPayload = serde_json::from_value(value).ok()?;
    if !payload.questions.iter().all(QuizQuestion::is_well_formed) {
        return None;
    }

    let topic = if payload.topic.trim().is_empty() {
        requested_topic.to_string()
    } else {
        payload.topic
    };
    Some(Quiz::new(&topic, payload.questions))
}

/// Providers sometimes answer with bare string options instead of the
/// requested {key, text} objects. Rewrite those in place, keyed a, b, c...
/// in order. Questions mixing strings and objects are left untouched and
/// rejected later by deserialization.
fn normalize_plain_options(value: &mut Value) {
    let questions = match value.get_mut("questions").and_then(Value::as_array_mut) {
        Some(questions) => questions,
        None => return,
    };

    for question in questions {
        let options = match question.get_mut("options").and_then(Value::as_array_mut) {
            Some(options) => options,
            None => continue,
        };
        if options.is_empty() || !options.iter().all(Value::is_string) {
            continue;
        }

        *options = options
            .iter()
            .enumerate()
            .map(|(index, text)| {
                json!({
                    "key": char::from_u32(97 + index as u32).unwrap_or('?').to_string(),
                    "text": text,
                })
            })
            .collect();
    }
}

/// Deterministic shape, shuffled option order. The declared answer is
/// whichever option lands first after the shuffle.
fn synthetic_quiz(topic: &str, question_count: usize) -> Quiz {
    let display_topic = capitalize_topic(topic);
    let mut rng = rand::thread_rng();

    let questions = (1..=question_count)
        .map(|number| {
            let mut options = vec![
                QuizOption {
                    key: "a".to_string(),
                    text: format!("Elemento real de {}", display_topic),
                },
                QuizOption {
                    key: "b".to_string(),
                    text: format!("Ejemplo incorrecto sobre {}", display_topic),
                },
                QuizOption {
                    key: "c".to_string(),
                    text: "Evento no relacionado".to_string(),
                },
                QuizOption {
                    key: "d".to_string(),
                    text: "Concepto general sin conexión".to_string(),
                },
            ];
            options.shuffle(&mut rng);
            let answer = options[0].key.clone();

            QuizQuestion {
                id: format!("q{}", number),
                text: format!(
                    "Pregunta {} sobre {}: ¿Qué aspecto es importante de {}?",
                    number, display_topic, display_topic
                ),
                answer: answer.clone(),
                explanation: format!(
                    "La opción {} es correcta porque describe algo central de {}.",
                    answer, display_topic
                ),
                options,
            }
        })
        .collect();

    Quiz::new(&display_topic, questions)
}

fn capitalize_topic(topic: &str) -> String {
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{MockGenerationProvider, ProviderError, RawResponse};
    use crate::repositories::{InMemoryQuizRepository, DEFAULT_QUIZ_STORE_CAPACITY};

    fn service_without_provider() -> QuizService {
        QuizService::new(
            None,
            Arc::new(InMemoryQuizRepository::new(DEFAULT_QUIZ_STORE_CAPACITY)),
        )
    }

    fn service_with_provider(provider: MockGenerationProvider) -> QuizService {
        QuizService::new(
            Some(Arc::new(provider)),
            Arc::new(InMemoryQuizRepository::new(DEFAULT_QUIZ_STORE_CAPACITY)),
        )
    }

    #[tokio::test]
    async fn synthetic_quiz_has_expected_shape() {
        let quiz = service_without_provider().generate_quiz("álgebra", 3).await;

        assert_eq!(quiz.topic, "Álgebra");
        assert_eq!(quiz.questions.len(), 3);

        for (index, question) in quiz.questions.iter().enumerate() {
            assert_eq!(question.id, format!("q{}", index + 1));
            assert!(question.text.contains("Álgebra"));
            assert_eq!(question.options.len(), 4);

            let mut keys: Vec<&str> = question.options.iter().map(|o| o.key.as_str()).collect();
            keys.sort_unstable();
            assert_eq!(keys, vec!["a", "b", "c", "d"]);

            assert_eq!(question.answer, question.options[0].key);
            assert!(question
                .explanation
                .contains(&format!("La opción {}", question.answer)));
            assert!(question.is_well_formed());
        }
    }

    #[tokio::test]
    async fn blank_topic_falls_back_to_default() {
        let quiz = service_without_provider().generate_quiz("   ", 2).await;
        assert_eq!(quiz.topic, "Tema general");
    }

    #[tokio::test]
    async fn provider_json_with_noise_is_salvaged() {
        let mut provider = MockGenerationProvider::new();
        provider.expect_generate().returning(|_| {
            Ok(RawResponse::Text(
                r#"Aquí tienes el examen:
{
  "topic": "Historia de Colombia",
  "questions": [
    {
      "id": "q1",
      "text": "¿En qué año fue la independencia?",
      "options": [
        {"key": "a", "text": "1810"},
        {"key": "b", "text": "1901"},
      ],
      "answer": "a",
      "explanation": "El grito de independencia fue en 1810."
    },
  ]
}
Espero que te sirva."#
                    .to_string(),
            ))
        });

        let quiz = service_with_provider(provider)
            .generate_quiz("historia", 1)
            .await;

        assert_eq!(quiz.topic, "Historia de Colombia");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].answer, "a");
    }

    #[tokio::test]
    async fn plain_string_options_get_sequential_keys() {
        let mut provider = MockGenerationProvider::new();
        provider.expect_generate().returning(|_| {
            Ok(RawResponse::Text(
                r#"{"questions": [{"id": "q1", "text": "¿Capital de Colombia?", "options": ["Bogotá", "Cali", "Medellín"], "answer": "a"}]}"#
                    .to_string(),
            ))
        });

        let quiz = service_with_provider(provider)
            .generate_quiz("geografía", 1)
            .await;

        assert_eq!(quiz.topic, "geografía");
        let options = &quiz.questions[0].options;
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].key, "a");
        assert_eq!(options[0].text, "Bogotá");
        assert_eq!(options[2].key, "c");
    }

    #[tokio::test]
    async fn provider_text_without_json_falls_back_to_synthetic() {
        let mut provider = MockGenerationProvider::new();
        provider.expect_generate().returning(|_| {
            Ok(RawResponse::Text(
                "No puedo generar ese cuestionario.".to_string(),
            ))
        });

        let quiz = service_with_provider(provider)
            .generate_quiz("química", 2)
            .await;

        assert_eq!(quiz.topic, "Química");
        assert_eq!(quiz.questions.len(), 2);
    }

    #[tokio::test]
    async fn provider_error_falls_back_to_synthetic() {
        let mut provider = MockGenerationProvider::new();
        provider
            .expect_generate()
            .returning(|_| Err(ProviderError::Request("down".to_string())));

        let quiz = service_with_provider(provider)
            .generate_quiz("física", 4)
            .await;

        assert_eq!(quiz.topic, "Física");
        assert_eq!(quiz.questions.len(), 4);
    }

    #[tokio::test]
    async fn malformed_answer_key_falls_back_to_synthetic() {
        let mut provider = MockGenerationProvider::new();
        provider.expect_generate().returning(|_| {
            Ok(RawResponse::Text(
                r#"{"questions": [{"id": "q1", "text": "¿?", "options": [{"key": "a", "text": "x"}, {"key": "b", "text": "y"}], "answer": "z"}]}"#
                    .to_string(),
            ))
        });

        let quiz = service_with_provider(provider)
            .generate_quiz("biología", 1)
            .await;

        assert_eq!(quiz.topic, "Biología");
    }

    #[tokio::test]
    async fn created_quiz_can_be_fetched_by_id() {
        let service = service_without_provider();

        let id = service.create_quiz("álgebra", 2).await.unwrap();
        let quiz = service.get_quiz(&id).await.unwrap();

        assert_eq!(quiz.id, id);
        assert_eq!(quiz.topic, "Álgebra");
        assert_eq!(quiz.questions.len(), 2);
    }

    #[tokio::test]
    async fn unknown_quiz_id_is_not_found() {
        let result = service_without_provider().get_quiz("missing").await;

        match result {
            Err(AppError::NotFound(message)) => {
                assert!(message.contains("missing"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
