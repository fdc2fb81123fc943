use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

/// A generated quiz. Immutable once stored; the id is assigned by the store
/// at insert time and stays empty until then.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    #[serde(default)]
    pub id: String,
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(topic: &str, questions: Vec<QuizQuestion>) -> Self {
        Quiz {
            id: String::new(),
            topic: topic.to_string(),
            questions,
            created_at: Some(Utc::now()),
        }
    }
}
