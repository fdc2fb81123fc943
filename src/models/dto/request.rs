use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,

    /// Student level for the tutoring prompt. Also accepted under the
    /// Spanish wire name used by older clients.
    #[serde(default, alias = "nivel")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    pub topic: Option<String>,

    /// Legacy client field name for the topic.
    pub q: Option<String>,

    #[validate(range(min = 1, max = 50))]
    pub n: Option<usize>,
}

impl CreateQuizRequest {
    /// `topic` wins over `q`; blank values count as absent.
    pub fn resolved_topic(&self) -> Option<&str> {
        let topic = self
            .topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        topic.or_else(|| {
            self.q
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GradeQuizRequest {
    /// question id -> submitted option key. Missing questions are graded as
    /// incorrect, so an empty map is a valid submission.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}
