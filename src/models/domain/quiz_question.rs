use serde::{Deserialize, Serialize};

/// One multiple-choice question. `options` is order-significant and `answer`
/// names the correct option's key; providers are asked for the same shape,
/// so this doubles as the deserialization target for provider JSON.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizOption>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub key: String,
    pub text: String,
}

impl QuizQuestion {
    /// True when the question can be graded: at least two options, no
    /// duplicate keys, and the answer names one of the keys
    /// (case-insensitively).
    pub fn is_well_formed(&self) -> bool {
        if self.options.len() < 2 {
            return false;
        }

        let mut keys: Vec<String> = self
            .options
            .iter()
            .map(|option| option.key.to_lowercase())
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        if keys.len() != total {
            return false;
        }

        let answer = self.answer.to_lowercase();
        self.options
            .iter()
            .any(|option| option.key.to_lowercase() == answer)
    }
}
