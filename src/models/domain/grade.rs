use serde::Serialize;

/// Result of grading one submission against a stored quiz. Derived on every
/// grade call, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    pub correct_count: usize,
    pub total: usize,
    pub percentage: i32,
    pub per_question: Vec<QuestionGrade>,
}

/// Per-question outcome, in the quiz's stored question order. A missing
/// submission shows up as an empty `submitted_key`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionGrade {
    pub id: String,
    pub text: String,
    pub submitted_key: String,
    pub correct_key: String,
    pub explanation: String,
}
