use serde::Serialize;

use crate::models::domain::{
    GradeResult, QuestionGrade, Quiz, QuizOption, ResolvedResponse, ResponseSource,
};

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub source: ResponseSource,
}

impl From<ResolvedResponse> for ChatResponse {
    fn from(resolved: ResolvedResponse) -> Self {
        ChatResponse {
            response: resolved.text,
            source: resolved.source,
        }
    }
}

/// Reply shape when an extended-chat message triggered quiz creation. The
/// source tag is the literal "quiz" rather than a resolver tier.
#[derive(Debug, Clone, Serialize)]
pub struct QuizCreatedChatResponse {
    pub response: String,
    pub source: String,
    pub quiz_id: String,
    pub quiz_url: String,
}

impl QuizCreatedChatResponse {
    pub fn new(response: String, quiz_id: String) -> Self {
        let quiz_url = quiz_url_for(&quiz_id);
        QuizCreatedChatResponse {
            response,
            source: "quiz".to_string(),
            quiz_id,
            quiz_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateQuizResponse {
    pub quiz_id: String,
    pub quiz_url: String,
}

impl CreateQuizResponse {
    pub fn from_id(quiz_id: String) -> Self {
        let quiz_url = quiz_url_for(&quiz_id);
        CreateQuizResponse { quiz_id, quiz_url }
    }
}

/// Quiz as served to a student taking it: answer keys and explanations are
/// withheld until grading.
#[derive(Debug, Clone, Serialize)]
pub struct QuizViewDto {
    pub id: String,
    pub topic: String,
    pub questions: Vec<QuizQuestionViewDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionViewDto {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl From<Quiz> for QuizViewDto {
    fn from(quiz: Quiz) -> Self {
        QuizViewDto {
            id: quiz.id,
            topic: quiz.topic,
            questions: quiz
                .questions
                .into_iter()
                .map(|question| QuizQuestionViewDto {
                    id: question.id,
                    text: question.text,
                    options: question.options,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeQuizResponse {
    pub quiz_id: String,
    pub topic: String,
    pub correct_count: usize,
    pub total: usize,
    pub percentage: i32,
    pub per_question: Vec<QuestionGrade>,
}

impl GradeQuizResponse {
    pub fn new(quiz: &Quiz, result: GradeResult) -> Self {
        GradeQuizResponse {
            quiz_id: quiz.id.clone(),
            topic: quiz.topic.clone(),
            correct_count: result.correct_count,
            total: result.total,
            percentage: result.percentage,
            per_question: result.per_question,
        }
    }
}

fn quiz_url_for(quiz_id: &str) -> String {
    format!("/api/quizzes/{}", quiz_id)
}
