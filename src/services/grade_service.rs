use std::collections::HashMap;

use crate::models::domain::{GradeResult, QuestionGrade, Quiz};

/// Stateless grading against a stored quiz. Submitted keys are matched
/// case-insensitively and with surrounding whitespace ignored; a missing
/// submission grades as incorrect with an empty submitted key.
pub struct GradeService;

impl GradeService {
    pub fn grade(quiz: &Quiz, answers: &HashMap<String, String>) -> GradeResult {
        let total = quiz.questions.len();
        let mut correct_count = 0;
        let mut per_question = Vec::with_capacity(total);

        for question in &quiz.questions {
            let submitted_key = answers
                .get(&question.id)
                .map(|key| key.trim().to_lowercase())
                .unwrap_or_default();
            let correct_key = question.answer.to_lowercase();

            if submitted_key == correct_key {
                correct_count += 1;
            }

            per_question.push(QuestionGrade {
                id: question.id.clone(),
                text: question.text.clone(),
                submitted_key,
                correct_key,
                explanation: question.explanation.clone(),
            });
        }

        let percentage = if total == 0 {
            0
        } else {
            (correct_count as f64 * 100.0 / total as f64).round() as i32
        };

        GradeResult {
            correct_count,
            total,
            percentage,
            per_question,
        }
    }
}
