pub mod chat;
pub mod grade;
pub mod quiz;
pub mod quiz_question;

pub use chat::{ResolvedResponse, ResponseSource};
pub use grade::{GradeResult, QuestionGrade};
pub use quiz::Quiz;
pub use quiz_question::{QuizOption, QuizQuestion};
