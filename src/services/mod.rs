pub mod chat_service;
pub mod grade_service;
pub mod intent;
pub mod json_salvage;
pub mod quiz_service;
pub mod text_helpers;

pub use chat_service::ChatService;
pub use grade_service::GradeService;
pub use quiz_service::{QuizService, DEFAULT_QUESTION_COUNT};
