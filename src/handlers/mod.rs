pub mod chat_handler;
pub mod health_handler;
pub mod quiz_handler;

pub use chat_handler::{chat_or_quiz, resolve_chat};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::{create_quiz, get_quiz, grade_quiz};
