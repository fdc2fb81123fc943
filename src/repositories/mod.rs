pub mod quiz_repository;

pub use quiz_repository::{InMemoryQuizRepository, QuizRepository, DEFAULT_QUIZ_STORE_CAPACITY};
