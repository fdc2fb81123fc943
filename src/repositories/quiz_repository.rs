use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{errors::AppResult, models::domain::Quiz};

pub const DEFAULT_QUIZ_STORE_CAPACITY: usize = 1000;

#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Assigns a fresh token to the quiz, stores it and returns the token.
    async fn create(&self, quiz: Quiz) -> AppResult<String>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
}

/// Process-lifetime quiz store. Quizzes never change after insert; once the
/// capacity bound is reached the oldest quiz is evicted so memory stays
/// flat across long uptimes.
pub struct InMemoryQuizRepository {
    inner: RwLock<StoreInner>,
    capacity: usize,
}

struct StoreInner {
    quizzes: HashMap<String, Quiz>,
    insertion_order: VecDeque<String>,
}

impl InMemoryQuizRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                quizzes: HashMap::new(),
                insertion_order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, mut quiz: Quiz) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        quiz.id = id.clone();

        let mut inner = self.inner.write().await;
        while inner.insertion_order.len() >= self.capacity {
            if let Some(evicted) = inner.insertion_order.pop_front() {
                inner.quizzes.remove(&evicted);
                log::warn!("Quiz store at capacity, evicted quiz '{}'", evicted);
            }
        }
        inner.insertion_order.push_back(id.clone());
        inner.quizzes.insert(id.clone(), quiz);

        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let inner = self.inner.read().await;
        Ok(inner.quizzes.get(id).cloned())
    }
}
