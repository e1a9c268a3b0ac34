//! In-Memory Repository
//!
//! Seedable store used by tests and local runs without a database.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::value_objects::CategoryFilter;
use crate::error::{TriviaError, TriviaResult};
use kernel::id::{CategoryId, QuestionId};

#[derive(Default)]
struct State {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_question_id: i32,
}

/// In-memory repository; clones share the same data
#[derive(Clone, Default)]
pub struct InMemoryTriviaRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryTriviaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding the given categories and questions
    pub fn seeded(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let mut state = State::default();
        for category in categories {
            state.categories.insert(category.id, category);
        }
        for question in questions {
            state.last_question_id = state.last_question_id.max(question.id.get());
            state.questions.insert(question.id, question);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn question_count(&self) -> usize {
        self.state.read().await.questions.len()
    }

    pub async fn get(&self, id: QuestionId) -> Option<Question> {
        self.state.read().await.questions.get(&id).cloned()
    }
}

impl CategoryRepository for InMemoryTriviaRepository {
    async fn list_all(&self) -> TriviaResult<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> TriviaResult<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }
}

impl QuestionRepository for InMemoryTriviaRepository {
    async fn fetch_page(&self, offset: i64, limit: i64) -> TriviaResult<(Vec<Question>, i64)> {
        let state = self.state.read().await;
        let total = state.questions.len() as i64;
        let page = state
            .questions
            .values()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect();
        Ok((page, total))
    }

    async fn fetch_eligible(
        &self,
        filter: CategoryFilter,
        exclude: &HashSet<QuestionId>,
    ) -> TriviaResult<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| filter.matches(q.category) && !exclude.contains(&q.id))
            .cloned()
            .collect())
    }

    async fn insert(&self, question: &NewQuestion) -> TriviaResult<Question> {
        let mut state = self.state.write().await;
        let next = state
            .last_question_id
            .checked_add(1)
            .ok_or_else(|| TriviaError::Internal("question id space exhausted".to_string()))?;
        state.last_question_id = next;

        let stored = question.clone().into_question(QuestionId::new(next));
        state.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: QuestionId) -> TriviaResult<bool> {
        Ok(self.state.write().await.questions.remove(&id).is_some())
    }

    async fn search(&self, term: &str, category: Option<CategoryId>) -> TriviaResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| category.is_none_or(|c| q.category == c))
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category: CategoryId) -> TriviaResult<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }
}
