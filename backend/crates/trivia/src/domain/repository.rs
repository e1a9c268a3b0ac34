//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use std::collections::HashSet;

use kernel::id::{CategoryId, QuestionId};

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::domain::value_objects::CategoryFilter;
use crate::error::TriviaResult;

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// All categories, ordered by id
    async fn list_all(&self) -> TriviaResult<Vec<Category>>;

    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> TriviaResult<Option<Category>>;
}

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// One page of questions ordered by id, plus the total question count
    async fn fetch_page(&self, offset: i64, limit: i64) -> TriviaResult<(Vec<Question>, i64)>;

    /// Questions matching the filter whose ids are not in `exclude`
    async fn fetch_eligible(
        &self,
        filter: CategoryFilter,
        exclude: &HashSet<QuestionId>,
    ) -> TriviaResult<Vec<Question>>;

    /// Store a new question and return it with its assigned id
    async fn insert(&self, question: &NewQuestion) -> TriviaResult<Question>;

    /// Delete a question; `false` if it did not exist
    async fn delete(&self, id: QuestionId) -> TriviaResult<bool>;

    /// Case-insensitive substring search on question text
    async fn search(&self, term: &str, category: Option<CategoryId>)
        -> TriviaResult<Vec<Question>>;

    /// All questions of one category, ordered by id
    async fn find_by_category(&self, category: CategoryId) -> TriviaResult<Vec<Question>>;
}
