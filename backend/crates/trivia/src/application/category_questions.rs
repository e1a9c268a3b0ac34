//! Category Questions Use Case

use crate::domain::entities::{Category, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::error::{TriviaError, TriviaResult};
use kernel::id::CategoryId;
use std::sync::Arc;

/// Output DTO for category questions
#[derive(Debug, Clone)]
pub struct CategoryQuestionsOutput {
    pub category: Category,
    pub questions: Vec<Question>,
}

/// Category Questions Use Case
pub struct CategoryQuestionsUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    question_repo: Arc<Q>,
    category_repo: Arc<C>,
}

impl<Q, C> CategoryQuestionsUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    pub fn new(question_repo: Arc<Q>, category_repo: Arc<C>) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    pub async fn execute(&self, id: CategoryId) -> TriviaResult<CategoryQuestionsOutput> {
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or(TriviaError::CategoryNotFound(id))?;

        let questions = self.question_repo.find_by_category(id).await?;

        Ok(CategoryQuestionsOutput {
            category,
            questions,
        })
    }
}
