//! Create Question Use Case

use crate::domain::entities::Question;
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::validation::validate_new_question;
use crate::error::TriviaResult;
use serde_json::Value;
use std::sync::Arc;

/// Create Question Use Case
pub struct CreateQuestionUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    question_repo: Arc<Q>,
    category_repo: Arc<C>,
}

impl<Q, C> CreateQuestionUseCase<Q, C>
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

    /// Validate the raw body against the current categories, then store it
    pub async fn execute(&self, body: Option<Value>) -> TriviaResult<Question> {
        let categories = self.category_repo.list_all().await?;
        let new_question = validate_new_question(body.as_ref(), &categories)?;

        let question = self.question_repo.insert(&new_question).await?;

        tracing::info!(
            question_id = %question.id,
            category_id = %question.category,
            difficulty = question.difficulty.level(),
            "Question created"
        );

        Ok(question)
    }
}
