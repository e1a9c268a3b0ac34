//! Delete Question Use Case

use crate::domain::repository::QuestionRepository;
use crate::error::{TriviaError, TriviaResult};
use kernel::id::QuestionId;
use std::sync::Arc;

/// Delete Question Use Case
pub struct DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn execute(&self, id: QuestionId) -> TriviaResult<QuestionId> {
        if !self.question_repo.delete(id).await? {
            return Err(TriviaError::QuestionNotFound(id));
        }

        tracing::info!(question_id = %id, "Question deleted");
        Ok(id)
    }
}
