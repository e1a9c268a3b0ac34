//! Search Questions Use Case

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::validation::validate_search_request;
use crate::error::TriviaResult;
use kernel::id::CategoryId;
use serde_json::Value;
use std::sync::Arc;

/// Search Questions Use Case
pub struct SearchQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> SearchQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    /// Search across all categories unless one is given
    pub async fn execute(
        &self,
        body: Option<Value>,
        category: Option<CategoryId>,
    ) -> TriviaResult<Vec<Question>> {
        let query = validate_search_request(body.as_ref(), category)?;

        let questions = self
            .question_repo
            .search(&query.term, query.category)
            .await?;

        tracing::debug!(
            term = %query.term,
            category_id = ?query.category.map(|c| c.get()),
            matches = questions.len(),
            "Question search"
        );

        Ok(questions)
    }
}
