//! Next Quiz Question Use Case

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::services::select_next;
use crate::domain::validation::validate_quiz_query;
use crate::domain::value_objects::QuizQuery;
use crate::error::TriviaResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use std::sync::Arc;

/// Next Quiz Question Use Case
///
/// Stateless: every call fetches the eligible set once and draws from it.
pub struct NextQuizQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> NextQuizQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    /// Validate the raw body and select with a freshly seeded generator
    pub async fn execute(&self, body: Option<Value>) -> TriviaResult<Option<Question>> {
        let query = validate_quiz_query(body.as_ref())?;
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.execute_with(&query, &mut rng).await
    }

    /// Select the next question using the given random source
    pub async fn execute_with<R>(
        &self,
        query: &QuizQuery,
        rng: &mut R,
    ) -> TriviaResult<Option<Question>>
    where
        R: Rng + Send + ?Sized,
    {
        let eligible = self
            .question_repo
            .fetch_eligible(query.filter, &query.exclude)
            .await?;
        let eligible_count = eligible.len();

        let question = select_next(eligible, rng);

        match &question {
            Some(q) => tracing::debug!(
                question_id = %q.id,
                eligible = eligible_count,
                excluded = query.exclude.len(),
                "Quiz question selected"
            ),
            None => tracing::debug!(
                excluded = query.exclude.len(),
                "Quiz exhausted, no eligible question left"
            ),
        }

        Ok(question)
    }
}
