//! List Questions Use Case

use crate::application::config::TriviaConfig;
use crate::domain::entities::{Category, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::value_objects::Page;
use crate::error::{TriviaError, TriviaResult};
use std::sync::Arc;

/// Output DTO for list questions
#[derive(Debug, Clone)]
pub struct ListQuestionsOutput {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
}

/// List Questions Use Case
pub struct ListQuestionsUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    question_repo: Arc<Q>,
    category_repo: Arc<C>,
    config: Arc<TriviaConfig>,
}

impl<Q, C> ListQuestionsUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    pub fn new(question_repo: Arc<Q>, category_repo: Arc<C>, config: Arc<TriviaConfig>) -> Self {
        Self {
            question_repo,
            category_repo,
            config,
        }
    }

    pub async fn execute(&self, page: Page) -> TriviaResult<ListQuestionsOutput> {
        let (questions, total_questions) = self
            .question_repo
            .fetch_page(
                page.offset(self.config.questions_per_page),
                self.config.page_limit(),
            )
            .await?;

        if questions.is_empty() {
            return Err(TriviaError::PageNotFound(i64::from(page.number())));
        }

        let categories = self.category_repo.list_all().await?;

        Ok(ListQuestionsOutput {
            questions,
            total_questions,
            categories,
        })
    }
}
