//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::markers;
use std::sync::Arc;

use crate::application::config::TriviaConfig;
use crate::application::{
    CategoryQuestionsUseCase, CreateQuestionUseCase, DeleteQuestionUseCase,
    ListCategoriesUseCase, ListQuestionsUseCase, NextQuizQuestionUseCase, SearchQuestionsUseCase,
};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::value_objects::Page;
use crate::error::{TriviaError, TriviaResult};
use crate::presentation::dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedResponse, DeletedResponse, PageParams,
    QuestionDto, QuestionsPageResponse, QuizResponse, SearchParams, SearchResponse, category_map,
    question_dtos,
};
use crate::presentation::extractors::{OptionalJson, ValidId};

/// Shared state for trivia handlers
#[derive(Clone)]
pub struct TriviaAppState<R>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<TriviaConfig>,
}

// ============================================================================
// Categories
// ============================================================================

/// GET /categories
pub async fn list_categories<R>(
    State(state): State<TriviaAppState<R>>,
) -> TriviaResult<Json<CategoriesResponse>>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCategoriesUseCase::new(state.repo.clone());

    let categories = category_map(use_case.execute().await?);

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions
pub async fn category_questions<R>(
    State(state): State<TriviaAppState<R>>,
    ValidId(category_id): ValidId<markers::Category>,
) -> TriviaResult<Json<CategoryQuestionsResponse>>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CategoryQuestionsUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case.execute(category_id).await?;
    let questions = question_dtos(output.questions);

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: output.category.into(),
    }))
}

// ============================================================================
// Questions
// ============================================================================

/// GET /questions?page=N
pub async fn list_questions<R>(
    State(state): State<TriviaAppState<R>>,
    Query(params): Query<PageParams>,
) -> TriviaResult<Json<QuestionsPageResponse>>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let page = Page::parse_or_first(params.page.as_deref()).map_err(TriviaError::PageNotFound)?;

    let use_case =
        ListQuestionsUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case.execute(page).await?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions: question_dtos(output.questions),
        total_questions: output.total_questions,
        categories: category_map(output.categories),
        current_category: None,
    }))
}

/// POST /questions
pub async fn create_question<R>(
    State(state): State<TriviaAppState<R>>,
    OptionalJson(body): OptionalJson,
) -> TriviaResult<Json<CreatedResponse>>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateQuestionUseCase::new(state.repo.clone(), state.repo.clone());

    let question = use_case.execute(body).await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question<R>(
    State(state): State<TriviaAppState<R>>,
    ValidId(question_id): ValidId<markers::Question>,
) -> TriviaResult<Json<DeletedResponse>>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteQuestionUseCase::new(state.repo.clone());

    let deleted = use_case.execute(question_id).await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

/// POST /questions/search[?category=N]
pub async fn search_questions<R>(
    State(state): State<TriviaAppState<R>>,
    Query(params): Query<SearchParams>,
    OptionalJson(body): OptionalJson,
) -> TriviaResult<Json<SearchResponse>>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SearchQuestionsUseCase::new(state.repo.clone());

    let questions = question_dtos(use_case.execute(body, params.category_id()).await?);

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

// ============================================================================
// Quizzes
// ============================================================================

/// POST /quizzes
pub async fn next_quiz_question<R>(
    State(state): State<TriviaAppState<R>>,
    OptionalJson(body): OptionalJson,
) -> TriviaResult<Json<QuizResponse>>
where
    R: CategoryRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = NextQuizQuestionUseCase::new(state.repo.clone());

    let question = use_case.execute(body).await?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(QuestionDto::from),
    }))
}

// ============================================================================
// Fallbacks
// ============================================================================

/// Unknown path
pub async fn not_found() -> AppError {
    AppError::from_kind(ErrorKind::NotFound)
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::from_kind(ErrorKind::MethodNotAllowed)
}
