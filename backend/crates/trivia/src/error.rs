//! Trivia Error Types
//!
//! This module provides trivia-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{CategoryId, QuestionId};
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Trivia-specific result type alias
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Trivia-specific error variants
///
/// Client input errors (400), missing resources (404) and infrastructure
/// failures (5xx). Only the last kind is logged as a fault.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No question with this id
    #[error("Question {0} not found")]
    QuestionNotFound(QuestionId),

    /// No category with this id
    #[error("Category {0} not found")]
    CategoryNotFound(CategoryId),

    /// Requested page holds no questions
    #[error("Page {0} has no questions")]
    PageNotFound(i64),

    /// The store has no categories at all
    #[error("No categories available")]
    NoCategories,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::Validation(_) => ErrorKind::BadRequest,
            TriviaError::QuestionNotFound(_)
            | TriviaError::CategoryNotFound(_)
            | TriviaError::PageNotFound(_)
            | TriviaError::NoCategories => ErrorKind::NotFound,
            TriviaError::Database(_) | TriviaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Trivia request failed");
        } else {
            tracing::debug!(error = %self, "Trivia request rejected");
        }
    }
}

impl From<TriviaError> for AppError {
    fn from(err: TriviaError) -> Self {
        match err {
            TriviaError::Validation(e) => AppError::bad_request(e.to_string()),
            TriviaError::Database(e) => AppError::from(e),
            other => AppError::from_kind(other.kind()),
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
