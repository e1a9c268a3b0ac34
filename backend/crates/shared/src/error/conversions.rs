//! Error conversions - From implementations for infrastructure error types
//!
//! Provides automatic conversion from store errors to [`AppError`] and the
//! HTTP response rendering of [`AppError`].

#[allow(unused_imports)]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// SQLSTATE class of a database error, e.g. `"23"` for `23505`
#[cfg(feature = "sqlx")]
fn sqlstate_class(db_err: &dyn sqlx::error::DatabaseError) -> Option<String> {
    db_err.code().map(|code| code.chars().take(2).collect())
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        use super::kind::ErrorKind;

        let app_err = match &err {
            sqlx::Error::RowNotFound => AppError::from_kind(ErrorKind::NotFound),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::service_unavailable("Database connection pool exhausted")
            }
            sqlx::Error::Io(_) => AppError::service_unavailable("Database connection error"),
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            sqlx::Error::Database(db_err) => match sqlstate_class(db_err.as_ref()).as_deref() {
                // integrity constraint violation
                Some("23") => AppError::from_kind(ErrorKind::UnprocessableEntity),
                // insufficient resources, operator intervention
                Some("53") | Some("57") => AppError::service_unavailable("Database unavailable"),
                _ => AppError::internal("Database error"),
            },
            _ => AppError::internal("Database error"),
        };
        app_err.with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.envelope())).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_row_not_found_conversion() {
        use crate::error::kind::ErrorKind;

        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_pool_timeout_conversion() {
        use crate::error::kind::ErrorKind;

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert!(app_err.is_server_error());
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::not_found("resource not found!").into_response();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);

        let response = AppError::bad_request("Data is empty!").into_response();
        assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
    }
}
