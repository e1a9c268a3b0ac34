//! Custom Axum extractors

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::Id;
use serde_json::Value;

/// Request body decoded as JSON, or `None` when it is empty or not JSON.
///
/// Validation decides what an absent body means, so this never rejects.
pub struct OptionalJson(pub Option<Value>);

impl<S> FromRequest<S> for OptionalJson
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Bytes::from_request(req, state).await {
            Ok(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes).ok(),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable request body");
                None
            }
        };
        Ok(Self(value))
    }
}

/// Integer id from the path; anything else is a 404 like an unmatched route
pub struct ValidId<T>(pub Id<T>);

impl<S, T> FromRequestParts<S> for ValidId<T>
where
    S: Send + Sync,
    T: Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::from_kind(ErrorKind::NotFound))?;

        raw.parse::<i32>()
            .map(|id| Self(Id::new(id)))
            .map_err(|_| AppError::from_kind(ErrorKind::NotFound))
    }
}
