//! JSON body extraction with validator-backed checks
//!
//! Request DTOs carry `#[validate(...)]` attributes; these extractors run
//! them before a handler ever sees the body, so handlers only deal with
//! well-formed input.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_LENGTH,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body that has passed its `Validate` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::BytesRejection(e) => ApiError::invalid_query(e.to_string()),
        _ => ApiError::invalid_query("Invalid JSON body"),
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        body.validate()?;

        Ok(ValidatedJson(body))
    }
}

/// Like [`ValidatedJson`], but an absent body yields `None`
///
/// Used by endpoints whose body is entirely optional, such as invite
/// creation where every field has a server-side default.
#[derive(Debug, Clone)]
pub struct OptionalValidatedJson<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for OptionalValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // A missing or zero Content-Length means no body was sent
        let body_len = req
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(0);

        if body_len == 0 {
            return Ok(OptionalValidatedJson(None));
        }

        let ValidatedJson(body) = ValidatedJson::from_request(req, state).await?;
        Ok(OptionalValidatedJson(Some(body)))
    }
}
