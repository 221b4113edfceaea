//! JSON extraction with structured rejections.
//!
//! Axum's default `Json` rejection is plain text; the gateway contract is
//! that every 4xx carries an `{"error": ...}` body. [`ValidJson`] wraps the
//! stock extractor and routes its rejections through [`AppError`].

use axum::{
    extract::{FromRequest, OptionalFromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `Json<T>` with [`AppError`] rejections.
///
/// Use `Option<ValidJson<T>>` for routes whose body is optional: a request
/// without a JSON content type is treated as "no body", while a present but
/// malformed body is still rejected.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<S, T> OptionalFromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(None);
        }
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        Ok(Some(Self(value)))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("json"))
}
