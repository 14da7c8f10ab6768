//! JSON body extractor that reports decode failures as `ApiError`.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use recordhub_core::error::AppError;

use crate::error::ApiError;

/// Decodes the request body as JSON into `T` whatever its `Content-Type`.
///
/// A body over the configured limit becomes `PAYLOAD_TOO_LARGE`; a body that
/// cannot be decoded into `T` becomes `VALIDATION_ERROR`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| rejection_to_error(&rejection))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::validation(format!("Invalid JSON body: {e}")))?;

        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: &BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(rejection.body_text())
    } else {
        AppError::validation(rejection.body_text())
    }
}
