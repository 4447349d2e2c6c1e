//! Request Extractors

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use kernel::error::app_error::AppError;
use serde::de::DeserializeOwned;

/// JSON request body, parsed whatever the `Content-Type` header says
///
/// Clients are not required to send the header.
/// Malformed bodies are rejected with the usual `{"error": ...}` envelope.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()).with_source(e))?;

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}
