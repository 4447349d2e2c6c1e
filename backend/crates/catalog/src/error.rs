//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Referenced record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError, hiding server-side details from the client
    pub fn into_app_error(self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => {
                AppError::internal("Internal server error").with_source(self)
            }
            kind => AppError::new(kind, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CatalogError::NotFound(what) => {
                tracing::debug!(resource = what, "Catalog lookup missed");
            }
            CatalogError::Database(_) | CatalogError::Internal(_) => {}
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::NotFound("Problem").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_every_storage_failure_is_internal() {
        let failures = [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::PoolClosed,
            sqlx::Error::Io(std::io::Error::other("disk gone")),
            sqlx::Error::RowNotFound,
        ];

        for failure in failures {
            let response = CatalogError::Database(failure).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_not_found_message() {
        let app = CatalogError::NotFound("Problem").into_app_error();
        assert_eq!(app.kind(), ErrorKind::NotFound);
        assert_eq!(app.message(), "Problem not found");
    }

    #[test]
    fn test_database_error_is_generic_on_the_wire() {
        let app = CatalogError::Database(sqlx::Error::PoolClosed).into_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Internal server error");
        assert!(app.report().contains("Database error"));
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = CatalogError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }
}
