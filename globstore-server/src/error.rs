//! Server error types with HTTP status code mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use globstore_core::Error as StoreError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Server error type wrapping store errors with HTTP status mapping
#[derive(Error, Debug)]
pub enum ServerError {
    /// Store layer error
    #[error("{0}")]
    Store(#[from] StoreError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic bad request error
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ServerError {
    /// Map error to error type IRI (compact form)
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::Store(StoreError::InvalidPath(_)) => "err:store/InvalidPath",
            ServerError::Store(StoreError::NotFound(_)) => "err:store/NotFound",
            ServerError::Store(StoreError::ConnectionLost(_)) => "err:store/ConnectionLost",
            ServerError::Store(StoreError::Remote(_)) => "err:store/Remote",
            ServerError::Json(_) => "err:server/InvalidJson",
            ServerError::BadRequest(_) => "err:server/BadRequest",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 - Bad Request (client errors)
            ServerError::Store(StoreError::InvalidPath(_)) => StatusCode::BAD_REQUEST,
            ServerError::Json(_) => StatusCode::BAD_REQUEST,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 404 - Not Found
            ServerError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,

            // 500 - everything else
            ServerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    status: u16,
    #[serde(rename = "@type")]
    error_type: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type();

        let body = ErrorResponse {
            error: self.to_string(),
            status: status.as_u16(),
            error_type: error_type.to_string(),
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            format!(
                r#"{{"error":"{}","status":{},"@type":"{}"}}"#,
                self,
                status.as_u16(),
                error_type
            )
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ServerError::from(StoreError::invalid_path("empty path"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), "err:store/InvalidPath");

        let err = ServerError::from(StoreError::not_found("no such thing"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ServerError::from(StoreError::remote("upstream"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
