//! Request-level errors and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use s3proxy_store::{FailureKind, StoreError};
use thiserror::Error;

/// API error type.
///
/// Clients only ever see the status code; bodies are always empty.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No backend client could be established; the request is abandoned
    #[error("session error: {0}")]
    Session(StoreError),

    /// Fetch deadline elapsed
    #[error("fetch timed out: {0}")]
    Timeout(StoreError),

    /// Storage service or transport failure
    #[error("upstream fetch failed: {0}")]
    Upstream(StoreError),
}

impl ApiError {
    /// Classify a failed fetch
    pub fn from_fetch(err: StoreError) -> Self {
        match err.kind() {
            FailureKind::Timeout => Self::Timeout(err),
            FailureKind::BackendError | FailureKind::Other => Self::Upstream(err),
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        let timeout = ApiError::from_fetch(StoreError::Timeout(Duration::from_secs(1)));
        assert_eq!(timeout.status_code(), StatusCode::REQUEST_TIMEOUT);

        let missing = ApiError::from_fetch(StoreError::backend("NoSuchKey", "missing"));
        assert_eq!(missing.status_code(), StatusCode::BAD_GATEWAY);

        let dispatch = ApiError::from_fetch(StoreError::Dispatch("connection refused".into()));
        assert_eq!(dispatch.status_code(), StatusCode::BAD_GATEWAY);

        let read = ApiError::from_fetch(StoreError::Read("unexpected eof".into()));
        assert_eq!(read.status_code(), StatusCode::BAD_GATEWAY);

        let session = ApiError::Session(StoreError::Session("no region".into()));
        assert_eq!(session.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_response_has_empty_body() {
        let response = ApiError::from_fetch(StoreError::backend("AccessDenied", "denied"))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
