//! Error types for the s3proxy-store crate

use std::time::Duration;
use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// How a failed fetch should be treated by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The caller's deadline elapsed before the fetch finished
    Timeout,
    /// The storage service answered with an error
    BackendError,
    /// Anything that is neither of the above
    Other,
}

/// Errors that can occur while reading from an object store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A backend client could not be built
    #[error("could not establish storage session: {0}")]
    Session(String),

    /// Deadline elapsed
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),

    /// Error reported by the storage service itself
    #[error("backend error {code}: {message}")]
    Backend { code: String, message: String },

    /// The response head arrived but the body could not be drained
    #[error("failed to read object body: {0}")]
    Read(String),

    /// The request never produced a service response (connect, dispatch, SDK timeouts)
    #[error("request dispatch failed: {0}")]
    Dispatch(String),
}

impl StoreError {
    /// Create a backend error
    pub fn backend(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout(_) => FailureKind::Timeout,
            Self::Backend { .. } => FailureKind::BackendError,
            Self::Session(_) | Self::Read(_) | Self::Dispatch(_) => FailureKind::Other,
        }
    }

    /// Backend error code, if the service reported one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Backend { code, .. } => Some(code),
            _ => None,
        }
    }
}
