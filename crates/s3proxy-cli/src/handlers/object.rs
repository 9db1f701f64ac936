//! Object retrieval handler

use crate::access_log::size_descriptor;
use crate::{ApiError, AppState};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use s3proxy_store::{fetch_object, FailureKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, warn};

/// Query parameter naming the object key
pub const KEY_PARAM: &str = "key";

/// What the access log needs to know about a fetch.
///
/// Attached to every response whose request got past session setup; the
/// access log middleware only records responses that carry it. `size` is
/// taken from the handler's own headers, before routing adds a
/// `Content-Length`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRecord {
    /// When the fetch started
    pub started_at: DateTime<Utc>,
    /// Wall-clock time spent in the fetch
    pub elapsed: Duration,
    /// Size descriptor for the access line
    pub size: String,
}

/// Per-request fetch input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub key: String,
}

impl FetchRequest {
    /// Take the first `key` parameter; absent means the empty key
    pub fn from_query(params: Vec<(String, String)>) -> Self {
        let key = params
            .into_iter()
            .find(|(name, _)| name == KEY_PARAM)
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { key }
    }
}

/// GET /getObject?key={key} - Return the object's bytes from the configured bucket
pub async fn get_object(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let request = FetchRequest::from_query(params);

    if let Err(e) = state.store.connect().await {
        error!(error = %e, "not able to create a storage session");
        return ApiError::Session(e).into_response();
    }

    let started_at = Utc::now();
    let start = Instant::now();
    let result = fetch_object(
        state.store.as_ref(),
        &state.config.bucket,
        &request.key,
        state.config.timeout,
    )
    .await;
    let elapsed = start.elapsed();

    let mut response = match result {
        Ok(data) => data.into_response(),
        Err(e) => {
            match e.kind() {
                FailureKind::Timeout => {
                    warn!(key = %request.key, error = %e, "download canceled due to timeout")
                }
                FailureKind::BackendError | FailureKind::Other => {
                    warn!(key = %request.key, error = %e, "failed to download the object")
                }
            }
            ApiError::from_fetch(e).into_response()
        }
    };

    let size = size_descriptor(response.headers());
    response.extensions_mut().insert(FetchRecord {
        started_at,
        elapsed,
        size,
    });
    response
}
