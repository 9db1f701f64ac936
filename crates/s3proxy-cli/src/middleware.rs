//! HTTP middleware

use crate::access_log::AccessLogEntry;
use crate::client_ip::client_ip;
use crate::handlers::FetchRecord;
use crate::AppState;
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;

/// Access logging middleware.
///
/// Writes one entry per response carrying a [`FetchRecord`]; requests
/// abandoned before the fetch are not logged.
pub async fn access_log_middleware(
    State(state): State<Arc<AppState>>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let client_ip = client_ip(request.headers(), &remote_addr.to_string());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Some(record) = response.extensions_mut().remove::<FetchRecord>() {
        state.access_log.record(AccessLogEntry {
            timestamp: record.started_at,
            client_ip,
            method,
            path,
            duration: record.elapsed,
            size: record.size,
        });
    }

    response
}
