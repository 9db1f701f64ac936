//! Access log entries and sinks

use axum::http::{header, HeaderMap};
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use std::fmt;
use std::time::Duration;

/// Tracing target access lines are emitted on
pub const ACCESS_LOG_TARGET: &str = "s3proxy::access";

/// Size label used when no `Content-Length` header is set at log time.
/// The body is never cached; the label is kept for log compatibility.
pub const UNKNOWN_SIZE_LABEL: &str = "cached";

/// One access log line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessLogEntry {
    /// Fetch start (UTC)
    pub timestamp: DateTime<Utc>,
    pub client_ip: String,
    pub method: String,
    pub path: String,
    /// Time spent fetching the object
    pub duration: Duration,
    /// e.g. `"1024 bytes"` or `"cached bytes"`
    pub size: String,
}

impl fmt::Display for AccessLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {} - {:?} - {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.client_ip,
            self.method,
            self.path,
            self.duration,
            self.size
        )
    }
}

/// Describe the response size from the outgoing headers
pub fn size_descriptor(headers: &HeaderMap) -> String {
    let length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_SIZE_LABEL);
    format!("{length} bytes")
}

/// Destination for access log entries
pub trait AccessLog: Send + Sync {
    fn record(&self, entry: AccessLogEntry);
}

/// Emits each entry as an `info` event on [`ACCESS_LOG_TARGET`]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAccessLog;

impl AccessLog for TracingAccessLog {
    fn record(&self, entry: AccessLogEntry) {
        tracing::info!(
            target: ACCESS_LOG_TARGET,
            client_ip = %entry.client_ip,
            method = %entry.method,
            path = %entry.path,
            duration_ms = duration_millis(entry.duration),
            "{}",
            entry
        );
    }
}

/// Milliseconds as `u64`, saturating
fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Keeps entries in memory, mostly useful in tests
#[derive(Debug, Default)]
pub struct MemoryAccessLog {
    entries: Mutex<Vec<AccessLogEntry>>,
}

impl MemoryAccessLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<AccessLogEntry> {
        self.entries.lock().clone()
    }
}

impl AccessLog for MemoryAccessLog {
    fn record(&self, entry: AccessLogEntry) {
        self.entries.lock().push(entry);
    }
}
