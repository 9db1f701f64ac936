//! Proxy configuration

use std::time::Duration;
use thiserror::Error;

/// Default backend region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default listen port
pub const DEFAULT_PORT: &str = "8080";

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Fetch deadline used when `TIMEOUT` is not set
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration errors, all fatal at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No bucket name provided")]
    MissingBucket,
}

/// Raw, unvalidated settings as read from the command line and environment
#[derive(Clone, Debug, Default)]
pub struct ConfigSource {
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub timeout: Option<String>,
    pub port: Option<String>,
    pub host: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Resolved proxy configuration, immutable after startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Bucket every request reads from
    pub bucket: String,
    /// Backend region
    pub region: String,
    /// Per-request fetch deadline; `None` disables it
    pub timeout: Option<Duration>,
    /// Port to listen on
    pub port: String,
    /// Host to bind to
    pub host: String,
    /// Custom S3-compatible endpoint
    pub endpoint_url: Option<String>,
}

impl ProxyConfig {
    /// Apply defaults to `source`. Fails only when no bucket is given.
    pub fn resolve(source: ConfigSource) -> Result<Self, ConfigError> {
        let bucket = non_empty(source.bucket).ok_or(ConfigError::MissingBucket)?;

        Ok(Self {
            bucket,
            region: non_empty(source.region).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            timeout: match non_empty(source.timeout) {
                Some(raw) => parse_timeout(&raw),
                None => Some(DEFAULT_TIMEOUT),
            },
            port: non_empty(source.port).unwrap_or_else(|| DEFAULT_PORT.to_string()),
            host: non_empty(source.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            endpoint_url: non_empty(source.endpoint_url),
        })
    }

    /// Get the bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Interpret a raw `TIMEOUT` value.
///
/// The integer counts nanoseconds, so small values give a near-instant
/// deadline. Anything that does not parse counts as `0`, and zero or a
/// negative count disables the deadline entirely.
pub fn parse_timeout(raw: &str) -> Option<Duration> {
    let nanos = raw.parse::<i64>().unwrap_or(0);
    u64::try_from(nanos)
        .ok()
        .filter(|n| *n > 0)
        .map(Duration::from_nanos)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
