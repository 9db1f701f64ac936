//! # s3proxy
//!
//! A small HTTP gateway that serves objects from a single S3 bucket.
//!
//! This crate provides:
//! - **`GET /getObject?key=...`**: returns the object's bytes
//! - **Deadlines**: a per-request fetch timeout answered with `408`
//! - **Access log**: one line per request, with the client IP resolved
//!   through `X-Forwarded-For` / `X-Real-Ip`
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    HTTP Clients                     │
//! └─────────────────────────┬───────────────────────────┘
//!                           │
//! ┌─────────────────────────▼───────────────────────────┐
//! │                       s3proxy                       │
//! ├─────────────────────────────────────────────────────┤
//! │   Trace Layer │ Access Log Middleware │ Router      │
//! ├─────────────────────────────────────────────────────┤
//! │                 get_object handler                  │
//! ├─────────────────────────────────────────────────────┤
//! │                    s3proxy-store                    │
//! │          (fetch_object, S3 / memory backends)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Status mapping: success is `200` with the raw object bytes, a fetch
//! deadline is `408`, and every other storage failure is `502`. Error
//! responses never carry a body.

pub mod access_log;
pub mod client_ip;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, ConfigSource, ProxyConfig};
pub use error::ApiError;
pub use server::{run_server, run_server_with_shutdown, serve};
pub use state::AppState;
