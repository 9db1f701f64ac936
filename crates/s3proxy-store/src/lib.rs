//! # s3proxy store
//!
//! Object storage layer for the s3proxy gateway.
//!
//! This crate provides:
//! - **ObjectStore trait**: whole-object reads against a bucket
//! - **S3 backend**: Amazon S3 or any S3-compatible endpoint via `aws-sdk-s3`
//! - **Memory backend**: in-process objects for tests and local runs
//! - **Bounded fetch**: [`fetch_object`] aborts a read once its deadline elapses
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP handler               │
//! ├─────────────────────────────────────────┤
//! │     fetch_object (deadline + classify)  │
//! ├─────────────────────────────────────────┤
//! │            ObjectStore Trait            │
//! ├────────────────────┬────────────────────┤
//! │   S3ObjectStore    │ MemoryObjectStore  │
//! └────────────────────┴────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use s3proxy_store::{fetch_object, S3Config, S3ObjectStore};
//!
//! let store = S3ObjectStore::new(S3Config::new("us-east-1"));
//! let data = fetch_object(&store, "my-bucket", "some/key", Some(timeout)).await?;
//! ```

pub mod error;
pub mod fetch;
pub mod memory;
pub mod s3;

pub use error::{FailureKind, Result, StoreError};
pub use fetch::fetch_object;
pub use memory::MemoryObjectStore;
pub use s3::{S3Config, S3ObjectStore};

use async_trait::async_trait;
use bytes::Bytes;

/// Trait for object storage backends
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Make sure a backend client is ready to serve reads
    async fn connect(&self) -> Result<()>;

    /// Read the entire content of an object
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes>;
}
