//! Deadline-bounded object reads

use crate::{ObjectStore, Result, StoreError};
use bytes::Bytes;
use std::time::Duration;
use tracing::debug;

/// Fetch an object, giving up once `deadline` elapses.
///
/// With `None` the read is bounded only by whatever limits the backend
/// imposes. When the deadline fires the in-flight read is dropped, which
/// releases its connection and any buffered body.
pub async fn fetch_object<S>(
    store: &S,
    bucket: &str,
    key: &str,
    deadline: Option<Duration>,
) -> Result<Bytes>
where
    S: ObjectStore + ?Sized,
{
    let read = store.get_object(bucket, key);

    match deadline {
        Some(limit) => match tokio::time::timeout(limit, read).await {
            Ok(result) => result,
            Err(_) => {
                debug!(bucket = %bucket, key = %key, ?limit, "fetch deadline elapsed");
                Err(StoreError::Timeout(limit))
            }
        },
        None => read.await,
    }
}
