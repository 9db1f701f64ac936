//! Amazon S3 (and S3-compatible) object store

use crate::{ObjectStore, Result, StoreError};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

/// S3 connection settings
#[derive(Clone, Debug)]
pub struct S3Config {
    /// Region the client is scoped to
    pub region: String,
    /// Custom endpoint (MinIO, LocalStack, ...); implies path-style addressing
    pub endpoint_url: Option<String>,
}

impl S3Config {
    /// Settings for the public AWS endpoint of `region`
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
        }
    }

    /// Point the client at a custom endpoint
    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}

/// Object store backed by the AWS S3 SDK.
///
/// The SDK client is built on first use and then shared by every request,
/// so connections are pooled by the SDK's HTTP client.
pub struct S3ObjectStore {
    config: S3Config,
    client: OnceCell<Client>,
}

impl S3ObjectStore {
    /// Create a store that builds its client lazily from `config`
    pub fn new(config: S3Config) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: Client) -> Self {
        let region = client
            .config()
            .region()
            .map(|r| r.to_string())
            .unwrap_or_default();

        Self {
            config: S3Config::new(region),
            client: OnceCell::new_with(Some(client)),
        }
    }

    async fn client(&self) -> Result<&Client> {
        self.client
            .get_or_try_init(|| build_client(&self.config))
            .await
    }
}

async fn build_client(config: &S3Config) -> Result<Client> {
    if config.region.trim().is_empty() {
        return Err(StoreError::Session("no region configured".to_string()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(StoreError::Session(format!(
                "invalid endpoint url: {endpoint}"
            )));
        }
    }

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.endpoint_url {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    info!(region = %config.region, endpoint = ?config.endpoint_url, "S3 client initialized");

    Ok(Client::from_conf(builder.build()))
}

/// Map an SDK failure onto a [`StoreError`], logging service errors.
fn classify<R>(err: SdkError<GetObjectError, R>) -> StoreError
where
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            let code = service_err.code().unwrap_or("Unknown").to_string();
            let message = service_err.message().unwrap_or_default().to_string();
            error!(code = %code, message = %message, "Error from storage backend");
            StoreError::Backend { code, message }
        }
        other => StoreError::Dispatch(DisplayErrorContext(&other).to_string()),
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn connect(&self) -> Result<()> {
        self.client().await.map(|_| ())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        let client = self.client().await?;

        debug!(bucket = %bucket, key = %key, "GetObject");
        let output = client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(classify)?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        Ok(body.into_bytes())
    }
}
