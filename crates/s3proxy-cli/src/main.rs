//! s3proxy - serve S3 objects over HTTP

use clap::{Parser, ValueEnum};
use s3proxy_cli::{run_server, ConfigSource, ProxyConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "s3proxy")]
#[command(about = "HTTP gateway serving objects from an S3 bucket")]
#[command(version)]
struct Args {
    /// Bucket to read objects from (required)
    #[arg(short, long, env = "BUCKET")]
    bucket: Option<String>,

    /// AWS region of the bucket [default: us-east-1]
    #[arg(short, long, env = "REGION")]
    region: Option<String>,

    /// Fetch deadline as a raw nanosecond count; 0 or unparsable disables it [default: 10s]
    #[arg(short, long, env = "TIMEOUT", allow_hyphen_values = true)]
    timeout: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "PORT")]
    port: Option<String>,

    /// Host to bind to [default: 0.0.0.0]
    #[arg(short = 'H', long, env = "HOST")]
    host: Option<String>,

    /// S3-compatible endpoint URL (MinIO, LocalStack, ...)
    #[arg(long, env = "S3_ENDPOINT")]
    endpoint_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, env = "S3PROXY_DEBUG")]
    debug: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    log_format: LogFormat,
}

impl Args {
    fn config_source(&self) -> ConfigSource {
        ConfigSource {
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            timeout: self.timeout.clone(),
            port: self.port.clone(),
            host: self.host.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

fn init_tracing(debug: bool, format: LogFormat) {
    let log_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "s3proxy={0},s3proxy_cli={0},s3proxy_store={0},tower_http={0}",
            log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.debug, args.log_format);

    let config = ProxyConfig::resolve(args.config_source()).map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!("Bucket Name : {}", config.bucket);
    match config.timeout {
        Some(timeout) => tracing::info!("Timeout Configured : {:?}", timeout),
        None => tracing::info!("Timeout Configured : none"),
    }
    tracing::info!("AWS Region Name : {}", config.region);

    run_server(config).await.map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })
}
