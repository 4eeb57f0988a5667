use blink_telemetry::LogFormat;
use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "BLINK_GATEWAY_LISTEN_ADDR";
pub const APP_SECRET_ENV: &str = "BLINK_APP_SECRET";
pub const STORAGE_BACKEND_ENV: &str = "BLINK_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "BLINK_REDIS_URL";
pub const REDIS_KEY_PREFIX_ENV: &str = "BLINK_REDIS_KEY_PREFIX";
pub const DEFAULT_SCHEME_ENV: &str = "BLINK_DEFAULT_SCHEME";
pub const LOG_FORMAT_ENV: &str = "BLINK_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "BLINK_OTLP_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "blink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Shared secret expected as `Authorization: Bearer <secret>` on writes.
    #[arg(long, env = APP_SECRET_ENV, hide_env_values = true)]
    pub app_secret: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(
        long,
        env = REDIS_KEY_PREFIX_ENV,
        default_value = blink_storage::redis::DEFAULT_KEY_PREFIX
    )]
    pub redis_key_prefix: String,

    /// Scheme of generated short URLs when the request does not reveal one.
    #[arg(long, env = DEFAULT_SCHEME_ENV, default_value = blink_gateway::state::DEFAULT_SCHEME)]
    pub default_scheme: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    #[arg(long, env = OTLP_ENDPOINT_ENV)]
    pub otlp_endpoint: Option<String>,
}
