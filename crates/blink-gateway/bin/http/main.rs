mod cli;

use std::sync::Arc;

use crate::cli::{StorageBackendArg, CLI};
use blink_core::KvStore;
use blink_gateway::{App, AppState, AuthGuard};
use blink_generator::RandomGenerator;
use blink_shortener::ShortenerService;
use blink_storage::{InMemoryStore, RedisStore};
use blink_telemetry::TelemetrySettings;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;

    let telemetry = TelemetrySettings::builder()
        .service_name("blink-gateway")
        .format(config.log_format.into())
        .otlp_endpoint(config.otlp_endpoint.clone())
        .build();
    let _telemetry_guard = blink_telemetry::init(&telemetry)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        default_scheme = %config.default_scheme,
        "starting gateway server"
    );

    let auth_guard = AuthGuard::new(&config.app_secret);

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(&config, InMemoryStore::new(), auth_guard).await?;
        }
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .ok_or("redis url is required when storage backend is redis")?;
            let store = RedisStore::connect(redis_url, config.redis_key_prefix.as_str()).await?;
            info!(key_prefix = %store.key_prefix(), "connected to redis");
            run_server(&config, store, auth_guard).await?;
        }
    }

    info!("gateway server stopped");
    Ok(())
}

async fn run_server<S: KvStore>(
    config: &CLI,
    store: S,
    auth_guard: AuthGuard,
) -> std::io::Result<()> {
    let shortener = ShortenerService::new(store, RandomGenerator::default());
    let state = AppState::new(Arc::new(shortener), auth_guard)
        .with_default_scheme(&config.default_scheme);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
