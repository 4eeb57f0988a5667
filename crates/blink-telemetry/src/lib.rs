//! Logging and tracing setup shared by Blink binaries.
//!
//! [`init`] installs a global `tracing` subscriber made of:
//!
//! - an [`EnvFilter`] read from `RUST_LOG`, falling back to the configured
//!   default directive;
//! - a human-readable or JSON formatting layer;
//! - an optional OpenTelemetry layer exporting spans over OTLP/gRPC.
//!
//! Records emitted through the `log` facade are forwarded to `tracing`.

pub mod error;

pub use error::TelemetryError;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use opentelemetry_sdk::Resource;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};
use typed_builder::TypedBuilder;

pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Output format of the formatting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct TelemetrySettings {
    /// Reported as `service.name` on exported spans.
    #[builder(setter(into))]
    service_name: String,
    #[builder(default)]
    format: LogFormat,
    /// Directive used when `RUST_LOG` is unset or invalid.
    #[builder(default = "info".to_string(), setter(into))]
    default_directive: String,
    /// OTLP/gRPC collector endpoint, e.g. `http://localhost:4317`.
    #[builder(default)]
    otlp_endpoint: Option<String>,
}

impl TelemetrySettings {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn otlp_endpoint(&self) -> Option<&str> {
        self.otlp_endpoint.as_deref()
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.default_directive))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Keeps the span exporter alive; flushes pending spans on drop.
#[must_use = "dropping the guard shuts down span export"]
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take() {
            if let Err(err) = provider.shutdown() {
                eprintln!("failed to shut down tracer provider: {err}");
            }
        }
    }
}

fn otlp_tracer(endpoint: &str, service_name: &str) -> Result<(SdkTracerProvider, SdkTracer)> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_string())
                .build(),
        )
        .build();
    let tracer = provider.tracer(service_name.to_string());

    Ok((provider, tracer))
}

/// Installs the global subscriber described by `settings`.
///
/// Must be called once, from inside a Tokio runtime when OTLP export is
/// enabled.
pub fn init(settings: &TelemetrySettings) -> Result<TelemetryGuard> {
    tracing_log::LogTracer::init().map_err(|e| TelemetryError::LogBridge(e.to_string()))?;

    let (tracer_provider, otel_layer) = match settings.otlp_endpoint() {
        Some(endpoint) => {
            let (provider, tracer) = otlp_tracer(endpoint, settings.service_name())?;
            opentelemetry::global::set_tracer_provider(provider.clone());
            (
                Some(provider),
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
            )
        }
        None => (None, None),
    };

    let fmt_layer = match settings.format() {
        LogFormat::Json => fmt::layer().json().with_current_span(true).boxed(),
        LogFormat::Pretty => fmt::layer().with_target(true).boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(settings.env_filter())
        .with(fmt_layer)
        .with(otel_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(TelemetryGuard { tracer_provider })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = TelemetrySettings::builder().service_name("blink").build();

        assert_eq!(settings.service_name(), "blink");
        assert_eq!(settings.format(), LogFormat::Pretty);
        assert_eq!(settings.default_directive, "info");
        assert!(settings.otlp_endpoint().is_none());
    }

    #[test]
    fn custom_settings() {
        let settings = TelemetrySettings::builder()
            .service_name("blink-gateway")
            .format(LogFormat::Json)
            .default_directive("blink_gateway=debug")
            .otlp_endpoint(Some("http://localhost:4317".to_string()))
            .build();

        assert_eq!(settings.format(), LogFormat::Json);
        assert_eq!(settings.default_directive, "blink_gateway=debug");
        assert_eq!(settings.otlp_endpoint(), Some("http://localhost:4317"));
    }
}
