use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber: pretty console output, an optional daily JSON file,
/// and an optional OpenTelemetry log bridge. Keep the returned guard alive for the
/// lifetime of the process or buffered file lines are lost.
pub fn init_logger(
    sdk_logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    is_dev: bool,
    enable_file: bool,
) -> Option<WorkerGuard> {
    let (file_layer, guard) = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("storefront_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let default_console = if is_dev { "debug" } else { "info" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_console));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let otel_layer = sdk_logger_provider.map(|provider| {
        let otel_filter =
            EnvFilter::new("info,hyper=off,opentelemetry=off,tonic=off,h2=off,reqwest=off");
        OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .init();

    guard
}
