use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Initialize structured logging.
///
/// Configures:
/// - `EnvFilter` from `RUST_LOG`, falling back to the configured filter.
/// - A compact or JSON `fmt` layer writing to stderr, so stdout stays
///   reserved for command output.
pub fn init(config: &LogConfig) {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let registry = tracing_subscriber::registry().with(filter_layer);

    if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
