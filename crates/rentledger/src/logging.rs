use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr (stdout carries report output).
///
/// The level can be set via the `--log-level` flag or overridden entirely
/// with the `RUST_LOG` environment variable.
pub fn init_logging(level: &str) {
    let default_filter = format!("rentledger={level},rentledger_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();
}
