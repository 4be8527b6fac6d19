use tracing_subscriber::EnvFilter;

/// Install the global subscriber.  `RUST_LOG` takes precedence over
/// `level`; a second call is a no-op.
///
/// Timestamps are left off, the platform adds its own to every line.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
