//! Logging initialization

/// Initialize logging based on debug flag
///
/// Logs go to stderr so command output on stdout stays clean. Without the flag
/// only errors are shown; `RUST_LOG` overrides the level in both cases.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "error" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
