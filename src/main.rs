//! Hornet compiler CLI entry point

fn main() {
    // Initialize structured logging with env-based filter, defaulting to info.
    // Logs go to stderr; stdout carries generated Python.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    hornet::cli::run();
}
