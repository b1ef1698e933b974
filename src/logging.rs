//! Tracing subscriber setup for the command-line binary.
//!
//! Logs go to stderr so stdout stays reserved for results. `RUST_LOG`
//! overrides the level chosen from the verbosity flag.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a verbosity count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "sql_query_helper=warn",
        1 => "sql_query_helper=debug",
        _ => "sql_query_helper=trace"
    }
}

/// Initialize the tracing subscriber for logging
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
        )
        .try_init();
}
