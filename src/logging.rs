//! Process-wide log setup.
//!
//! Call sites use the `log` macros; records are forwarded into a `tracing`
//! subscriber that writes to stderr and honours `RUST_LOG`.

use std::env;

use tracing::{Subscriber, subscriber::set_global_default};
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

const ENV_FILTER_DEFAULT: &str = "info";

fn create_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|err| {
        if let Some(rust_log) = env::var("RUST_LOG").ok().filter(|v| !v.is_empty()) {
            // Logging is not up yet.
            eprintln!("Failed to parse RUST_LOG environment variable '{rust_log}': {err}");
        }
        EnvFilter::new(ENV_FILTER_DEFAULT)
    })
}

fn create_tracing_subscriber() -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter())
        .with_writer(std::io::stderr)
        .finish()
}

pub fn init_tracing_and_logging() -> anyhow::Result<()> {
    // Capture and redirect all log messages as tracing events
    LogTracer::init()?;
    set_global_default(create_tracing_subscriber())?;
    Ok(())
}
