//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber with the given filter directive.
pub fn init(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}
