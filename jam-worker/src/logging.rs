use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEBUG_DIRECTIVES: &str = "jam_algorithms=debug,jam_challenges=debug,jam_worker=debug";

/// Builds the filter directive, raising the workspace crates to `debug` when asked.
pub fn log_directive(base: &str, debug: bool) -> String {
    match (debug, base.trim().is_empty()) {
        (false, _) => base.to_string(),
        (true, true) => DEBUG_DIRECTIVES.to_string(),
        (true, false) => format!("{},{}", base, DEBUG_DIRECTIVES),
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries results.
pub fn init_logging(base: &str, debug: bool) -> Result<()> {
    let filter = EnvFilter::try_new(log_directive(base, debug))
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", base, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
