use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::ClapConfig, result::MResult};

#[derive(Debug, Default, Args, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Do not log to stdout
    #[clap(long, env("MEDBASE_LOG_QUIET"), default_value = "false")]
    pub quiet: bool,
}

/// Initialize the telemetry system
///
/// # Arguments
///
/// * `clap_config` - The `ClapConfig` object containing the telemetry configuration
///
/// # Errors
///
/// Returns an error if there is an issue initializing the telemetry system.
pub fn initialize_telemetry(clap_config: &ClapConfig) -> MResult<()> {
    let config = &clap_config.telemetry;
    if !config.quiet {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_level(true)
            .with_target(true)
            .with_ansi(true)
            .compact()
            .init();
    }

    info!(
        "Telemetry initialized. Server starting with config {:#?}",
        clap_config
    );

    Ok(())
}
