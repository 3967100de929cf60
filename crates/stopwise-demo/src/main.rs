//! Stopwise Demo — exposure calculator served over stdin/stdout.
//!
//! A UI process writes one JSON request per line and reads one JSON reply
//! per line. Logs go to stderr.

mod bridge;
mod config;
mod ipc;

use tracing_subscriber::EnvFilter;

use crate::bridge::{BridgeError, EngineBridge};
use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

fn main() -> Result<(), BridgeError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::default();
    tracing::info!(
        rounding = %config.calculator.rounding,
        increment = %config.calculator.default_increment,
        "Starting exposure engine"
    );

    let bridge = EngineBridge::new(&config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    bridge.run(stdin.lock(), stdout.lock())
}
