//! Application configuration for the demo.

use std::path::PathBuf;

use stopwise_core::CalculatorConfig;

/// Environment variable naming the preset snapshot file.
const PRESETS_ENV: &str = "STOPWISE_PRESETS";
/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "stopwise_demo=info,stopwise_core=info";

/// Runtime configuration for the Stopwise front end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON file presets are loaded from at startup and written to on change.
    pub presets_path: Option<PathBuf>,
    /// Engine tunables.
    pub calculator: CalculatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            presets_path: std::env::var_os(PRESETS_ENV).map(PathBuf::from),
            calculator: CalculatorConfig::from_env(),
        }
    }
}
