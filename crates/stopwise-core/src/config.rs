//! Calculator configuration.

use serde::{Deserialize, Serialize};

use crate::exposure::RoundingMode;
use crate::scale::Increment;

/// Environment variable selecting the [`RoundingMode`].
pub const ROUNDING_ENV: &str = "STOPWISE_ROUNDING";
/// Environment variable selecting the default [`Increment`].
pub const INCREMENT_ENV: &str = "STOPWISE_INCREMENT";

/// Tunables for [`ExposureCalculator`](crate::ExposureCalculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// How fractional step deltas (from fractional EV compensation) snap.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Increment used by front ends when a request does not name one.
    #[serde(default = "CalculatorConfig::default_increment")]
    pub default_increment: Increment,
}

impl CalculatorConfig {
    fn default_increment() -> Increment {
        Increment::Third
    }

    /// Defaults overridden by `STOPWISE_ROUNDING` and `STOPWISE_INCREMENT`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(rounding) = env_override(ROUNDING_ENV) {
            config.rounding = rounding;
        }
        if let Some(increment) = env_override(INCREMENT_ENV) {
            config.default_increment = increment;
        }
        config
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfTowardZero,
            default_increment: Self::default_increment(),
        }
    }
}

fn env_override<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {key}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.rounding, RoundingMode::HalfTowardZero);
        assert_eq!(config.default_increment, Increment::Third);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let config: CalculatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());

        let config: CalculatorConfig =
            serde_json::from_str(r#"{ "rounding": "HalfEven", "default_increment": "Full" }"#)
                .unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.default_increment, Increment::Full);
    }
}
