//! Stopwise Core — equivalent-exposure engine.
//!
//! Given a known exposure (shutter speed, aperture, ISO) and new values for
//! two of the three, finds the third on the discrete full, half or
//! third-stop scale a camera exposes. No I/O or framework dependencies.

pub mod calculator;
pub mod config;
pub mod error;
pub mod exposure;
pub mod presets;
pub mod scale;

// Re-exports for convenience.
pub use calculator::ExposureCalculator;
pub use config::CalculatorConfig;
pub use error::{Result, StopwiseError};
pub use exposure::{EquivalenceRequest, ExposureOutcome, ExposureSettings, RoundingMode};
pub use presets::{ExposurePreset, MemoryPresetStore, PresetStore};
pub use scale::{Increment, ParameterKind, StopScale, get_scale};
