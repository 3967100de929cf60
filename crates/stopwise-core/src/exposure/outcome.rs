//! Result of an equivalence calculation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::request::ExposureSettings;
use crate::scale::ParameterKind;

/// Every way a calculation can end. Constructed once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum ExposureOutcome {
    /// The solved value lies on the scale.
    Success { settings: ExposureSettings },

    /// A caller-supplied value is not on the scale at the requested increment.
    /// Re-requesting with `nearest` will succeed at this stage.
    ParameterLimit {
        parameter: ParameterKind,
        requested: String,
        nearest: String,
    },

    /// The solved parameter would need to admit less light than its darkest entry.
    Overexposed { stops: f64 },

    /// The solved parameter would need to admit more light than its brightest entry.
    Underexposed { stops: f64 },
}

impl ExposureOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn settings(&self) -> Option<&ExposureSettings> {
        match self {
            Self::Success { settings } => Some(settings),
            _ => None,
        }
    }
}

impl fmt::Display for ExposureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { settings } => write!(
                f,
                "{} at {}, ISO {}",
                settings.shutter_speed, settings.aperture, settings.iso
            ),
            Self::ParameterLimit {
                parameter,
                requested,
                nearest,
            } => write!(
                f,
                "{parameter} {requested} is not available; nearest is {nearest}"
            ),
            Self::Overexposed { stops } => write!(f, "overexposed by {stops:.2} stops"),
            Self::Underexposed { stops } => write!(f, "underexposed by {stops:.2} stops"),
        }
    }
}
