//! IPC message contracts between the exposure engine and a UI process.
//!
//! Messages use the `#[serde(tag = "type", content = "data")]` layout and
//! travel as one JSON object per line.

use serde::{Deserialize, Serialize};

use stopwise_core::{ExposureOutcome, ExposurePreset, ExposureSettings, Increment, ParameterKind};

/// Messages from the UI to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToEngine {
    /// Request the display values of one stop table.
    GetScale {
        /// Which table to return.
        parameter: ParameterKind,
        /// Falls back to the configured default increment.
        #[serde(default)]
        increment: Option<Increment>,
    },

    /// Solve for one parameter of an equivalent exposure.
    Calculate {
        /// The parameter to compute.
        solve_for: ParameterKind,
        /// The known, correctly exposed settings.
        base: ExposureSettings,
        /// New settings; the `solve_for` slot is ignored.
        target: ExposureSettings,
        /// Falls back to the configured default increment.
        #[serde(default)]
        increment: Option<Increment>,
        /// Signed stops; positive asks the solved parameter for less light.
        #[serde(default)]
        ev_compensation: f64,
    },

    /// Store a preset, replacing any with the same name.
    SavePreset {
        /// The preset to store.
        preset: ExposurePreset,
    },

    /// Fetch a stored preset by name.
    LoadPreset {
        /// Preset name.
        name: String,
    },

    /// Remove a stored preset by name.
    DeletePreset {
        /// Preset name.
        name: String,
    },

    /// Request the names of all stored presets.
    ListPresets,
}

/// Messages from the engine to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineToUi {
    /// Display values of a stop table, in stop-index order.
    Scale {
        /// Table the values belong to.
        parameter: ParameterKind,
        /// Increment actually used.
        increment: Increment,
        /// Display values, brightest setting first (ISO lowest first).
        values: Vec<String>,
    },

    /// Result of a `Calculate` request.
    Outcome {
        /// Success, parameter limit, or over/under-exposure.
        outcome: ExposureOutcome,
    },

    /// Reply to `LoadPreset`.
    Preset {
        /// The stored preset.
        preset: ExposurePreset,
    },

    /// Reply to `ListPresets`.
    Presets {
        /// Preset names in sorted order.
        names: Vec<String>,
    },

    /// Acknowledges a request with no payload.
    Ok,

    /// The request could not be handled.
    Error {
        /// Error description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_defaults() {
        let msg: UiToEngine = serde_json::from_str(
            r#"{
                "type": "Calculate",
                "data": {
                    "solve_for": "ShutterSpeed",
                    "base": { "shutter_speed": "1/125", "aperture": "f/8", "iso": "100" },
                    "target": { "shutter_speed": "", "aperture": "f/11", "iso": "100" }
                }
            }"#,
        )
        .unwrap();
        match msg {
            UiToEngine::Calculate {
                solve_for,
                increment,
                ev_compensation,
                ..
            } => {
                assert_eq!(solve_for, ParameterKind::ShutterSpeed);
                assert_eq!(increment, None);
                assert_eq!(ev_compensation, 0.0);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_unit_variants_serialize_by_tag() {
        let json = serde_json::to_string(&UiToEngine::ListPresets).unwrap();
        assert_eq!(json, r#"{"type":"ListPresets"}"#);
        let json = serde_json::to_string(&EngineToUi::Ok).unwrap();
        assert_eq!(json, r#"{"type":"Ok"}"#);
    }
}
