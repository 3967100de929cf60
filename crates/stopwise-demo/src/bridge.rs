//! Line-oriented IPC bridge between the exposure engine and a UI process.
//!
//! Reads one [`UiToEngine`] JSON object per input line and writes one
//! [`EngineToUi`] JSON object per output line. Malformed lines produce an
//! `Error` reply and the loop carries on.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use stopwise_core::{
    EquivalenceRequest, ExposureCalculator, ExposurePreset, MemoryPresetStore, PresetStore,
    StopwiseError, get_scale,
};

use crate::config::AppConfig;
use crate::ipc::{EngineToUi, UiToEngine};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] StopwiseError),
}

/// Owns the calculator and preset store for the lifetime of the process.
pub struct EngineBridge {
    calculator: ExposureCalculator,
    presets: MemoryPresetStore,
    presets_path: Option<PathBuf>,
}

impl EngineBridge {
    /// Build the bridge, loading presets from `config.presets_path` when the
    /// file exists.
    pub fn new(config: &AppConfig) -> Result<Self, BridgeError> {
        let presets = match &config.presets_path {
            Some(path) if path.exists() => load_presets(path)?,
            _ => MemoryPresetStore::new(),
        };
        Ok(Self {
            calculator: ExposureCalculator::new(config.calculator),
            presets,
            presets_path: config.presets_path.clone(),
        })
    }

    /// Serve requests until `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<(), BridgeError> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let reply = self.handle_line(&line);
            serde_json::to_writer(&mut output, &reply)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Parse and dispatch one input line.
    pub fn handle_line(&self, line: &str) -> EngineToUi {
        match serde_json::from_str::<UiToEngine>(line) {
            Ok(msg) => self.dispatch(msg),
            Err(e) => {
                tracing::warn!("Failed to parse UI message: {e}");
                EngineToUi::Error {
                    message: format!("malformed message: {e}"),
                }
            }
        }
    }

    pub fn dispatch(&self, msg: UiToEngine) -> EngineToUi {
        let default_increment = self.calculator.config().default_increment;
        match msg {
            UiToEngine::GetScale {
                parameter,
                increment,
            } => {
                let increment = increment.unwrap_or(default_increment);
                EngineToUi::Scale {
                    parameter,
                    increment,
                    values: get_scale(parameter, increment)
                        .values()
                        .iter()
                        .map(|v| v.to_string())
                        .collect(),
                }
            }
            UiToEngine::Calculate {
                solve_for,
                base,
                target,
                increment,
                ev_compensation,
            } => {
                let request = EquivalenceRequest::from_settings(
                    solve_for,
                    base,
                    &target,
                    increment.unwrap_or(default_increment),
                    ev_compensation,
                );
                match self.calculator.calculate(&request) {
                    Ok(outcome) => {
                        tracing::info!(%solve_for, "{outcome}");
                        EngineToUi::Outcome { outcome }
                    }
                    Err(e) => error_reply(e),
                }
            }
            UiToEngine::SavePreset { preset } => {
                let name = preset.name.clone();
                let previous = self.presets.get(&name);
                if let Err(e) = self.presets.put(preset) {
                    return error_reply(e);
                }
                self.persist_reply(&name, || match previous {
                    Some(previous) => self.restore(previous),
                    None => {
                        self.presets.remove(&name);
                    }
                })
            }
            UiToEngine::LoadPreset { name } => match self.presets.get(&name) {
                Some(preset) => EngineToUi::Preset { preset },
                None => error_reply(StopwiseError::PresetNotFound(name)),
            },
            UiToEngine::DeletePreset { name } => match self.presets.remove(&name) {
                Some(removed) => self.persist_reply(&name, || self.restore(removed)),
                None => error_reply(StopwiseError::PresetNotFound(name)),
            },
            UiToEngine::ListPresets => EngineToUi::Presets {
                names: self.presets.names(),
            },
        }
    }

    /// Write the preset snapshot, if a path is configured.
    ///
    /// The snapshot goes to a temporary file in the same directory and is
    /// renamed over `path`, so readers never see a half-written file.
    fn persist(&self) -> Result<(), BridgeError> {
        let Some(path) = &self.presets_path else {
            return Ok(());
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(self.presets.to_json()?.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        tracing::debug!("Presets written to {}", path.display());
        Ok(())
    }

    /// Persist after a store change; on failure run `undo` so memory matches disk.
    fn persist_reply(&self, name: &str, undo: impl FnOnce()) -> EngineToUi {
        match self.persist() {
            Ok(()) => EngineToUi::Ok,
            Err(e) => {
                tracing::error!("Failed to persist presets after changing {name:?}: {e}");
                undo();
                error_reply(e)
            }
        }
    }

    /// Put back a preset that was already in the store.
    fn restore(&self, preset: ExposurePreset) {
        if let Err(e) = self.presets.put(preset) {
            tracing::error!("Failed to restore preset: {e}");
        }
    }
}

fn load_presets(path: &Path) -> Result<MemoryPresetStore, BridgeError> {
    let json = std::fs::read_to_string(path)?;
    let store = MemoryPresetStore::from_json(&json)?;
    tracing::info!("Loaded {} presets from {}", store.len(), path.display());
    Ok(store)
}

fn error_reply(e: impl Into<BridgeError>) -> EngineToUi {
    EngineToUi::Error {
        message: e.into().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stopwise_core::{
        CalculatorConfig, ExposureOutcome, ExposureSettings, Increment, ParameterKind,
    };

    fn bridge() -> EngineBridge {
        EngineBridge::new(&AppConfig {
            presets_path: None,
            calculator: CalculatorConfig::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_get_scale_uses_default_increment() {
        let reply = bridge().handle_line(r#"{"type":"GetScale","data":{"parameter":"Iso"}}"#);
        match reply {
            EngineToUi::Scale {
                increment, values, ..
            } => {
                assert_eq!(increment, Increment::Third);
                assert_eq!(values.len(), get_scale(ParameterKind::Iso, Increment::Third).len());
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_calculate_round_trip() {
        let reply = bridge().dispatch(UiToEngine::Calculate {
            solve_for: ParameterKind::ShutterSpeed,
            base: ExposureSettings::new("1/125", "f/8", "100"),
            target: ExposureSettings::new("", "f/11", "100"),
            increment: Some(Increment::Full),
            ev_compensation: 0.0,
        });
        assert_eq!(
            reply,
            EngineToUi::Outcome {
                outcome: ExposureOutcome::Success {
                    settings: ExposureSettings::new("1/60", "f/11", "100"),
                }
            }
        );
    }

    #[test]
    fn test_malformed_line_is_an_error_reply() {
        assert!(matches!(
            bridge().handle_line("{\"type\":\"Explode\"}"),
            EngineToUi::Error { .. }
        ));
    }

    #[test]
    fn test_preset_lifecycle() {
        let bridge = bridge();
        let preset = ExposurePreset::new(
            "portrait",
            Increment::Third,
            ExposureSettings::new("1/200", "f/2.8", "200"),
        );
        assert_eq!(
            bridge.dispatch(UiToEngine::SavePreset {
                preset: preset.clone()
            }),
            EngineToUi::Ok
        );
        assert_eq!(
            bridge.dispatch(UiToEngine::ListPresets),
            EngineToUi::Presets {
                names: vec!["portrait".into()]
            }
        );
        assert_eq!(
            bridge.dispatch(UiToEngine::LoadPreset {
                name: "portrait".into()
            }),
            EngineToUi::Preset { preset }
        );
        assert_eq!(
            bridge.dispatch(UiToEngine::DeletePreset {
                name: "portrait".into()
            }),
            EngineToUi::Ok
        );
        assert!(matches!(
            bridge.dispatch(UiToEngine::LoadPreset {
                name: "portrait".into()
            }),
            EngineToUi::Error { .. }
        ));
    }

    #[test]
    fn test_presets_persist_across_bridges() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            presets_path: Some(dir.path().join("presets.json")),
            calculator: CalculatorConfig::default(),
        };

        let first = EngineBridge::new(&config).unwrap();
        let preset = ExposurePreset::new(
            "astro",
            Increment::Full,
            ExposureSettings::new("15s", "f/2.8", "3200"),
        );
        assert_eq!(
            first.dispatch(UiToEngine::SavePreset {
                preset: preset.clone()
            }),
            EngineToUi::Ok
        );

        let second = EngineBridge::new(&config).unwrap();
        assert_eq!(
            second.dispatch(UiToEngine::LoadPreset {
                name: "astro".into()
            }),
            EngineToUi::Preset { preset }
        );
    }

    #[test]
    fn test_snapshot_is_replaced_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");
        let bridge = EngineBridge::new(&AppConfig {
            presets_path: Some(path.clone()),
            calculator: CalculatorConfig::default(),
        })
        .unwrap();
        for name in ["a", "b"] {
            let preset = ExposurePreset::new(
                name,
                Increment::Full,
                ExposureSettings::new("1/125", "f/8", "100"),
            );
            assert_eq!(bridge.dispatch(UiToEngine::SavePreset { preset }), EngineToUi::Ok);
        }

        let restored = MemoryPresetStore::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.names(), vec!["a".to_string(), "b".to_string()]);
        // Only the snapshot itself is left behind; no temporary files.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_save_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = EngineBridge::new(&AppConfig {
            presets_path: Some(dir.path().join("missing_dir").join("presets.json")),
            calculator: CalculatorConfig::default(),
        })
        .unwrap();
        let preset = ExposurePreset::new(
            "p",
            Increment::Full,
            ExposureSettings::new("1/125", "f/8", "100"),
        );

        assert!(matches!(
            bridge.dispatch(UiToEngine::SavePreset { preset }),
            EngineToUi::Error { .. }
        ));
        assert_eq!(
            bridge.dispatch(UiToEngine::ListPresets),
            EngineToUi::Presets { names: vec![] }
        );
    }

    #[test]
    fn test_failed_overwrite_keeps_previous_preset() {
        let dir = tempfile::tempdir().unwrap();
        let mut bridge = EngineBridge::new(&AppConfig {
            presets_path: Some(dir.path().join("presets.json")),
            calculator: CalculatorConfig::default(),
        })
        .unwrap();
        let original = ExposurePreset::new(
            "p",
            Increment::Full,
            ExposureSettings::new("1/125", "f/8", "100"),
        );
        assert_eq!(
            bridge.dispatch(UiToEngine::SavePreset {
                preset: original.clone()
            }),
            EngineToUi::Ok
        );

        bridge.presets_path = Some(dir.path().join("missing_dir").join("presets.json"));
        let mut changed = original.clone();
        changed.settings.iso = "400".into();
        assert!(matches!(
            bridge.dispatch(UiToEngine::SavePreset { preset: changed }),
            EngineToUi::Error { .. }
        ));
        assert_eq!(
            bridge.dispatch(UiToEngine::LoadPreset { name: "p".into() }),
            EngineToUi::Preset {
                preset: original.clone()
            }
        );

        assert!(matches!(
            bridge.dispatch(UiToEngine::DeletePreset { name: "p".into() }),
            EngineToUi::Error { .. }
        ));
        assert_eq!(
            bridge.dispatch(UiToEngine::LoadPreset { name: "p".into() }),
            EngineToUi::Preset { preset: original }
        );
    }

    #[test]
    fn test_run_writes_one_reply_per_line() {
        let input = concat!(
            r#"{"type":"ListPresets"}"#,
            "\n\n",
            "garbage\n",
            r#"{"type":"GetScale","data":{"parameter":"Aperture","increment":"Full"}}"#,
            "\n",
        );
        let mut output = Vec::new();
        bridge().run(input.as_bytes(), &mut output).unwrap();

        let replies: Vec<EngineToUi> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0], EngineToUi::Presets { names: vec![] });
        assert!(matches!(replies[1], EngineToUi::Error { .. }));
        assert!(matches!(
            &replies[2],
            EngineToUi::Scale { values, .. } if values[0] == "f/1.4"
        ));
    }
}
