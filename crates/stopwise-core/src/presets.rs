//! Named exposure presets behind a key/value store.
//!
//! The core only needs get/put/remove/list semantics; where presets live is
//! up to the [`PresetStore`] implementation. [`MemoryPresetStore`] keeps them
//! in a map and can snapshot to and from JSON.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exposure::{ExposureSettings, ExposureTriple};
use crate::scale::Increment;

/// A saved exposure triangle with the increment its values belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposurePreset {
    pub name: String,
    pub increment: Increment,
    pub settings: ExposureSettings,
}

impl ExposurePreset {
    pub fn new(name: impl Into<String>, increment: Increment, settings: ExposureSettings) -> Self {
        Self {
            name: name.into(),
            increment,
            settings,
        }
    }

    /// Fails with `NotFound` for the first value missing from its scale.
    pub fn validate(&self) -> Result<()> {
        ExposureTriple::resolve(&self.settings, self.increment).map(|_| ())
    }
}

pub trait PresetStore: Send + Sync {
    fn get(&self, name: &str) -> Option<ExposurePreset>;

    /// Validate and insert, replacing any preset with the same name.
    fn put(&self, preset: ExposurePreset) -> Result<()>;

    fn remove(&self, name: &str) -> Option<ExposurePreset>;

    /// Preset names in sorted order.
    fn names(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct MemoryPresetStore {
    presets: RwLock<BTreeMap<String, ExposurePreset>>,
}

impl MemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot written by [`to_json`](Self::to_json).
    ///
    /// Every preset is validated; one bad entry rejects the whole snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let presets: Vec<ExposurePreset> = serde_json::from_str(json)?;
        let store = Self::new();
        for preset in presets {
            store.put(preset)?;
        }
        Ok(store)
    }

    /// All presets as a JSON array, sorted by name.
    pub fn to_json(&self) -> Result<String> {
        let presets = self.presets.read();
        let list: Vec<&ExposurePreset> = presets.values().collect();
        Ok(serde_json::to_string_pretty(&list)?)
    }

    pub fn len(&self) -> usize {
        self.presets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.read().is_empty()
    }
}

impl PresetStore for MemoryPresetStore {
    fn get(&self, name: &str) -> Option<ExposurePreset> {
        self.presets.read().get(name).cloned()
    }

    fn put(&self, preset: ExposurePreset) -> Result<()> {
        preset.validate()?;
        tracing::debug!(name = %preset.name, "storing preset");
        self.presets.write().insert(preset.name.clone(), preset);
        Ok(())
    }

    fn remove(&self, name: &str) -> Option<ExposurePreset> {
        self.presets.write().remove(name)
    }

    fn names(&self) -> Vec<String> {
        self.presets.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StopwiseError;
    use crate::scale::ParameterKind;

    fn landscape() -> ExposurePreset {
        ExposurePreset::new(
            "landscape",
            Increment::Third,
            ExposureSettings::new("1/125", "f/11", "100"),
        )
    }

    #[test]
    fn test_put_get_remove() {
        let store = MemoryPresetStore::new();
        store.put(landscape()).unwrap();
        assert_eq!(store.get("landscape"), Some(landscape()));
        assert_eq!(store.names(), vec!["landscape".to_string()]);

        assert_eq!(store.remove("landscape"), Some(landscape()));
        assert!(store.is_empty());
        assert_eq!(store.remove("landscape"), None);
    }

    #[test]
    fn test_put_rejects_value_off_scale() {
        let store = MemoryPresetStore::new();
        let preset = ExposurePreset::new(
            "night",
            Increment::Full,
            ExposureSettings::new("1/125", "f/1.8", "3200"),
        );
        let err = store.put(preset).unwrap_err();
        assert!(matches!(
            err,
            StopwiseError::NotFound { parameter: ParameterKind::Aperture, .. }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_replaces_same_name() {
        let store = MemoryPresetStore::new();
        store.put(landscape()).unwrap();
        let mut brighter = landscape();
        brighter.settings.iso = "200".into();
        store.put(brighter.clone()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("landscape"), Some(brighter));
    }

    #[test]
    fn test_json_snapshot() {
        let store = MemoryPresetStore::new();
        store.put(landscape()).unwrap();
        store
            .put(ExposurePreset::new(
                "astro",
                Increment::Full,
                ExposureSettings::new("15s", "f/2.8", "3200"),
            ))
            .unwrap();

        let restored = MemoryPresetStore::from_json(&store.to_json().unwrap()).unwrap();
        assert_eq!(restored.names(), vec!["astro".to_string(), "landscape".to_string()]);
        assert_eq!(restored.get("landscape"), Some(landscape()));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            MemoryPresetStore::from_json("{ not json"),
            Err(StopwiseError::PresetFormat(_))
        ));
    }
}
