//! Named bundles of seed values for the scenario

mod builtin;
pub mod loader;

pub use builtin::{
    builtin_presets, casualty_xol, property_cat, quota_share_portfolio, DEFAULT_PRESET_ID,
};
pub use loader::{load_presets, load_presets_from_reader};

use serde::{Deserialize, Serialize};

use crate::error::{CompanionError, Result};
use crate::inputs::FieldKey;
use crate::scenario::Structure;

/// A named, immutable set of field values plus descriptive tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub values: Vec<(FieldKey, f64)>,
    /// Structure selected by the preset, if it picks one
    pub structure: Option<Structure>,
}

impl Preset {
    /// Seed value for a field, if the preset names it
    pub fn value(&self, field: FieldKey) -> Option<f64> {
        self.values.iter().find(|(f, _)| *f == field).map(|(_, v)| *v)
    }
}

/// Presets available to a session: built-ins followed by any loaded from file
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn builtin() -> Self {
        Self { presets: builtin_presets() }
    }

    /// Add presets, replacing any with the same id
    pub fn extend(&mut self, presets: impl IntoIterator<Item = Preset>) {
        for preset in presets {
            match self.presets.iter_mut().find(|p| p.id == preset.id) {
                Some(existing) => *existing = preset,
                None => self.presets.push(preset),
            }
        }
    }

    pub fn get(&self, id: &str) -> Result<&Preset> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CompanionError::UnknownPreset(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.presets.iter().any(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains(DEFAULT_PRESET_ID));
        assert!(catalog.get("bm_missing").is_err());
    }

    #[test]
    fn test_builtin_values_use_known_fields_once() {
        for preset in builtin_presets() {
            let mut seen = std::collections::HashSet::new();
            for (field, _) in &preset.values {
                assert!(seen.insert(*field), "{} repeats {}", preset.id, field);
            }
        }
    }

    #[test]
    fn test_extend_replaces_by_id() {
        let mut catalog = PresetCatalog::builtin();
        let mut custom = property_cat();
        custom.name = "Custom cat".to_string();
        catalog.extend([custom]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(DEFAULT_PRESET_ID).unwrap().name, "Custom cat");
    }

    #[test]
    fn test_quota_share_preset_selects_structure() {
        assert_eq!(quota_share_portfolio().structure, Some(Structure::QuotaShare));
        assert_eq!(quota_share_portfolio().value(FieldKey::XolLoss), None);
    }
}
