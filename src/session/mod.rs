//! Session state: scenario plus page, preset and currency selection
//!
//! The whole session is saved as one JSON blob under [`STORAGE_KEY`] and
//! reloaded verbatim. A missing or corrupt blob falls back to the initial
//! session: property cat preset seeded, XoL, no stress, USD.

mod store;
mod tab;

pub use store::{LocalStore, DEFAULT_STATE_PATH, STORAGE_KEY};
pub use tab::Tab;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::inputs::{FieldKey, RawValue, STRUCTURE_KEY};
use crate::presets::{self, Preset, PresetCatalog};
use crate::scenario::{Scenario, ScenarioUpdate, Structure};
use crate::stress::StressMode;

/// Currency label used when nothing is stored
pub const DEFAULT_CURRENCY: &str = "USD";

/// Everything the companion remembers between runs
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub scenario: Scenario,
    pub active_tab: Tab,
    /// Id of the last preset applied
    pub preset: String,
    /// Display label only; no conversion is performed
    pub currency: String,
    pub saved_at: Option<DateTime<Utc>>,
}

/// Serialized layout of the session blob
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default)]
    active_tab: String,
    #[serde(default)]
    preset: String,
    #[serde(default)]
    stress: String,
    #[serde(default)]
    ccy: String,
    /// `null` entries read as the field default
    #[serde(default)]
    inputs: BTreeMap<String, Option<RawValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Fresh session with the default preset seeded
    pub fn initial() -> Self {
        let preset = presets::property_cat();
        Self {
            preset: preset.id.clone(),
            scenario: Scenario::new().apply(ScenarioUpdate::ApplyPreset(preset)),
            active_tab: Tab::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            saved_at: None,
        }
    }

    /// Route a change through the scenario reducer
    pub fn apply(mut self, update: ScenarioUpdate) -> Self {
        self.scenario = self.scenario.apply(update);
        self
    }

    /// Apply a preset and remember it as the selected one
    pub fn select_preset(mut self, preset: &Preset) -> Self {
        self.preset = preset.id.clone();
        self.apply(ScenarioUpdate::ApplyPreset(preset.clone()))
    }

    /// Point the preset selection at the default when `catalog` no longer has it
    ///
    /// Only the selection changes; stored inputs are kept.
    pub fn with_known_preset(mut self, catalog: &PresetCatalog) -> Self {
        if !catalog.contains(&self.preset) {
            log::warn!(
                "Stored preset {:?} is not available, selecting {}",
                self.preset,
                presets::DEFAULT_PRESET_ID
            );
            self.preset = presets::DEFAULT_PRESET_ID.to_string();
        }
        self
    }

    /// Load from the store, falling back to [`Session::initial`]
    pub fn load(store: &LocalStore) -> Self {
        match store.get(STORAGE_KEY) {
            Some(blob) => Self::from_blob(blob).unwrap_or_else(|e| {
                log::warn!("Corrupt session blob, starting fresh: {}", e);
                Self::initial()
            }),
            None => {
                log::info!("No saved session in {}, starting fresh", store.path().display());
                Self::initial()
            }
        }
    }

    /// Stamp, serialize into the store, and flush it to disk
    pub fn save(&mut self, store: &mut LocalStore) -> Result<()> {
        self.saved_at = Some(Utc::now());
        store.set(STORAGE_KEY, self.to_blob()?);
        store.flush()?;
        log::debug!("Session saved to {}", store.path().display());
        Ok(())
    }

    /// Parse a stored blob
    pub fn from_blob(blob: &str) -> Result<Self> {
        let state: PersistedState = serde_json::from_str(blob)?;

        let mut inputs = BTreeMap::new();
        let mut structure = Structure::default();
        for (key, value) in state.inputs {
            let Some(value) = value else {
                continue;
            };
            if key == STRUCTURE_KEY {
                structure = Structure::from_persisted(&value.to_string());
                continue;
            }
            match FieldKey::parse(&key) {
                Ok(field) => {
                    inputs.insert(field, value);
                }
                Err(_) => log::warn!("Dropping unknown stored input {:?}", key),
            }
        }

        let active_tab = if state.active_tab.is_empty() {
            Tab::default()
        } else {
            state.active_tab.parse().unwrap_or_else(|_| {
                log::warn!("Unknown stored tab {:?}, showing decision tool", state.active_tab);
                Tab::default()
            })
        };
        let stress = if state.stress.is_empty() {
            StressMode::Normal
        } else {
            StressMode::parse_lenient(&state.stress)
        };

        Ok(Self {
            scenario: Scenario::from_parts(inputs, structure, stress),
            active_tab,
            preset: if state.preset.is_empty() {
                presets::DEFAULT_PRESET_ID.to_string()
            } else {
                state.preset
            },
            currency: if state.ccy.is_empty() { DEFAULT_CURRENCY.to_string() } else { state.ccy },
            saved_at: state.saved_at,
        })
    }

    /// Serialize to the stored blob layout
    pub fn to_blob(&self) -> Result<String> {
        let mut inputs: BTreeMap<String, Option<RawValue>> = self
            .scenario
            .inputs()
            .iter()
            .map(|(field, value)| (field.key().to_string(), Some(value.clone())))
            .collect();
        inputs.insert(
            STRUCTURE_KEY.to_string(),
            Some(RawValue::Text(self.scenario.structure().as_str().to_string())),
        );

        let state = PersistedState {
            active_tab: self.active_tab.id().to_string(),
            preset: self.preset.clone(),
            stress: self.scenario.stress().as_str().to_string(),
            ccy: self.currency.clone(),
            inputs,
            saved_at: self.saved_at,
        };
        Ok(serde_json::to_string(&state)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_session() {
        let session = Session::initial();
        assert_eq!(session.active_tab, Tab::Decision);
        assert_eq!(session.preset, presets::DEFAULT_PRESET_ID);
        assert_eq!(session.currency, "USD");
        assert_eq!(session.scenario.structure(), Structure::Xol);
        assert_eq!(session.scenario.stress(), StressMode::Normal);
        assert_eq!(session.scenario.get(FieldKey::XolLoss), 25_000_000.0);
    }

    #[test]
    fn test_blob_roundtrip_is_verbatim() {
        let session = Session::initial()
            .apply(ScenarioUpdate::SetField(FieldKey::XolLoss, "30,000,000".into()))
            .apply(ScenarioUpdate::SetStress(StressMode::BadDevelopment))
            .apply(ScenarioUpdate::SetStructure(Structure::QuotaShare));

        let restored = Session::from_blob(&session.to_blob().unwrap()).unwrap();
        assert_eq!(restored, session);
        assert_eq!(
            restored.scenario.raw(FieldKey::XolLoss),
            Some(&RawValue::Text("30,000,000".to_string()))
        );
    }

    #[test]
    fn test_reads_camel_case_blob_layout() {
        let blob = r#"{
            "activeTab": "cr",
            "preset": "bm_casualty_xol",
            "stress": "cat",
            "ccy": "BMD",
            "inputs": {
                "cr.losses": 7200000,
                "cr.earnedPrem": "9,000,000",
                "uw.useStructure": "qs",
                "legacy.field": 1
            }
        }"#;
        let session = Session::from_blob(blob).unwrap();
        assert_eq!(session.active_tab, Tab::CombinedRatio);
        assert_eq!(session.currency, "BMD");
        assert_eq!(session.scenario.stress(), StressMode::CatYear);
        assert_eq!(session.scenario.structure(), Structure::QuotaShare);
        assert_eq!(session.scenario.get(FieldKey::CrEarnedPrem), 9_000_000.0);
        assert_eq!(session.scenario.inputs().len(), 2);
    }

    #[test]
    fn test_absent_structure_is_xol() {
        let blob = r#"{"activeTab":"uw","preset":"x","stress":"normal","ccy":"USD","inputs":{}}"#;
        assert_eq!(Session::from_blob(blob).unwrap().scenario.structure(), Structure::Xol);
    }

    #[test]
    fn test_missing_keys_keep_stored_inputs() {
        let blob =
            r#"{"activeTab":"cr","preset":"bm_property_cat","ccy":"BMD","inputs":{"cr.losses":1}}"#;
        let mut store = LocalStore::in_memory("unused.json");
        store.set(STORAGE_KEY, blob.to_string());

        let session = Session::load(&store);
        assert_eq!(session.scenario.stress(), StressMode::Normal);
        assert_eq!(session.scenario.get(FieldKey::CrLosses), 1.0);
        assert_eq!(session.currency, "BMD");
        assert_eq!(session.active_tab, Tab::CombinedRatio);

        let bare = Session::from_blob(r#"{"inputs":{"xol.loss":5}}"#).unwrap();
        assert_eq!(bare.active_tab, Tab::Decision);
        assert_eq!(bare.currency, DEFAULT_CURRENCY);
        assert_eq!(bare.preset, presets::DEFAULT_PRESET_ID);
        assert_eq!(bare.scenario.get(FieldKey::XolLoss), 5.0);
    }

    #[test]
    fn test_null_input_reads_default() {
        let blob = r#"{"activeTab":"xol","preset":"bm_property_cat","stress":"","ccy":"","inputs":{
            "xol.loss": null,
            "xol.attach": 4000000,
            "uw.useStructure": null
        }}"#;
        let session = Session::from_blob(blob).unwrap();
        assert_eq!(session.scenario.raw(FieldKey::XolLoss), None);
        assert_eq!(session.scenario.get(FieldKey::XolLoss), FieldKey::XolLoss.default_value());
        assert_eq!(session.scenario.get(FieldKey::XolAttach), 4_000_000.0);
        assert_eq!(session.scenario.structure(), Structure::Xol);
        assert_eq!(session.scenario.stress(), StressMode::Normal);
        assert_eq!(session.currency, "USD");
    }

    #[test]
    fn test_unknown_preset_selects_default() {
        let catalog = PresetCatalog::builtin();
        let stale = Session {
            preset: "retired_preset".to_string(),
            ..Session::initial().apply(ScenarioUpdate::SetField(FieldKey::RoeEquity, 1.0.into()))
        };
        let session = stale.with_known_preset(&catalog);
        assert_eq!(session.preset, presets::DEFAULT_PRESET_ID);
        assert_eq!(session.scenario.get(FieldKey::RoeEquity), 1.0);

        let known = Session::initial()
            .select_preset(&presets::casualty_xol())
            .with_known_preset(&catalog);
        assert_eq!(known.preset, "bm_casualty_xol");
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_initial() {
        let mut store = LocalStore::in_memory("unused.json");
        store.set(STORAGE_KEY, "{\"activeTab\": 3".to_string());
        assert_eq!(Session::load(&store), Session::initial());
    }

    #[test]
    fn test_missing_blob_falls_back_to_initial() {
        let store = LocalStore::in_memory("unused.json");
        assert_eq!(Session::load(&store), Session::initial());
    }

    #[test]
    fn test_select_preset_records_id() {
        let session = Session::initial().select_preset(&presets::quota_share_portfolio());
        assert_eq!(session.preset, "bm_qs_portfolio");
        assert_eq!(session.scenario.structure(), Structure::QuotaShare);
    }
}
