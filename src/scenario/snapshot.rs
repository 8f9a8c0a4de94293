//! Immutable scenario snapshot and its reducer

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Structure;
use crate::inputs::{FieldKey, RawValue};
use crate::presets::Preset;
use crate::stress::{self, StressMode};

/// A single change to the scenario
#[derive(Debug, Clone)]
pub enum ScenarioUpdate {
    /// Store a raw user value for a field
    SetField(FieldKey, RawValue),
    /// Remove a field so reads fall back to its default
    ClearField(FieldKey),
    SetStructure(Structure),
    SetStress(StressMode),
    /// Merge a preset's values over the current inputs
    ApplyPreset(Preset),
}

/// Current input values, structure and stress mode
///
/// Calculators only ever read a snapshot. Every change goes through
/// [`Scenario::apply`], which returns the next snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    inputs: BTreeMap<FieldKey, RawValue>,
    structure: Structure,
    stress: StressMode,
}

impl Scenario {
    /// Empty scenario: every field at its default, XoL, no stress
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored parts
    pub fn from_parts(
        inputs: BTreeMap<FieldKey, RawValue>,
        structure: Structure,
        stress: StressMode,
    ) -> Self {
        Self { inputs, structure, stress }
    }

    pub fn structure(&self) -> Structure {
        self.structure
    }

    pub fn stress(&self) -> StressMode {
        self.stress
    }

    pub fn inputs(&self) -> &BTreeMap<FieldKey, RawValue> {
        &self.inputs
    }

    /// Stored raw value, if any
    pub fn raw(&self, field: FieldKey) -> Option<&RawValue> {
        self.inputs.get(&field)
    }

    /// Value handed to the calculators
    ///
    /// Absent fields read as their default. Raw text is coerced, falling back to
    /// the default for stressed fields and to 0 for raw reads. The stress
    /// transform is applied last.
    pub fn get(&self, field: FieldKey) -> f64 {
        let default = field.default_value();
        if !field.is_stressed() {
            return self.raw(field).map_or(default, |raw| raw.to_number(0.0));
        }
        let value = self.raw(field).map_or(default, |raw| raw.to_number(default));
        stress::apply(field, value, self.stress)
    }

    /// Reduce one update into the next snapshot
    pub fn apply(mut self, update: ScenarioUpdate) -> Self {
        match update {
            ScenarioUpdate::SetField(field, value) => {
                log::debug!("set {} = {}", field, value);
                self.inputs.insert(field, value);
            }
            ScenarioUpdate::ClearField(field) => {
                log::debug!("clear {}", field);
                self.inputs.remove(&field);
            }
            ScenarioUpdate::SetStructure(structure) => {
                log::debug!("structure -> {}", structure);
                self.structure = structure;
            }
            ScenarioUpdate::SetStress(mode) => {
                log::debug!("stress -> {}", mode);
                self.stress = mode;
            }
            ScenarioUpdate::ApplyPreset(preset) => {
                log::debug!("preset {} ({} values)", preset.id, preset.values.len());
                for (field, value) in preset.values {
                    self.inputs.insert(field, RawValue::Number(value));
                }
                if let Some(structure) = preset.structure {
                    self.structure = structure;
                }
            }
        }
        self
    }

    /// Apply several updates in order
    pub fn apply_all(self, updates: impl IntoIterator<Item = ScenarioUpdate>) -> Self {
        updates.into_iter().fold(self, Scenario::apply)
    }

    /// Same inputs and structure under a different stress mode
    pub fn with_stress(&self, mode: StressMode) -> Self {
        self.clone().apply(ScenarioUpdate::SetStress(mode))
    }
}
