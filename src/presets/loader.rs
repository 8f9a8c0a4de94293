//! Load presets from CSV
//!
//! One row per field value:
//!
//! ```text
//! preset_id,preset_name,tags,field,value
//! my_cat,My Cat Layer,Property cat;XoL,xol.loss,"30,000,000"
//! my_cat,My Cat Layer,Property cat;XoL,uw.useStructure,xol
//! ```
//!
//! The first row of a preset supplies its name and tags.

use csv::Reader;
use std::path::Path;

use super::Preset;
use crate::error::{CompanionError, Result};
use crate::inputs::{coerce, FieldKey, STRUCTURE_KEY};
use crate::scenario::Structure;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    preset_id: String,
    #[serde(default)]
    preset_name: String,
    #[serde(default)]
    tags: String,
    field: String,
    value: String,
}

/// Load presets from a CSV file
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Vec<Preset>> {
    let file = std::fs::File::open(path.as_ref())?;
    let presets = load_presets_from_reader(file)?;
    log::info!("Loaded {} presets from {}", presets.len(), path.as_ref().display());
    Ok(presets)
}

/// Load presets from any reader (file, string buffer)
pub fn load_presets_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Preset>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut presets: Vec<Preset> = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // header is line 1
        let line = index + 2;

        let position = match presets.iter().position(|p| p.id == row.preset_id) {
            Some(position) => position,
            None => {
                if row.preset_id.trim().is_empty() {
                    return Err(CompanionError::InvalidPresetRow {
                        row: line,
                        message: "missing preset_id".to_string(),
                    });
                }
                presets.push(Preset {
                    id: row.preset_id.clone(),
                    name: if row.preset_name.is_empty() {
                        row.preset_id.clone()
                    } else {
                        row.preset_name.clone()
                    },
                    tags: split_tags(&row.tags),
                    values: Vec::new(),
                    structure: None,
                });
                presets.len() - 1
            }
        };
        let preset = &mut presets[position];

        if row.field == STRUCTURE_KEY {
            preset.structure = Some(Structure::from_persisted(row.value.trim()));
            continue;
        }

        let field = FieldKey::parse(row.field.trim()).map_err(|e| CompanionError::InvalidPresetRow {
            row: line,
            message: e.to_string(),
        })?;
        if row.value.trim().is_empty() {
            return Err(CompanionError::InvalidPresetRow {
                row: line,
                message: format!("missing value for {}", field),
            });
        }
        let value = coerce(&row.value, f64::NAN);
        if value.is_nan() {
            return Err(CompanionError::InvalidPresetRow {
                row: line,
                message: format!("value {:?} for {} is not a number", row.value, field),
            });
        }

        match preset.values.iter_mut().find(|(f, _)| *f == field) {
            Some(existing) => existing.1 = value,
            None => preset.values.push((field, value)),
        }
    }

    Ok(presets)
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
preset_id,preset_name,tags,field,value
my_cat,My Cat Layer,Property cat;XoL,xol.loss,\"30,000,000\"
my_cat,ignored,ignored,xol.attach,5000000
my_cat,,,uw.useStructure,xol
my_qs,My QS,Quota share,qs.share,0.4
my_qs,,,uw.useStructure,qs
";

    #[test]
    fn test_load_presets_from_reader() {
        let presets = load_presets_from_reader(SAMPLE.as_bytes()).expect("Failed to load presets");
        assert_eq!(presets.len(), 2);

        let cat = &presets[0];
        assert_eq!(cat.id, "my_cat");
        assert_eq!(cat.name, "My Cat Layer");
        assert_eq!(cat.tags, vec!["Property cat".to_string(), "XoL".to_string()]);
        assert_eq!(cat.value(FieldKey::XolLoss), Some(30_000_000.0));
        assert_eq!(cat.value(FieldKey::XolAttach), Some(5_000_000.0));
        assert_eq!(cat.structure, Some(Structure::Xol));

        let qs = &presets[1];
        assert_eq!(qs.value(FieldKey::QsShare), Some(0.4));
        assert_eq!(qs.structure, Some(Structure::QuotaShare));
    }

    #[test]
    fn test_unknown_field_reports_row() {
        let csv = "preset_id,preset_name,tags,field,value\np,P,,xol.losses,1\n";
        let err = load_presets_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CompanionError::InvalidPresetRow { row: 2, .. }));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let csv = "preset_id,preset_name,tags,field,value\np,P,,xol.loss,lots\n";
        assert!(load_presets_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_blank_value_rejected() {
        let csv = "preset_id,preset_name,tags,field,value\n\
                   p,P,,xol.loss,1\n\
                   p,P,,xol.attach,\"  \"\n";
        let err = load_presets_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CompanionError::InvalidPresetRow { row: 3, .. }));
    }

    #[test]
    fn test_missing_preset_id_rejected() {
        let csv = "preset_id,preset_name,tags,field,value\n,P,,xol.loss,1\n";
        let err = load_presets_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CompanionError::InvalidPresetRow { row: 2, .. }));
    }
}
