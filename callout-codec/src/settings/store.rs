//! Mutations of the settings lists
//!
//! Every operation validates first and mutates after, so a rejected call leaves the
//! settings exactly as they were.

use super::{
    column_type_name, CalloutStyle, ColumnColorDefinition, CustomCalloutDefinition, Settings,
};
use crate::error::{CodecError, Result};
use crate::model::catalog::Palette;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

const CALLOUT: &str = "callout";
const COLUMN_COLOR: &str = "column color";

/// Outcome of merging an import file into the custom callouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        format!(
            "Import complete: {} added, {} updated.",
            self.added, self.updated
        )
    }
}

/// Lowercase a definition name and turn whitespace runs into `-`
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

impl Settings {
    /// Color resolver over these settings
    pub fn palette(&self) -> Palette<'_> {
        Palette::new(&self.custom_callouts)
    }

    pub fn add_callout(&mut self, definition: CustomCalloutDefinition) -> Result<()> {
        let definition = prepare_callout(definition)?;
        if self
            .custom_callouts
            .iter()
            .any(|existing| existing.name == definition.name)
        {
            return Err(CodecError::DuplicateName {
                entity: CALLOUT,
                name: definition.name,
            });
        }
        info!(name = %definition.name, "added custom callout");
        self.custom_callouts.push(definition);
        Ok(())
    }

    /// Overwrite the callout at `index`. Renaming onto another definition's name is
    /// rejected.
    pub fn update_callout(
        &mut self,
        index: usize,
        definition: CustomCalloutDefinition,
    ) -> Result<()> {
        check_index(CALLOUT, index, self.custom_callouts.len())?;
        let definition = prepare_callout(definition)?;
        if self
            .custom_callouts
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.name == definition.name)
        {
            return Err(CodecError::DuplicateName {
                entity: CALLOUT,
                name: definition.name,
            });
        }
        info!(index, name = %definition.name, "updated custom callout");
        self.custom_callouts[index] = definition;
        Ok(())
    }

    pub fn remove_callout(&mut self, index: usize) -> Result<CustomCalloutDefinition> {
        check_index(CALLOUT, index, self.custom_callouts.len())?;
        let removed = self.custom_callouts.remove(index);
        info!(name = %removed.name, "removed custom callout");
        Ok(removed)
    }

    /// Add a column color; the `col-` prefix is added to the name
    pub fn add_column_color(&mut self, definition: ColumnColorDefinition) -> Result<()> {
        let definition = prepare_column_color(definition)?;
        if self
            .custom_column_colors
            .iter()
            .any(|existing| existing.name == definition.name)
        {
            return Err(CodecError::DuplicateName {
                entity: COLUMN_COLOR,
                name: definition.name,
            });
        }
        info!(name = %definition.name, "added column color");
        self.custom_column_colors.push(definition);
        Ok(())
    }

    pub fn update_column_color(
        &mut self,
        index: usize,
        definition: ColumnColorDefinition,
    ) -> Result<()> {
        check_index(COLUMN_COLOR, index, self.custom_column_colors.len())?;
        let definition = prepare_column_color(definition)?;
        if self
            .custom_column_colors
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.name == definition.name)
        {
            return Err(CodecError::DuplicateName {
                entity: COLUMN_COLOR,
                name: definition.name,
            });
        }
        info!(index, name = %definition.name, "updated column color");
        self.custom_column_colors[index] = definition;
        Ok(())
    }

    pub fn remove_column_color(&mut self, index: usize) -> Result<ColumnColorDefinition> {
        check_index(COLUMN_COLOR, index, self.custom_column_colors.len())?;
        let removed = self.custom_column_colors.remove(index);
        info!(name = %removed.name, "removed column color");
        Ok(removed)
    }

    pub fn set_style(&mut self, style: CalloutStyle) {
        info!(style = style.as_str(), "set callout style");
        self.callout_style = style;
    }

    /// Merge a JSON array of callout definitions by name.
    ///
    /// Matching names are overwritten in place, new names are appended. The whole
    /// file is checked before anything changes.
    pub fn import_callouts(&mut self, json: &str) -> Result<ImportSummary> {
        let value = serde_json::from_str::<Value>(json).inspect_err(|e| {
            warn!(error = %e, "callout import is not valid JSON");
        })?;

        let imported = parse_import(&value).inspect_err(|e| {
            warn!(error = %e, "rejected callout import");
        })?;

        let mut summary = ImportSummary::default();
        for definition in imported {
            match self
                .custom_callouts
                .iter_mut()
                .find(|existing| existing.name == definition.name)
            {
                Some(existing) => {
                    *existing = definition;
                    summary.updated += 1;
                }
                None => {
                    self.custom_callouts.push(definition);
                    summary.added += 1;
                }
            }
        }

        info!(
            added = summary.added,
            updated = summary.updated,
            "imported custom callouts"
        );
        Ok(summary)
    }

    /// The custom callouts as two-space indented JSON
    pub fn export_callouts(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.custom_callouts)?)
    }
}

fn check_index(entity: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(CodecError::IndexOutOfRange { entity, index, len })
    }
}

fn require(entity: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(CodecError::EmptyField { entity, field })
    } else {
        Ok(())
    }
}

fn prepare_callout(definition: CustomCalloutDefinition) -> Result<CustomCalloutDefinition> {
    let definition = CustomCalloutDefinition {
        name: normalize_name(&definition.name),
        icon: definition.icon.trim().to_string(),
        color: definition.color.trim().to_string(),
    };
    require(CALLOUT, "name", &definition.name)?;
    require(CALLOUT, "icon", &definition.icon)?;
    require(CALLOUT, "color", &definition.color)?;
    Ok(definition)
}

fn prepare_column_color(definition: ColumnColorDefinition) -> Result<ColumnColorDefinition> {
    let name = normalize_name(&definition.name);
    require(COLUMN_COLOR, "name", &name)?;
    require(COLUMN_COLOR, "color", &definition.color)?;
    Ok(ColumnColorDefinition {
        name: column_type_name(&name),
        color: definition.color.trim().to_string(),
    })
}

/// Every entry must be an object with non-empty `name`, `icon` and `color` strings
fn parse_import(value: &Value) -> Result<Vec<CustomCalloutDefinition>> {
    let items = value
        .as_array()
        .ok_or_else(|| CodecError::InvalidImport("expected a JSON array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(position, item)| -> Result<CustomCalloutDefinition> {
            let field = |key: &str| {
                item.get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        CodecError::InvalidImport(format!(
                            "entry {position} has no usable '{key}'"
                        ))
                    })
            };
            Ok(CustomCalloutDefinition {
                name: field("name")?,
                icon: field("icon")?,
                color: field("color")?,
            })
        })
        .collect()
}
