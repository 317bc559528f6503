//! User settings: custom callouts, column colors and the global style
//!
//! The JSON shape matches what the note host persists for the plugin:
//!
//! ```json
//! {
//!   "customCallouts": [{ "name": "project", "icon": "rocket", "color": "#3498db" }],
//!   "calloutStyle": "clean-inbox",
//!   "customColumnColors": [{ "name": "col-brand", "color": "#ff8800" }]
//! }
//! ```
//!
//! Missing keys fall back to their defaults, so older or hand-written files load.

pub mod components;
pub mod file;
pub mod store;

pub use components::{Definition, DefinitionEditor, DefinitionList, Notifier};
pub use file::SettingsFile;
pub use store::{normalize_name, ImportSummary};

use serde::{Deserialize, Serialize};

/// Every column color type name starts with this
pub const COLUMN_COLOR_PREFIX: &str = "col-";

/// Global look applied to every callout in the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CalloutStyle {
    /// The host's own styling
    Default,
    #[default]
    CleanInbox,
    Borderless,
}

impl CalloutStyle {
    pub const ALL: [CalloutStyle; 3] = [Self::Default, Self::CleanInbox, Self::Borderless];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CleanInbox => "clean-inbox",
            Self::Borderless => "borderless",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Obsidian Default",
            Self::CleanInbox => "Clean Box",
            Self::Borderless => "Borderless",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == s)
    }
}

/// A user-defined callout type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCalloutDefinition {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CustomCalloutDefinition {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// A user-defined column color. The stored name carries the `col-` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnColorDefinition {
    pub name: String,
    pub color: String,
}

impl ColumnColorDefinition {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// The name as a user types it, without the prefix
    pub fn editable_name(&self) -> &str {
        self.name
            .strip_prefix(COLUMN_COLOR_PREFIX)
            .unwrap_or(&self.name)
    }
}

/// Prefix a column color name unless it already carries the prefix
pub fn column_type_name(name: &str) -> String {
    if name.starts_with(COLUMN_COLOR_PREFIX) {
        name.to_string()
    } else {
        format!("{COLUMN_COLOR_PREFIX}{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub custom_callouts: Vec<CustomCalloutDefinition>,

    #[serde(default)]
    pub callout_style: CalloutStyle,

    #[serde(default)]
    pub custom_column_colors: Vec<ColumnColorDefinition>,
}
