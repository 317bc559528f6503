//! Built-in callout and column types, and color resolution
//!
//! The host ships a fixed set of callout types. Their colors are theme variables
//! at runtime; the table below pins them to the host's default values so a
//! headless callout can be turned into a color block without a live theme.

use crate::settings::CustomCalloutDefinition;

/// A callout type the host knows without any user definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardCallout {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[rustfmt::skip]
pub const STANDARD_CALLOUTS: &[StandardCallout] = &[
    StandardCallout { name: "note", icon: "pencil", color: "#448aff" },
    StandardCallout { name: "abstract", icon: "clipboard-list", color: "#00b0ff" },
    StandardCallout { name: "info", icon: "info", color: "#00b8d4" },
    StandardCallout { name: "todo", icon: "check-circle-2", color: "#00b8d4" },
    StandardCallout { name: "tip", icon: "flame", color: "#00bfa5" },
    StandardCallout { name: "success", icon: "check", color: "#00c853" },
    StandardCallout { name: "question", icon: "help-circle", color: "#64dd17" },
    StandardCallout { name: "warning", icon: "alert-triangle", color: "#ff9100" },
    StandardCallout { name: "failure", icon: "x", color: "#ff5252" },
    StandardCallout { name: "danger", icon: "zap", color: "#ff1744" },
    StandardCallout { name: "bug", icon: "bug", color: "#f50057" },
    StandardCallout { name: "example", icon: "list", color: "#7c4dff" },
    StandardCallout { name: "quote", icon: "quote", color: "#9e9e9e" },
];

/// Built-in column colors as (type name, label)
pub const STANDARD_COLUMN_COLORS: &[(&str, &str)] = &[
    ("col-red", "Red"),
    ("col-blue", "Blue"),
    ("col-green", "Green"),
    ("col-yellow", "Yellow"),
    ("col-purple", "Purple"),
    ("col-orange", "Orange"),
    ("col-pink", "Pink"),
    ("col-cyan", "Cyan"),
    ("col-teal", "Teal"),
    ("col-lime", "Lime"),
    ("col-gray", "Gray"),
];

/// Reserved type of the multi-column container
pub const MULTI_COLUMN_TYPE: &str = "multi-column";

/// Column type forced by the simple-box layout
pub const BLANK_CONTAINER_TYPE: &str = "blank-container";

/// Icon shown for types nobody defines
pub const FALLBACK_ICON: &str = "help-circle";

pub const DEFAULT_FALLBACK_COLOR: &str = "#7f8c8d";

pub fn standard_callout(name: &str) -> Option<&'static StandardCallout> {
    STANDARD_CALLOUTS.iter().find(|callout| callout.name == name)
}

/// Resolves a callout type name to a `#rrggbb` color
pub trait ColorResolver {
    fn color_of(&self, type_name: &str) -> String;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> String,
{
    fn color_of(&self, type_name: &str) -> String {
        self(type_name)
    }
}

/// Resolver over the user's definitions, then the built-in table
#[derive(Debug, Clone)]
pub struct Palette<'a> {
    custom: &'a [CustomCalloutDefinition],
    fallback_color: String,
}

impl<'a> Palette<'a> {
    pub fn new(custom: &'a [CustomCalloutDefinition]) -> Self {
        Self {
            custom,
            fallback_color: DEFAULT_FALLBACK_COLOR.to_string(),
        }
    }

    pub fn with_fallback_color(mut self, color: impl Into<String>) -> Self {
        self.fallback_color = color.into();
        self
    }

    fn custom(&self, type_name: &str) -> Option<&CustomCalloutDefinition> {
        self.custom.iter().find(|def| def.name == type_name)
    }

    /// Icon for a type: built-in first, then custom, then [`FALLBACK_ICON`]
    pub fn icon_of(&self, type_name: &str) -> String {
        standard_callout(type_name)
            .map(|callout| callout.icon.to_string())
            .or_else(|| self.custom(type_name).map(|def| def.icon.clone()))
            .unwrap_or_else(|| FALLBACK_ICON.to_string())
    }

    /// Every type name a picker should offer: built-ins, then custom ones
    pub fn type_names(&self) -> Vec<String> {
        STANDARD_CALLOUTS
            .iter()
            .map(|callout| callout.name.to_string())
            .chain(self.custom.iter().map(|def| def.name.clone()))
            .collect()
    }
}

impl ColorResolver for Palette<'_> {
    fn color_of(&self, type_name: &str) -> String {
        // A custom definition may shadow a built-in name; its color wins.
        if let Some(def) = self.custom(type_name) {
            return def.color.clone();
        }
        standard_callout(type_name)
            .map(|callout| callout.color.to_string())
            .unwrap_or_else(|| self.fallback_color.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs() -> Vec<CustomCalloutDefinition> {
        vec![
            CustomCalloutDefinition::new("project", "rocket", "#123456"),
            CustomCalloutDefinition::new("note", "star", "#abcdef"),
        ]
    }

    #[test]
    fn test_custom_color_wins() {
        let defs = defs();
        let palette = Palette::new(&defs);
        assert_eq!(palette.color_of("project"), "#123456");
        assert_eq!(palette.color_of("note"), "#abcdef");
    }

    #[test]
    fn test_standard_then_fallback() {
        let palette = Palette::new(&[]).with_fallback_color("#000000");
        assert_eq!(palette.color_of("warning"), "#ff9100");
        assert_eq!(palette.color_of("nope"), "#000000");
    }

    #[test]
    fn test_icon_lookup_order() {
        let defs = defs();
        let palette = Palette::new(&defs);
        // Built-in icon beats the custom shadow
        assert_eq!(palette.icon_of("note"), "pencil");
        assert_eq!(palette.icon_of("project"), "rocket");
        assert_eq!(palette.icon_of("missing"), FALLBACK_ICON);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |_: &str| "#010203".to_string();
        assert_eq!(resolver.color_of("anything"), "#010203");
    }

    #[test]
    fn test_type_names_lists_builtins_first() {
        let defs = defs();
        let names = Palette::new(&defs).type_names();
        assert_eq!(names.first().map(String::as_str), Some("note"));
        assert_eq!(names.last().map(String::as_str), Some("note"));
        assert_eq!(names.len(), STANDARD_CALLOUTS.len() + 2);
    }
}
