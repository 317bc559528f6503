//! Temporary callout types for color blocks
//!
//! A color block has no callout type of its own. Each generation pass mints one
//! synthetic type per distinct color and records it here so the stylesheet can
//! give it that color. The caller owns the registry and it is cleared at the start
//! of every pass.

/// Prefix of every synthetic color-block type
pub const TEMPORARY_TYPE_PREFIX: &str = "sc-temp-";

/// Synthetic type name for a color, e.g. `#FF8800` → `sc-temp-ff8800`
///
/// The host lowercases callout types when rendering, so the name is lowercased
/// too or the generated CSS selector would never match.
pub fn temporary_type_name(color: &str) -> String {
    let hex = color.strip_prefix('#').unwrap_or(color);
    format!("{TEMPORARY_TYPE_PREFIX}{}", hex.to_lowercase())
}

/// Synthetic types registered during one generation pass, in first-use order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemporaryStyles {
    entries: Vec<(String, String)>,
}

impl TemporaryStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a color and return its synthetic type name. Same color, same name.
    pub fn register(&mut self, color: &str) -> String {
        let name = temporary_type_name(color);
        if !self.entries.iter().any(|(existing, _)| *existing == name) {
            self.entries.push((name.clone(), color.to_string()));
        }
        name
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, color)| color.as_str())
    }

    /// (type name, color) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, color)| (name.as_str(), color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_color_reuses_name() {
        let mut styles = TemporaryStyles::new();
        let first = styles.register("#ff0000");
        let second = styles.register("#ff0000");
        assert_eq!(first, "sc-temp-ff0000");
        assert_eq!(first, second);
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_case_insensitive_names() {
        let mut styles = TemporaryStyles::new();
        assert_eq!(styles.register("#AbCdEf"), "sc-temp-abcdef");
        assert_eq!(styles.color_of("sc-temp-abcdef"), Some("#AbCdEf"));
    }

    #[test]
    fn test_clear() {
        let mut styles = TemporaryStyles::new();
        styles.register("#111111");
        styles.register("#222222");
        assert_eq!(styles.len(), 2);
        styles.clear();
        assert!(styles.is_empty());
    }

    #[test]
    fn test_first_use_order() {
        let mut styles = TemporaryStyles::new();
        styles.register("#222222");
        styles.register("#111111");
        let names: Vec<&str> = styles.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["sc-temp-222222", "sc-temp-111111"]);
    }
}
