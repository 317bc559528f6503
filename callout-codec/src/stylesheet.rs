//! CSS for custom callouts, column colors and color blocks
//!
//! One rule per definition, in settings order, followed by one rule per temporary
//! style of the last generation pass.

use crate::markdown::TemporaryStyles;
use crate::settings::{CalloutStyle, Settings};

const LUCIDE_PREFIX: &str = "lucide-";

/// Build the stylesheet. Definitions whose color is not `#rrggbb` get no rule.
pub fn generate_css(settings: &Settings, temporary: &TemporaryStyles) -> String {
    let mut css = String::new();

    for callout in &settings.custom_callouts {
        if let Some(rgb) = hex_to_rgb(&callout.color) {
            let icon = callout
                .icon
                .strip_prefix(LUCIDE_PREFIX)
                .unwrap_or(&callout.icon);
            css.push_str(&format!(
                ".callout[data-callout=\"{}\"] {{ --callout-color: {rgb}; --callout-icon: {LUCIDE_PREFIX}{icon}; }}\n",
                callout.name
            ));
        }
    }

    for column in &settings.custom_column_colors {
        css.push_str(&format!(
            ".mcm-container .callout[data-callout=\"{}\"] h3 {{ border-bottom-color: {} !important; }}\n",
            column.name, column.color
        ));
    }

    for (name, color) in temporary.iter() {
        if let Some(rgb) = hex_to_rgb(color) {
            css.push_str(&format!(
                ".callout[data-callout=\"{name}\"] {{ --callout-color: {rgb}; }}\n"
            ));
        }
    }

    css
}

/// Class the page body carries for a global style; none for the host default
pub fn body_class(style: CalloutStyle) -> Option<String> {
    match style {
        CalloutStyle::Default => None,
        other => Some(format!("callouts-style-{}", other.as_str())),
    }
}

/// `#ff8800` (or `ff8800`, any case) → `255, 136, 0`
pub fn hex_to_rgb(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(format!(
        "{}, {}, {}",
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?
    ))
}
