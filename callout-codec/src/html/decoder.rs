//! Metadata decoding (raw modifier string → presentation intent)
//!
//! Pure half of the post-processor: it only looks at the callout type and the raw
//! `data-callout-metadata` string. Tokens are tested by containment, so order and
//! unknown tokens do not matter, and nothing here can fail.

use crate::markdown::modifiers::{
    CONTENT_ALIGN_PREFIX, NO_ICON, NO_TITLE, TITLE_ALIGN_PREFIX, WIDTHS_PREFIX, WIDTH_SEPARATOR,
};
use crate::model::catalog::MULTI_COLUMN_TYPE;
use crate::model::Alignment;

pub const TITLE_ALIGN_CLASS_PREFIX: &str = "sc-title-align-";
pub const CONTENT_ALIGN_CLASS_PREFIX: &str = "sc-content-align-";
pub const HEADLESS_CLASS: &str = "sc-headless";
pub const MULTI_COLUMN_CLASS: &str = "mcm-container";
pub const MULTI_COLUMN_CONTENT_CLASS: &str = "mcm-content-container";

/// What a rendered callout should look like
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decoration {
    pub hide_title: bool,
    pub hide_icon: bool,
    pub title_align: Alignment,
    pub content_align: Alignment,
    /// The block is the `multi-column` container
    pub multi_column: bool,
    /// Column weights of a container that carries a `widths=` token
    pub widths: Option<Vec<f64>>,
}

impl Decoration {
    /// Decode a callout's type and raw metadata.
    ///
    /// Without metadata the block was not written by the generator (a hand-written
    /// callout, say) and only gets the left-aligned defaults.
    pub fn decode(callout_type: &str, metadata: Option<&str>) -> Self {
        let multi_column = callout_type == MULTI_COLUMN_TYPE;
        let Some(metadata) = metadata else {
            return Self {
                multi_column,
                ..Self::default()
            };
        };

        let widths = if multi_column {
            widths_token(metadata).map(parse_widths)
        } else {
            None
        };

        Self {
            hide_title: metadata.contains(NO_TITLE),
            hide_icon: metadata.contains(NO_ICON),
            title_align: alignment_token(metadata, TITLE_ALIGN_PREFIX),
            content_align: alignment_token(metadata, CONTENT_ALIGN_PREFIX),
            multi_column,
            widths,
        }
    }

    /// Both title and icon hidden
    pub fn is_headless(&self) -> bool {
        self.hide_title && self.hide_icon
    }

    /// Classes for the callout element itself.
    ///
    /// Always exactly one title-alignment and one content-alignment class.
    pub fn container_classes(&self) -> Vec<String> {
        let mut classes = Vec::with_capacity(4);
        if self.multi_column {
            classes.push(MULTI_COLUMN_CLASS.to_string());
        }
        if self.is_headless() {
            classes.push(HEADLESS_CLASS.to_string());
        }
        classes.push(format!(
            "{TITLE_ALIGN_CLASS_PREFIX}{}",
            self.title_align.as_str()
        ));
        classes.push(format!(
            "{CONTENT_ALIGN_CLASS_PREFIX}{}",
            self.content_align.as_str()
        ));
        classes
    }

    /// Flex-grow weight of the column at `index`, cycling through the weights
    pub fn column_weight(&self, index: usize) -> Option<f64> {
        let widths = self.widths.as_ref()?;
        if widths.is_empty() {
            return None;
        }
        Some(widths[index % widths.len()])
    }
}

/// Centered wins over right when both are present; absent means left.
fn alignment_token(metadata: &str, prefix: &str) -> Alignment {
    if metadata.contains(&format!("{prefix}center")) {
        Alignment::Center
    } else if metadata.contains(&format!("{prefix}right")) {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn widths_token(metadata: &str) -> Option<&str> {
    metadata
        .split('|')
        .find_map(|token| token.trim().strip_prefix(WIDTHS_PREFIX))
        .map(|spec| spec.trim_end_matches(']'))
        .filter(|spec| !spec.is_empty())
}

/// Parse `2_1_1` into weights
pub fn parse_widths(spec: &str) -> Vec<f64> {
    spec.split(WIDTH_SEPARATOR).map(parse_weight).collect()
}

/// Leading decimal number of a token (`1.5fr`, `1e2`, `2.5.1`); anything unusable
/// weighs 1.
pub fn parse_weight(token: &str) -> f64 {
    let token = token.trim();
    match token[..numeric_prefix_len(token)].parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 => weight,
        _ => 1.0,
    }
}

/// Byte length of the longest `[+-]digits[.digits][e[+-]digits]` prefix
fn numeric_prefix_len(token: &str) -> usize {
    let bytes = token.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    end
}

/// Render a weight the way CSS expects it (`2`, not `2.0`)
pub fn format_weight(weight: f64) -> String {
    format!("{weight}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_metadata_defaults_to_left() {
        let decoration = Decoration::decode("note", None);
        assert_eq!(
            decoration.container_classes(),
            vec!["sc-title-align-left", "sc-content-align-left"]
        );
        assert!(!decoration.hide_title);
    }

    #[test]
    fn test_order_insensitive_tokens() {
        let decoration = Decoration::decode("note", Some("t-right|no-icon|c-center"));
        assert!(decoration.hide_icon);
        assert!(!decoration.hide_title);
        assert_eq!(decoration.title_align, Alignment::Right);
        assert_eq!(decoration.content_align, Alignment::Center);
    }

    #[test]
    fn test_headless() {
        let decoration = Decoration::decode("sc-temp-ff0000", Some("no-title|no-icon|c-left"));
        assert!(decoration.is_headless());
        assert!(decoration
            .container_classes()
            .contains(&HEADLESS_CLASS.to_string()));
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let decoration = Decoration::decode("note", Some("wide|foo=bar|c-right"));
        assert_eq!(decoration.content_align, Alignment::Right);
        assert_eq!(decoration.title_align, Alignment::Left);
    }

    #[test]
    fn test_widths_cycle() {
        let decoration = Decoration::decode("multi-column", Some("widths=2_1"));
        let weights: Vec<f64> = (0..4)
            .filter_map(|i| decoration.column_weight(i))
            .collect();
        assert_eq!(weights, vec![2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_widths_only_on_container() {
        let decoration = Decoration::decode("note", Some("widths=2_1"));
        assert!(decoration.widths.is_none());
        assert!(decoration.column_weight(0).is_none());
    }

    #[test]
    fn test_container_without_metadata() {
        let decoration = Decoration::decode("multi-column", None);
        assert!(decoration.multi_column);
        assert_eq!(decoration.container_classes()[0], MULTI_COLUMN_CLASS);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("2"), 2.0);
        assert_eq!(parse_weight("1.5"), 1.5);
        assert_eq!(parse_weight("3fr"), 3.0);
        assert_eq!(parse_weight("abc"), 1.0);
        assert_eq!(parse_weight(""), 1.0);
        assert_eq!(parse_weight("0"), 1.0);
        assert_eq!(parse_weight("-2"), 1.0);
    }

    #[test]
    fn test_parse_weight_stops_at_first_non_number() {
        assert_eq!(parse_weight("1.2.3"), 1.2);
        assert_eq!(parse_weight("1e2"), 100.0);
        assert_eq!(parse_weight("2E-1"), 0.2);
        assert_eq!(parse_weight("3e"), 3.0);
        assert_eq!(parse_weight(".5"), 0.5);
        assert_eq!(parse_weight("4."), 4.0);
        assert_eq!(parse_weight("."), 1.0);
        assert_eq!(parse_weight("+"), 1.0);
    }

    #[test]
    fn test_parse_widths_with_garbage() {
        assert_eq!(parse_widths("2_abc_3"), vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(2.0), "2");
        assert_eq!(format_weight(1.5), "1.5");
    }
}
