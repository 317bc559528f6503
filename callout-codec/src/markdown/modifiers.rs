//! Modifier tokens of a callout header
//!
//! Tokens ride in the header after the type name, each introduced by a pipe:
//! `[!note|no-icon|c-center|t-right|no-ul]`. The generator always writes them in
//! the order of [`Modifiers::encode`]; the decoder does not care about order.

use crate::model::Alignment;

pub const NO_TITLE: &str = "no-title";
pub const NO_ICON: &str = "no-icon";
pub const NO_UNDERLINE: &str = "no-ul";
pub const CONTENT_ALIGN_PREFIX: &str = "c-";
pub const TITLE_ALIGN_PREFIX: &str = "t-";
pub const WIDTHS_PREFIX: &str = "widths=";
pub const WIDTH_SEPARATOR: &str = "_";

/// Presentation flags of one block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub hide_title: bool,
    pub hide_icon: bool,
    pub content_align: Alignment,
    pub title_align: Alignment,
    pub no_underline: bool,
}

impl Modifiers {
    /// Encode as `|token|token...`.
    ///
    /// Content alignment is always written, title alignment only when it is not
    /// the implicit left.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        if self.hide_title {
            push_token(&mut out, NO_TITLE);
        }
        if self.hide_icon {
            push_token(&mut out, NO_ICON);
        }
        out.push('|');
        out.push_str(CONTENT_ALIGN_PREFIX);
        out.push_str(self.content_align.as_str());
        if self.title_align != Alignment::Left {
            out.push('|');
            out.push_str(TITLE_ALIGN_PREFIX);
            out.push_str(self.title_align.as_str());
        }
        if self.no_underline {
            push_token(&mut out, NO_UNDERLINE);
        }
        out
    }
}

fn push_token(out: &mut String, token: &str) {
    out.push('|');
    out.push_str(token);
}

/// Encode a `|widths=2_1` container token; empty when there are no usable widths
pub fn encode_widths(widths: &[String]) -> String {
    let tokens: Vec<&str> = widths
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect();
    if tokens.is_empty() {
        return String::new();
    }
    format!("|{WIDTHS_PREFIX}{}", tokens.join(WIDTH_SEPARATOR))
}
