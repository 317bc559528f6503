//! HTML side of the codec
//!
//! - [`preview`]: callout markdown → callout markup, standing in for the host renderer
//! - [`decoder`]: raw `data-callout-metadata` → [`Decoration`] (pure, no DOM)
//! - [`postprocess`]: applies decorations to every `.callout` in a page

pub mod decoder;
pub mod postprocess;
pub mod preview;

pub use decoder::{parse_weight, parse_widths, Decoration};
pub use postprocess::decorate_html;
pub use preview::{render_preview, HeaderLine, PreviewOptions};
