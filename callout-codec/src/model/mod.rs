//! Editing model
//!
//! - `nodes`: blocks, columns and documents
//! - `catalog`: built-in types and color resolution
//! - `normalize`: callout / color-block conversion rules

pub mod catalog;
pub mod nodes;
pub mod normalize;

pub use catalog::{ColorResolver, Palette};
pub use nodes::{
    Alignment, BlockKind, BlockNode, CalloutHeader, Collapse, ColorFill, ColumnLayout,
    ColumnSpec, ColumnStyle, Document, MultiColumnDocument, StandardDocument,
};
pub use normalize::{normalize, toggle_kind};
