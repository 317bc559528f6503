//! Kind normalization between callouts and color blocks
//!
//! A callout that hides both its title and its icon has nothing left but a colored
//! body, so it is a color block. The color is taken from the callout's type at the
//! moment of conversion.

use super::catalog::ColorResolver;
use super::nodes::{BlockKind, BlockNode, CalloutHeader, ColorFill};

/// Convert a headless callout into a color block; any other node is returned as is.
pub fn normalize(node: BlockNode, resolver: &dyn ColorResolver) -> BlockNode {
    let color = match &node.kind {
        BlockKind::Callout(header) if header.hide_title && header.hide_icon => {
            Some(resolver.color_of(&header.type_name))
        }
        _ => None,
    };
    match color {
        Some(color) => BlockNode {
            kind: BlockKind::ColorBlock(ColorFill { color }),
            ..node
        },
        None => node,
    }
}

/// Switch a node between callout and color block.
///
/// Callouts take the color of their type. Color blocks come back as a plain
/// callout with both visibility modifiers cleared.
pub fn toggle_kind(node: BlockNode, resolver: &dyn ColorResolver) -> BlockNode {
    let kind = match &node.kind {
        BlockKind::Callout(header) => BlockKind::ColorBlock(ColorFill {
            color: resolver.color_of(&header.type_name),
        }),
        BlockKind::ColorBlock(_) => BlockKind::Callout(CalloutHeader::default()),
    };
    BlockNode { kind, ..node }
}
