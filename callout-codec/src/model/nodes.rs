//! Editing model node types
//!
//! The tree an editing session builds before it is turned into markdown. It never
//! persists: the settings store owns definitions, the session owns documents.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a title or a content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Fold control of a callout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collapse {
    /// No fold control
    #[default]
    None,
    /// Foldable, expanded by default (`+`)
    Open,
    /// Foldable, collapsed by default (`-`)
    Closed,
}

impl Collapse {
    /// The marker written right after the closing bracket of a callout header
    pub fn token(&self) -> &'static str {
        match self {
            Collapse::None => "",
            Collapse::Open => "+",
            Collapse::Closed => "-",
        }
    }

    pub fn from_token(token: &str) -> Self {
        match token {
            "+" => Collapse::Open,
            "-" => Collapse::Closed,
            _ => Collapse::None,
        }
    }
}

/// Header fields that only a callout carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutHeader {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub collapse: Collapse,
    #[serde(default)]
    pub hide_title: bool,
    #[serde(default)]
    pub hide_icon: bool,
}

impl Default for CalloutHeader {
    fn default() -> Self {
        Self {
            type_name: "note".to_string(),
            title: String::new(),
            collapse: Collapse::None,
            hide_title: false,
            hide_icon: false,
        }
    }
}

/// Fill of a color block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFill {
    /// `#rrggbb`
    pub color: String,
}

/// What a block renders as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BlockKind {
    Callout(CalloutHeader),
    ColorBlock(ColorFill),
}

/// A callout or a color block with its content and presentation flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockNode {
    #[serde(flatten)]
    pub kind: BlockKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub content_align: Alignment,
    #[serde(default)]
    pub title_align: Alignment,
    #[serde(default)]
    pub no_underline: bool,
}

impl BlockNode {
    pub fn callout(type_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::from_kind(BlockKind::Callout(CalloutHeader {
            type_name: type_name.into(),
            title: title.into(),
            ..CalloutHeader::default()
        }))
    }

    pub fn color_block(color: impl Into<String>) -> Self {
        Self::from_kind(BlockKind::ColorBlock(ColorFill {
            color: color.into(),
        }))
    }

    fn from_kind(kind: BlockKind) -> Self {
        Self {
            kind,
            content: String::new(),
            content_align: Alignment::Left,
            title_align: Alignment::Left,
            no_underline: false,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_content_align(mut self, align: Alignment) -> Self {
        self.content_align = align;
        self
    }

    pub fn with_title_align(mut self, align: Alignment) -> Self {
        self.title_align = align;
        self
    }

    pub fn with_no_underline(mut self, no_underline: bool) -> Self {
        self.no_underline = no_underline;
        self
    }

    /// Set the collapse policy. No effect on color blocks.
    pub fn with_collapse(mut self, collapse: Collapse) -> Self {
        if let BlockKind::Callout(header) = &mut self.kind {
            header.collapse = collapse;
        }
        self
    }

    /// Set the visibility modifiers. No effect on color blocks.
    pub fn with_hidden(mut self, hide_title: bool, hide_icon: bool) -> Self {
        if let BlockKind::Callout(header) = &mut self.kind {
            header.hide_title = hide_title;
            header.hide_icon = hide_icon;
        }
        self
    }

    pub fn is_color_block(&self) -> bool {
        matches!(self.kind, BlockKind::ColorBlock(_))
    }

    pub fn header(&self) -> Option<&CalloutHeader> {
        match &self.kind {
            BlockKind::Callout(header) => Some(header),
            BlockKind::ColorBlock(_) => None,
        }
    }

    /// Label used by editors, e.g. "Callout" or "Color Block"
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            BlockKind::Callout(_) => "Callout",
            BlockKind::ColorBlock(_) => "Color Block",
        }
    }
}

/// A lightweight column of the colored-underline and simple-box layouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title_align: Alignment,
    #[serde(default)]
    pub content_align: Alignment,
    #[serde(default)]
    pub no_title: bool,
    #[serde(default)]
    pub no_underline: bool,
}

impl ColumnSpec {
    pub fn new(type_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            title: title.into(),
            content: String::new(),
            title_align: Alignment::Left,
            content_align: Alignment::Left,
            no_title: false,
            no_underline: false,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// The three multi-column looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnStyle {
    #[default]
    ColoredUnderline,
    SimpleBox,
    ComponentInColumn,
}

impl ColumnStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnStyle::ColoredUnderline => "colored-underline",
            ColumnStyle::SimpleBox => "simple-box",
            ColumnStyle::ComponentInColumn => "component-in-column",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "colored-underline" => Some(ColumnStyle::ColoredUnderline),
            "simple-box" => Some(ColumnStyle::SimpleBox),
            "component-in-column" => Some(ColumnStyle::ComponentInColumn),
            _ => None,
        }
    }
}

/// Columns of a multi-column document, typed by layout style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "columns", rename_all = "kebab-case")]
pub enum ColumnLayout {
    ColoredUnderline(Vec<ColumnSpec>),
    SimpleBox(Vec<ColumnSpec>),
    ComponentInColumn(Vec<BlockNode>),
}

impl ColumnLayout {
    pub fn style(&self) -> ColumnStyle {
        match self {
            ColumnLayout::ColoredUnderline(_) => ColumnStyle::ColoredUnderline,
            ColumnLayout::SimpleBox(_) => ColumnStyle::SimpleBox,
            ColumnLayout::ComponentInColumn(_) => ColumnStyle::ComponentInColumn,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnLayout::ColoredUnderline(cols) | ColumnLayout::SimpleBox(cols) => cols.len(),
            ColumnLayout::ComponentInColumn(cols) => cols.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parent block with one level of nested children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDocument {
    #[serde(default)]
    pub parent: Option<BlockNode>,
    #[serde(default)]
    pub children: Vec<BlockNode>,
}

/// A `multi-column` container and its columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiColumnDocument {
    /// Relative column weights, e.g. `["2", "1"]`
    #[serde(default)]
    pub widths: Vec<String>,
    pub layout: ColumnLayout,
}

/// Anything the generator can serialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Document {
    Standard(StandardDocument),
    MultiColumn(MultiColumnDocument),
}

impl Default for Document {
    fn default() -> Self {
        Document::Standard(StandardDocument::default())
    }
}

/// Split free-form width input ("2 1  1") into width tokens
pub fn parse_width_layout(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_tokens() {
        assert_eq!(Collapse::None.token(), "");
        assert_eq!(Collapse::Open.token(), "+");
        assert_eq!(Collapse::Closed.token(), "-");
        assert_eq!(Collapse::from_token("-"), Collapse::Closed);
        assert_eq!(Collapse::from_token("?"), Collapse::None);
    }

    #[test]
    fn test_block_node_json_shape() {
        let node = BlockNode::callout("tip", "Heads up")
            .with_content("Body")
            .with_title_align(Alignment::Center);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "callout");
        assert_eq!(json["type"], "tip");
        assert_eq!(json["titleAlign"], "center");
        assert_eq!(json["hideTitle"], false);

        let back: BlockNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_block_node_defaults_when_missing() {
        let json = r##"{"kind":"color-block","color":"#ff0000"}"##;
        let node: BlockNode = serde_json::from_str(json).unwrap();
        assert!(node.is_color_block());
        assert_eq!(node.content_align, Alignment::Left);
        assert!(node.content.is_empty());
    }

    #[test]
    fn test_document_json_shape() {
        let json = r#"{
            "mode": "multi-column",
            "widths": ["2", "1"],
            "layout": {
                "style": "simple-box",
                "columns": [{"type": "col-blue", "title": "A"}]
            }
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        match doc {
            Document::MultiColumn(multi) => {
                assert_eq!(multi.widths, vec!["2", "1"]);
                assert_eq!(multi.layout.style(), ColumnStyle::SimpleBox);
                assert_eq!(multi.layout.len(), 1);
            }
            other => panic!("expected multi-column, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_width_layout() {
        assert_eq!(parse_width_layout(" 2  1 1 "), vec!["2", "1", "1"]);
        assert!(parse_width_layout("   ").is_empty());
    }

    #[test]
    fn test_modifiers_ignored_on_color_block() {
        let node = BlockNode::color_block("#112233")
            .with_hidden(true, true)
            .with_collapse(Collapse::Open);
        assert!(node.header().is_none());
        assert_eq!(node.kind_label(), "Color Block");
    }
}
