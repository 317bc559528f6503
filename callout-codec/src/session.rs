//! Editing session: the callout builder's state without its widgets
//!
//! A session holds both tabs at once, the standard parent/nested editor and the
//! multi-column editor, and turns whichever tab is active into a [`Document`].
//! Every visibility change goes through [`normalize`], so a block whose title and
//! icon are both hidden becomes a color block the moment it happens.

use crate::markdown::{generate, TemporaryStyles};
use crate::model::nodes::parse_width_layout;
use crate::model::{
    normalize, toggle_kind, Alignment, BlockKind, BlockNode, ColorResolver, ColumnLayout,
    ColumnSpec, ColumnStyle, Document, MultiColumnDocument, StandardDocument,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Column colors handed out by "add column", indexed by the current column count
const COLUMN_COLOR_CYCLE: [&str; 6] = ["pink", "green", "teal", "orange", "purple", "blue"];

const DEFAULT_COMPONENT_TYPE: &str = "note";
const DEFAULT_COLUMN_TYPE: &str = "col-blue";
const DEFAULT_COLUMN_CONTENT: &str = "- Item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionTab {
    #[default]
    Standard,
    MultiColumn,
}

/// What an "add" button creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Callout,
    ColorBlock,
}

impl ComponentKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "callout" => Some(Self::Callout),
            "color-block" => Some(Self::ColorBlock),
            _ => None,
        }
    }
}

/// A block-editor position in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Parent,
    Nested(usize),
    /// A component column (component-in-column style)
    Column(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    tab: SessionTab,
    parent: Option<BlockNode>,
    nested: Vec<BlockNode>,
    column_style: ColumnStyle,
    columns: Vec<ColumnSpec>,
    component_columns: Vec<BlockNode>,
    width_layout: String,
}

impl EditorSession {
    /// A fresh session as the builder opens: a parent note and one column of each kind
    pub fn new(resolver: &dyn ColorResolver) -> Self {
        Self {
            tab: SessionTab::Standard,
            parent: Some(
                BlockNode::callout(DEFAULT_COMPONENT_TYPE, "Master")
                    .with_content("Parent content."),
            ),
            nested: Vec::new(),
            column_style: ColumnStyle::ColoredUnderline,
            columns: vec![default_column()],
            component_columns: vec![new_component(
                ComponentKind::Callout,
                "Column 1",
                resolver,
            )],
            width_layout: String::new(),
        }
    }

    pub fn tab(&self) -> SessionTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: SessionTab) {
        self.tab = tab;
    }

    pub fn parent(&self) -> Option<&BlockNode> {
        self.parent.as_ref()
    }

    pub fn nested(&self) -> &[BlockNode] {
        &self.nested
    }

    pub fn column_style(&self) -> ColumnStyle {
        self.column_style
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn component_columns(&self) -> &[BlockNode] {
        &self.component_columns
    }

    pub fn width_layout(&self) -> &str {
        &self.width_layout
    }

    pub fn set_width_layout(&mut self, text: impl Into<String>) {
        self.width_layout = text.into();
    }

    pub fn add_parent(&mut self, kind: ComponentKind, resolver: &dyn ColorResolver) {
        self.parent = Some(new_component(kind, "Title", resolver));
    }

    /// Removing the parent discards the nested blocks with it
    pub fn remove_parent(&mut self) {
        self.parent = None;
        self.nested.clear();
    }

    pub fn add_nested(&mut self, kind: ComponentKind, resolver: &dyn ColorResolver) {
        let title = format!("Title {}", self.nested.len() + 1);
        self.nested.push(new_component(kind, &title, resolver));
    }

    pub fn remove_nested(&mut self, index: usize) -> Option<BlockNode> {
        (index < self.nested.len()).then(|| self.nested.remove(index))
    }

    /// Switch the multi-column look. Columns reset to a single default column.
    pub fn set_column_style(&mut self, style: ColumnStyle, resolver: &dyn ColorResolver) {
        self.column_style = style;
        self.columns = vec![default_column()];
        self.component_columns = vec![new_component(ComponentKind::Callout, "Column 1", resolver)];
    }

    /// Add a column for the current style. `kind` only matters for component columns.
    pub fn add_column(&mut self, kind: ComponentKind, resolver: &dyn ColorResolver) {
        match self.column_style {
            ColumnStyle::ComponentInColumn => {
                let title = format!("Column {}", self.component_columns.len() + 1);
                self.component_columns.push(new_component(kind, &title, resolver));
            }
            ColumnStyle::ColoredUnderline | ColumnStyle::SimpleBox => {
                let count = self.columns.len();
                let color = COLUMN_COLOR_CYCLE[count % COLUMN_COLOR_CYCLE.len()];
                let title = format!("Column {}", count + 1);
                let mut column = ColumnSpec::new(format!("col-{color}"), title)
                    .with_content(DEFAULT_COLUMN_CONTENT);
                column.title_align = Alignment::Center;
                self.columns.push(column);
            }
        }
    }

    /// Remove a column of the current style. The last column stays.
    pub fn remove_column(&mut self, index: usize) -> bool {
        let len = self.column_count();
        if len <= 1 || index >= len {
            return false;
        }
        match self.column_style {
            ColumnStyle::ComponentInColumn => {
                self.component_columns.remove(index);
            }
            ColumnStyle::ColoredUnderline | ColumnStyle::SimpleBox => {
                self.columns.remove(index);
            }
        }
        true
    }

    pub fn column_count(&self) -> usize {
        match self.column_style {
            ColumnStyle::ComponentInColumn => self.component_columns.len(),
            ColumnStyle::ColoredUnderline | ColumnStyle::SimpleBox => self.columns.len(),
        }
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut ColumnSpec> {
        self.columns.get_mut(index)
    }

    /// Move a nested block or a column of the current style one place up
    pub fn move_up(&mut self, slot: Slot) -> bool {
        match slot {
            Slot::Parent => false,
            Slot::Nested(index) => swap_up(&mut self.nested, index),
            Slot::Column(index) => match self.column_style {
                ColumnStyle::ComponentInColumn => swap_up(&mut self.component_columns, index),
                _ => swap_up(&mut self.columns, index),
            },
        }
    }

    pub fn move_down(&mut self, slot: Slot) -> bool {
        match slot {
            Slot::Parent => false,
            Slot::Nested(index) => self.move_up(Slot::Nested(index + 1)),
            Slot::Column(index) => self.move_up(Slot::Column(index + 1)),
        }
    }

    pub fn component(&self, slot: Slot) -> Option<&BlockNode> {
        match slot {
            Slot::Parent => self.parent.as_ref(),
            Slot::Nested(index) => self.nested.get(index),
            Slot::Column(index) => self.component_columns.get(index),
        }
    }

    pub fn component_mut(&mut self, slot: Slot) -> Option<&mut BlockNode> {
        match slot {
            Slot::Parent => self.parent.as_mut(),
            Slot::Nested(index) => self.nested.get_mut(index),
            Slot::Column(index) => self.component_columns.get_mut(index),
        }
    }

    /// Set the visibility toggles of a callout, converting it when both are on
    pub fn set_modifiers(
        &mut self,
        slot: Slot,
        hide_title: bool,
        hide_icon: bool,
        resolver: &dyn ColorResolver,
    ) -> bool {
        self.replace(slot, |node| {
            normalize(node.with_hidden(hide_title, hide_icon), resolver)
        })
    }

    /// The "switch between callout and color block" button
    pub fn toggle_kind(&mut self, slot: Slot, resolver: &dyn ColorResolver) -> bool {
        self.replace(slot, |node| toggle_kind(node, resolver))
    }

    fn replace(&mut self, slot: Slot, f: impl FnOnce(BlockNode) -> BlockNode) -> bool {
        let Some(node) = self.component_mut(slot) else {
            return false;
        };
        let updated = f(node.clone());
        if let BlockKind::ColorBlock(_) = updated.kind {
            debug!(?slot, "component is now a color block");
        }
        *node = updated;
        true
    }

    /// The document of the active tab
    pub fn document(&self) -> Document {
        match self.tab {
            SessionTab::Standard => Document::Standard(StandardDocument {
                parent: self.parent.clone(),
                children: self.nested.clone(),
            }),
            SessionTab::MultiColumn => {
                let layout = match self.column_style {
                    ColumnStyle::ColoredUnderline => {
                        ColumnLayout::ColoredUnderline(self.columns.clone())
                    }
                    ColumnStyle::SimpleBox => ColumnLayout::SimpleBox(self.columns.clone()),
                    ColumnStyle::ComponentInColumn => {
                        ColumnLayout::ComponentInColumn(self.component_columns.clone())
                    }
                };
                Document::MultiColumn(MultiColumnDocument {
                    widths: parse_width_layout(&self.width_layout),
                    layout,
                })
            }
        }
    }

    /// Markdown for the active tab; `styles` receives this pass's color-block types
    pub fn markdown(&self, resolver: &dyn ColorResolver, styles: &mut TemporaryStyles) -> String {
        generate(&self.document(), resolver, styles)
    }
}

fn default_column() -> ColumnSpec {
    let mut column =
        ColumnSpec::new(DEFAULT_COLUMN_TYPE, "Column 1").with_content(DEFAULT_COLUMN_CONTENT);
    column.title_align = Alignment::Center;
    column
}

fn new_component(kind: ComponentKind, title: &str, resolver: &dyn ColorResolver) -> BlockNode {
    match kind {
        ComponentKind::Callout => {
            BlockNode::callout(DEFAULT_COMPONENT_TYPE, title).with_content(DEFAULT_COLUMN_CONTENT)
        }
        ComponentKind::ColorBlock => {
            BlockNode::color_block(resolver.color_of(DEFAULT_COMPONENT_TYPE))
                .with_content(DEFAULT_COLUMN_CONTENT)
        }
    }
}

fn swap_up<T>(items: &mut [T], index: usize) -> bool {
    if index == 0 || index >= items.len() {
        return false;
    }
    items.swap(index - 1, index);
    true
}
