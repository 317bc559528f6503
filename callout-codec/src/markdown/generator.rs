//! Markdown generation (editing model → callout markdown)
//!
//! Output shape for a standard document:
//!
//! ```text
//! > [!note|c-left] Parent title
//! > Parent content
//! >
//! >> [!tip|c-center|t-right]+ Child title
//! >> Child content
//! ```
//!
//! Multi-column documents wrap their columns in a `[!multi-column]` container and end
//! with a newline. Every block goes through [`normalize`] first, and every color
//! block registers its synthetic type in the pass's [`TemporaryStyles`].

use super::modifiers::{encode_widths, Modifiers};
use super::registry::TemporaryStyles;
use crate::model::catalog::{ColorResolver, BLANK_CONTAINER_TYPE, MULTI_COLUMN_TYPE};
use crate::model::nodes::{
    Alignment, BlockKind, BlockNode, ColumnLayout, ColumnSpec, Document, MultiColumnDocument,
    StandardDocument,
};
use crate::model::normalize;
use tracing::debug;

const PARENT_INDENT: &str = ">";
const CHILD_INDENT: &str = ">>";
const SIBLING_SEPARATOR: &str = "\n>\n";

/// Hidden titles that keep their underline still need a header row to draw it on.
const PLACEHOLDER_TITLE: &str = "  ";

/// Serialize a document. Empty documents produce an empty string.
///
/// `styles` is cleared before anything is generated.
pub fn generate(
    doc: &Document,
    resolver: &dyn ColorResolver,
    styles: &mut TemporaryStyles,
) -> String {
    styles.clear();

    let markdown = match doc {
        Document::Standard(standard) => generate_standard(standard, resolver, styles),
        Document::MultiColumn(multi) => generate_multi_column(multi, resolver, styles),
    };

    debug!(
        bytes = markdown.len(),
        temporary_styles = styles.len(),
        "generated callout markdown"
    );
    markdown
}

fn generate_standard(
    doc: &StandardDocument,
    resolver: &dyn ColorResolver,
    styles: &mut TemporaryStyles,
) -> String {
    let Some(parent) = &doc.parent else {
        return String::new();
    };

    let mut blocks = Vec::with_capacity(doc.children.len() + 1);
    blocks.push(format_block(parent, PARENT_INDENT, resolver, styles));
    for child in &doc.children {
        blocks.push(format_block(child, CHILD_INDENT, resolver, styles));
    }
    blocks.join(SIBLING_SEPARATOR)
}

fn generate_multi_column(
    doc: &MultiColumnDocument,
    resolver: &dyn ColorResolver,
    styles: &mut TemporaryStyles,
) -> String {
    if doc.layout.is_empty() {
        return String::new();
    }

    let columns: Vec<String> = match &doc.layout {
        ColumnLayout::ColoredUnderline(columns) => columns
            .iter()
            .map(|column| format_simple_column(column, &column.type_name))
            .collect(),
        ColumnLayout::SimpleBox(columns) => columns
            .iter()
            .map(|column| format_simple_column(column, BLANK_CONTAINER_TYPE))
            .collect(),
        ColumnLayout::ComponentInColumn(blocks) => blocks
            .iter()
            .map(|block| format_block(block, CHILD_INDENT, resolver, styles))
            .collect(),
    };

    format!(
        "{PARENT_INDENT} [!{MULTI_COLUMN_TYPE}{}]\n{}\n",
        encode_widths(&doc.widths),
        columns.join(SIBLING_SEPARATOR)
    )
}

/// One callout or color block at the given quote depth
fn format_block(
    node: &BlockNode,
    indent: &str,
    resolver: &dyn ColorResolver,
    styles: &mut TemporaryStyles,
) -> String {
    let node = normalize(node.clone(), resolver);
    let content = quote_content(&node.content, indent);

    let (type_name, modifiers, collapse, title) = match &node.kind {
        BlockKind::Callout(header) => {
            let modifiers = Modifiers {
                hide_title: header.hide_title,
                hide_icon: header.hide_icon,
                content_align: node.content_align,
                title_align: node.title_align,
                no_underline: node.no_underline,
            };
            let title = header_title(&header.title, header.hide_title, node.no_underline);
            (
                header.type_name.clone(),
                modifiers,
                header.collapse.token(),
                title,
            )
        }
        BlockKind::ColorBlock(fill) => {
            let modifiers = Modifiers {
                hide_title: true,
                hide_icon: true,
                content_align: node.content_align,
                title_align: Alignment::Left,
                no_underline: node.no_underline,
            };
            let title = header_title("", true, node.no_underline);
            (styles.register(&fill.color), modifiers, "", title)
        }
    };

    format!(
        "{indent} [!{type_name}{}]{collapse}{title}\n{indent} {content}",
        modifiers.encode()
    )
}

/// A column of the colored-underline or simple-box layouts
fn format_simple_column(column: &ColumnSpec, type_name: &str) -> String {
    let modifiers = Modifiers {
        hide_title: false,
        hide_icon: false,
        content_align: column.content_align,
        title_align: column.title_align,
        no_underline: column.no_underline,
    };

    let title_line = match (column.no_title, column.no_underline) {
        (false, _) => format!("{CHILD_INDENT} ### {}\n", column.title),
        (true, false) => format!("{CHILD_INDENT} ###{PLACEHOLDER_TITLE}\n"),
        (true, true) => String::new(),
    };

    format!(
        "{CHILD_INDENT} [!{type_name}{}]\n{title_line}{CHILD_INDENT} {}",
        modifiers.encode(),
        quote_content(&column.content, CHILD_INDENT)
    )
}

/// Text written after the header brackets
fn header_title(title: &str, hidden: bool, no_underline: bool) -> String {
    if hidden {
        if no_underline {
            String::new()
        } else {
            PLACEHOLDER_TITLE.to_string()
        }
    } else if title.is_empty() {
        String::new()
    } else {
        format!(" {title}")
    }
}

/// Trim content and continue every following line at the same quote depth
fn quote_content(content: &str, indent: &str) -> String {
    content.trim().replace('\n', &format!("\n{indent} "))
}
