//! Generated markdown parsed back with comrak
//!
//! The host only sees callouts where the block quote structure is right: one outer
//! quote, one nested quote per child or column.

use callout_codec::{
    generate, BlockNode, ColumnLayout, ColumnSpec, Document, MultiColumnDocument,
    StandardDocument, TemporaryStyles,
};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

fn resolver(_: &str) -> String {
    "#448aff".to_string()
}

fn is_block_quote<'a>(node: &'a AstNode<'a>) -> bool {
    matches!(node.data.borrow().value, NodeValue::BlockQuote)
}

/// Number of top-level quotes, and nested quotes inside the first one
fn quote_shape(markdown: &str) -> (usize, usize) {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &ComrakOptions::default());

    let top: Vec<_> = root.children().filter(|n| is_block_quote(n)).collect();
    let nested = top
        .first()
        .map(|quote| quote.children().filter(|n| is_block_quote(n)).count())
        .unwrap_or(0);
    (top.len(), nested)
}

fn run(doc: &Document) -> String {
    let mut styles = TemporaryStyles::new();
    generate(doc, &resolver, &mut styles)
}

#[test]
fn test_children_are_nested_quotes() {
    let doc = Document::Standard(StandardDocument {
        parent: Some(BlockNode::callout("note", "P").with_content("line one\nline two")),
        children: vec![
            BlockNode::callout("tip", "A").with_content("a"),
            BlockNode::color_block("#ff0000").with_content("b\nc"),
            BlockNode::callout("bug", "C").with_content("- list\n- items"),
        ],
    });
    assert_eq!(quote_shape(&run(&doc)), (1, 3));
}

#[test]
fn test_columns_are_nested_quotes() {
    let columns = (0..4)
        .map(|i| ColumnSpec::new("col-blue", format!("Column {i}")).with_content("- Item"))
        .collect();
    let doc = Document::MultiColumn(MultiColumnDocument {
        widths: vec!["2".to_string(), "1".to_string()],
        layout: ColumnLayout::ColoredUnderline(columns),
    });
    assert_eq!(quote_shape(&run(&doc)), (1, 4));
}

#[test]
fn test_column_title_is_a_heading() {
    let doc = Document::MultiColumn(MultiColumnDocument {
        widths: vec![],
        layout: ColumnLayout::SimpleBox(vec![ColumnSpec::new("x", "Heading").with_content("body")]),
    });
    let markdown = run(&doc);

    let arena = Arena::new();
    let root = parse_document(&arena, &markdown, &ComrakOptions::default());
    let has_h3 = root.descendants().any(|node| {
        matches!(&node.data.borrow().value, NodeValue::Heading(heading) if heading.level == 3)
    });
    assert!(has_h3);
}
