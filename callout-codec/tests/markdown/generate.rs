//! Generator output for representative documents

use callout_codec::model::catalog::Palette;
use callout_codec::{
    generate, Alignment, BlockNode, Collapse, ColumnLayout, ColumnSpec, CustomCalloutDefinition,
    Document, MultiColumnDocument, StandardDocument, TemporaryStyles,
};
use insta::assert_snapshot;

fn standard(parent: BlockNode, children: Vec<BlockNode>) -> Document {
    Document::Standard(StandardDocument {
        parent: Some(parent),
        children,
    })
}

fn multi(widths: &[&str], layout: ColumnLayout) -> Document {
    Document::MultiColumn(MultiColumnDocument {
        widths: widths.iter().map(|w| w.to_string()).collect(),
        layout,
    })
}

fn run(doc: &Document) -> String {
    let definitions = vec![CustomCalloutDefinition::new("project", "rocket", "#3498DB")];
    let palette = Palette::new(&definitions);
    let mut styles = TemporaryStyles::new();
    generate(doc, &palette, &mut styles)
}

#[test]
fn test_parent_with_children() {
    let doc = standard(
        BlockNode::callout("note", "Parent").with_content("Parent body"),
        vec![
            BlockNode::callout("tip", "Child")
                .with_collapse(Collapse::Open)
                .with_title_align(Alignment::Right)
                .with_content_align(Alignment::Center)
                .with_content("Child body\nsecond line"),
            BlockNode::color_block("#FF8800")
                .with_no_underline(true)
                .with_content("Colored"),
        ],
    );

    assert_snapshot!(run(&doc), @r"
    > [!note|c-left] Parent
    > Parent body
    >
    >> [!tip|c-center|t-right]+ Child
    >> Child body
    >> second line
    >
    >> [!sc-temp-ff8800|no-title|no-icon|c-left|no-ul]
    >> Colored
    ");
}

#[test]
fn test_headless_custom_callout_takes_custom_color() {
    let doc = standard(
        BlockNode::callout("project", "Hidden")
            .with_hidden(true, true)
            .with_no_underline(true)
            .with_content("Body"),
        vec![],
    );

    assert_snapshot!(run(&doc), @r"
    > [!sc-temp-3498db|no-title|no-icon|c-left|no-ul]
    > Body
    ");
}

#[test]
fn test_component_columns_with_widths() {
    let doc = multi(
        &["2", "1"],
        ColumnLayout::ComponentInColumn(vec![
            BlockNode::callout("note", "Left").with_content("- a\n- b"),
            BlockNode::callout("warning", "")
                .with_collapse(Collapse::Closed)
                .with_content("careful"),
        ]),
    );

    assert_snapshot!(run(&doc).trim_end(), @r"
    > [!multi-column|widths=2_1]
    >> [!note|c-left] Left
    >> - a
    >> - b
    >
    >> [!warning|c-left]-
    >> careful
    ");
}

#[test]
fn test_colored_underline_columns() {
    let mut first = ColumnSpec::new("col-red", "Todo").with_content("- one");
    first.title_align = Alignment::Center;
    let mut second = ColumnSpec::new("col-green", "Done").with_content("- two");
    second.content_align = Alignment::Right;

    let doc = multi(&[], ColumnLayout::ColoredUnderline(vec![first, second]));

    assert_snapshot!(run(&doc).trim_end(), @r"
    > [!multi-column]
    >> [!col-red|c-left|t-center]
    >> ### Todo
    >> - one
    >
    >> [!col-green|c-right]
    >> ### Done
    >> - two
    ");
}

#[test]
fn test_multi_column_output_ends_with_newline() {
    let doc = multi(
        &[],
        ColumnLayout::SimpleBox(vec![ColumnSpec::new("col-blue", "Box").with_content("x")]),
    );
    let markdown = run(&doc);
    assert!(markdown.ends_with("x\n"));
    assert!(markdown.contains(">> [!blank-container|c-left]"));
}

#[test]
fn test_generation_is_deterministic() {
    let doc = standard(
        BlockNode::callout("note", "P").with_content("p"),
        vec![
            BlockNode::color_block("#123456").with_content("a"),
            BlockNode::callout("bug", "B").with_hidden(false, true),
        ],
    );
    assert_eq!(run(&doc), run(&doc));
}

#[test]
fn test_same_color_shares_temporary_type() {
    let doc = standard(
        BlockNode::color_block("#00ff00").with_content("one"),
        vec![
            BlockNode::color_block("#00FF00").with_content("two"),
            BlockNode::color_block("#0000ff").with_content("three"),
        ],
    );

    let mut styles = TemporaryStyles::new();
    let markdown = generate(&doc, &|_: &str| "#000000".to_string(), &mut styles);

    assert_eq!(markdown.matches("[!sc-temp-00ff00|").count(), 2);
    assert_eq!(styles.len(), 2);
    let names: Vec<&str> = styles.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["sc-temp-00ff00", "sc-temp-0000ff"]);
}

#[test]
fn test_empty_documents() {
    assert_eq!(run(&Document::default()), "");
    assert_eq!(run(&multi(&["1"], ColumnLayout::ComponentInColumn(vec![]))), "");
}
