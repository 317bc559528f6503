//! Full pipeline: document → markdown → preview HTML → decorated HTML

use callout_codec::{
    decorate_html, generate, render_preview, Alignment, BlockNode, ColumnLayout, Document,
    MultiColumnDocument, PreviewOptions, StandardDocument, TemporaryStyles,
};

fn resolver(_: &str) -> String {
    "#448aff".to_string()
}

fn pipeline(doc: &Document) -> String {
    let mut styles = TemporaryStyles::new();
    let markdown = generate(doc, &resolver, &mut styles);
    let html = render_preview(&markdown, &PreviewOptions::default()).unwrap();
    decorate_html(&html).unwrap()
}

fn columns(widths: &[&str], count: usize) -> Document {
    Document::MultiColumn(MultiColumnDocument {
        widths: widths.iter().map(|w| w.to_string()).collect(),
        layout: ColumnLayout::ComponentInColumn(
            (0..count)
                .map(|i| BlockNode::callout("note", format!("Column {i}")).with_content("- Item"))
                .collect(),
        ),
    })
}

/// Every `flex-grow` value in document order
fn flex_grows(html: &str) -> Vec<String> {
    html.split("flex-grow: ")
        .skip(1)
        .map(|rest| rest.split(';').next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_widths_cycle_over_columns() {
    let html = pipeline(&columns(&["2", "1"], 4));
    assert_eq!(flex_grows(&html), vec!["2", "1", "2", "1"]);
    assert_eq!(html.matches("flex-basis: 0").count(), 4);
    assert!(html.contains("mcm-container"));
    assert!(html.contains("mcm-content-container"));
}

#[test]
fn test_non_numeric_width_weighs_one() {
    let html = pipeline(&columns(&["abc", "3"], 3));
    assert_eq!(flex_grows(&html), vec!["1", "3", "1"]);
}

#[test]
fn test_container_without_widths_gets_no_flex_styles() {
    let html = pipeline(&columns(&[], 2));
    assert!(flex_grows(&html).is_empty());
    assert!(html.contains("mcm-content-container"));
}

#[test]
fn test_headless_block_is_hidden_and_marked() {
    let doc = Document::Standard(StandardDocument {
        parent: Some(
            BlockNode::callout("note", "Gone")
                .with_hidden(true, true)
                .with_content("Only content"),
        ),
        children: vec![],
    });
    let html = pipeline(&doc);

    assert!(html.contains("sc-headless"));
    assert!(html.contains(r#"<div class="callout-icon" style="display: none;">"#));
    assert!(html.contains(r#"<div class="callout-title-inner" style="display: none;">"#));
    assert!(html.contains("<p>Only content</p>"));
}

#[test]
fn test_alignment_reaches_nested_callouts() {
    let doc = Document::Standard(StandardDocument {
        parent: Some(BlockNode::callout("note", "P").with_content("p")),
        children: vec![BlockNode::callout("tip", "C")
            .with_title_align(Alignment::Center)
            .with_content_align(Alignment::Right)
            .with_content("c")],
    });
    let html = pipeline(&doc);

    assert!(html.contains("callout sc-title-align-left sc-content-align-left"));
    assert!(html.contains("callout sc-title-align-center sc-content-align-right"));
}

#[test]
fn test_hand_written_callout_gets_defaults() {
    let html = render_preview("> [!quote] Someone said", &PreviewOptions::default()).unwrap();
    let decorated = decorate_html(&html).unwrap();
    assert!(decorated.contains("sc-title-align-left sc-content-align-left"));
    assert!(!decorated.contains("display: none"));
}
