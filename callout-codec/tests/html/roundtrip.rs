//! Generated headers decode back to the presentation they were generated from

use callout_codec::html::HeaderLine;
use callout_codec::{
    generate, Alignment, BlockNode, Decoration, Document, StandardDocument, TemporaryStyles,
};
use proptest::prelude::*;

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Left),
        Just(Alignment::Center),
        Just(Alignment::Right),
    ]
}

fn callout_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["note", "tip", "warning", "bug", "quote", "todo"])
}

fn header_of(node: BlockNode) -> (HeaderLine, Decoration) {
    let doc = Document::Standard(StandardDocument {
        parent: Some(node.with_content("body")),
        children: vec![],
    });
    let mut styles = TemporaryStyles::new();
    let markdown = generate(&doc, &|_: &str| "#448aff".to_string(), &mut styles);

    let first_line = markdown.lines().next().unwrap_or_default();
    let header = HeaderLine::parse(first_line.trim_start_matches('>')).unwrap();
    let decoration = Decoration::decode(&header.callout_type, header.metadata.as_deref());
    (header, decoration)
}

proptest! {
    #[test]
    fn test_presentation_survives_generation(
        type_name in callout_type(),
        title in "[A-Za-z ]{0,12}",
        hide_title in any::<bool>(),
        hide_icon in any::<bool>(),
        title_align in alignment(),
        content_align in alignment(),
    ) {
        let node = BlockNode::callout(type_name, title)
            .with_hidden(hide_title, hide_icon)
            .with_title_align(title_align)
            .with_content_align(content_align);
        let (header, decoration) = header_of(node);

        prop_assert_eq!(decoration.hide_title, hide_title);
        prop_assert_eq!(decoration.hide_icon, hide_icon);
        prop_assert_eq!(decoration.content_align, content_align);

        if hide_title && hide_icon {
            // Headless blocks become color blocks with a synthetic type
            prop_assert!(decoration.is_headless());
            prop_assert!(header.callout_type.starts_with("sc-temp-"));
        } else {
            prop_assert_eq!(header.callout_type.as_str(), type_name);
            prop_assert_eq!(decoration.title_align, title_align);
        }
    }

    #[test]
    fn test_exactly_one_class_per_alignment_kind(
        metadata in prop::option::of("(no-title|no-icon|c-left|c-center|c-right|t-center|t-right|no-ul|x)(\\|(no-title|no-icon|c-center|c-right|t-center|t-right|x)){0,5}"),
    ) {
        let classes = Decoration::decode("note", metadata.as_deref()).container_classes();
        let title_classes = classes.iter().filter(|c| c.starts_with("sc-title-align-")).count();
        let content_classes = classes.iter().filter(|c| c.starts_with("sc-content-align-")).count();
        prop_assert_eq!(title_classes, 1);
        prop_assert_eq!(content_classes, 1);
    }

    #[test]
    fn test_color_blocks_always_decode_headless(
        red in 0u8..=255, green in 0u8..=255, blue in 0u8..=255,
        content_align in alignment(),
    ) {
        let color = format!("#{red:02x}{green:02x}{blue:02x}");
        let node = BlockNode::color_block(&color).with_content_align(content_align);
        let (header, decoration) = header_of(node);

        prop_assert_eq!(header.callout_type, format!("sc-temp-{}", &color[1..]));
        prop_assert!(decoration.is_headless());
        prop_assert_eq!(decoration.content_align, content_align);
    }
}
