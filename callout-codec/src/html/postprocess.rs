//! Rendered-callout decoration (HTML → HTML)
//!
//! Walks a rendered page, finds every `.callout` element and applies its
//! [`Decoration`]: alignment classes, hidden title and icon, and the flex layout of a
//! multi-column container. Decoration only ever adds classes and overwrites single
//! style properties, so running it twice gives the same page.
//!
//! Input without an `<html>` element is treated as a fragment and comes back as one.

use super::decoder::{format_weight, Decoration, MULTI_COLUMN_CONTENT_CLASS};
use crate::error::{CodecError, Result};
use html5ever::tendril::TendrilSink;
use html5ever::{
    local_name, ns, parse_document, parse_fragment, serialize, serialize::SerializeOpts,
    serialize::TraversalScope, Attribute, LocalName, QualName,
};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use tracing::debug;

const CALLOUT_CLASS: &str = "callout";
const TITLE_CLASS: &str = "callout-title";
const TITLE_INNER_CLASS: &str = "callout-title-inner";
const ICON_CLASS: &str = "callout-icon";
const CONTENT_CLASS: &str = "callout-content";

/// Decorate every callout in `html`
pub fn decorate_html(html: &str) -> Result<String> {
    let full_document = is_full_document(html);
    let dom = if full_document {
        parse_document(RcDom::default(), Default::default()).one(html)
    } else {
        // Parsed in a body context so leading <style>, <link> or <meta> stay in place
        let context = QualName::new(None, ns!(html), local_name!("body"));
        parse_fragment(RcDom::default(), Default::default(), context, Vec::new(), false).one(html)
    };

    let mut decorated = 0usize;
    walk(&dom.document, &mut decorated);
    debug!(callouts = decorated, "decorated rendered callouts");

    if full_document {
        serialize_nodes(&[dom.document.clone()], TraversalScope::ChildrenOnly(None))
    } else {
        let root = find_element(&dom.document, "html")
            .ok_or_else(|| CodecError::Render("parsed fragment has no root".to_string()))?;
        serialize_nodes(&[root], TraversalScope::ChildrenOnly(None))
    }
}

/// Decorate a single callout element in place.
///
/// A callout without `data-callout` still gets the default alignment classes.
pub fn decorate_callout(callout: &Handle) {
    let callout_type = get_attr(callout, "data-callout").unwrap_or_default();
    let metadata = get_attr(callout, "data-callout-metadata");
    let decoration = Decoration::decode(&callout_type, metadata.as_deref());

    for class in decoration.container_classes() {
        add_class(callout, &class);
    }

    if decoration.hide_title {
        if let Some(inner) = find_header_part(callout, TITLE_INNER_CLASS) {
            set_style(&inner, "display", "none");
        }
    }
    if decoration.hide_icon {
        if let Some(icon) = find_header_part(callout, ICON_CLASS) {
            set_style(&icon, "display", "none");
        }
    }

    if decoration.multi_column {
        if let Some(content) = child_with_class(callout, CONTENT_CLASS) {
            add_class(&content, MULTI_COLUMN_CONTENT_CLASS);
            let columns: Vec<Handle> = content
                .children
                .borrow()
                .iter()
                .filter(|child| has_class(child, CALLOUT_CLASS))
                .cloned()
                .collect();
            for (index, column) in columns.iter().enumerate() {
                if let Some(weight) = decoration.column_weight(index) {
                    set_style(column, "flex-grow", &format_weight(weight));
                    set_style(column, "flex-basis", "0");
                }
            }
        }
    }
}

fn walk(node: &Handle, decorated: &mut usize) {
    if has_class(node, CALLOUT_CLASS) {
        decorate_callout(node);
        *decorated += 1;
    }
    for child in node.children.borrow().iter() {
        walk(child, decorated);
    }
}

fn is_full_document(html: &str) -> bool {
    let lowered = html.to_ascii_lowercase();
    lowered.contains("<html") || lowered.trim_start().starts_with("<!doctype")
}

/// Title inner or icon of this callout's own header, never a nested callout's
fn find_header_part(callout: &Handle, class: &str) -> Option<Handle> {
    let title = child_with_class(callout, TITLE_CLASS)?;
    find_descendant(&title, class)
}

fn find_descendant(node: &Handle, class: &str) -> Option<Handle> {
    for child in node.children.borrow().iter() {
        if has_class(child, class) {
            return Some(child.clone());
        }
        if has_class(child, CALLOUT_CLASS) {
            continue;
        }
        if let Some(found) = find_descendant(child, class) {
            return Some(found);
        }
    }
    None
}

fn child_with_class(node: &Handle, class: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| has_class(child, class))
        .cloned()
}

fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if &*name.local == tag {
            return Some(node.clone());
        }
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

pub(crate) fn get_attr(node: &Handle, attr: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

pub(crate) fn set_attr(node: &Handle, attr: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        if let Some(existing) = attrs.iter_mut().find(|a| &*a.name.local == attr) {
            existing.value = value.to_string().into();
        } else {
            attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr)),
                value: value.to_string().into(),
            });
        }
    }
}

pub(crate) fn has_class(node: &Handle, class: &str) -> bool {
    get_attr(node, "class")
        .map(|classes| classes.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

pub(crate) fn add_class(node: &Handle, class: &str) {
    if !matches!(node.data, NodeData::Element { .. }) || has_class(node, class) {
        return;
    }
    let classes = match get_attr(node, "class") {
        Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
        _ => class.to_string(),
    };
    set_attr(node, "class", &classes);
}

/// Set one inline style property, replacing an earlier value of the same property
pub(crate) fn set_style(node: &Handle, property: &str, value: &str) {
    let existing = get_attr(node, "style").unwrap_or_default();
    let declaration = format!("{property}: {value}");
    let mut replaced = false;
    let mut declarations: Vec<String> = existing
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(|decl| match decl.split_once(':') {
            Some((name, _)) if name.trim() == property => {
                replaced = true;
                declaration.clone()
            }
            _ => decl.to_string(),
        })
        .collect();
    if !replaced {
        declarations.push(declaration);
    }
    set_attr(node, "style", &format!("{};", declarations.join("; ")));
}

fn serialize_nodes(nodes: &[Handle], scope: TraversalScope) -> Result<String> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: scope,
        ..Default::default()
    };

    for node in nodes {
        let serializable = SerializableHandle::from(node.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| CodecError::Render(format!("HTML serialization failed: {e}")))?;
    }

    String::from_utf8(output)
        .map_err(|e| CodecError::Render(format!("UTF-8 conversion failed: {e}")))
}
