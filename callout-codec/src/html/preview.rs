//! Preview rendering (callout markdown → callout HTML)
//!
//! Markdown is parsed with comrak. Every block quote whose first line looks like a
//! callout header (`[!type|metadata]+ Title`) is emitted as the markup a note host
//! renders for callouts:
//!
//! ```text
//! <div class="callout" data-callout="note" data-callout-metadata="c-left">
//!   <div class="callout-title">
//!     <div class="callout-icon"></div>
//!     <div class="callout-title-inner">Title</div>
//!   </div>
//!   <div class="callout-content">...</div>
//! </div>
//! ```
//!
//! Everything else goes through comrak's own HTML renderer. The result is undecorated;
//! run it through [`decorate_html`](super::decorate_html) to apply the modifiers.

use crate::error::{CodecError, Result};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{format_html, parse_document, Arena, ComrakOptions};
use tracing::debug;

/// How the preview is packaged
#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    /// Wrap the fragment in a complete HTML page
    pub standalone: bool,
    /// Page title (standalone only)
    pub title: Option<String>,
    /// Extra CSS for the page, usually the generated stylesheet (standalone only)
    pub stylesheet: Option<String>,
    /// Class for the page body, e.g. `callouts-style-borderless` (standalone only)
    pub body_class: Option<String>,
}

impl PreviewOptions {
    pub fn standalone() -> Self {
        Self {
            standalone: true,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(css.into());
        self
    }

    pub fn with_body_class(mut self, class: Option<String>) -> Self {
        self.body_class = class;
        self
    }
}

/// A parsed `[!type|metadata]fold title` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub callout_type: String,
    pub metadata: Option<String>,
    pub fold: Option<char>,
    pub title: String,
}

impl HeaderLine {
    /// Parse a header line; `None` when the line is not a callout header.
    ///
    /// The type is lowercased, as the host does.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim_start().strip_prefix("[!")?;
        let close = rest.find(']')?;
        let (inside, after) = (&rest[..close], &rest[close + 1..]);

        let (callout_type, metadata) = match inside.split_once('|') {
            Some((callout_type, metadata)) => (callout_type, Some(metadata.to_string())),
            None => (inside, None),
        };
        let callout_type = callout_type.trim().to_lowercase();
        if callout_type.is_empty() {
            return None;
        }

        let (fold, title) = match after.chars().next() {
            Some(c @ ('+' | '-')) => (Some(c), &after[1..]),
            _ => (None, after),
        };

        Some(Self {
            callout_type,
            metadata,
            fold,
            title: title.trim().to_string(),
        })
    }

    /// Title shown by the host: the given one, or the capitalized type
    pub fn display_title(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        let mut chars = self.callout_type.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Render callout markdown to HTML
pub fn render_preview(markdown: &str, options: &PreviewOptions) -> Result<String> {
    let arena = Arena::new();
    let comrak_options = default_comrak_options();
    let root = parse_document(&arena, markdown, &comrak_options);

    let mut body = String::new();
    let mut callouts = 0usize;
    for node in root.children() {
        render_block(node, &comrak_options, &mut body, &mut callouts)?;
    }
    debug!(callouts, bytes = body.len(), "rendered callout preview");

    if options.standalone {
        Ok(wrap_in_document(&body, options))
    } else {
        Ok(body)
    }
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

fn render_block<'a>(
    node: &'a AstNode<'a>,
    options: &ComrakOptions,
    out: &mut String,
    callouts: &mut usize,
) -> Result<()> {
    if !matches!(node.data.borrow().value, NodeValue::BlockQuote) {
        return render_with_comrak(node, options, out);
    }

    match take_header(node) {
        Some(header) => {
            *callouts += 1;
            render_callout(node, &header, options, out, callouts)
        }
        None => {
            out.push_str("<blockquote>\n");
            for child in node.children() {
                render_block(child, options, out, callouts)?;
            }
            out.push_str("</blockquote>\n");
            Ok(())
        }
    }
}

fn render_callout<'a>(
    node: &'a AstNode<'a>,
    header: &HeaderLine,
    options: &ComrakOptions,
    out: &mut String,
    callouts: &mut usize,
) -> Result<()> {
    let mut classes = String::from("callout");
    let mut attrs = format!(r#" data-callout="{}""#, html_escape(&header.callout_type));
    if let Some(metadata) = &header.metadata {
        attrs.push_str(&format!(
            r#" data-callout-metadata="{}""#,
            html_escape(metadata)
        ));
    }
    if let Some(fold) = header.fold {
        attrs.push_str(&format!(r#" data-callout-fold="{fold}""#));
        classes.push_str(" is-collapsible");
        if fold == '-' {
            classes.push_str(" is-collapsed");
        }
    }

    out.push_str(&format!(
        "<div class=\"{classes}\"{attrs}>\n\
         <div class=\"callout-title\">\n\
         <div class=\"callout-icon\"></div>\n\
         <div class=\"callout-title-inner\">{}</div>\n\
         </div>\n\
         <div class=\"callout-content\">\n",
        html_escape(&header.display_title())
    ));
    for child in node.children() {
        render_block(child, options, out, callouts)?;
    }
    out.push_str("</div>\n</div>\n");
    Ok(())
}

/// Detach the header line from a block quote and parse it.
///
/// The quote is left untouched when its first line is not a callout header.
fn take_header<'a>(quote: &'a AstNode<'a>) -> Option<HeaderLine> {
    let paragraph = quote.first_child()?;
    if !matches!(paragraph.data.borrow().value, NodeValue::Paragraph) {
        return None;
    }

    let mut line = String::new();
    let mut consumed = Vec::new();
    for inline in paragraph.children() {
        consumed.push(inline);
        if matches!(
            inline.data.borrow().value,
            NodeValue::SoftBreak | NodeValue::LineBreak
        ) {
            break;
        }
        collect_text_content(inline, &mut line);
    }

    let header = HeaderLine::parse(&line)?;
    for inline in consumed {
        inline.detach();
    }
    if paragraph.first_child().is_none() {
        paragraph.detach();
    }
    Some(header)
}

/// Plain text of an inline subtree
fn collect_text_content<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, out);
            }
        }
    }
}

fn render_with_comrak<'a>(
    node: &'a AstNode<'a>,
    options: &ComrakOptions,
    out: &mut String,
) -> Result<()> {
    let mut buffer = Vec::new();
    format_html(node, options, &mut buffer)
        .map_err(|e| CodecError::Render(format!("comrak rendering failed: {e}")))?;
    let html = String::from_utf8(buffer)
        .map_err(|e| CodecError::Render(format!("UTF-8 conversion failed: {e}")))?;
    out.push_str(&html);
    Ok(())
}

fn wrap_in_document(body_html: &str, options: &PreviewOptions) -> String {
    let baseline_css = include_str!("../../css/preview.css");
    let custom_css = options.stylesheet.as_deref().unwrap_or("");
    let title = html_escape(options.title.as_deref().unwrap_or("Callout preview"));
    let body_attrs = options
        .body_class
        .as_deref()
        .map(|class| format!(r#" class="{}""#, html_escape(class)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="callouts">
  <title>{title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body{body_attrs}>
<div class="markdown-preview-view">
{body_html}
</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
