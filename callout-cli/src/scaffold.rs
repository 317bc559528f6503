//! `scaffold`: a starter document built through an editing session, the way the
//! callout builder builds one

use callout_codec::{
    ColorResolver, ColumnStyle, ComponentKind, EditorSession, SessionTab, TemporaryStyles,
};
use clap::ArgMatches;

pub fn run(matches: &ArgMatches, resolver: &dyn ColorResolver) -> Result<String, String> {
    let kind = matches
        .get_one::<String>("kind")
        .and_then(|kind| ComponentKind::parse(kind))
        .ok_or("unknown component kind")?;
    let nested = matches.get_one::<usize>("nested").copied().unwrap_or(0);

    let mut session = EditorSession::new(resolver);

    if let Some(columns) = matches.get_one::<usize>("columns").copied() {
        if columns == 0 {
            return Err("a multi-column document needs at least one column".to_string());
        }
        let style = matches
            .get_one::<String>("style")
            .and_then(|style| ColumnStyle::parse(style))
            .ok_or("unknown column style")?;

        session.set_tab(SessionTab::MultiColumn);
        session.set_column_style(style, resolver);
        while session.column_count() < columns {
            session.add_column(kind, resolver);
        }
        if let Some(widths) = matches.get_one::<String>("widths") {
            session.set_width_layout(widths.as_str());
        }
    } else {
        if kind == ComponentKind::ColorBlock {
            session.add_parent(kind, resolver);
        }
        for _ in 0..nested {
            session.add_nested(kind, resolver);
        }
    }

    if matches.get_flag("markdown") {
        let mut styles = TemporaryStyles::new();
        let mut markdown = session.markdown(resolver, &mut styles);
        if !markdown.ends_with('\n') {
            markdown.push('\n');
        }
        return Ok(markdown);
    }

    let mut json = serde_json::to_string_pretty(&session.document()).map_err(|e| e.to_string())?;
    json.push('\n');
    Ok(json)
}
