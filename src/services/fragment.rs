//! Fragment rendering: one note as a self-contained HTML snippet.
//!
//! The snippet is what floating panels display. It carries the markers the
//! client looks for: the `h2` title inside `.note-fragment`, related links
//! (`a.open-related[data-slug]`) and the inner close control
//! (`button.close-fragment[data-action="close"]`).

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use pulldown_cmark::{Event, Options, Parser, html};

use crate::services::notes::Note;

/// Escape text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    v_htmlescape::escape(raw).to_string()
}

/// Render markdown to HTML, dropping raw HTML from the source.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render the fragment for `note` with links to `related` notes.
#[must_use]
pub fn render_fragment(note: &Note, related: &[&Note]) -> String {
    let mut out = format!(
        "<article class=\"note-fragment\" data-slug=\"{}\"><h2>{}</h2>",
        escape_html(&note.slug),
        escape_html(&note.title),
    );
    if let Some(description) = note.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        out.push_str(&format!("<p class=\"note-description\">{}</p>", escape_html(description)));
    }
    out.push_str(&format!("<div class=\"note-body\">{}</div>", render_markdown(&note.body)));

    if !related.is_empty() {
        out.push_str("<ul class=\"related\">");
        for other in related {
            out.push_str(&format!(
                "<li><a class=\"open-related\" data-slug=\"{}\" href=\"{}\">{}</a></li>",
                escape_html(&other.slug),
                escape_html(&panels::fetch::fragment_url(&other.slug)),
                escape_html(&other.title),
            ));
        }
        out.push_str("</ul>");
    }

    out.push_str("<button class=\"close-fragment\" data-action=\"close\" type=\"button\">Close</button>");
    out.push_str("</article>");
    out
}
