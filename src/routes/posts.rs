//! Note routes: the landing page and per-note fragments.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;

use crate::services::fragment::{escape_html, render_fragment};
use crate::services::notes::NoteError;
use crate::state::AppState;

pub(crate) fn note_error_to_status(err: &NoteError) -> StatusCode {
    match err {
        NoteError::NotFound(_) => StatusCode::NOT_FOUND,
        NoteError::InvalidSlug(_) => StatusCode::BAD_REQUEST,
        NoteError::Io(_) | NoteError::Frontmatter { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /posts/:slug/fragment` — HTML fragment for one note.
pub async fn fragment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let note = state.notes.get(&slug).map_err(|e| {
        tracing::debug!(%slug, error = %e, "fragment lookup failed");
        note_error_to_status(&e)
    })?;
    let related = state.notes.related(note);
    Ok(Html(render_fragment(note, &related)))
}

/// `GET /` — landing page with a pop-out button per note.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut items = String::new();
    for note in state.notes.iter() {
        let slug = escape_html(&note.slug);
        let title = escape_html(&note.title);
        items.push_str(&format!(
            "<li><span class=\"note-title\">{title}</span> \
             <button class=\"pop-fragment-btn\" data-slug=\"{slug}\" type=\"button\">Open</button></li>"
        ));
    }
    Html(format!(
        "<!doctype html>\
         <html><head><meta charset=\"utf-8\"><title>Notes</title>\
         <link rel=\"stylesheet\" href=\"/static/fragments.css\">\
         <script type=\"module\">import init from '/static/pkg/client.js'; init();</script>\
         </head><body><main><h1>Notes</h1><ul class=\"note-list\">{items}</ul></main></body></html>"
    ))
}
