//! Note index: markdown files with YAML frontmatter, addressed by slug.
//!
//! DESIGN
//! ======
//! Notes are loaded once at startup into a `BTreeMap` keyed by slug (the
//! file name, e.g. `intro.md`). Iteration order is therefore slug order,
//! which keeps related-note lists stable across requests.
//!
//! A note file may open with a frontmatter block delimited by `---` lines.
//! Missing frontmatter is not an error; the title then falls back to the
//! slug with its `.md` suffix removed.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

const FRONTMATTER_FENCE: &str = "---";

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("note not found: {0}")]
    NotFound(String),
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("frontmatter error in {slug}: {source}")]
    Frontmatter {
        slug: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

/// One parsed note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    pub description: Option<String>,
    /// Markdown body with the frontmatter removed.
    pub body: String,
}

impl Note {
    fn shares_tag_with(&self, other: &Note) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }
}

/// Reject slugs that could escape the notes directory.
///
/// # Errors
///
/// Returns [`NoteError::InvalidSlug`] for empty slugs and slugs containing
/// path separators, `..`, or NUL.
pub fn validate_slug(slug: &str) -> Result<(), NoteError> {
    let bad = slug.trim().is_empty()
        || slug.contains('/')
        || slug.contains('\\')
        || slug.contains("..")
        || slug.contains('\0');
    if bad {
        return Err(NoteError::InvalidSlug(slug.to_owned()));
    }
    Ok(())
}

/// Split a leading frontmatter block from the markdown body.
fn split_frontmatter(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source.strip_prefix(FRONTMATTER_FENCE) else {
        return (None, source);
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (None, source);
    };
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONTMATTER_FENCE {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, source)
}

/// Parse a note's source text.
///
/// # Errors
///
/// Returns [`NoteError::Frontmatter`] when the frontmatter block is not
/// valid YAML for the expected fields.
pub fn parse_note(slug: &str, source: &str) -> Result<Note, NoteError> {
    let (raw_meta, body) = split_frontmatter(source);
    let meta = match raw_meta {
        Some(raw) if !raw.trim().is_empty() => serde_yaml::from_str::<Frontmatter>(raw)
            .map_err(|source| NoteError::Frontmatter { slug: slug.to_owned(), source })?,
        _ => Frontmatter::default(),
    };

    let title = meta
        .title
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| panels::panel::title_from_slug(slug));

    Ok(Note {
        slug: slug.to_owned(),
        title,
        tags: meta.tags,
        description: meta.description,
        body: body.trim_start_matches(['\r', '\n']).to_owned(),
    })
}

/// In-memory index of every note in the notes directory.
#[derive(Debug, Default)]
pub struct NoteIndex {
    notes: BTreeMap<String, Note>,
}

impl NoteIndex {
    #[must_use]
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        Self { notes: notes.into_iter().map(|n| (n.slug.clone(), n)).collect() }
    }

    /// Load every `*.md` file directly under `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Io`] if the directory or a file cannot be read,
    /// and [`NoteError::Frontmatter`] for malformed frontmatter.
    pub fn load(dir: &Path) -> Result<Self, NoteError> {
        let mut notes = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }
            let Some(slug) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping note with non-utf8 name");
                continue;
            };
            let source = std::fs::read_to_string(&path)?;
            notes.push(parse_note(slug, &source)?);
        }
        tracing::info!(count = notes.len(), dir = %dir.display(), "notes loaded");
        Ok(Self::from_notes(notes))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// All notes in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Look up a note by slug, also accepting the slug without `.md`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::InvalidSlug`] or [`NoteError::NotFound`].
    pub fn get(&self, slug: &str) -> Result<&Note, NoteError> {
        validate_slug(slug)?;
        self.notes
            .get(slug)
            .or_else(|| self.notes.get(&format!("{slug}.md")))
            .ok_or_else(|| NoteError::NotFound(slug.to_owned()))
    }

    /// Other notes sharing at least one tag with `note`, in slug order.
    #[must_use]
    pub fn related(&self, note: &Note) -> Vec<&Note> {
        self.notes
            .values()
            .filter(|other| other.slug != note.slug && note.shares_tag_with(other))
            .collect()
    }
}
