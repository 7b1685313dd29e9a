//! Fragment fetch contract.
//!
//! The manager never performs I/O. `create_panel` queues a [`LoadRequest`];
//! the host drains the queue, runs its [`FragmentFetcher`] without blocking,
//! and reports the outcome through `FragmentManager::finish_load`.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use crate::panel::PanelId;

/// Why a fragment could not be loaded. Shown inline in the panel body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response, or its body was unreadable.
    #[error("{0}")]
    Transport(String),
}

/// Loaded fragment content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    /// Heading found in the fragment; replaces the slug-derived title.
    pub title: Option<String>,
}

impl Fragment {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into(), title: None }
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());
        self
    }
}

/// A fetch the host must perform for a newly created panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub panel: PanelId,
    pub slug: String,
}

impl LoadRequest {
    #[must_use]
    pub fn url(&self) -> String {
        fragment_url(&self.slug)
    }
}

/// Source of fragment HTML, addressed by slug.
pub trait FragmentFetcher {
    /// Fetch the HTML for `slug`.
    fn fetch(&self, slug: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// Path of the fragment endpoint for `slug`.
#[must_use]
pub fn fragment_url(slug: &str) -> String {
    format!("/posts/{}/fragment", encode_component(slug))
}

/// Percent-encode everything outside the URI component unreserved set
/// (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Inline text shown in a panel whose fragment failed to load.
#[must_use]
pub fn failure_message(err: &FetchError) -> String {
    format!("Failed to load fragment: {err}")
}
