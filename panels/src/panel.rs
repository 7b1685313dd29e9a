//! Panel model: ids, loaded content, and per-panel state.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::geometry::{Position, Size};

/// Unique token for an open panel. Stored as a decimal string in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source seeded from wall-clock milliseconds.
///
/// Seeding from the clock keeps ids from one page load distinct from those
/// left in storage by an earlier load.
#[derive(Debug, Clone)]
pub struct PanelIdAllocator {
    next: u64,
}

impl PanelIdAllocator {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { next: seed }
    }

    /// Seed from `SystemTime`. Not available in the browser; WASM hosts pass
    /// `Date.now()` to [`PanelIdAllocator::seeded`] instead.
    #[must_use]
    pub fn from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        Self::seeded(millis)
    }

    pub fn allocate(&mut self) -> PanelId {
        let id = PanelId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// What a panel body currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// Fetch issued, no response yet.
    Loading,
    /// Fragment HTML, rendered verbatim.
    Loaded { html: String },
    /// Inline failure message shown in place of the fragment.
    Failed { message: String },
}

/// A floating panel hosting one fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentPanel {
    pub id: PanelId,
    pub slug: String,
    pub position: Position,
    /// Explicit size from a preset or a resize.
    pub size: Option<Size>,
    /// Last rendered bounding box reported by the host.
    pub measured: Option<Size>,
    pub collapsed: bool,
    pub title: String,
    pub body: PanelBody,
}

impl FragmentPanel {
    pub(crate) fn new(id: PanelId, slug: &str, position: Position) -> Self {
        Self {
            id,
            slug: slug.to_owned(),
            position,
            size: None,
            measured: None,
            collapsed: false,
            title: title_from_slug(slug),
            body: PanelBody::Loading,
        }
    }

    /// Size written to the layout: explicit, then measured, then `fallback`.
    #[must_use]
    pub fn effective_size(&self, fallback: Size) -> Size {
        self.size.or(self.measured).unwrap_or(fallback)
    }
}

/// Placeholder title shown until the fragment supplies its own heading.
#[must_use]
pub fn title_from_slug(slug: &str) -> String {
    slug.strip_suffix(".md").unwrap_or(slug).to_owned()
}

/// Header glyph for the collapse toggle.
#[must_use]
pub fn collapse_glyph(collapsed: bool) -> &'static str {
    if collapsed { "+" } else { "\u{2013}" }
}
