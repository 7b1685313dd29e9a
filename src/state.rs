//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! note index is read-only after startup, so it is shared behind an `Arc`
//! without a lock.

use std::sync::Arc;

use crate::services::notes::NoteIndex;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<NoteIndex>,
}

impl AppState {
    #[must_use]
    pub fn new(notes: NoteIndex) -> Self {
        Self { notes: Arc::new(notes) }
    }
}
