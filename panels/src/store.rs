//! Key-value store contract and the layout repository built on it.
//!
//! DESIGN
//! ======
//! The browser keeps the whole layout in one `localStorage` entry, so every
//! write is a read-modify-write of the full blob. `LayoutRepository` hides
//! that behind `upsert` and `replace_all`; callers never see the blob, which
//! leaves room for a per-key backend later.
//!
//! ERROR HANDLING
//! ==============
//! Persistence is best-effort. Encoding and store failures are logged and
//! swallowed; the panels keep working without saved state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::layout::{PanelSnapshot, decode_layout, encode_layout};

/// Failure writing to a [`LayoutStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key-value persistence surface (browser `localStorage` or memory).
pub trait LayoutStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend refuses the write (quota,
    /// security policy, no storage available).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`LayoutStore`] for tests and non-browser builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that fails every write, like a browser over its storage quota.
    #[must_use]
    pub fn rejecting() -> Self {
        Self { entries: HashMap::new(), reject_writes: true }
    }

    /// Pre-populate `key` with a raw value.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl LayoutStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::Write("quota exceeded".to_owned()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Layout persistence over a single store key.
#[derive(Debug, Clone)]
pub struct LayoutRepository<S> {
    store: S,
    key: String,
}

impl<S: LayoutStore> LayoutRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Saved snapshots in stored order. Missing or malformed data is empty.
    #[must_use]
    pub fn load(&self) -> Vec<PanelSnapshot> {
        self.store.get(&self.key).map(|raw| decode_layout(&raw)).unwrap_or_default()
    }

    /// Replace the entry with the same id, or append a new one.
    pub fn upsert(&mut self, snapshot: PanelSnapshot) {
        let mut all = self.load();
        match all.iter_mut().find(|s| s.id == snapshot.id) {
            Some(existing) => *existing = snapshot,
            None => all.push(snapshot),
        }
        self.write(&all);
    }

    /// Overwrite the layout with exactly `snapshots`; anything else is dropped.
    pub fn replace_all(&mut self, snapshots: &[PanelSnapshot]) {
        self.write(snapshots);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn write(&mut self, snapshots: &[PanelSnapshot]) {
        let raw = match encode_layout(snapshots) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("layout encode failed: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &raw) {
            log::warn!("layout save skipped ({} panels): {e}", snapshots.len());
        }
    }
}
