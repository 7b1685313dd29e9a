//! Browser `localStorage` backend for the panel layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserLayoutStore` is the `LayoutStore` the fragment manager writes
//! through. It looks storage up on every call instead of holding a handle, so
//! it stays `Send + Sync` and can live inside a Leptos signal.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: private browsing, disabled storage, and quota
//! errors surface as `StoreError`s that the layout repository swallows.
//! Non-browser builds have no storage at all.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use panels::{LayoutStore, StoreError};

/// `LayoutStore` over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLayoutStore;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl LayoutStore for BrowserLayoutStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write(js_error_message(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

/// Best-effort text for a thrown JS value (`QuotaExceededError`, ...).
#[cfg(feature = "csr")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "storage error".to_owned())
}
