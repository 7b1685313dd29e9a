//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! DOM event targets) from component logic to improve reuse and testability.

pub mod clock;
pub mod dom;
pub mod local_storage;
