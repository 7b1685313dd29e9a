//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The panel set is the only shared state; it is provided through context as
//! an `RwSignal<PanelManager>` so every panel view reads from one owner.

pub mod fragments;
