//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `floating_fragments` owns the panel layer and its window-level listeners;
//! `fragment_panel` renders one panel from the shared manager state.

pub mod floating_fragments;
pub mod fragment_panel;
