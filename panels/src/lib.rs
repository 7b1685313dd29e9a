//! Floating fragment panels: model, layout persistence, and interaction.
//!
//! This crate owns the browser-independent half of the floating fragment
//! feature. A [`manager::FragmentManager`] keeps the set of open panels, hands
//! fragment loads to the host as [`fetch::LoadRequest`]s, tracks the single
//! active drag, and writes the layout through a [`store::LayoutRepository`].
//! The host (the Leptos client) is responsible only for rendering panels,
//! forwarding pointer events, and performing the HTTP fetches.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`manager`] | Top-level [`manager::FragmentManager`] and its operations |
//! | [`panel`] | Panel model, ids, and the id allocator |
//! | [`geometry`] | Pixel positions/sizes and CSS `px` string codec |
//! | [`layout`] | Persisted layout records and the lenient JSON decoder |
//! | [`store`] | Key-value store contract and the layout repository |
//! | [`fetch`] | Fragment fetch contract, URLs, and load requests |
//! | [`interaction`] | Drag state machine (single active-drag slot) |
//! | [`config`] | Manager configuration and defaults |

pub mod config;
pub mod fetch;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod manager;
pub mod panel;
pub mod store;

pub use config::ManagerConfig;
pub use fetch::{FetchError, Fragment, FragmentFetcher, LoadRequest};
pub use geometry::{Position, Size};
pub use interaction::{HeaderTarget, Point};
pub use layout::PanelSnapshot;
pub use manager::FragmentManager;
pub use panel::{FragmentPanel, PanelBody, PanelId};
pub use store::{LayoutRepository, LayoutStore, MemoryStore, StoreError};
