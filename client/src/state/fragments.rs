//! Fragment panel state as held by the UI.

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

use panels::panel::PanelIdAllocator;
use panels::geometry::format_px;
use panels::{FragmentManager, FragmentPanel, ManagerConfig, PanelBody};

use crate::util::clock::now_ms;
use crate::util::local_storage::BrowserLayoutStore;

/// Fragment manager persisting to `localStorage`.
pub type PanelManager = FragmentManager<BrowserLayoutStore>;

/// Fresh manager with ids seeded from the current time.
pub fn new_manager() -> PanelManager {
    FragmentManager::new(BrowserLayoutStore, ManagerConfig::default(), PanelIdAllocator::seeded(now_ms()))
}

/// Text shown in a panel body that has no HTML to render.
pub fn placeholder_text(body: &PanelBody) -> Option<&str> {
    match body {
        PanelBody::Loading => Some("Loading\u{2026}"),
        PanelBody::Failed { message } => Some(message),
        PanelBody::Loaded { .. } => None,
    }
}

/// Inline style placing a panel. Size is only pinned once it is explicit;
/// until then the stylesheet's default size applies.
pub fn panel_style(panel: &FragmentPanel) -> String {
    let mut style = format!("top:{};left:{};", format_px(panel.position.top), format_px(panel.position.left));
    if let Some(size) = panel.size {
        style.push_str(&format!("width:{};height:{};", format_px(size.width), format_px(size.height)));
    }
    style
}
