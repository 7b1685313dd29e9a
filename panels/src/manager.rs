//! The floating fragment manager.
//!
//! DESIGN
//! ======
//! `FragmentManager` owns every open panel, the single active-drag slot, the
//! queue of fragment loads the host still has to perform, and the layout
//! repository. All operations are synchronous and run on the UI event loop;
//! the only deferred step is `finish_load`, which the host calls once a fetch
//! completes. Panels closed in the meantime simply ignore their late result.
//!
//! PERSISTENCE
//! ===========
//! - single-panel changes (create, collapse, interaction end) upsert one entry
//! - close and rehydrate rewrite the whole layout from the open set
//! - intermediate drag frames never write

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use crate::config::ManagerConfig;
use crate::fetch::{FetchError, Fragment, FragmentFetcher, LoadRequest, failure_message};
use crate::geometry::{Position, Size};
use crate::interaction::{DragSlot, HeaderTarget, Point};
use crate::layout::PanelSnapshot;
use crate::panel::{FragmentPanel, PanelBody, PanelId, PanelIdAllocator};
use crate::store::{LayoutRepository, LayoutStore};

/// Owner of all open fragment panels.
#[derive(Debug, Clone)]
pub struct FragmentManager<S> {
    config: ManagerConfig,
    panels: Vec<FragmentPanel>,
    ids: PanelIdAllocator,
    repo: LayoutRepository<S>,
    drag: DragSlot,
    pending: Vec<LoadRequest>,
}

impl<S: LayoutStore> FragmentManager<S> {
    pub fn new(store: S, config: ManagerConfig, ids: PanelIdAllocator) -> Self {
        let repo = LayoutRepository::new(store, config.storage_key.clone());
        Self { config, panels: Vec::new(), ids, repo, drag: DragSlot::default(), pending: Vec::new() }
    }

    // --- Queries -------------------------------------------------------------

    /// Open panels in creation order.
    #[must_use]
    pub fn panels(&self) -> &[FragmentPanel] {
        &self.panels
    }

    #[must_use]
    pub fn panel(&self, id: PanelId) -> Option<&FragmentPanel> {
        self.panels.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    #[must_use]
    pub fn drag(&self) -> &DragSlot {
        &self.drag
    }

    pub fn store(&self) -> &S {
        self.repo.store()
    }

    pub fn into_store(self) -> S {
        self.repo.into_store()
    }

    /// Live snapshot of every open panel, in creation order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<PanelSnapshot> {
        self.panels.iter().map(|p| PanelSnapshot::capture(p, self.config.default_size)).collect()
    }

    // --- Lifecycle -----------------------------------------------------------

    /// Open a panel for `slug`.
    ///
    /// Any coordinate the preset lacks is staggered diagonally from the
    /// panels already open. Queues exactly one [`LoadRequest`] and
    /// persists the new panel.
    pub fn create_panel(&mut self, slug: &str, preset: Option<&PanelSnapshot>) -> PanelId {
        let id = self.ids.allocate();
        let offset = self.config.stagger_offset(self.panels.len());
        let staggered = Position::new(offset, offset);
        let position = preset.map_or(staggered, |p| p.position_or(staggered));

        let mut panel = FragmentPanel::new(id, slug, position);
        if let Some(preset) = preset {
            panel.size = preset.size();
            panel.collapsed = preset.collapsed;
        }
        self.panels.push(panel);
        self.pending.push(LoadRequest { panel: id, slug: slug.to_owned() });
        log::debug!("opened fragment panel {id} for {slug}");

        self.commit_panel(id);
        id
    }

    /// Related-link convention: open `slug` in a new panel.
    pub fn open_related(&mut self, slug: &str) -> PanelId {
        self.create_panel(slug, None)
    }

    /// Remove a panel and rewrite the layout from the remaining open set.
    pub fn close_panel(&mut self, id: PanelId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.panels.remove(index);
        self.drag.release_panel(id);
        self.pending.retain(|r| r.panel != id);
        self.save_all();
        true
    }

    /// Restore the saved layout in stored order, then prune entries left by
    /// the previous session. Returns the ids of the restored panels.
    pub fn rehydrate(&mut self) -> Vec<PanelId> {
        let saved = self.repo.load();
        let mut restored = Vec::with_capacity(saved.len());
        for entry in &saved {
            let id = self.create_panel(&entry.slug, Some(entry));
            if entry.collapsed {
                self.set_collapsed(id, true);
            }
            restored.push(id);
        }
        self.save_all();
        restored
    }

    /// Overwrite the layout with every open panel's live state.
    pub fn save_all(&mut self) {
        let snapshots = self.snapshots();
        self.repo.replace_all(&snapshots);
    }

    /// Persist one panel's current state (upsert by id).
    pub fn commit_panel(&mut self, id: PanelId) {
        let Some(panel) = self.panel(id) else {
            return;
        };
        let snapshot = PanelSnapshot::capture(panel, self.config.default_size);
        self.repo.upsert(snapshot);
    }

    // --- Fragment loading ----------------------------------------------------

    /// Drain the fetches queued since the last call.
    pub fn take_load_requests(&mut self) -> Vec<LoadRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Apply a completed fetch. Returns `false` when the panel is gone.
    pub fn finish_load(&mut self, id: PanelId, result: Result<Fragment, FetchError>) -> bool {
        let Some(panel) = self.panel_mut(id) else {
            log::debug!("discarding fragment for closed panel {id}");
            return false;
        };
        match result {
            Ok(fragment) => {
                if let Some(title) = fragment.title {
                    panel.title = title;
                }
                panel.body = PanelBody::Loaded { html: fragment.html };
            }
            Err(err) => {
                log::warn!("fragment {} failed to load: {err}", panel.slug);
                panel.body = PanelBody::Failed { message: failure_message(&err) };
            }
        }
        true
    }

    /// Run every queued load through `fetcher`, one after another.
    ///
    /// For hosts that own the manager exclusively; browser hosts instead
    /// spawn each request and call [`FragmentManager::finish_load`].
    pub async fn load_pending<F: FragmentFetcher>(&mut self, fetcher: &F) {
        for request in self.take_load_requests() {
            let result = fetcher.fetch(&request.slug).await.map(Fragment::new);
            self.finish_load(request.panel, result);
        }
    }

    // --- Panel state ---------------------------------------------------------

    /// Flip `collapsed` and persist this panel only. Returns the new state.
    pub fn toggle_collapse(&mut self, id: PanelId) -> Option<bool> {
        let panel = self.panel_mut(id)?;
        panel.collapsed = !panel.collapsed;
        let collapsed = panel.collapsed;
        self.commit_panel(id);
        Some(collapsed)
    }

    /// Set `collapsed` explicitly and persist this panel.
    pub fn set_collapsed(&mut self, id: PanelId, collapsed: bool) -> bool {
        let Some(panel) = self.panel_mut(id) else {
            return false;
        };
        panel.collapsed = collapsed;
        self.commit_panel(id);
        true
    }

    /// Translate a panel. Not persisted until the interaction ends.
    pub fn move_panel(&mut self, id: PanelId, dx: f64, dy: f64) -> bool {
        let Some(panel) = self.panel_mut(id) else {
            return false;
        };
        panel.position = panel.position.offset(dx, dy);
        true
    }

    /// Give a panel an explicit size. Not persisted until the interaction ends.
    pub fn resize_panel(&mut self, id: PanelId, width: f64, height: f64) -> bool {
        let Some(panel) = self.panel_mut(id) else {
            return false;
        };
        panel.size = Some(Size::new(width, height));
        true
    }

    /// Record the host-measured bounding box of a panel. Ignored while the
    /// panel is collapsed, since its box is then only the header.
    pub fn record_measured_size(&mut self, id: PanelId, size: Size) {
        if let Some(panel) = self.panel_mut(id).filter(|p| !p.collapsed) {
            panel.measured = Some(size);
        }
    }

    // --- Drag interaction ----------------------------------------------------

    /// Pointer-down in a panel header. Returns whether a drag started.
    pub fn begin_drag(&mut self, id: PanelId, pointer: Point, target: HeaderTarget) -> bool {
        let Some(origin) = self.panel(id).map(|p| p.position) else {
            return false;
        };
        self.drag.begin(id, pointer, origin, target)
    }

    /// Window-level pointer move. Returns the panel that moved, if dragging.
    pub fn drag_to(&mut self, pointer: Point) -> Option<PanelId> {
        let drag = *self.drag.active()?;
        let panel = self.panel_mut(drag.panel)?;
        panel.position = drag.position_at(pointer);
        Some(drag.panel)
    }

    /// Window-level pointer release. Ends the drag and persists the panel.
    pub fn end_drag(&mut self) -> Option<PanelId> {
        let drag = self.drag.end()?;
        self.commit_panel(drag.panel);
        Some(drag.panel)
    }

    /// Pointer-up on a panel while not dragging: possibly the end of a native
    /// resize. Records the measured size and persists; harmless otherwise.
    pub fn pointer_released_on_panel(&mut self, id: PanelId, measured: Option<Size>) {
        if self.drag.is_dragging() {
            return;
        }
        if let Some(size) = measured {
            if let Some(panel) = self.panel_mut(id) {
                panel.size = Some(size);
            }
        }
        self.commit_panel(id);
    }

    fn index_of(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    fn panel_mut(&mut self, id: PanelId) -> Option<&mut FragmentPanel> {
        self.panels.iter_mut().find(|p| p.id == id)
    }
}
