//! Layer hosting every floating fragment panel.
//!
//! ARCHITECTURE
//! ============
//! The layer restores the saved layout once on mount and registers exactly
//! one set of window listeners for the whole page: pointer move/up feed the
//! manager's single drag slot, clicks on pop-out buttons open panels, and
//! `beforeunload` writes the final layout. Panels themselves hold no global
//! listeners, so closing one mid-drag leaves nothing behind.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use panels::{Fragment, FragmentFetcher, Point};

use crate::components::fragment_panel::FragmentPanelView;
#[cfg(feature = "csr")]
use crate::net::fragments::HttpFragmentFetcher;
use crate::state::fragments::PanelManager;
#[cfg(feature = "csr")]
use crate::util::dom;

/// All open panels, in creation order.
#[component]
pub fn FloatingFragments() -> impl IntoView {
    let manager = expect_context::<RwSignal<PanelManager>>();

    manager.update(|m| {
        let restored = m.rehydrate();
        if !restored.is_empty() {
            log::info!("restored {} fragment panels", restored.len());
        }
    });
    spawn_pending_loads(manager);

    #[cfg(feature = "csr")]
    install_window_listeners(manager);

    let panel_ids = Memo::new(move |_| manager.with(|m| m.panels().iter().map(|p| p.id).collect::<Vec<_>>()));

    view! {
        <div class="floating-fragments">
            <For
                each=move || panel_ids.get()
                key=|id| *id
                children=move |id| view! { <FragmentPanelView id=id/> }
            />
        </div>
    }
}

/// Start a fetch for every load the manager has queued.
///
/// Each fetch completes independently; a panel closed before its response
/// arrives just ignores it.
pub fn spawn_pending_loads(manager: RwSignal<PanelManager>) {
    #[cfg(feature = "csr")]
    {
        let requests = manager.try_update(PanelManager::take_load_requests).unwrap_or_default();
        for request in requests {
            leptos::task::spawn_local(async move {
                let fragment = HttpFragmentFetcher.fetch(&request.slug).await.map(|html| {
                    let title = dom::fragment_title(&html);
                    Fragment::new(html).with_title(title)
                });
                manager.try_update(|m| m.finish_load(request.panel, fragment));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = manager;
    }
}

#[cfg(feature = "csr")]
fn install_window_listeners(manager: RwSignal<PanelManager>) {
    use leptos::ev;

    let _pointer_move = window_event_listener(ev::pointermove, move |ev| {
        if !manager.with_untracked(|m| m.drag().is_dragging()) {
            return;
        }
        let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        manager.update(|m| {
            m.drag_to(pointer);
        });
    });

    let _pointer_up = window_event_listener(ev::pointerup, move |_| {
        if !manager.with_untracked(|m| m.drag().is_dragging()) {
            return;
        }
        manager.update(|m| {
            m.end_drag();
        });
        dom::set_no_select(false);
    });

    let _pop_out = window_event_listener(ev::click, move |ev| {
        let Some(slug) = dom::event_element(&ev).and_then(|el| dom::pop_button_slug(&el)) else {
            return;
        };
        manager.update(|m| {
            m.create_panel(&slug, None);
        });
        spawn_pending_loads(manager);
    });

    let _unload = window_event_listener(ev::beforeunload, move |_| {
        manager.update_untracked(PanelManager::save_all);
    });
}
