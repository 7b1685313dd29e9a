//! One floating, draggable, collapsible fragment panel.

use leptos::prelude::*;
use panels::panel::collapse_glyph;
use panels::{PanelBody, PanelId};
#[cfg(feature = "csr")]
use panels::Point;

#[cfg(feature = "csr")]
use crate::components::floating_fragments::spawn_pending_loads;
use crate::state::fragments::{PanelManager, panel_style, placeholder_text};
#[cfg(feature = "csr")]
use crate::util::dom;

/// Panel chrome (title, collapse toggle, close button) around fragment HTML.
///
/// Reads its state from the shared manager by id; each piece is memoized so
/// dragging one panel does not re-render the bodies of the others.
#[component]
pub fn FragmentPanelView(id: PanelId) -> impl IntoView {
    let manager = expect_context::<RwSignal<PanelManager>>();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    let slug = manager.with_untracked(|m| m.panel(id).map(|p| p.slug.clone())).unwrap_or_default();
    let title = Memo::new(move |_| manager.with(|m| m.panel(id).map(|p| p.title.clone()).unwrap_or_default()));
    let collapsed = Memo::new(move |_| manager.with(|m| m.panel(id).is_some_and(|p| p.collapsed)));
    // Tracks the body variant only; the HTML itself is read untracked.
    let body_kind = Memo::new(move |_| manager.with(|m| m.panel(id).map(|p| std::mem::discriminant(&p.body))));
    let style = Memo::new(move |_| manager.with(|m| m.panel(id).map(panel_style).unwrap_or_default()));

    let on_header_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            if ev.button() != 0 {
                return;
            }
            let target = dom::header_target(dom::event_element(&ev).as_ref());
            let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            if manager.try_update(|m| m.begin_drag(id, pointer, target)).unwrap_or(false) {
                dom::set_no_select(true);
                ev.prevent_default();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    // Pointer-up on the panel outside a drag may end a native resize.
    let on_panel_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            if manager.with_untracked(|m| m.drag().is_dragging()) {
                return;
            }
            let Some(el) = panel_ref.get_untracked() else {
                return;
            };
            let measured = dom::measured_size(&el);
            let inline = dom::inline_size(&el);
            manager.update(|m| {
                m.record_measured_size(id, measured);
                m.pointer_released_on_panel(id, inline);
            });
        }
    };

    let on_toggle = move |_| {
        manager.update(|m| {
            m.toggle_collapse(id);
        });
    };

    let on_close = move |_| {
        manager.update(|m| {
            m.close_panel(id);
        });
    };

    let on_body_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(target) = dom::event_element(&ev) else {
                return;
            };
            if let Some(related) = dom::related_slug(&target) {
                ev.prevent_default();
                manager.update(|m| {
                    m.open_related(&related);
                });
                spawn_pending_loads(manager);
            } else if dom::is_close_control(&target) {
                manager.update(|m| {
                    m.close_panel(id);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            class="floating-fragment"
            class:floating-fragment--collapsed=move || collapsed.get()
            data-id=id.to_string()
            data-slug=slug
            data-collapsed=move || collapsed.get().to_string()
            style=move || style.get()
            node_ref=panel_ref
            on:pointerup=on_panel_pointer_up
        >
            <div class="floating-fragment-header" on:pointerdown=on_header_pointer_down>
                <span class="frag-title">{move || title.get()}</span>
                <div class="frag-actions">
                    <button type="button" title="Collapse/Expand" aria-label="Collapse fragment" on:click=on_toggle>
                        {move || collapse_glyph(collapsed.get())}
                    </button>
                    <button type="button" title="Close" aria-label="Close fragment" on:click=on_close>
                        "\u{00D7}"
                    </button>
                </div>
            </div>
            <div class="floating-fragment-body" on:click=on_body_click>
                {move || {
                    body_kind.track();
                    let body = manager.with_untracked(|m| m.panel(id).map(|p| p.body.clone()));
                    match body {
                        Some(PanelBody::Loaded { html }) => {
                            view! { <div class="frag-content" inner_html=html></div> }.into_any()
                        }
                        Some(other) => {
                            let failed = matches!(other, PanelBody::Failed { .. });
                            let text = placeholder_text(&other).unwrap_or_default().to_owned();
                            view! { <p class="frag-status" class:frag-status--error=failed>{text}</p> }.into_any()
                        }
                        None => ().into_any(),
                    }
                }}
            </div>
        </div>
    }
}
