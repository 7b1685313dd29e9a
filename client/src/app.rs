//! Root component: provides the shared panel manager and mounts the panel layer.

use leptos::prelude::*;

use crate::components::floating_fragments::FloatingFragments;
use crate::state::fragments::new_manager;

/// Root application component.
///
/// Mounted alongside the server-rendered page; it only adds the floating
/// panel layer on top of it.
#[component]
pub fn App() -> impl IntoView {
    let manager = RwSignal::new(new_manager());
    provide_context(manager);

    view! { <FloatingFragments/> }
}
