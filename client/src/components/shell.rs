//! Authenticated page chrome: side menu, top bar, and content area.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::routing::route::Route;
use crate::state::ui::UiState;

/// Wraps a protected page. The content offset follows the sidebar width so
/// collapsing the menu never hides page content.
#[component]
pub fn AppShell(route: Route, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let content_offset = move || format!("margin-left: {}px", ui.get().sidebar_width());

    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main" style=content_offset>
                <Navbar title=route.title()/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
