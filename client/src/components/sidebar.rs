//! Collapsible side menu listing the signed-in role's destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries come from `routing::nav::nav_items_for`, so the menu can never
//! offer a link that the route gate would refuse for the current role.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::nav::{NavItem, nav_items_for};
use crate::routing::route::Route;
use crate::state::auth::SessionContext;
use crate::state::ui::UiState;

/// Whether `item` is the page currently shown at `pathname`.
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    Route::from_path(pathname) == Some(item.route)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<SessionContext>().state();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let items = move || nav_items_for(auth.get().role());
    let open = move || ui.get().sidebar_open;
    let width = move || format!("width: {}px", ui.get().sidebar_width());

    view! {
        <nav class="sidebar" class:sidebar--open=open style=width>
            <button
                class="sidebar__toggle"
                title=move || if open() { "Collapse menu" } else { "Expand menu" }
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            >
                {move || if open() { "\u{2039}" } else { "\u{2630}" }}
            </button>
            <ul class="sidebar__list">
                {move || {
                    items()
                        .iter()
                        .map(|item| {
                            let item = *item;
                            let active = move || is_active(&item, &pathname.get());
                            view! {
                                <li>
                                    <a
                                        href=item.path()
                                        class="sidebar__item"
                                        class:sidebar__item--active=active
                                        title=item.label
                                    >
                                        <span class="sidebar__icon">{item.icon.glyph()}</span>
                                        <Show when=open>
                                            <span class="sidebar__label">{item.label}</span>
                                        </Show>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
