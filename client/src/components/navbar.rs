//! Top bar with the page title, theme toggle, and account menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::route::{LOGIN_PATH, Route};
use crate::state::auth::SessionContext;
use crate::state::ui::UiState;
use crate::util::{theme, ui_persistence};

#[component]
pub fn Navbar(title: &'static str) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.state();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let who = move || auth.get().session.user_id.unwrap_or_default();
    let role_label = move || auth.get().role().label();
    let menu_open = move || ui.get().account_menu_open;
    let close_menu = move || ui.update(|u| u.account_menu_open = false);

    let on_toggle_theme = move |_| {
        let mut prefs = ui_persistence::load_preferences();
        let next = theme::toggle(ui.get_untracked().dark_mode, &mut prefs);
        ui_persistence::save_preferences(&prefs);
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        close_menu();
        session.end();
        leptos::logging::log!("signed out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <h1 class="navbar__title">{title}</h1>
            <span class="navbar__spacer"></span>
            <button class="btn navbar__theme" title="Toggle dark mode" on:click=on_toggle_theme>
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263E}" }}
            </button>
            <div class="navbar__account">
                <button
                    class="btn navbar__account-button"
                    on:click=move |_| ui.update(|u| u.account_menu_open = !u.account_menu_open)
                >
                    <span class="navbar__who">{who}</span>
                    <span class="navbar__role">{role_label}</span>
                </button>
                <ul class="navbar__menu" class:navbar__menu--open=menu_open on:click=move |_| close_menu()>
                    <li>
                        <a href=Route::Profile.path()>"Profile"</a>
                    </li>
                    <li>
                        <a href=Route::Settings.path()>"Settings"</a>
                    </li>
                    <li>
                        <button class="navbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </li>
                </ul>
            </div>
        </header>
    }
}
