//! Settings page: appearance, notifications, and sign-out.
//!
//! Theme changes apply immediately; font size and notification choices are
//! staged in the form and persisted on "Save".

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::route::LOGIN_PATH;
use crate::state::auth::SessionContext;
use crate::state::ui::UiState;
use crate::util::theme;
use crate::util::ui_persistence::{self, FontSize, Preferences};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let prefs = RwSignal::new(Preferences::default());
    let info = RwSignal::new(String::new());

    Effect::new(move || prefs.set(ui_persistence::load_preferences()));

    let on_toggle_theme = move |_| {
        let mut next_prefs = prefs.get_untracked();
        let dark = theme::toggle(ui.get_untracked().dark_mode, &mut next_prefs);
        ui_persistence::save_preferences(&next_prefs);
        prefs.set(next_prefs);
        ui.update(|u| u.dark_mode = dark);
        info.set(format!("Theme switched to {} Mode", if dark { "Dark" } else { "Light" }));
    };

    let on_save = move |_| {
        let current = prefs.get_untracked();
        ui_persistence::save_preferences(&current);
        ui_persistence::apply_font_size(current.font_size);
        info.set("Settings updated successfully".to_owned());
    };

    let on_sign_out = move |_| {
        session.end();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="settings-page">
            <section class="settings-card">
                <h2>"Appearance"</h2>
                <label class="settings-row">
                    <input type="checkbox" prop:checked=move || ui.get().dark_mode on:change=on_toggle_theme/>
                    <span>"Dark Mode"</span>
                </label>
                <label class="settings-row">
                    <span>"Font Size"</span>
                    <select
                        prop:value=move || prefs.get().font_size.as_str()
                        on:change=move |ev| {
                            let size = FontSize::parse(&event_target_value(&ev));
                            prefs.update(|p| p.font_size = size);
                        }
                    >
                        {FontSize::ALL
                            .iter()
                            .map(|size| view! { <option value=size.as_str()>{size.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </section>
            <section class="settings-card">
                <h2>"Notifications"</h2>
                <label class="settings-row">
                    <input
                        type="checkbox"
                        prop:checked=move || prefs.get().notifications_enabled
                        on:change=move |ev| {
                            let enabled = event_target_checked(&ev);
                            prefs.update(|p| p.notifications_enabled = enabled);
                        }
                    />
                    <span>"Enable notifications"</span>
                </label>
            </section>
            <div class="settings-page__actions">
                <button class="btn btn--primary" on:click=on_save>
                    "Save Settings"
                </button>
                <button class="btn btn--danger" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="settings-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
