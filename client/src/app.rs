//! Root application component with routing and context providers.
//!
//! Every path is matched by the same route and handed to `RouteGate`, which
//! asks the access policy what to render. Leptos route definitions therefore
//! stay a thin catch-all and the policy remains the single source of truth.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::RouteGate;
use crate::config::ClientConfig;
use crate::state::auth::SessionContext;
use crate::state::ui::UiState;
use crate::util::session_storage::LocalStorageStore;
use crate::util::{theme, ui_persistence};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config, session context, and UI state, then routes
/// every path through the gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionContext::new(Arc::new(LocalStorageStore));
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(session.clone());
    provide_context(ui);

    // Storage is only readable in the browser; this runs once after hydration.
    Effect::new(move || {
        session.load();
        let prefs = ui_persistence::load_preferences();
        let dark = theme::initial(&prefs);
        theme::apply(dark);
        ui_persistence::apply_font_size(prefs.font_size);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/eldercare.css"/>
        <Title text="ElderCare"/>

        <Router>
            <Routes fallback=|| view! { <RouteGate/> }>
                <Route path=StaticSegment("") view=RouteGate/>
                <Route path=WildcardSegment("any") view=RouteGate/>
            </Routes>
        </Router>
    }
}
