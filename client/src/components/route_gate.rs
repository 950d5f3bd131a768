//! Route gate: maps the current path to a page or a redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation lands here. The gate consults `routing::policy::decide`
//! against the live session and either renders the matched page or replaces
//! the history entry with the redirect target. Nothing is decided until the
//! session has been read from storage, so SSR markup and the first client
//! render agree and no redirect fires on a stale (empty) session.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::shell::AppShell;
use crate::net::resources::Resource;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::records::RecordsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::signup::SignupPage;
use crate::routing::policy::{RouteDecision, decide};
use crate::routing::route::Route;
use crate::state::auth::{AuthState, SessionContext};

/// Decision for `path`, or `None` while the session is still unread.
pub fn gate_decision(state: &AuthState, path: &str) -> Option<RouteDecision> {
    if !state.loaded {
        return None;
    }
    Some(decide(&state.session, path))
}

/// Catch-all route view.
#[component]
pub fn RouteGate() -> impl IntoView {
    let auth = expect_context::<SessionContext>().state();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| gate_decision(&auth.get(), &location.pathname.get()));

    Effect::new(move || {
        if let Some(RouteDecision::RedirectTo(target)) = decision.get() {
            leptos::logging::log!("route gate: redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        Some(RouteDecision::Render(route)) => view! { <RoutedPage route=route/> }.into_any(),
        _ => view! { <div class="route-pending">"Loading..."</div> }.into_any(),
    }
}

/// The page for an allowed route, wrapped in the shell unless it is public.
#[component]
fn RoutedPage(route: Route) -> impl IntoView {
    let page = match route {
        Route::Login => return view! { <Title text=route.title()/> <LoginPage/> }.into_any(),
        Route::Signup => return view! { <Title text=route.title()/> <SignupPage/> }.into_any(),
        Route::Dashboard(role) => view! { <DashboardPage role=role/> }.into_any(),
        Route::Settings => view! { <SettingsPage/> }.into_any(),
        Route::Profile => view! { <ProfilePage/> }.into_any(),
        other => match Resource::sections(other) {
            [] => view! { <p class="page-empty">"Nothing to show here."</p> }.into_any(),
            [resource] => view! { <RecordsPage resource=*resource/> }.into_any(),
            sections => sections
                .iter()
                .map(|resource| view! { <RecordsPage resource=*resource title=resource.title()/> })
                .collect_view()
                .into_any(),
        },
    };

    view! {
        <Title text=route.title()/>
        <AppShell route=route>{page}</AppShell>
    }
    .into_any()
}
