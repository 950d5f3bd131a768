//! Role dashboards: a greeting plus one summary card per record screen the
//! role can reach from its menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are derived from `routing::nav`, so a dashboard only ever links to
//! pages the route gate renders for that role.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::resources::Resource;
use crate::pages::reminders::RemindersPanel;
use crate::routing::nav::{NavItem, nav_items_for};
use crate::state::auth::SessionContext;
use crate::state::session::{Role, Session};

/// Menu entries that get a summary card, paired with the records they count.
pub fn summary_cards(role: Role) -> Vec<(NavItem, Resource)> {
    nav_items_for(role)
        .iter()
        .filter_map(|item| Resource::for_route(item.route).map(|r| (*item, r)))
        .collect()
}

/// Display name for the greeting: the local part of the user id.
pub fn greeting_name(session: &Session) -> String {
    session
        .user_id
        .as_deref()
        .and_then(|id| id.split('@').next())
        .filter(|name| !name.is_empty())
        .unwrap_or("there")
        .to_owned()
}

/// Caregivers get the reminders panel under their cards.
pub fn shows_reminders(role: Role) -> bool {
    role == Role::Caregiver
}

fn intro(role: Role) -> &'static str {
    match role {
        Role::Doctor => "Here is today's overview of your patients and schedule.",
        Role::Caregiver => "Track your patients' progress and medication at a glance.",
        Role::Patient => "Your upcoming appointments and messages are below.",
        Role::Guest => "",
    }
}

#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    let auth = expect_context::<SessionContext>().state();
    let name = move || greeting_name(&auth.get().session);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"Welcome back, " {name}</h2>
                <p class="dashboard-page__intro">{intro(role)}</p>
            </header>
            <div class="dashboard-page__cards">
                {summary_cards(role)
                    .into_iter()
                    .map(|(item, resource)| view! { <SummaryCard item=item resource=resource/> })
                    .collect_view()}
            </div>
            {shows_reminders(role).then(|| view! { <RemindersPanel/> })}
        </div>
    }
}

/// Count of one resource's rows with a link to its page.
#[component]
fn SummaryCard(item: NavItem, resource: Resource) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<SessionContext>().state();

    let count = LocalResource::new(move || {
        let config = config.clone();
        let session = auth.get().session;
        async move { crate::net::api::fetch_records(&config, &session, resource).await.map(|rows| rows.len()) }
    });

    view! {
        <a class="summary-card" href=item.path()>
            <span class="summary-card__icon">{item.icon.glyph()}</span>
            <h3 class="summary-card__label">{item.label}</h3>
            <Suspense fallback=move || view! { <p class="summary-card__count">"\u{2026}"</p> }>
                {move || {
                    count
                        .get()
                        .map(|result| match result {
                            Ok(n) => view! { <p class="summary-card__count">{n}</p> }.into_any(),
                            Err(e) => view! { <p class="summary-card__error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
            <span class="summary-card__link">"View " {item.label}</span>
        </a>
    }
}
