//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the grant is written through the session context, which
//! publishes the new session before this page navigates to the role's home.
//! The gate therefore never sees a half-written session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{AuthMode, ClientConfig};
use crate::net::mock::DEMO_ACCOUNTS;
use crate::pages::forms::{MIN_PASSWORD_LEN, looks_like_email};
use crate::routing::policy::role_home;
use crate::routing::route::SIGNUP_PATH;
use crate::state::auth::SessionContext;

/// Per-field validation messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate raw form input; returns the trimmed email on success.
///
/// # Errors
///
/// Returns the messages to show beside each failing field.
pub fn validate_login_input(email: &str, password: &str) -> Result<String, LoginErrors> {
    let email = email.trim();
    let errors = LoginErrors {
        email: if email.is_empty() {
            Some("Email is required")
        } else if !looks_like_email(email) {
            Some("Invalid email format")
        } else {
            None
        },
        password: if password.is_empty() {
            Some("Password is required")
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            Some("Password must be at least 6 characters long")
        } else {
            None
        },
    };
    if errors.is_empty() { Ok(email.to_owned()) } else { Err(errors) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let show_demo = config.auth_mode == AuthMode::Mock;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = password.get();
        let email_value = match validate_login_input(&email.get(), &password_value) {
            Ok(email_value) => email_value,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(LoginErrors::default());
        busy.set(true);
        info.set("Signing in...".to_owned());

        let config = config.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&config, &email_value, &password_value).await {
                Ok(grant) => {
                    let signed_in = session.establish(&grant);
                    leptos::logging::log!("signed in as {}", signed_in.role);
                    info.set(String::new());
                    busy.set(false);
                    navigate(role_home(signed_in.role), NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ElderCare"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit novalidate>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().email.is_some()>
                        <p class="field-error">{move || errors.get().email.unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().password.is_some()>
                        <p class="field-error">{move || errors.get().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? " <a href=SIGNUP_PATH>"Sign up"</a>
                </p>
                <Show when=move || show_demo>
                    <details class="login-demo">
                        <summary>"Demo accounts"</summary>
                        <ul>
                            {DEMO_ACCOUNTS
                                .iter()
                                .map(|a| view! { <li>{a.email} " / " {a.password} " (" {a.role.label()} ")"</li> })
                                .collect_view()}
                        </ul>
                    </details>
                </Show>
            </div>
        </div>
    }
}
