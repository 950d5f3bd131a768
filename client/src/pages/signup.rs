//! Signup page: account registration for one of the three staff/patient roles.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::SignupForm;
use crate::pages::forms::{looks_like_email, required};
use crate::routing::route::LOGIN_PATH;
use crate::state::session::Role;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub role: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.role.is_none()
    }
}

/// Validate the raw form and build the registration payload.
///
/// # Errors
///
/// Returns the per-field messages when any field is blank, the email is
/// malformed, or the role is not a signed-in role.
pub fn validate_signup(name: &str, email: &str, password: &str, role: &str) -> Result<SignupForm, SignupErrors> {
    let parsed_role = Role::parse(Some(role));
    let errors = SignupErrors {
        name: required(name, "Name is required"),
        email: required(email, "Email is required")
            .or_else(|| (!looks_like_email(email.trim())).then_some("Invalid email format")),
        password: required(password, "Password is required"),
        role: required(role, "Role is required")
            .or_else(|| (parsed_role == Role::Guest).then_some("Choose doctor, caregiver, or patient")),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignupForm {
        username: name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        role: parsed_role.as_str().to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let errors = RwSignal::new(SignupErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_signup(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(form) => form,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(SignupErrors::default());
        busy.set(true);
        info.set("Creating account...".to_owned());

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&config, &form).await {
                Ok(()) => {
                    leptos::logging::log!("registered {} as {}", form.email, form.role);
                    busy.set(false);
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    let field_error = move |pick: fn(&SignupErrors) -> Option<&'static str>| {
        move || pick(&errors.get()).map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit novalidate>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    {field_error(|e| e.name)}
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {field_error(|e| e.email)}
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {field_error(|e| e.password)}
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="">"Select a role"</option>
                        {Role::SIGNED_IN
                            .iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                    {field_error(|e| e.role)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <a href=LOGIN_PATH>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
