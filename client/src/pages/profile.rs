//! Profile page: view and edit the signed-in user's account details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::Profile;
use crate::pages::forms::{looks_like_email, required};
use crate::state::auth::SessionContext;

/// Which profile field an input edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Email,
    PhoneNumber,
    PrimaryLocation,
    SecondaryLocation,
}

impl ProfileField {
    pub const EDITABLE: [ProfileField; 5] = [
        ProfileField::Username,
        ProfileField::Email,
        ProfileField::PhoneNumber,
        ProfileField::PrimaryLocation,
        ProfileField::SecondaryLocation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Username => "Name",
            ProfileField::Email => "Email",
            ProfileField::PhoneNumber => "Phone",
            ProfileField::PrimaryLocation => "Primary Location",
            ProfileField::SecondaryLocation => "Secondary Location",
        }
    }

    pub fn get(self, profile: &Profile) -> &str {
        match self {
            ProfileField::Username => &profile.username,
            ProfileField::Email => &profile.email,
            ProfileField::PhoneNumber => &profile.phone_number,
            ProfileField::PrimaryLocation => &profile.primary_location,
            ProfileField::SecondaryLocation => &profile.secondary_location,
        }
    }

    pub fn set(self, profile: &mut Profile, value: String) {
        let slot = match self {
            ProfileField::Username => &mut profile.username,
            ProfileField::Email => &mut profile.email,
            ProfileField::PhoneNumber => &mut profile.phone_number,
            ProfileField::PrimaryLocation => &mut profile.primary_location,
            ProfileField::SecondaryLocation => &mut profile.secondary_location,
        };
        *slot = value;
    }
}

/// Check an edited profile before saving.
///
/// # Errors
///
/// Returns the message to show above the form.
pub fn validate_profile(profile: &Profile) -> Result<(), &'static str> {
    if let Some(msg) = required(&profile.username, "Name is required") {
        return Err(msg);
    }
    if let Some(msg) = required(&profile.email, "Email is required") {
        return Err(msg);
    }
    if !looks_like_email(profile.email.trim()) {
        return Err("Invalid email format");
    }
    Ok(())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<SessionContext>().state();

    let form = RwSignal::new(Profile::default());
    let loaded = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let fetch_config = config.clone();
    let fetched = LocalResource::new(move || {
        let config = fetch_config.clone();
        let session = auth.get().session;
        async move { crate::net::api::fetch_profile(&config, &session).await }
    });

    Effect::new(move || {
        if let Some(result) = fetched.get() {
            match result {
                Ok(profile) => form.set(profile),
                Err(e) => info.set(format!("Error fetching profile: {e}")),
            }
            loaded.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let profile = form.get();
        if let Err(msg) = validate_profile(&profile) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        let config = config.clone();
        let session = auth.get_untracked().session;
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&config, &session, &profile).await {
                Ok(saved) => {
                    form.set(saved);
                    info.set("Profile updated successfully".to_owned());
                }
                Err(e) => {
                    leptos::logging::warn!("profile update failed: {e}");
                    info.set(format!("Error updating profile: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="profile-page">
            <Show
                when=move || loaded.get()
                fallback=move || view! { <p class="profile-page__loading">"Loading profile..."</p> }
            >
                <form class="profile-page__form" on:submit=on_submit.clone() novalidate>
                    <p class="profile-page__role">"Role: " {move || form.get().role}</p>
                    {ProfileField::EDITABLE
                        .iter()
                        .map(|field| {
                            let field = *field;
                            view! {
                                <label class="profile-page__field">
                                    <span>{field.label()}</span>
                                    <input
                                        class="dialog__input"
                                        type=if field == ProfileField::Email { "email" } else { "text" }
                                        prop:value=move || field.get(&form.get()).to_owned()
                                        on:input=move |ev| form.update(|p| field.set(p, event_target_value(&ev)))
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save Profile"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
