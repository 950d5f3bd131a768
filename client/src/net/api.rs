//! REST API helpers for auth, profile, and resource screens.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` in remote mode, or
//! the in-browser mock in mock mode.
//! Server-side (SSR): remote calls return `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages show the error text inline
//! and never panic on a failed request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::{AuthMode, ClientConfig};
use crate::net::error::ApiError;
use crate::net::mock;
use crate::net::resources::Resource;
use crate::net::types::{LoginGrant, Profile, Record, SignupForm};
use crate::state::session::Session;

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_lookup_path(user_id: &str) -> String {
    format!("/users/username/{}", urlencoding::encode(user_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_update_path(profile: &Profile, user_id: &str) -> String {
    match profile.id {
        Some(id) => format!("/users/{id}"),
        None => format!("/users/{}", urlencoding::encode(user_id)),
    }
}

/// 401 from the login endpoint means bad credentials, not a broken server.
#[cfg(any(test, feature = "hydrate"))]
fn login_status_error(status: u16, message: Option<String>) -> ApiError {
    if status == 401 {
        ApiError::InvalidCredentials
    } else {
        ApiError::from_status(status, message, "Login failed")
    }
}

async fn mock_latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(mock::MOCK_LATENCY_MS).await;
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::bearer;
    use crate::net::error::ApiError;
    use crate::net::types::ErrorBody;
    use crate::state::session::Session;

    pub(super) fn authorized(builder: RequestBuilder, session: &Session) -> RequestBuilder {
        match session.token.as_deref() {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    pub(super) fn transport(e: gloo_net::Error) -> ApiError {
        ApiError::Request(e.to_string())
    }

    pub(super) async fn error_message(resp: Response) -> Option<String> {
        resp.json::<ErrorBody>().await.ok().and_then(|b| b.message)
    }

    pub(super) async fn check(resp: Response, fallback: &str) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        Err(ApiError::from_status(status, error_message(resp).await, fallback))
    }

    pub(super) async fn json<T: DeserializeOwned>(resp: Response, fallback: &str) -> Result<T, ApiError> {
        let resp = check(resp, fallback).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Sign in with email + password.
///
/// # Errors
///
/// Returns [`ApiError::InvalidCredentials`] for a rejected login, or a
/// transport/status error from the API.
pub async fn login(config: &ClientConfig, email: &str, password: &str) -> Result<LoginGrant, ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return mock::login(email, password);
    }
    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::{LoginRequest, LoginResponse};

        let payload = LoginRequest { username: email, password };
        let resp = gloo_net::http::Request::post(&config.endpoint("/users/login"))
            .json(&payload)
            .map_err(http::transport)?
            .send()
            .await
            .map_err(http::transport)?;
        if !resp.ok() {
            let status = resp.status();
            return Err(login_status_error(status, http::error_message(resp).await));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        body.into_grant(email)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Register a new account.
///
/// # Errors
///
/// Returns [`ApiError::AlreadyExists`] in mock mode for a taken email, or a
/// transport/status error from the API.
pub async fn register(config: &ClientConfig, form: &SignupForm) -> Result<(), ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return mock::register(form);
    }
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint("/users/register"))
            .json(form)
            .map_err(http::transport)?
            .send()
            .await
            .map_err(http::transport)?;
        http::check(resp, "Signup failed").await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's profile.
///
/// # Errors
///
/// Returns a transport/status error from the API.
pub async fn fetch_profile(config: &ClientConfig, session: &Session) -> Result<Profile, ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return Ok(mock::profile(session));
    }
    #[cfg(feature = "hydrate")]
    {
        let user_id = session.user_id.as_deref().unwrap_or_default();
        let url = config.endpoint(&profile_lookup_path(user_id));
        let resp = http::authorized(gloo_net::http::Request::get(&url), session)
            .send()
            .await
            .map_err(http::transport)?;
        http::json(resp, "Failed to fetch profile").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Save profile edits and return the stored profile.
///
/// # Errors
///
/// Returns a transport/status error from the API.
pub async fn update_profile(config: &ClientConfig, session: &Session, form: &Profile) -> Result<Profile, ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return Ok(mock::update_profile(session, form));
    }
    #[cfg(feature = "hydrate")]
    {
        let user_id = session.user_id.as_deref().unwrap_or_default();
        let url = config.endpoint(&profile_update_path(form, user_id));
        let resp = http::authorized(gloo_net::http::Request::put(&url), session)
            .json(form)
            .map_err(http::transport)?
            .send()
            .await
            .map_err(http::transport)?;
        http::json(resp, "Failed to update profile").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, form);
        Err(ApiError::Unavailable)
    }
}

/// List the rows of a resource screen, scoped to the caller's role.
///
/// # Errors
///
/// Returns a transport/status error from the API.
pub async fn fetch_records(config: &ClientConfig, session: &Session, resource: Resource) -> Result<Vec<Record>, ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return Ok(mock::seed(resource, session));
    }
    #[cfg(feature = "hydrate")]
    {
        let path = resource.list_path(session.role, session.user_id.as_deref());
        let resp = http::authorized(gloo_net::http::Request::get(&config.endpoint(&path)), session)
            .send()
            .await
            .map_err(http::transport)?;
        http::json(resp, &format!("Failed to load {}", resource.noun().to_lowercase())).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, resource);
        Err(ApiError::Unavailable)
    }
}

/// Create a row and return it as stored (with its id).
///
/// # Errors
///
/// Returns a transport/status error from the API.
pub async fn create_record(
    config: &ClientConfig,
    session: &Session,
    resource: Resource,
    record: Record,
) -> Result<Record, ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return Ok(mock::create(record));
    }
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(resource.collection());
        let resp = http::authorized(gloo_net::http::Request::post(&url), session)
            .json(&record)
            .map_err(http::transport)?
            .send()
            .await
            .map_err(http::transport)?;
        http::json(resp, &format!("Failed to save {}", resource.noun().to_lowercase())).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, resource, record);
        Err(ApiError::Unavailable)
    }
}

/// Replace the row stored under `id` and return it as stored.
///
/// # Errors
///
/// Returns a transport/status error from the API.
pub async fn update_record(
    config: &ClientConfig,
    session: &Session,
    resource: Resource,
    id: &str,
    record: Record,
) -> Result<Record, ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return Ok(mock::update(id, record));
    }
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(&resource.item_path(id));
        let resp = http::authorized(gloo_net::http::Request::put(&url), session)
            .json(&record)
            .map_err(http::transport)?
            .send()
            .await
            .map_err(http::transport)?;
        let stored: Record = http::json(resp, &format!("Failed to update {}", resource.noun().to_lowercase())).await?;
        Ok(crate::net::resources::with_id(stored, id))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, resource, id, record);
        Err(ApiError::Unavailable)
    }
}

/// Delete one row by id.
///
/// # Errors
///
/// Returns a transport/status error from the API.
pub async fn delete_record(config: &ClientConfig, session: &Session, resource: Resource, id: &str) -> Result<(), ApiError> {
    if config.auth_mode == AuthMode::Mock {
        mock_latency().await;
        return Ok(());
    }
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(&resource.item_path(id));
        let resp = http::authorized(gloo_net::http::Request::delete(&url), session)
            .send()
            .await
            .map_err(http::transport)?;
        http::check(resp, &format!("Failed to delete {}", resource.noun().to_lowercase()))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, resource, id);
        Err(ApiError::Unavailable)
    }
}
