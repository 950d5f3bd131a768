//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the liveness probe, the compiled WASM/CSS bundle
//! under `/pkg`, and server-renders every other path through the Leptos app.
//! Access control happens in the browser once the session is read, so SSR
//! always renders the gate's neutral loading state.

pub mod health;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::path::PathBuf;

use axum::Router;
use leptos::config::LeptosOptions;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Full application router built from the workspace Leptos configuration.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[[workspace.metadata.leptos]]` section).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(router(conf.leptos_options))
}

/// Health + static assets + Leptos SSR, wrapped in CORS, compression and
/// request tracing.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    health::router()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
