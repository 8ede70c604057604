//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain HTTP endpoints and Leptos SSR rendering share a single Axum router.
//! The authentication screen lives at `/auth`; the bare root redirects there.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Non-Leptos routes: health probe and root redirect.
fn base_routes() -> Router {
    Router::new()
        .route("/", get(redirect_root_to_auth))
        .route("/healthz", get(healthz))
}

async fn redirect_root_to_auth() -> Redirect {
    Redirect::temporary(client::state::mode::AUTH_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Leptos SSR frontend: base routes + the rendered app + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}
