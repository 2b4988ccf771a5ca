//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`                         - Landing page
//! - `GET  /property/{id}`            - Property detail page
//! - `POST /property/{id}/contact`    - Contact form (rate limited)
//! - `GET  /property/{id}/document`   - PDF summary
//! - `GET  /rental-ai`                - Rental search page
//! - `GET  /health`                   - Health check
//! - `/api/*`                         - JSON API
//! - `/static/*`                      - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on submissions (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, behind_proxy: bool, static_dir: &str) -> NormalizePath<Router> {
    let api_router = api::routes::public_routes()
        .merge(rate_limited(api::routes::submission_routes(), behind_proxy));

    let web_router = web::routes::public_routes()
        .merge(rate_limited(web::routes::submission_routes(), behind_proxy));

    let router = Router::new()
        .merge(web_router)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn rate_limited(routes: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        routes.layer(rate_limit::proxied_layer())
    } else {
        routes.layer(rate_limit::layer())
    }
}
