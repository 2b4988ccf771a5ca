#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use homefinder::api;
use homefinder::infrastructure::catalog::StaticCatalog;
use homefinder::state::AppState;
use homefinder::web;
use std::sync::Arc;
use std::time::Duration;

pub fn create_test_state() -> AppState {
    let catalog = StaticCatalog::seeded().unwrap();
    AppState::new(Arc::new(catalog), Duration::ZERO)
}

/// Every route of the application without the rate limiter, which needs the
/// peer address that `TestServer` does not provide.
pub fn create_test_app(state: AppState) -> Router {
    let api_router = api::routes::public_routes().merge(api::routes::submission_routes());

    Router::new()
        .merge(web::routes::public_routes())
        .merge(web::routes::submission_routes())
        .nest("/api", api_router)
        .with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}

pub fn valid_contact() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Asha Raman"),
        ("contact", "+91 98400 12345"),
        ("email", "asha@example.com"),
        ("address", "12 Beach Road, Chennai"),
    ]
}
