//! API route configuration.

use crate::api::handlers::{
    create_enquiry_handler, get_listing_handler, list_listings_handler, search_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only catalog routes.
///
/// # Endpoints
///
/// - `GET /properties`           - All listings
/// - `GET /properties/search`    - Filtered listings
/// - `GET /properties/{id}`      - A single listing
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(list_listings_handler))
        .route("/properties/search", get(search_handler))
        .route("/properties/{id}", get(get_listing_handler))
}

/// Write routes, rate limited by the caller.
///
/// # Endpoints
///
/// - `POST /properties/{id}/enquiries` - Submit a contact request
pub fn submission_routes() -> Router<AppState> {
    Router::new().route("/properties/{id}/enquiries", post(create_enquiry_handler))
}
