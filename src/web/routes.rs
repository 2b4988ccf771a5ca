//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    contact_handler, document_handler, home_handler, property_handler, rental_search_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Browsing routes.
///
/// # Endpoints
///
/// - `GET /`                        - Landing page
/// - `GET /property/{id}`           - Property detail page
/// - `GET /property/{id}/document`  - PDF summary download
/// - `GET /rental-ai`               - Rental search page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/property/{id}", get(property_handler))
        .route("/property/{id}/document", get(document_handler))
        .route("/rental-ai", get(rental_search_handler))
}

/// Contact form submission, rate limited by the caller.
///
/// # Endpoints
///
/// - `POST /property/{id}/contact` - Contact form
pub fn submission_routes() -> Router<AppState> {
    Router::new().route("/property/{id}/contact", post(contact_handler))
}
