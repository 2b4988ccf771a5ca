//! Handlers for listing lookup.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::listing::{ListingItem, ListingListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the whole catalog in display order.
///
/// # Endpoint
///
/// `GET /api/properties`
pub async fn list_listings_handler(State(state): State<AppState>) -> Json<ListingListResponse> {
    Json(ListingListResponse::from(state.listing_service.list()))
}

/// Returns a single listing.
///
/// # Endpoint
///
/// `GET /api/properties/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if `id` is unknown or not a valid identifier.
pub async fn get_listing_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingItem>, AppError> {
    state
        .listing_service
        .get_by_raw_id(&id)
        .map(|listing| Json(ListingItem::from(listing)))
        .ok_or_else(|| AppError::not_found("Property not found", json!({ "id": id })))
}
