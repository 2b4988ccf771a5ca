//! Handler for the listing search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::listing::ListingItem;
use crate::api::dto::search::{SearchParams, SearchResponse};
use crate::state::AppState;

/// Filters the catalog by location, type and maximum price.
///
/// # Endpoint
///
/// `GET /api/properties/search`
///
/// # Query Parameters
///
/// - `location` (optional): Case-insensitive substring of the city
/// - `type` (optional): `apartment`, `house` or `villa`, any case
/// - `max_price` (optional): Inclusive upper bound; ignored if not an integer
///
/// # Response
///
/// ```json
/// {
///   "criteria": { "location": "chennai", "property_type": null, "max_price": 40000 },
///   "count": 3,
///   "items": [ { "id": 1, "title": "Modern Apartment with City View", ... } ]
/// }
/// ```
///
/// This endpoint never fails on bad input: every criterion that cannot be
/// interpreted is treated as absent.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let criteria = params.to_criteria();
    let results = state.listing_service.search(&criteria);

    state.simulate_search_latency().await;

    Json(SearchResponse {
        count: results.len(),
        items: results.into_iter().map(ListingItem::from).collect(),
        criteria,
    })
}
