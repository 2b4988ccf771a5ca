//! Rental search page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::api::dto::search::SearchParams;
use crate::state::AppState;
use crate::web::view::{ListingView, TypeOption, type_options};

/// Template for the rental search page.
///
/// Renders `templates/rental_ai.html`. Before the first search only the form
/// is shown; afterwards the result count, the cards and, when nothing
/// matched, the "no results" message.
#[derive(Template, WebTemplate)]
#[template(path = "rental_ai.html")]
pub struct RentalSearchTemplate {
    pub location: String,
    pub max_price: String,
    pub type_options: Vec<TypeOption>,
    pub searched: bool,
    pub results: Vec<ListingView>,
}

/// Renders the search form and, if submitted, its results.
///
/// # Endpoint
///
/// `GET /rental-ai`
///
/// # Query Parameters
///
/// Same as `GET /api/properties/search`. The presence of any of them marks
/// the page as searched, even if every value is empty.
pub async fn rental_search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let searched = params.is_submitted();

    let results = if searched {
        let listings = state.listing_service.search(&params.to_criteria());
        state.simulate_search_latency().await;
        listings.iter().map(ListingView::from).collect()
    } else {
        Vec::new()
    };

    RentalSearchTemplate {
        location: params.location().to_string(),
        max_price: params.max_price().to_string(),
        type_options: type_options(params.property_type()),
        searched,
        results,
    }
}
