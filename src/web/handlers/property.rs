//! Property detail page and contact form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::domain::entities::{ContactRequest, PaymentMethod, PropertyListing};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::view::{FieldErrors, ListingView};

/// Template for the property detail page.
///
/// Renders `templates/property.html` with the listing, the contact form and,
/// once a contact request was accepted, the payment options.
#[derive(Template, WebTemplate)]
#[template(path = "property.html")]
pub struct PropertyTemplate {
    pub listing: ListingView,
    pub form: ContactRequest,
    pub errors: FieldErrors,
    pub payment_options: Vec<PaymentMethod>,
}

impl PropertyTemplate {
    fn new(listing: &PropertyListing) -> Self {
        Self {
            listing: ListingView::from(listing),
            form: ContactRequest::default(),
            errors: FieldErrors::default(),
            payment_options: Vec::new(),
        }
    }
}

/// Fallback rendered for unknown or malformed property ids.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub requested: String,
}

/// `404` response with the "Property not found" page.
pub fn not_found_page(requested: impl Into<String>) -> Response {
    let page = NotFoundTemplate {
        requested: requested.into(),
    };
    (StatusCode::NOT_FOUND, page).into_response()
}

/// Renders the detail page for a property.
///
/// # Endpoint
///
/// `GET /property/{id}`
///
/// Ids that are unknown or not numeric render the not-found page.
pub async fn property_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.listing_service.get_by_raw_id(&id) {
        Some(listing) => PropertyTemplate::new(&listing).into_response(),
        None => not_found_page(id),
    }
}

/// Handles the contact form.
///
/// # Endpoint
///
/// `POST /property/{id}/contact`
///
/// # Responses
///
/// - **200 OK**: Request accepted; the page shows the payment options
/// - **422 Unprocessable Entity**: Form re-rendered with field errors
/// - **404 Not Found**: Unknown property
pub async fn contact_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ContactRequest>,
) -> Response {
    let Some(listing) = state.listing_service.get_by_raw_id(&id) else {
        return not_found_page(id);
    };

    let mut page = PropertyTemplate::new(&listing);

    if let Err(errors) = form.validate() {
        page.errors = FieldErrors::from(&errors);
        page.form = form;
        return (StatusCode::UNPROCESSABLE_ENTITY, page).into_response();
    }

    match state.contact_service.submit(listing.id, &form) {
        Ok(receipt) => {
            page.form = form;
            page.payment_options = receipt.payment_options;
            page.into_response()
        }
        Err(AppError::NotFound { .. }) => not_found_page(id),
        Err(e) => e.into_response(),
    }
}
