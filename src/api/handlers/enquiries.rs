//! Handler for contact requests submitted through the API.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::enquiry::EnquiryResponse;
use crate::domain::entities::ContactRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Records a contact request for a listing.
///
/// # Endpoint
///
/// `POST /api/properties/{id}/enquiries`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Asha Raman",
///   "contact": "+91 98400 12345",
///   "email": "asha@example.com",
///   "address": "12 Beach Road, Chennai"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the payment options to present:
///
/// ```json
/// {
///   "status": "received",
///   "property_id": 1,
///   "received_at": "2026-01-01T10:00:00Z",
///   "payment_options": [
///     { "id": "credit_card", "label": "Credit Card" },
///     { "id": "upi", "label": "UPI" },
///     { "id": "net_banking", "label": "Net Banking" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 404 Not Found if the listing does not exist
/// - 400 Bad Request with per-field messages if validation fails
pub async fn create_enquiry_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactRequest>,
) -> Result<(StatusCode, Json<EnquiryResponse>), AppError> {
    let property_id: u32 = id
        .trim()
        .parse()
        .map_err(|_| AppError::not_found("Property not found", json!({ "id": id })))?;

    let receipt = state.contact_service.submit(property_id, &payload)?;

    Ok((StatusCode::CREATED, Json(EnquiryResponse::from(receipt))))
}
