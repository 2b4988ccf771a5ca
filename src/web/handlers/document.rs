//! Property document download handler.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use super::property::not_found_page;
use crate::application::services::DOCUMENT_FILE_NAME;
use crate::state::AppState;

/// Streams the PDF summary of a property as an attachment.
///
/// # Endpoint
///
/// `GET /property/{id}/document`
pub async fn document_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(listing) = state.listing_service.get_by_raw_id(&id) else {
        return not_found_page(id);
    };

    match state.document_service.export(listing.id) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{DOCUMENT_FILE_NAME}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
