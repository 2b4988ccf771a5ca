//! Contact request handling.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{ContactReceipt, ContactRequest, PaymentMethod};
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;

/// Accepts contact requests for listings.
///
/// There is no delivery channel: an accepted request is recorded in the
/// application log and acknowledged with the payment methods to offer.
pub struct ContactService<R: ListingRepository> {
    repository: Arc<R>,
}

impl<R: ListingRepository> ContactService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and records a contact request for `property_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the listing does not exist and
    /// [`AppError::Validation`] if any field is missing or malformed.
    pub fn submit(
        &self,
        property_id: u32,
        request: &ContactRequest,
    ) -> Result<ContactReceipt, AppError> {
        let listing = self.repository.find_by_id(property_id).ok_or_else(|| {
            AppError::not_found("Property not found", json!({ "id": property_id }))
        })?;

        request.validate()?;

        metrics::counter!("contact_requests_total").increment(1);
        tracing::info!(
            property_id,
            property = %listing.title,
            name = %request.name.trim(),
            contact = %request.contact.trim(),
            email = %request.email.trim(),
            address = %request.address.trim(),
            "Contact request received"
        );

        Ok(ContactReceipt {
            property_id,
            received_at: Utc::now(),
            payment_options: PaymentMethod::ALL.to_vec(),
        })
    }
}
