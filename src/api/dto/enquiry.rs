//! DTOs for the contact request endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ContactReceipt, PaymentMethod};

/// A payment method offered after a contact request.
#[derive(Debug, Serialize)]
pub struct PaymentOptionItem {
    pub id: PaymentMethod,
    pub label: &'static str,
}

/// Response for `POST /api/properties/{id}/enquiries`.
#[derive(Debug, Serialize)]
pub struct EnquiryResponse {
    pub status: &'static str,
    pub property_id: u32,
    pub received_at: DateTime<Utc>,
    pub payment_options: Vec<PaymentOptionItem>,
}

impl From<ContactReceipt> for EnquiryResponse {
    fn from(receipt: ContactReceipt) -> Self {
        Self {
            status: "received",
            property_id: receipt.property_id,
            received_at: receipt.received_at,
            payment_options: receipt
                .payment_options
                .into_iter()
                .map(|method| PaymentOptionItem {
                    id: method,
                    label: method.label(),
                })
                .collect(),
        }
    }
}
