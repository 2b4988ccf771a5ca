//! Contact request submitted from a property page.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use super::PaymentMethod;

/// Digits with optional leading `+` and common separators.
static CONTACT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{5,19}$").unwrap());

/// Visitor details collected by the contact form.
///
/// Every field is required. Used both for form-encoded page submissions and
/// JSON API requests.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ContactRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    #[serde(default)]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "Contact number is required"),
        regex(path = *CONTACT_NUMBER_REGEX, message = "Enter a valid contact number")
    )]
    #[serde(default)]
    pub contact: String,

    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Enter a valid email address")
    )]
    #[serde(default)]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Address is required"))]
    #[serde(default)]
    pub address: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Acknowledgement of an accepted contact request.
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub property_id: u32,
    pub received_at: DateTime<Utc>,
    pub payment_options: Vec<PaymentMethod>,
}
