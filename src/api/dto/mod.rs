//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Request validation lives on
//! [`crate::domain::entities::ContactRequest`] via `validator`.

pub mod enquiry;
pub mod health;
pub mod listing;
pub mod search;
