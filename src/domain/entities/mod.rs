//! Core domain entities.
//!
//! Entities are plain data structures. The catalog entity is
//! [`PropertyListing`]; the rest model page content and visitor input.
//!
//! # Entity Types
//!
//! - [`PropertyListing`] / [`PropertyCategory`] - Searchable catalog records
//! - [`FeaturedProperty`] / [`Feature`] - Landing page content
//! - [`ContactRequest`] / [`ContactReceipt`] - Contact form input and its acknowledgement
//! - [`PaymentMethod`] - Payment options revealed after contact
//! - [`ListingDocument`] - Printable listing summary

pub mod contact;
pub mod document;
pub mod featured;
pub mod listing;
pub mod payment;

pub use contact::{ContactReceipt, ContactRequest};
pub use document::{DOCUMENT_HEADING, ListingDocument};
pub use featured::{Feature, FeaturedProperty};
pub use listing::{PropertyCategory, PropertyListing, UnknownCategory};
pub use payment::PaymentMethod;
