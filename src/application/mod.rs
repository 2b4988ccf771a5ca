//! Application layer services.
//!
//! Services consume the [`crate::domain::repositories::ListingRepository`]
//! trait and give HTTP handlers and the CLI a small, typed API.
//!
//! # Available Services
//!
//! - [`services::ListingService`] - Listing lookup, showcase and search
//! - [`services::ContactService`] - Contact request validation and logging
//! - [`services::DocumentService`] - PDF export of a listing

pub mod services;
