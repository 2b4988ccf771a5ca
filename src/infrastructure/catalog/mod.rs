//! In-memory property catalog.
//!
//! - [`StaticCatalog`] - Validated, immutable [`crate::domain::repositories::ListingRepository`]
//! - [`seed`] - Reference listings and landing page content

pub mod seed;
mod static_catalog;

pub use static_catalog::{CatalogError, StaticCatalog};
