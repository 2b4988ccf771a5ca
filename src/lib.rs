//! # HomeFinder
//!
//! A server-rendered real-estate browsing site built with Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Listings, the search filter and the repository trait
//! - **Application Layer** ([`application`]) - Listing, contact and document services
//! - **Infrastructure Layer** ([`infrastructure`]) - Static catalog and PDF rendering
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML pages
//!
//! ## Features
//!
//! - Rental search by location, property type and maximum price
//! - Property detail pages with a contact form
//! - One-page PDF summary per property
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # then open http://localhost:3000/rental-ai?location=chennai
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactService, DocumentService, ListingService};
    pub use crate::domain::entities::{ContactRequest, PropertyCategory, PropertyListing};
    pub use crate::domain::search::SearchCriteria;
    pub use crate::error::AppError;
    pub use crate::infrastructure::catalog::StaticCatalog;
    pub use crate::state::AppState;
}
