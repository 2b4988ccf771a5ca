//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod enquiries;
pub mod health;
pub mod listings;
pub mod search;

pub use enquiries::create_enquiry_handler;
pub use health::health_handler;
pub use listings::{get_listing_handler, list_listings_handler};
pub use search::search_handler;
