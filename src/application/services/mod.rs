//! Business logic services for the application layer.

pub mod contact_service;
pub mod document_service;
pub mod listing_service;

pub use contact_service::ContactService;
pub use document_service::{DOCUMENT_FILE_NAME, DocumentService};
pub use listing_service::ListingService;
