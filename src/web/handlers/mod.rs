//! HTML page handlers.

mod document;
mod home;
mod property;
mod rental_search;

pub use document::document_handler;
pub use home::home_handler;
pub use property::{contact_handler, not_found_page, property_handler};
pub use rental_search::rental_search_handler;
