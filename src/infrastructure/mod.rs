//! Infrastructure layer: concrete implementations behind the domain traits.
//!
//! - [`catalog`] - Seeded in-memory listing catalog
//! - [`document`] - PDF rendering of listing summaries

pub mod catalog;
pub mod document;
