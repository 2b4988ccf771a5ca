//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (listings, contact requests, documents)
//! - [`repositories`] - Catalog access trait
//! - [`search`] - The listing search filter
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod repositories;
pub mod search;
