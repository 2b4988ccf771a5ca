//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via
//! `mockall` for service unit tests.

pub mod listing_repository;

pub use listing_repository::ListingRepository;

#[cfg(test)]
pub use listing_repository::MockListingRepository;
