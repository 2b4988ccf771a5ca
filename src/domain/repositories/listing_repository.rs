//! Repository trait for catalog access.

use crate::domain::entities::{FeaturedProperty, PropertyListing};

/// Read-only access to the property catalog.
///
/// The catalog is seeded once and never mutated, so the trait exposes no
/// write operations and no method can fail.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::StaticCatalog`] - In-memory seeded catalog
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ListingRepository: Send + Sync {
    /// Returns every listing in catalog order.
    fn all(&self) -> Vec<PropertyListing>;

    /// Number of listings, without materializing them.
    fn count(&self) -> usize;

    /// Finds a listing by identifier.
    fn find_by_id(&self, id: u32) -> Option<PropertyListing>;

    /// Returns the landing page showcase.
    fn featured(&self) -> Vec<FeaturedProperty>;
}
