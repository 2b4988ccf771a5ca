//! Immutable in-memory catalog.

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use super::seed::{featured_properties, reference_listings};
use crate::domain::entities::{FeaturedProperty, PropertyListing};
use crate::domain::repositories::ListingRepository;

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate listing id {0}")]
    DuplicateId(u32),

    #[error("listing {id} has an invalid image URI: {reason}")]
    InvalidImage { id: u32, reason: String },
}

/// Catalog seeded once at startup and never mutated.
///
/// Construction validates the catalog invariants, so every `StaticCatalog`
/// in existence has unique identifiers and absolute image URIs.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    listings: Vec<PropertyListing>,
    featured: Vec<FeaturedProperty>,
}

impl StaticCatalog {
    /// Builds a catalog from explicit data.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two listings share an id and
    /// [`CatalogError::InvalidImage`] if an image reference is not an
    /// absolute URI.
    pub fn new(
        listings: Vec<PropertyListing>,
        featured: Vec<FeaturedProperty>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());

        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateId(listing.id));
            }

            Url::parse(&listing.image).map_err(|e| CatalogError::InvalidImage {
                id: listing.id,
                reason: e.to_string(),
            })?;
        }

        tracing::debug!(listings = listings.len(), "Catalog built");

        Ok(Self { listings, featured })
    }

    /// Builds the catalog the site ships with.
    ///
    /// # Errors
    ///
    /// Only fails if the reference data itself violates an invariant.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(reference_listings(), featured_properties())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingRepository for StaticCatalog {
    fn all(&self) -> Vec<PropertyListing> {
        self.listings.clone()
    }

    fn count(&self) -> usize {
        self.listings.len()
    }

    fn find_by_id(&self, id: u32) -> Option<PropertyListing> {
        self.listings.iter().find(|l| l.id == id).cloned()
    }

    fn featured(&self) -> Vec<FeaturedProperty> {
        self.featured.clone()
    }
}
