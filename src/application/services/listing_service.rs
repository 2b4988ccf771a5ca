//! Listing browsing and search service.

use std::sync::Arc;

use crate::domain::entities::{FeaturedProperty, PropertyListing};
use crate::domain::repositories::ListingRepository;
use crate::domain::search::{SearchCriteria, filter_listings};

/// Read-side service over the catalog.
pub struct ListingService<R: ListingRepository> {
    repository: Arc<R>,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every listing, in catalog order.
    pub fn list(&self) -> Vec<PropertyListing> {
        self.repository.all()
    }

    /// Looks up a single listing. A missing id is not an error.
    pub fn get(&self, id: u32) -> Option<PropertyListing> {
        self.repository.find_by_id(id)
    }

    /// Looks up a listing from a raw path segment.
    ///
    /// Segments that are not a valid identifier resolve to `None`, the same
    /// as an unknown identifier.
    pub fn get_by_raw_id(&self, raw: &str) -> Option<PropertyListing> {
        raw.trim().parse().ok().and_then(|id| self.get(id))
    }

    /// Filters the catalog. See [`crate::domain::search`] for the rules.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<PropertyListing> {
        let results = filter_listings(&self.repository.all(), criteria);

        metrics::counter!("listing_searches_total").increment(1);
        tracing::info!(
            location = ?criteria.location,
            property_type = ?criteria.property_type,
            max_price = ?criteria.max_price,
            results = results.len(),
            "Listing search"
        );

        results
    }

    /// Landing page showcase.
    pub fn featured(&self) -> Vec<FeaturedProperty> {
        self.repository.featured()
    }

    /// Number of listings in the catalog.
    pub fn count(&self) -> usize {
        self.repository.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockListingRepository;
    use crate::infrastructure::catalog::seed::reference_listings;
    use mockall::predicate::eq;

    #[test]
    fn test_get_delegates_to_repository() {
        let mut repo = MockListingRepository::new();
        let listing = reference_listings().remove(2);
        let expected = listing.clone();

        repo.expect_find_by_id()
            .with(eq(3))
            .times(1)
            .return_once(move |_| Some(listing));

        let service = ListingService::new(Arc::new(repo));

        assert_eq!(service.get(3), Some(expected));
    }

    #[test]
    fn test_get_by_raw_id_handles_garbage() {
        let mut repo = MockListingRepository::new();
        repo.expect_find_by_id().never();

        let service = ListingService::new(Arc::new(repo));

        assert!(service.get_by_raw_id("abc").is_none());
        assert!(service.get_by_raw_id("-1").is_none());
        assert!(service.get_by_raw_id("").is_none());
    }

    #[test]
    fn test_get_by_raw_id_unknown() {
        let mut repo = MockListingRepository::new();
        repo.expect_find_by_id().with(eq(99)).returning(|_| None);

        let service = ListingService::new(Arc::new(repo));

        assert!(service.get_by_raw_id("99").is_none());
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let mut repo = MockListingRepository::new();
        repo.expect_all().returning(reference_listings);

        let service = ListingService::new(Arc::new(repo));
        let criteria = SearchCriteria::from_input("", "apartment", "30000");

        let ids: Vec<u32> = service.search(&criteria).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_search_over_empty_catalog() {
        let mut repo = MockListingRepository::new();
        repo.expect_all().returning(Vec::new);

        let service = ListingService::new(Arc::new(repo));

        assert!(service.search(&SearchCriteria::default()).is_empty());
    }

    #[test]
    fn test_count_does_not_load_listings() {
        let mut repo = MockListingRepository::new();
        repo.expect_all().never();
        repo.expect_count().times(1).return_const(10_usize);

        let service = ListingService::new(Arc::new(repo));

        assert_eq!(service.count(), 10);
    }
}
