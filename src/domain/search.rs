//! Catalog search filter.
//!
//! A query is three optional criteria: a location substring, a property
//! type and a maximum price. A listing matches when it satisfies every
//! criterion that is present. Matching never reorders, scores or fails.
//!
//! # Criterion rules
//!
//! | Criterion  | Absent when                 | Matches when                                   |
//! |------------|-----------------------------|------------------------------------------------|
//! | location   | empty                       | listing location contains it, ignoring case    |
//! | type       | empty                       | listing category equals it, ignoring case      |
//! | max price  | empty or not an integer     | listing price is less than or equal to it      |
//!
//! A max price that does not parse as an integer is dropped rather than
//! rejected, so `max_price=abc` behaves exactly like no max price.

use serde::Serialize;

use super::entities::PropertyListing;

/// Normalized search criteria.
///
/// Built from raw form input with [`SearchCriteria::from_input`]. All string
/// criteria are stored lower-cased and otherwise untouched, so surrounding
/// whitespace is part of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub max_price: Option<i64>,
}

impl SearchCriteria {
    /// Builds criteria from the raw strings a visitor typed.
    pub fn from_input(location: &str, property_type: &str, max_price: &str) -> Self {
        Self {
            location: normalize(location),
            property_type: normalize(property_type),
            max_price: max_price.trim().parse::<i64>().ok(),
        }
    }

    /// Returns true when no criterion is present.
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.property_type.is_none() && self.max_price.is_none()
    }

    /// Returns true when `listing` satisfies every present criterion.
    pub fn matches(&self, listing: &PropertyListing) -> bool {
        let matches_location = self
            .location
            .as_deref()
            .is_none_or(|needle| listing.location.to_lowercase().contains(needle));

        let matches_type = self
            .property_type
            .as_deref()
            .is_none_or(|wanted| listing.category.as_str() == wanted);

        let matches_price = self
            .max_price
            .is_none_or(|max| i64::try_from(listing.price).is_ok_and(|price| price <= max));

        matches_location && matches_type && matches_price
    }
}

fn normalize(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_lowercase())
}

/// Returns the listings matching `criteria`, in catalog order.
pub fn filter_listings<'a, I>(listings: I, criteria: &SearchCriteria) -> Vec<PropertyListing>
where
    I: IntoIterator<Item = &'a PropertyListing>,
{
    listings
        .into_iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::seed::reference_listings;

    fn ids(listings: &[PropertyListing]) -> Vec<u32> {
        listings.iter().map(|l| l.id).collect()
    }

    fn search(location: &str, property_type: &str, max_price: &str) -> Vec<u32> {
        let catalog = reference_listings();
        let criteria = SearchCriteria::from_input(location, property_type, max_price);
        ids(&filter_listings(&catalog, &criteria))
    }

    #[test]
    fn test_empty_criteria_returns_whole_catalog_in_order() {
        let catalog = reference_listings();
        let criteria = SearchCriteria::from_input("", "", "");

        assert!(criteria.is_empty());
        assert_eq!(filter_listings(&catalog, &criteria), catalog);
    }

    #[test]
    fn test_location_is_case_insensitive_equality_scenario() {
        assert_eq!(search("chennai", "", ""), vec![1, 2, 4, 6, 8, 10]);
        assert_eq!(search("CHENNAI", "", ""), vec![1, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_location_matches_substrings() {
        assert_eq!(search("coim", "", ""), vec![3, 5, 7, 9]);
        assert_eq!(search("nna", "", ""), vec![1, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_location_excludes_non_containing_listings() {
        let catalog = reference_listings();
        let criteria = SearchCriteria::from_input("chen", "", "");
        let results = filter_listings(&catalog, &criteria);

        for listing in &catalog {
            let contained = listing.location.to_lowercase().contains("chen");
            assert_eq!(results.contains(listing), contained);
        }
    }

    #[test]
    fn test_unknown_city_returns_nothing() {
        assert!(search("unknowncity", "", "").is_empty());
    }

    #[test]
    fn test_type_is_exact_and_case_insensitive() {
        assert_eq!(search("", "villa", ""), vec![4, 7, 10]);
        assert_eq!(search("", "Villa", ""), vec![4, 7, 10]);
        assert_eq!(search("", "HOUSE", ""), vec![2, 6]);
        // Exact comparison, not a substring one.
        assert!(search("", "vill", "").is_empty());
        assert!(search("", "castle", "").is_empty());
    }

    #[test]
    fn test_villa_under_max_price_scenario() {
        assert_eq!(search("", "villa", "70000"), vec![7]);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        assert_eq!(search("", "", "15000"), vec![3]);
        assert_eq!(search("", "", "14999"), Vec::<u32>::new());
    }

    #[test]
    fn test_unparseable_max_price_is_ignored() {
        let all = search("", "", "");
        assert_eq!(search("", "", "abc"), all);
        assert_eq!(search("", "", "70000abc"), all);
        assert_eq!(search("", "", "12.5"), all);
        assert_eq!(search("chennai", "villa", "lots"), search("chennai", "villa", ""));
    }

    #[test]
    fn test_negative_max_price_excludes_everything() {
        assert!(search("", "", "-1").is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_the_query() {
        assert!(search(" chennai", "", "").is_empty());
        assert!(search("chennai ", "", "").is_empty());
        assert!(search("", " villa ", "").is_empty());
    }

    #[test]
    fn test_whitespace_only_location_matches_nothing() {
        let criteria = SearchCriteria::from_input("  ", "", "");
        assert!(!criteria.is_empty());
        assert!(search("  ", "", "").is_empty());
    }

    #[test]
    fn test_max_price_tolerates_surrounding_whitespace() {
        assert_eq!(search("chennai", "villa", " 80000 "), vec![4]);
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        assert_eq!(search("chennai", "apartment", "20000"), vec![8]);
        assert_eq!(search("coimbatore", "apartment", ""), vec![3, 5, 9]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = reference_listings();
        let criteria = SearchCriteria::from_input("chennai", "", "50000");

        let first = filter_listings(&catalog, &criteria);
        let second = filter_listings(&catalog, &criteria);
        let refiltered = filter_listings(&first, &criteria);

        assert_eq!(first, second);
        assert_eq!(first, refiltered);
    }
}
