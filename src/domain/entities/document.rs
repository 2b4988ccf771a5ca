//! Printable summary of a listing.

use super::PropertyListing;
use crate::utils::price::group_indian;

/// Heading printed at the top of every exported document.
pub const DOCUMENT_HEADING: &str = "Property Details";

/// Text content of a listing export, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDocument {
    pub heading: String,
    pub lines: Vec<String>,
}

impl From<&PropertyListing> for ListingDocument {
    fn from(listing: &PropertyListing) -> Self {
        // Standard PDF fonts cannot encode the rupee sign.
        let lines = vec![
            format!("Property: {}", listing.title),
            format!("Location: {}", listing.location_label()),
            format!("Price: Rs. {}", group_indian(listing.price)),
            format!("Area: {} sq.ft", group_indian(u64::from(listing.sqft))),
            format!("Owner: {}", listing.owner),
        ];

        Self {
            heading: DOCUMENT_HEADING.to_string(),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PropertyCategory;

    #[test]
    fn test_document_lines() {
        let listing = PropertyListing {
            id: 4,
            title: "Luxury Villa".to_string(),
            category: PropertyCategory::Villa,
            location: "chennai".to_string(),
            price: 4_500_000,
            bedrooms: 4,
            bathrooms: 4,
            sqft: 3000,
            owner: "John Doe".to_string(),
            description: String::new(),
            image: "https://images.example.com/v.jpg".to_string(),
        };

        let doc = ListingDocument::from(&listing);

        assert_eq!(doc.heading, "Property Details");
        assert_eq!(
            doc.lines,
            vec![
                "Property: Luxury Villa",
                "Location: Chennai",
                "Price: Rs. 45,00,000",
                "Area: 3,000 sq.ft",
                "Owner: John Doe",
            ]
        );
    }
}
