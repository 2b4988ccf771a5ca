//! DTOs for listing endpoints.

use serde::Serialize;

use crate::domain::entities::{PropertyCategory, PropertyListing};

/// A listing as returned by the API.
///
/// Mirrors [`PropertyListing`] and adds presentation helpers so clients do
/// not have to reimplement price formatting or routing.
#[derive(Debug, Serialize)]
pub struct ListingItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: PropertyCategory,
    pub location: String,
    pub price: u64,
    pub price_label: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub owner: String,
    pub description: String,
    pub image: String,
    pub detail_url: String,
    pub document_url: String,
}

impl From<PropertyListing> for ListingItem {
    fn from(listing: PropertyListing) -> Self {
        let price_label = listing.price_label();
        let detail_url = format!("/property/{}", listing.id);
        let document_url = format!("/property/{}/document", listing.id);

        Self {
            id: listing.id,
            title: listing.title,
            category: listing.category,
            location: listing.location,
            price: listing.price,
            price_label,
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            sqft: listing.sqft,
            owner: listing.owner,
            description: listing.description,
            image: listing.image,
            detail_url,
            document_url,
        }
    }
}

/// Response for `GET /api/properties`.
#[derive(Debug, Serialize)]
pub struct ListingListResponse {
    pub count: usize,
    pub items: Vec<ListingItem>,
}

impl From<Vec<PropertyListing>> for ListingListResponse {
    fn from(listings: Vec<PropertyListing>) -> Self {
        let items: Vec<ListingItem> = listings.into_iter().map(ListingItem::from).collect();
        Self {
            count: items.len(),
            items,
        }
    }
}
