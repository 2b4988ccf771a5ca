//! View models shared by the page templates.

use validator::ValidationErrors;

use crate::domain::entities::{PropertyCategory, PropertyListing};

/// Pre-formatted listing fields for cards and the detail page.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub id: u32,
    pub title: String,
    pub category: &'static str,
    pub location: String,
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

impl From<&PropertyListing> for ListingView {
    fn from(listing: &PropertyListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            category: listing.category.label(),
            location: listing.location_label(),
            price_label: listing.price_label(),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            sqft: listing.sqft,
            owner: listing.owner.clone(),
            description: listing.description.clone(),
            image: listing.image.clone(),
            detail_url: format!("/property/{}", listing.id),
            document_url: format!("/property/{}/document", listing.id),
        }
    }
}

/// An `<option>` of the property type select.
#[derive(Debug, Clone)]
pub struct TypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Options for the property type select, marking the submitted one.
pub fn type_options(selected: &str) -> Vec<TypeOption> {
    PropertyCategory::ALL
        .iter()
        .map(|category| TypeOption {
            value: category.as_str(),
            label: category.label(),
            selected: category.as_str().eq_ignore_ascii_case(selected),
        })
        .collect()
}

/// First validation message per contact form field; empty when valid.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let first = |field: &str| {
            fields
                .get(field)
                .and_then(|errs| errs.first())
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}"))
                })
                .unwrap_or_default()
        };

        Self {
            name: first("name"),
            contact: first("contact"),
            email: first("email"),
            address: first("address"),
        }
    }
}
