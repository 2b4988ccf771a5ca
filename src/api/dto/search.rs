//! Query parameters and response for the listing search.

use serde::{Deserialize, Serialize};

use super::listing::ListingItem;
use crate::domain::search::SearchCriteria;

/// Raw search input, as typed into the search form.
///
/// Every field is kept as a string so that an unparseable `max_price` can be
/// dropped instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub max_price: Option<String>,
}

impl SearchParams {
    /// Returns true if the search form was submitted, even with empty fields.
    pub fn is_submitted(&self) -> bool {
        self.location.is_some() || self.property_type.is_some() || self.max_price.is_some()
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    pub fn property_type(&self) -> &str {
        self.property_type.as_deref().unwrap_or_default()
    }

    pub fn max_price(&self) -> &str {
        self.max_price.as_deref().unwrap_or_default()
    }

    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria::from_input(self.location(), self.property_type(), self.max_price())
    }
}

/// Response for `GET /api/properties/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub criteria: SearchCriteria,
    pub count: usize,
    pub items: Vec<ListingItem>,
}
