//! Property listing entity and its category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::utils::price::format_rupees;

/// Closed set of property categories offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Apartment,
    House,
    Villa,
}

impl PropertyCategory {
    /// All categories, in the order the search form offers them.
    pub const ALL: [PropertyCategory; 3] = [Self::Apartment, Self::House, Self::Villa];

    /// Lower-case identifier used in query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Villa => "villa",
        }
    }

    /// Capitalized label for form options.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Villa => "Villa",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown property category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for PropertyCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single property in the catalog.
///
/// Numeric attributes are unsigned, so the non-negativity invariants hold by
/// construction. Identifier uniqueness is checked when the catalog is built
/// (see [`crate::infrastructure::catalog::StaticCatalog::new`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: PropertyCategory,
    pub location: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub owner: String,
    pub description: String,
    pub image: String,
}

impl PropertyListing {
    /// Price formatted for display, e.g. `₹45,00,000`.
    pub fn price_label(&self) -> String {
        format_rupees(self.price)
    }

    /// Location with its first letter capitalized (`chennai` -> `Chennai`).
    pub fn location_label(&self) -> String {
        let mut chars = self.location.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
