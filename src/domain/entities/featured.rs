//! Showcase entries displayed on the landing page.

/// A hand-picked property shown in the landing page showcase.
///
/// Showcase entries are marketing content and are not part of the searchable
/// catalog, so the price is kept as a pre-formatted label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedProperty {
    pub image: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub price_label: &'static str,
}

/// A selling point rendered as a card under the landing hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}
