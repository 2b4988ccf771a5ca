//! Reference catalog data.

use crate::domain::entities::{Feature, FeaturedProperty, PropertyCategory, PropertyListing};

const IMG_CITY_VIEW: &str =
    "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&q=80";
const IMG_FAMILY_HOME: &str =
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&q=80";
const IMG_STUDIO: &str =
    "https://images.unsplash.com/photo-1536376072261-38c75010e6c9?auto=format&fit=crop&q=80";
const IMG_VILLA: &str =
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&q=80";
const IMG_DOWNTOWN: &str =
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&q=80";
const IMG_GARDEN: &str =
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&q=80";
const IMG_MODERN: &str =
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&q=80";

/// Hero background on the landing page.
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&q=80";

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    category: PropertyCategory,
    location: &str,
    price: u64,
    image: &str,
    (bedrooms, bathrooms, sqft): (u32, u32, u32),
    owner: &str,
    description: &str,
) -> PropertyListing {
    PropertyListing {
        id,
        title: title.to_string(),
        category,
        location: location.to_string(),
        price,
        bedrooms,
        bathrooms,
        sqft,
        owner: owner.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

/// The ten rental listings the site ships with, in display order.
pub fn reference_listings() -> Vec<PropertyListing> {
    use PropertyCategory::{Apartment, House, Villa};

    vec![
        listing(
            1,
            "Modern Apartment with City View",
            Apartment,
            "chennai",
            25_000,
            IMG_CITY_VIEW,
            (2, 2, 1200),
            "John Doe",
            "Luxurious apartment with modern amenities",
        ),
        listing(
            2,
            "Spacious Family Home",
            House,
            "chennai",
            35_000,
            IMG_FAMILY_HOME,
            (3, 2, 1800),
            "Priya Natarajan",
            "Perfect for families",
        ),
        listing(
            3,
            "Cozy Studio Apartment",
            Apartment,
            "coimbatore",
            15_000,
            IMG_STUDIO,
            (1, 1, 600),
            "Arun Kumar",
            "Ideal for singles or couples",
        ),
        listing(
            4,
            "Luxury Villa",
            Villa,
            "chennai",
            75_000,
            IMG_VILLA,
            (4, 4, 3000),
            "Meena Subramanian",
            "Premium living experience",
        ),
        listing(
            5,
            "Downtown Apartment",
            Apartment,
            "coimbatore",
            28_000,
            IMG_DOWNTOWN,
            (2, 2, 1100),
            "Karthik Raja",
            "Central location with great amenities",
        ),
        listing(
            6,
            "Garden House",
            House,
            "chennai",
            45_000,
            IMG_GARDEN,
            (3, 2, 2000),
            "Lakshmi Iyer",
            "Beautiful garden space",
        ),
        listing(
            7,
            "Modern Villa",
            Villa,
            "coimbatore",
            65_000,
            IMG_MODERN,
            (4, 3, 2800),
            "Vijay Anand",
            "Contemporary design with pool",
        ),
        listing(
            8,
            "Budget Apartment",
            Apartment,
            "chennai",
            18_000,
            IMG_DOWNTOWN,
            (1, 1, 750),
            "Divya Prakash",
            "Affordable living space",
        ),
        listing(
            9,
            "Luxury Penthouse",
            Apartment,
            "coimbatore",
            85_000,
            IMG_CITY_VIEW,
            (3, 3, 2500),
            "Suresh Menon",
            "Premium penthouse with city views",
        ),
        listing(
            10,
            "Family Villa",
            Villa,
            "chennai",
            95_000,
            IMG_VILLA,
            (5, 4, 3500),
            "Anitha Krishnan",
            "Spacious family villa with garden",
        ),
    ]
}

/// Landing page showcase.
pub fn featured_properties() -> Vec<FeaturedProperty> {
    vec![
        FeaturedProperty {
            image: IMG_VILLA,
            title: "Modern Villa",
            location: "Pondicherry",
            price_label: "₹2,500,000",
        },
        FeaturedProperty {
            image: IMG_MODERN,
            title: "Luxury Apartment",
            location: "Kerala",
            price_label: "₹1,800,000",
        },
        FeaturedProperty {
            image: IMG_GARDEN,
            title: "Beach House",
            location: "Goa",
            price_label: "₹3,200,000",
        },
    ]
}

/// Selling points shown under the landing hero.
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📍",
        title: "Smart Location",
        description: "Find properties in prime locations with our advanced location intelligence.",
    },
    Feature {
        icon: "🏢",
        title: "AI-Powered Search",
        description: "Let our AI find the perfect property match based on your preferences.",
    },
    Feature {
        icon: "📈",
        title: "Market Analysis",
        description: "Get real-time market insights and property valuations.",
    },
];
