//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::{Feature, FeaturedProperty};
use crate::infrastructure::catalog::seed::{FEATURES, HERO_IMAGE};
use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/home.html` with:
/// - Hero banner
/// - Feature cards linking to the rental search
/// - Featured properties showcase
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub hero_image: &'static str,
    pub features: Vec<Feature>,
    pub featured: Vec<FeaturedProperty>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        hero_image: HERO_IMAGE,
        features: FEATURES.to_vec(),
        featured: state.listing_service.featured(),
    }
}
