//! Server-rendered pages.
//!
//! Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`view`] - View models consumed by the templates

pub mod handlers;
pub mod routes;
pub mod view;
