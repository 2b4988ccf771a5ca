//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{ContactService, DocumentService, ListingService};
use crate::infrastructure::catalog::StaticCatalog;
use crate::infrastructure::document::PdfRenderer;

#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService<StaticCatalog>>,
    pub contact_service: Arc<ContactService<StaticCatalog>>,
    pub document_service: Arc<DocumentService<StaticCatalog>>,
    /// Wait applied before search results are returned. Zero disables it.
    pub search_delay: Duration,
}

impl AppState {
    /// Wires every service to the same catalog.
    pub fn new(catalog: Arc<StaticCatalog>, search_delay: Duration) -> Self {
        Self {
            listing_service: Arc::new(ListingService::new(catalog.clone())),
            contact_service: Arc::new(ContactService::new(catalog.clone())),
            document_service: Arc::new(DocumentService::new(catalog, PdfRenderer::new())),
            search_delay,
        }
    }

    /// Applies the configured search delay.
    ///
    /// The wait is owned by the request future, so a client that disconnects
    /// cancels it.
    pub async fn simulate_search_latency(&self) {
        if !self.search_delay.is_zero() {
            tokio::time::sleep(self.search_delay).await;
        }
    }
}
