//! Listing document export service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::ListingDocument;
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;
use crate::infrastructure::document::PdfRenderer;

/// File name offered to browsers for exported documents.
pub const DOCUMENT_FILE_NAME: &str = "property-details.pdf";

pub struct DocumentService<R: ListingRepository> {
    repository: Arc<R>,
    renderer: PdfRenderer,
}

impl<R: ListingRepository> DocumentService<R> {
    pub fn new(repository: Arc<R>, renderer: PdfRenderer) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    /// Renders the PDF summary of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown listing and
    /// [`AppError::Internal`] if rendering fails.
    pub fn export(&self, property_id: u32) -> Result<Vec<u8>, AppError> {
        let listing = self.repository.find_by_id(property_id).ok_or_else(|| {
            AppError::not_found("Property not found", json!({ "id": property_id }))
        })?;

        let bytes = self.renderer.render(&ListingDocument::from(&listing))?;
        tracing::debug!(property_id, size = bytes.len(), "Document rendered");

        Ok(bytes)
    }
}
