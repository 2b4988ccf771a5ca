//! Listing document export.

mod pdf_renderer;

pub use pdf_renderer::{DocumentError, PdfRenderer};
