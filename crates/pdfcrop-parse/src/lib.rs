//! pdfcrop-parse: PDF document backend and page geometry.
//!
//! This crate implements the document-structure half of pdfcrop-rs: opening
//! PDFs through a pluggable [`PdfBackend`], resolving page boxes and rotation,
//! and normalizing them into visible page dimensions via [`PageGeometry`].
//! It depends on pdfcrop-core for shared data types.

pub mod backend;
pub mod error;
pub mod lopdf_backend;
pub mod page_geometry;

pub use backend::PdfBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument, LopdfPage};
pub use page_geometry::PageGeometry;
pub use pdfcrop_core;
