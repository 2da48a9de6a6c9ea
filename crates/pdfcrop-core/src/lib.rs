//! pdfcrop-core: Backend-independent data types for pdfcrop-rs.
//!
//! This crate provides the foundational types shared by the parsing backend
//! and the rendering facade: [`BBox`] page-region geometry, the [`PdfError`]
//! error type, and [`OpenOptions`] for configuring how documents are opened.
//! It performs no I/O.

pub mod error;
pub mod geometry;
pub mod options;

pub use error::PdfError;
pub use geometry::BBox;
pub use options::OpenOptions;
