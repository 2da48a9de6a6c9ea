//! pdfcrop: render rectangular regions of PDF pages.
//!
//! This is the public API facade crate for pdfcrop-rs. A [`Crop`] names a
//! region of one page of a PDF file. A [`Renderer`] opens the file, pads and
//! clamps the region to the visible page, and hands it to a [`Rasterizer`].
//! The result is a [`RenderedCrop`] that converts to an RGBA image, PNG bytes,
//! an in-memory buffer, or a file.
//!
//! # Architecture
//!
//! - **pdfcrop-core**: Backend-independent data types ([`BBox`], [`PdfError`], [`OpenOptions`])
//! - **pdfcrop-parse**: Page tree access and page geometry via lopdf
//! - **pdfcrop** (this crate): Document helper, crop rendering, and the rasterizer seam
//!
//! Opening and rendering are silenced by default through the thread-local
//! guard in [`quiet`].

mod crop;
mod document;
mod page;
pub mod quiet;
mod raster;
mod render;
mod source;

pub use crop::{Crop, DEFAULT_RESOLUTION, DEFAULT_SAVE_PATH};
pub use document::{Document, PagesIter};
pub use page::Page;
pub use raster::{POINTS_PER_INCH, RasterRequest, Rasterizer, pixel_size};
#[cfg(feature = "pdfium")]
pub use raster::{PdfiumRasterizer, RasterConfig};
pub use render::{RenderedCrop, Renderer};
pub use source::DocumentSource;

pub use image::RgbaImage;
pub use pdfcrop_core;
pub use pdfcrop_core::{BBox, OpenOptions, PdfError};
pub use pdfcrop_parse;
