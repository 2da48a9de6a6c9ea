//! Pixel rendering of page regions.
//!
//! [`Rasterizer`] is the seam between crop geometry and an actual PDF
//! renderer. [`PdfiumRasterizer`] (feature `pdfium`, on by default) renders
//! through a dynamically bound pdfium library.

use image::RgbaImage;
use pdfcrop_core::{BBox, PdfError};

use crate::page::Page;
use crate::source::DocumentSource;

/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// What to render: one region of one page, at a resolution.
#[derive(Debug, Clone, Copy)]
pub struct RasterRequest<'a> {
    /// The document the page belongs to.
    pub source: &'a DocumentSource,
    /// The page, with its visible geometry.
    pub page: &'a Page,
    /// Region in top-left origin page points, already padded and clamped.
    pub region: BBox,
    /// Dots per inch.
    pub resolution: u32,
    /// Password for encrypted documents.
    pub password: Option<&'a str>,
}

impl RasterRequest<'_> {
    /// Output image size for this request, see [`pixel_size`].
    pub fn pixel_size(&self) -> (u32, u32) {
        pixel_size(self.region, self.resolution)
    }

    /// Pixels per point at the requested resolution.
    pub fn scale(&self) -> f64 {
        f64::from(self.resolution) / POINTS_PER_INCH
    }
}

/// Renders page regions to RGBA images.
///
/// Implementations must return an image of exactly
/// [`request.pixel_size()`](RasterRequest::pixel_size).
pub trait Rasterizer {
    /// Render `request.region` of `request.page`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::RenderError`] if rendering fails.
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RgbaImage, PdfError>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RgbaImage, PdfError> {
        (**self).rasterize(request)
    }
}

impl<R: Rasterizer + ?Sized> Rasterizer for Box<R> {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RgbaImage, PdfError> {
        (**self).rasterize(request)
    }
}

/// Pixel dimensions of `region` rendered at `resolution` DPI.
///
/// Each side is `round(len * resolution / 72)`; empty or inverted regions
/// give 0.
///
/// ```
/// use pdfcrop::{BBox, pixel_size};
///
/// // 160 x 210 pt at 300 DPI
/// assert_eq!(pixel_size(BBox::new(0.0, 0.0, 160.0, 210.0), 300), (667, 875));
/// ```
pub fn pixel_size(region: BBox, resolution: u32) -> (u32, u32) {
    let scale = f64::from(resolution) / POINTS_PER_INCH;
    let side = |len: f64| (len.max(0.0) * scale).round() as u32;
    (side(region.width()), side(region.height()))
}

#[cfg(feature = "pdfium")]
pub use self::pdfium::{PdfiumRasterizer, RasterConfig};

#[cfg(feature = "pdfium")]
mod pdfium {
    use std::cell::OnceCell;
    use std::path::PathBuf;

    use image::RgbaImage;
    use image::imageops::{self, FilterType};
    use pdfcrop_core::PdfError;
    use pdfium_render::prelude::*;

    use super::{RasterRequest, Rasterizer};
    use crate::source::DocumentSource;

    /// Where to find the pdfium shared library.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct RasterConfig {
        /// Directory searched first for the platform pdfium library.
        /// The working directory and then the system library path are tried
        /// after it.
        pub library_dir: Option<PathBuf>,
    }

    impl RasterConfig {
        /// Search `dir` for the pdfium library before the default locations.
        pub fn with_library_dir(mut self, dir: impl Into<PathBuf>) -> Self {
            self.library_dir = Some(dir.into());
            self
        }
    }

    /// Renders through pdfium.
    ///
    /// The library is bound on the first [`rasterize`](Rasterizer::rasterize)
    /// call, not at construction, so creating a rasterizer never fails.
    /// Each request loads the document afresh and renders the whole page at
    /// the requested scale before cutting out the region.
    pub struct PdfiumRasterizer {
        config: RasterConfig,
        pdfium: OnceCell<Pdfium>,
    }

    impl PdfiumRasterizer {
        pub fn new(config: RasterConfig) -> Self {
            Self {
                config,
                pdfium: OnceCell::new(),
            }
        }

        /// The configuration this rasterizer binds with.
        pub fn config(&self) -> &RasterConfig {
            &self.config
        }

        /// Bind the pdfium library now, if not already bound.
        ///
        /// # Errors
        ///
        /// Returns [`PdfError::RenderError`] if no pdfium library can be
        /// found in any search location.
        pub fn bind(&self) -> Result<&Pdfium, PdfError> {
            if let Some(pdfium) = self.pdfium.get() {
                return Ok(pdfium);
            }
            let bindings = self.bind_library()?;
            Ok(self.pdfium.get_or_init(|| Pdfium::new(bindings)))
        }

        fn bind_library(&self) -> Result<Box<dyn PdfiumLibraryBindings>, PdfError> {
            if let Some(dir) = &self.config.library_dir {
                match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)) {
                    Ok(bindings) => return Ok(bindings),
                    Err(e) => tracing::debug!(
                        dir = %dir.display(),
                        error = %e,
                        "pdfium not found in configured directory"
                    ),
                }
            }
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|e| PdfError::RenderError(format!("failed to bind pdfium library: {e}")))
        }
    }

    impl Default for PdfiumRasterizer {
        fn default() -> Self {
            Self::new(RasterConfig::default())
        }
    }

    impl std::fmt::Debug for PdfiumRasterizer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("PdfiumRasterizer")
                .field("config", &self.config)
                .field("bound", &self.pdfium.get().is_some())
                .finish()
        }
    }

    fn render_error(context: &str, e: PdfiumError) -> PdfError {
        PdfError::RenderError(format!("{context}: {e}"))
    }

    impl Rasterizer for PdfiumRasterizer {
        fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RgbaImage, PdfError> {
            let pdfium = self.bind()?;
            let document = match request.source {
                DocumentSource::Path(path) => pdfium.load_pdf_from_file(path, request.password),
                DocumentSource::Bytes(bytes) => {
                    pdfium.load_pdf_from_byte_slice(bytes, request.password)
                }
            }
            .map_err(|e| render_error("failed to load PDF", e))?;

            let index = request.page.index;
            let page = document.pages().iter().nth(index).ok_or_else(|| {
                PdfError::RenderError(format!("pdfium could not load page {index}"))
            })?;

            let scale = request.scale();
            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .scale_page_by_factor(scale as f32)
                        .render_form_data(true)
                        .render_annotations(true),
                )
                .map_err(|e| render_error("failed to render page", e))?;

            let full_width = u32::try_from(bitmap.width())
                .map_err(|_| PdfError::RenderError("negative bitmap width".to_string()))?;
            let full_height = u32::try_from(bitmap.height())
                .map_err(|_| PdfError::RenderError("negative bitmap height".to_string()))?;
            let full = RgbaImage::from_raw(full_width, full_height, bitmap.as_rgba_bytes())
                .ok_or_else(|| {
                    PdfError::RenderError("bitmap size does not match its buffer".to_string())
                })?;
            tracing::trace!(full_width, full_height, "rendered page bitmap");

            let (width, height) = request.pixel_size();
            let left = ((request.region.x0 * scale).round() as u32).min(full_width);
            let top = ((request.region.top * scale).round() as u32).min(full_height);
            let cropped = imageops::crop_imm(&full, left, top, width, height).to_image();

            // pdfium sizes the page bitmap with its own rounding; absorb the
            // last-pixel difference so the output matches pixel_size exactly.
            if cropped.dimensions() == (width, height) {
                Ok(cropped)
            } else if cropped.width() == 0 || cropped.height() == 0 {
                Err(PdfError::RenderError(format!(
                    "region {:?} lies outside the rendered page",
                    request.region
                )))
            } else {
                Ok(imageops::resize(&cropped, width, height, FilterType::Triangle))
            }
        }
    }
}
