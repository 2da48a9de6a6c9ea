//! Turning a [`Crop`] into pixels.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};
use pdfcrop_core::{BBox, OpenOptions, PdfError};

use crate::crop::Crop;
use crate::document::Document;
use crate::raster::{RasterRequest, Rasterizer, pixel_size};
use crate::source::DocumentSource;

/// Map an `image` crate error onto [`PdfError`].
pub(crate) fn image_error(err: ImageError) -> PdfError {
    match err {
        ImageError::IoError(e) => PdfError::IoError(e.to_string()),
        other => PdfError::EncodeError(other.to_string()),
    }
}

/// Renders crops with a [`Rasterizer`] under a fixed set of [`OpenOptions`].
///
/// A renderer holds no document state: every [`render`](Renderer::render)
/// call opens the crop's file, renders, and releases it again.
///
/// ```ignore
/// use pdfcrop::{Crop, Renderer};
///
/// let renderer = Renderer::pdfium();
/// let crop = Crop::new("invoice.pdf", 0, 72.0, 232.0, 100.0, 310.0)?;
/// let rendered = renderer.render(&crop)?;
/// rendered.save("total.png")?;
/// let png = rendered.to_png()?;
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<R> {
    rasterizer: R,
    options: OpenOptions,
}

impl<R: Rasterizer> Renderer<R> {
    /// A renderer using `rasterizer` with default [`OpenOptions`] (quiet, no
    /// password, no size limit).
    pub fn new(rasterizer: R) -> Self {
        Self::with_options(rasterizer, OpenOptions::default())
    }

    pub fn with_options(rasterizer: R, options: OpenOptions) -> Self {
        Self {
            rasterizer,
            options,
        }
    }

    pub fn options(&self) -> &OpenOptions {
        &self.options
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Render `crop` once.
    ///
    /// Opens `crop.path()` (silenced when [`OpenOptions::quiet`] is set),
    /// selects the page, pads and clamps the box to the visible page, and
    /// rasterizes that region. The document is released before returning,
    /// on success and on error alike.
    ///
    /// # Errors
    ///
    /// - Any error from [`Document::open`].
    /// - [`PdfError::PageIndexOutOfRange`] if the page does not exist.
    /// - [`PdfError::EmptyRegion`] if the padded, clamped box has no area or
    ///   is smaller than one pixel at the crop's resolution.
    /// - [`PdfError::RenderError`] from the rasterizer.
    pub fn render(&self, crop: &Crop) -> Result<RenderedCrop, PdfError> {
        let source = DocumentSource::from(crop.path());
        Document::with_open(source, &self.options, |doc| {
            let page = doc.page(crop.page_number())?;
            let region = crop.padded_bbox(page.width, page.height);
            let (width, height) = pixel_size(region, crop.resolution());
            tracing::debug!(
                %crop,
                page = page.index,
                ?region,
                width,
                height,
                "computed crop region"
            );
            if region.is_empty() || width == 0 || height == 0 {
                return Err(PdfError::EmptyRegion {
                    x0: region.x0,
                    top: region.top,
                    x1: region.x1,
                    bottom: region.bottom,
                });
            }

            let request = RasterRequest {
                source: doc.source(),
                page: &page,
                region,
                resolution: crop.resolution(),
                password: self.options.password.as_deref(),
            };
            let image = self.rasterizer.rasterize(&request)?;
            tracing::trace!(
                width = image.width(),
                height = image.height(),
                "rasterized crop"
            );
            Ok(RenderedCrop {
                image,
                region,
                resolution: crop.resolution(),
            })
        })
    }
}

#[cfg(feature = "pdfium")]
impl Renderer<crate::raster::PdfiumRasterizer> {
    /// A renderer backed by pdfium found in the default locations.
    pub fn pdfium() -> Self {
        Self::new(crate::raster::PdfiumRasterizer::default())
    }
}

/// The result of rendering a [`Crop`] once.
///
/// All conversions work from the same pixels, so the PNG bytes, the buffer,
/// and a saved file always agree with [`image`](RenderedCrop::image).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCrop {
    image: RgbaImage,
    region: BBox,
    resolution: u32,
}

impl RenderedCrop {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The padded, clamped box that was rendered, in page points.
    pub fn region(&self) -> BBox {
        self.region
    }

    /// Dots per inch the region was rendered at.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, PdfError> {
        Ok(self.png_buffer()?.into_inner())
    }

    /// Encode as PNG into a buffer positioned at the start, ready to read.
    pub fn png_buffer(&self) -> Result<Cursor<Vec<u8>>, PdfError> {
        let mut buffer = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(image_error)?;
        buffer.set_position(0);
        Ok(buffer)
    }

    /// Write a PNG file at `path`, replacing any existing file.
    ///
    /// The format is PNG regardless of the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PdfError> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(image_error)?;
        tracing::debug!(path = %path.display(), "saved crop");
        Ok(())
    }
}
