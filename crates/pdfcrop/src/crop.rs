//! The [`Crop`] value: a rectangular region of one page of a PDF file.

use std::hash::{Hash, Hasher};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use pdfcrop_core::{BBox, PdfError};

use crate::raster::Rasterizer;
use crate::render::Renderer;

/// Rendering resolution used when none is given, in dots per inch.
pub const DEFAULT_RESOLUTION: u32 = 600;

/// File written by [`Crop::save_default`].
pub const DEFAULT_SAVE_PATH: &str = "crop.png";

/// A rectangular region of interest on one page of a PDF file.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// visible page: `x0`/`x1` are the left and right edges, `top`/`bottom` are
/// distances from the top of the page.
///
/// Two crops are equal (and hash equal) when they name the same file, page,
/// and box. `padding` and `resolution` only affect how a crop is rendered,
/// not which region it is.
///
/// # Example
///
/// ```
/// use pdfcrop::Crop;
///
/// let crop = Crop::new("invoice.pdf", 0, 72.0, 232.0, 100.0, 310.0)?
///     .with_padding(4)
///     .with_resolution(300)?;
/// assert_eq!(crop.to_string(), "Crop(x0=72, x1=232, top=100, bottom=310)");
/// # Ok::<(), pdfcrop::PdfError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCrop"))]
pub struct Crop {
    path: PathBuf,
    page_number: usize,
    x0: f64,
    x1: f64,
    top: f64,
    bottom: f64,
    padding: u32,
    resolution: u32,
}

impl Crop {
    /// Create a crop of page `page_number` (0-based) of the PDF at `path`.
    ///
    /// Padding starts at 0 and resolution at [`DEFAULT_RESOLUTION`].
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::InvalidCrop`] if a bound is not finite, if
    /// `x0 > x1`, or if `top > bottom`. A zero-width or zero-height box is
    /// accepted here; whether it has any area is decided at render time,
    /// after padding and clamping.
    pub fn new(
        path: impl Into<PathBuf>,
        page_number: usize,
        x0: f64,
        x1: f64,
        top: f64,
        bottom: f64,
    ) -> Result<Self, PdfError> {
        for (name, value) in [("x0", x0), ("x1", x1), ("top", top), ("bottom", bottom)] {
            if !value.is_finite() {
                return Err(PdfError::InvalidCrop(format!("{name} must be finite, got {value}")));
            }
        }
        if x0 > x1 {
            return Err(PdfError::InvalidCrop(format!(
                "x0 ({x0}) is greater than x1 ({x1})"
            )));
        }
        if top > bottom {
            return Err(PdfError::InvalidCrop(format!(
                "top ({top}) is greater than bottom ({bottom})"
            )));
        }
        Ok(Self {
            path: path.into(),
            page_number,
            x0,
            x1,
            top,
            bottom,
            padding: 0,
            resolution: DEFAULT_RESOLUTION,
        })
    }

    /// Grow the box by `padding` points on every side before clamping.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Render at `resolution` dots per inch.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::InvalidCrop`] if `resolution` is 0.
    pub fn with_resolution(mut self, resolution: u32) -> Result<Self, PdfError> {
        if resolution == 0 {
            return Err(PdfError::InvalidCrop(
                "resolution must be greater than 0".to_string(),
            ));
        }
        self.resolution = resolution;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 0-based page index.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Rendering resolution in dots per inch.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The unpadded box.
    pub fn bbox(&self) -> BBox {
        BBox::new(self.x0, self.top, self.x1, self.bottom)
    }

    /// The box actually rendered on a page of the given visible size.
    ///
    /// Padding is added on every side, then each edge is clamped to the page:
    /// `x0` and `top` to at least 0, `x1` to at most `page_width`, `bottom`
    /// to at most `page_height`. The result may be empty when the box lies
    /// outside the page.
    pub fn padded_bbox(&self, page_width: f64, page_height: f64) -> BBox {
        self.bbox()
            .expand(f64::from(self.padding))
            .clamp_to(page_width, page_height)
    }

    /// Render the region to an RGBA image.
    ///
    /// Each call reopens the PDF and renders from scratch. To produce several
    /// representations of the same region, call [`Renderer::render`] once
    /// and convert the [`RenderedCrop`](crate::RenderedCrop) instead.
    pub fn image<R: Rasterizer>(&self, renderer: &Renderer<R>) -> Result<RgbaImage, PdfError> {
        Ok(renderer.render(self)?.into_image())
    }

    /// Render the region and write it to `path` as PNG, replacing any
    /// existing file.
    ///
    /// Reopens and re-renders on every call.
    pub fn save<R: Rasterizer>(
        &self,
        renderer: &Renderer<R>,
        path: impl AsRef<Path>,
    ) -> Result<(), PdfError> {
        renderer.render(self)?.save(path)
    }

    /// [`save`](Crop::save) to [`DEFAULT_SAVE_PATH`] in the working directory.
    pub fn save_default<R: Rasterizer>(&self, renderer: &Renderer<R>) -> Result<(), PdfError> {
        self.save(renderer, DEFAULT_SAVE_PATH)
    }

    /// Render the region into an in-memory PNG buffer positioned at the start.
    ///
    /// Reopens and re-renders on every call.
    pub fn buffer<R: Rasterizer>(
        &self,
        renderer: &Renderer<R>,
    ) -> Result<Cursor<Vec<u8>>, PdfError> {
        renderer.render(self)?.png_buffer()
    }

    /// Render the region to PNG bytes.
    ///
    /// Reopens and re-renders on every call.
    pub fn bytes<R: Rasterizer>(&self, renderer: &Renderer<R>) -> Result<Vec<u8>, PdfError> {
        Ok(self.buffer(renderer)?.into_inner())
    }

    /// Identity key with `-0.0` folded into `0.0`, compared bitwise.
    fn identity(&self) -> (&Path, usize, [u64; 4]) {
        fn bits(v: f64) -> u64 {
            if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
        }
        (
            &self.path,
            self.page_number,
            [bits(self.x0), bits(self.x1), bits(self.top), bits(self.bottom)],
        )
    }
}

impl PartialEq for Crop {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Crop {}

impl Hash for Crop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Crop(x0={}, x1={}, top={}, bottom={})",
            self.x0, self.x1, self.top, self.bottom
        )
    }
}

/// Unvalidated field set that deserialization goes through.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCrop {
    path: PathBuf,
    page_number: usize,
    x0: f64,
    x1: f64,
    top: f64,
    bottom: f64,
    #[serde(default)]
    padding: u32,
    #[serde(default = "default_resolution")]
    resolution: u32,
}

#[cfg(feature = "serde")]
fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}

#[cfg(feature = "serde")]
impl TryFrom<RawCrop> for Crop {
    type Error = PdfError;

    fn try_from(raw: RawCrop) -> Result<Self, Self::Error> {
        Crop::new(raw.path, raw.page_number, raw.x0, raw.x1, raw.top, raw.bottom)?
            .with_padding(raw.padding)
            .with_resolution(raw.resolution)
    }
}
