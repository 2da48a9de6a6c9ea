//! PDF parsing backend trait.
//!
//! Defines the [`PdfBackend`] trait that abstracts the document-structure
//! operations a crop needs: opening a document, walking its pages, and
//! reading the boxes and rotation that determine each page's visible size.

use pdfcrop_core::{BBox, OpenOptions, PdfError};

/// Trait abstracting PDF document-structure operations.
///
/// A backend provides methods to open PDF documents, access pages, and
/// extract page properties (MediaBox, CropBox, Rotate). Rendering is not part
/// of this trait; it belongs to the rasterizer in the facade crate.
///
/// # Associated Types
///
/// - `Document`: The parsed PDF document representation.
/// - `Page`: A reference to a single page within a document.
/// - `Error`: Backend-specific error type, convertible to [`PdfError`].
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes, &OpenOptions::default())?;
/// let page_count = MyBackend::page_count(&doc);
/// let page = MyBackend::get_page(&doc, 0)?;
/// let media_box = MyBackend::page_media_box(&doc, &page)?;
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// A reference to a single page within a document.
    type Page;

    /// Backend-specific error type, convertible to [`PdfError`].
    type Error: std::error::Error + Into<PdfError>;

    /// Parse PDF bytes into a document.
    ///
    /// `options` is forwarded verbatim from the caller: the backend decrypts
    /// with `options.password` when the document is encrypted and stays
    /// silent when `options.quiet` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a valid PDF document,
    /// or if the document is encrypted and the password is missing or wrong.
    fn open(bytes: &[u8], options: &OpenOptions) -> Result<Self::Document, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page cannot be loaded.
    fn get_page(doc: &Self::Document, index: usize) -> Result<Self::Page, Self::Error>;

    /// Get the MediaBox for a page.
    ///
    /// MediaBox is required by the PDF specification and defines the boundaries
    /// of the physical page. The returned [`BBox`] holds the raw PDF array
    /// values: `x0` = left, `top` = y-min, `x1` = right, `bottom` = y-max.
    ///
    /// # Errors
    ///
    /// Returns an error if the MediaBox cannot be resolved (e.g., missing
    /// from both the page and its parent page tree).
    fn page_media_box(doc: &Self::Document, page: &Self::Page) -> Result<BBox, Self::Error>;

    /// Get the CropBox for a page, if explicitly set.
    ///
    /// CropBox defines the visible region of the page. Returns `None` if
    /// not explicitly set (in which case MediaBox serves as the CropBox).
    ///
    /// # Errors
    ///
    /// Returns an error if the CropBox entry exists but is malformed.
    fn page_crop_box(doc: &Self::Document, page: &Self::Page) -> Result<Option<BBox>, Self::Error>;

    /// Get the page rotation angle in degrees.
    ///
    /// Returns the raw `/Rotate` value. Defaults to 0 if not specified.
    ///
    /// # Errors
    ///
    /// Returns an error if the Rotate entry exists but is malformed.
    fn page_rotate(doc: &Self::Document, page: &Self::Page) -> Result<i32, Self::Error>;
}
