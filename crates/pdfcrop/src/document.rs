//! Opening PDF documents for cropping.

use pdfcrop_core::{OpenOptions, PdfError};
use pdfcrop_parse::{LopdfBackend, LopdfDocument, PdfBackend};

use crate::page::Page;
use crate::quiet::quietly;
use crate::source::DocumentSource;

/// Iterator over the pages of a [`Document`], resolving each on demand.
///
/// Created by [`Document::pages()`].
pub struct PagesIter<'a> {
    doc: &'a Document,
    current: usize,
    count: usize,
}

impl Iterator for PagesIter<'_> {
    type Item = Result<Page, PdfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.count {
            return None;
        }
        let result = self.doc.page(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PagesIter<'_> {}

/// An open PDF document.
///
/// The parsed document is released when the value is dropped or
/// [`close`](Document::close)d. Prefer [`Document::with_open`], which bounds
/// the document's lifetime to a closure and keeps diagnostics silenced for
/// the whole scope.
///
/// # Example
///
/// ```ignore
/// use pdfcrop::{Document, OpenOptions};
///
/// let widths = Document::with_open("report.pdf".as_ref(), &OpenOptions::default(), |doc| {
///     doc.pages().map(|p| p.map(|p| p.width)).collect::<Result<Vec<_>, _>>()
/// })?;
/// ```
pub struct Document {
    doc: LopdfDocument,
    source: DocumentSource,
}

impl Document {
    /// Open a document, silenced when `options.quiet` is set.
    ///
    /// `options` is forwarded to the parsing backend unchanged.
    ///
    /// # Errors
    ///
    /// - [`PdfError::IoError`] if a file source cannot be read.
    /// - [`PdfError::ResourceLimitExceeded`] if the input is larger than
    ///   `options.max_input_bytes`.
    /// - [`PdfError::ParseError`] if the bytes are not a PDF.
    /// - [`PdfError::PasswordRequired`] / [`PdfError::InvalidPassword`] for
    ///   encrypted documents.
    pub fn open(
        source: impl Into<DocumentSource>,
        options: &OpenOptions,
    ) -> Result<Self, PdfError> {
        let source = source.into();
        quietly(options.quiet, || Self::open_unguarded(source, options))
    }

    /// Open a document, run `f` on it, and release it before returning.
    ///
    /// The document is released whether `f` succeeds or fails, and
    /// diagnostics stay silenced for the whole scope when `options.quiet`
    /// is set. Errors from opening or from `f` are returned unchanged.
    pub fn with_open<T>(
        source: impl Into<DocumentSource>,
        options: &OpenOptions,
        f: impl FnOnce(&Document) -> Result<T, PdfError>,
    ) -> Result<T, PdfError> {
        let source = source.into();
        quietly(options.quiet, || {
            let doc = Self::open_unguarded(source, options)?;
            let result = f(&doc);
            doc.close();
            result
        })
    }

    fn open_unguarded(source: DocumentSource, options: &OpenOptions) -> Result<Self, PdfError> {
        // Check max_input_bytes before reading or parsing
        if let Some(max_bytes) = options.max_input_bytes {
            let len = usize::try_from(source.len()?).unwrap_or(usize::MAX);
            if len > max_bytes {
                return Err(PdfError::ResourceLimitExceeded {
                    limit_name: "max_input_bytes".to_string(),
                    limit_value: max_bytes,
                    actual_value: len,
                });
            }
        }

        let bytes = source.load()?;
        let doc = LopdfBackend::open(&bytes, options).map_err(PdfError::from)?;
        tracing::debug!(
            %source,
            page_count = LopdfBackend::page_count(&doc),
            "opened document"
        );
        Ok(Self { doc, source })
    }

    /// Return the number of pages in the document.
    pub fn page_count(&self) -> usize {
        LopdfBackend::page_count(&self.doc)
    }

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::PageIndexOutOfRange`] if `index` is past the last
    /// page, or [`PdfError::ParseError`] if the page boxes are malformed.
    pub fn page(&self, index: usize) -> Result<Page, PdfError> {
        let lopdf_page = LopdfBackend::get_page(&self.doc, index).map_err(PdfError::from)?;
        let media_box =
            LopdfBackend::page_media_box(&self.doc, &lopdf_page).map_err(PdfError::from)?;
        let crop_box =
            LopdfBackend::page_crop_box(&self.doc, &lopdf_page).map_err(PdfError::from)?;
        let rotation = LopdfBackend::page_rotate(&self.doc, &lopdf_page).map_err(PdfError::from)?;
        Ok(Page::new(index, media_box, crop_box, rotation))
    }

    /// Iterate over all pages in order.
    pub fn pages(&self) -> PagesIter<'_> {
        PagesIter {
            doc: self,
            current: 0,
            count: self.page_count(),
        }
    }

    /// Where this document was opened from.
    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Release the document now rather than at the end of scope.
    pub fn close(self) {
        tracing::trace!(source = %self.source, "closed document");
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("source", &format_args!("{}", self.source))
            .field("page_count", &self.page_count())
            .finish()
    }
}
