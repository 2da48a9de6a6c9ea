//! Error type for pdfcrop-rs.
//!
//! Provides [`PdfError`], the single fatal error type surfaced by every
//! document-open, page-lookup, rendering, and encoding operation.

use std::fmt;

/// Fatal error types for opening PDFs and rendering crops.
///
/// Nothing in the library retries or swallows these: each one is returned to
/// the caller as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// I/O error reading the PDF or writing an output file.
    IoError(String),
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_input_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
    /// The PDF is encrypted and requires a password to open.
    PasswordRequired,
    /// The supplied password is incorrect for this encrypted PDF.
    InvalidPassword,
    /// The requested page index is past the end of the document.
    PageIndexOutOfRange {
        /// The 0-based index that was requested.
        index: usize,
        /// Number of pages in the document.
        page_count: usize,
    },
    /// A crop description failed validation at construction time.
    InvalidCrop(String),
    /// The padded, clamped crop region encloses no area.
    EmptyRegion {
        x0: f64,
        top: f64,
        x1: f64,
        bottom: f64,
    },
    /// The rasterizer failed to produce an image.
    RenderError(String),
    /// The rendered image could not be encoded as PNG.
    EncodeError(String),
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::ParseError(msg) => write!(f, "parse error: {msg}"),
            PdfError::IoError(msg) => write!(f, "I/O error: {msg}"),
            PdfError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
            PdfError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
            PdfError::InvalidPassword => write!(f, "the supplied password is incorrect"),
            PdfError::PageIndexOutOfRange { index, page_count } => write!(
                f,
                "page index {index} out of range (document has {page_count} pages)"
            ),
            PdfError::InvalidCrop(msg) => write!(f, "invalid crop: {msg}"),
            PdfError::EmptyRegion {
                x0,
                top,
                x1,
                bottom,
            } => write!(
                f,
                "crop region ({x0}, {top}, {x1}, {bottom}) has no area after clamping"
            ),
            PdfError::RenderError(msg) => write!(f, "render error: {msg}"),
            PdfError::EncodeError(msg) => write!(f, "encode error: {msg}"),
            PdfError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PdfError {}

impl From<std::io::Error> for PdfError {
    fn from(err: std::io::Error) -> Self {
        PdfError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_error_parse_error_creation() {
        let err = PdfError::ParseError("invalid xref".to_string());
        assert_eq!(err.to_string(), "parse error: invalid xref");
    }

    #[test]
    fn pdf_error_io_error_creation() {
        let err = PdfError::IoError("file not found".to_string());
        assert_eq!(err.to_string(), "I/O error: file not found");
    }

    #[test]
    fn pdf_error_resource_limit_exceeded() {
        let err = PdfError::ResourceLimitExceeded {
            limit_name: "max_input_bytes".to_string(),
            limit_value: 1024,
            actual_value: 2048,
        };
        assert_eq!(
            err.to_string(),
            "resource limit exceeded: max_input_bytes (limit: 1024, actual: 2048)"
        );
    }

    #[test]
    fn pdf_error_password_required() {
        let err = PdfError::PasswordRequired;
        assert_eq!(err.to_string(), "PDF is encrypted and requires a password");
    }

    #[test]
    fn pdf_error_invalid_password() {
        let err = PdfError::InvalidPassword;
        assert_eq!(err.to_string(), "the supplied password is incorrect");
    }

    #[test]
    fn pdf_error_page_index_out_of_range() {
        let err = PdfError::PageIndexOutOfRange {
            index: 3,
            page_count: 1,
        };
        assert_eq!(
            err.to_string(),
            "page index 3 out of range (document has 1 pages)"
        );
    }

    #[test]
    fn pdf_error_invalid_crop() {
        let err = PdfError::InvalidCrop("x0 (20) is greater than x1 (10)".to_string());
        assert!(err.to_string().starts_with("invalid crop:"));
        assert!(err.to_string().contains("x0 (20)"));
    }

    #[test]
    fn pdf_error_empty_region() {
        let err = PdfError::EmptyRegion {
            x0: 0.0,
            top: 0.0,
            x1: 0.0,
            bottom: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "crop region (0, 0, 0, 0) has no area after clamping"
        );
    }

    #[test]
    fn pdf_error_render_and_encode() {
        assert_eq!(
            PdfError::RenderError("bitmap allocation failed".to_string()).to_string(),
            "render error: bitmap allocation failed"
        );
        assert_eq!(
            PdfError::EncodeError("png writer closed".to_string()).to_string(),
            "encode error: png writer closed"
        );
    }

    #[test]
    fn pdf_error_clone_and_eq() {
        let err1 = PdfError::PageIndexOutOfRange {
            index: 7,
            page_count: 2,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn pdf_error_other() {
        let err = PdfError::Other("something went wrong".to_string());
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn pdf_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PdfError::ParseError("test".to_string()));
        assert_eq!(err.to_string(), "parse error: test");
    }

    #[test]
    fn pdf_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: PdfError = io_err.into();
        assert!(matches!(err, PdfError::IoError(_)));
        assert!(err.to_string().contains("no such file"));
    }
}
