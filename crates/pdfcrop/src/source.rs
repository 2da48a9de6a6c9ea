//! Where a PDF document comes from.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pdfcrop_core::PdfError;

/// The origin of a PDF document: a file on disk or bytes already in memory.
///
/// Byte sources are reference counted, so cloning a `DocumentSource` never
/// copies the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A filesystem path, read when the document is opened.
    Path(PathBuf),
    /// An in-memory PDF.
    Bytes(Arc<[u8]>),
}

impl DocumentSource {
    /// Drain `reader` into an in-memory source.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::IoError`] if reading fails.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, PdfError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::Bytes(bytes.into()))
    }

    /// The path, when this source is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Bytes(_) => None,
        }
    }

    /// Size of the source in bytes, without reading a file source.
    pub(crate) fn len(&self) -> Result<u64, PdfError> {
        match self {
            Self::Path(path) => std::fs::metadata(path)
                .map(|m| m.len())
                .map_err(|e| PdfError::IoError(format!("{}: {e}", path.display()))),
            Self::Bytes(bytes) => Ok(bytes.len() as u64),
        }
    }

    /// Load the whole document into memory.
    pub(crate) fn load(&self) -> Result<Arc<[u8]>, PdfError> {
        match self {
            Self::Path(path) => std::fs::read(path)
                .map(Arc::from)
                .map_err(|e| PdfError::IoError(format!("{}: {e}", path.display()))),
            Self::Bytes(bytes) => Ok(Arc::clone(bytes)),
        }
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Bytes(bytes) => write!(f, "<{} bytes in memory>", bytes.len()),
        }
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for DocumentSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for DocumentSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl From<&[u8]> for DocumentSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl From<Arc<[u8]>> for DocumentSource {
    fn from(bytes: Arc<[u8]>) -> Self {
        Self::Bytes(bytes)
    }
}
