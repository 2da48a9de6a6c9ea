//! Options forwarded to the document backend when a PDF is opened.

/// Options controlling how a PDF document is opened.
///
/// The parsing backend receives the whole value. A rasterizer only receives
/// the password, through the render request.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenOptions {
    /// Password for encrypted PDFs (default: None).
    pub password: Option<String>,
    /// Maximum input PDF size in bytes (default: None = no limit).
    pub max_input_bytes: Option<usize>,
    /// Suppress diagnostic output while the document is open (default: true).
    pub quiet: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            password: None,
            max_input_bytes: None,
            quiet: true,
        }
    }
}

impl OpenOptions {
    /// Set the password used to decrypt the document.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Reject inputs larger than `bytes`.
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    /// Enable or disable diagnostic suppression.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The password as a byte slice, as backends expect it.
    pub fn password_bytes(&self) -> Option<&[u8]> {
        self.password.as_deref().map(str::as_bytes)
    }
}
