use std::path::Path;

use pdfcrop::{Document, OpenOptions, PdfError};

use crate::page_range::parse_page_range;

/// Print a library error to stderr and return the exit code.
pub fn report(err: PdfError) -> i32 {
    eprintln!("Error: {err}");
    1
}

/// Open options for the CLI: diagnostics stay quiet unless `-v` was given.
pub fn open_options(password: Option<&str>, verbose: u8) -> OpenOptions {
    let options = OpenOptions::default().with_quiet(verbose == 0);
    match password {
        Some(password) => options.with_password(password),
        None => options,
    }
}

/// Open a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be opened.
pub fn open_document(file: &Path, options: &OpenOptions) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    Document::open(file, options).map_err(|e| {
        eprintln!("Error: failed to open PDF: {e}");
        1
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// `None` selects every page.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((0..page_count).collect()),
    }
}
