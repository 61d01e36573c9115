//! Plain-text extraction from the source PDF.
//!
//! `pdf_extract` renders the whole document as one string with form-feed
//! characters between pages; splitting on those restores the page sequence
//! the parser needs.

use crate::error::{ExtractError, Result};
use log::debug;
use std::path::Path;

/// Page separator emitted by `pdf_extract` between rendered pages.
const PAGE_BREAK: char = '\u{000C}';

/// Extracts the plain text of every page, in document order.
///
/// A page with no extractable text yields an empty string (zero lines for
/// the parser). A document with no textual content at all is an error.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    let full_text = pdf_extract::extract_text(path)?;

    if full_text.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    let pages: Vec<String> = full_text.split(PAGE_BREAK).map(str::to_string).collect();
    debug!("Extracted {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let err = extract_pages(Path::new("no_such_statement.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
