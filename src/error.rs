//! Error types for statement extraction.

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting a statement.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source document could not be opened or its text extracted
    #[error("PDF extraction error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    /// CSV output error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// The source document yielded no pages with text
    #[error("Document contains no extractable pages")]
    EmptyDocument,

    /// A header line matched structurally but its date is not a real calendar date.
    /// This aborts the whole parse; there is no per-record recovery.
    #[error("Invalid operation date '{date}'")]
    InvalidDate { date: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: statement-extract <statement.pdf> [output.csv]")]
    MissingArgument,
}
