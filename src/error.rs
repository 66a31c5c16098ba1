//! Error types for the pdfgist library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfgist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during sentence extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is malformed or unreadable.
    ///
    /// Fatal to the current extraction run; there is no automatic retry.
    #[error("Document parsing error: {0}")]
    DocumentParse(String),

    /// A page index outside the document was requested.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// The run was cancelled before completing.
    #[error("Extraction cancelled")]
    Cancelled,

    /// Translation endpoint failure, fully decoupled from extraction errors.
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),
}

/// Errors from the third-party translation endpoint.
///
/// These are reported to the caller without retry and never originate from
/// the extraction pipeline itself.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Network or transport failure.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code.
    #[error("Translation endpoint returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("Malformed translation response: {0}")]
    MalformedResponse(String),
}
