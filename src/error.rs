//! Error types for the booklet library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the booklet library
#[derive(Error, Debug)]
pub enum Error {
    /// No page sequence was supplied
    #[error("No page sequence provided")]
    InvalidInput,

    /// An odd-length sequence reached the permutation step
    #[error("Cannot permute {0} pages: booklet order needs an even page count")]
    InvalidLength(usize),

    /// Input and output refer to the same file
    #[error("Output file must be different from input: {}", .0.display())]
    SameFile(PathBuf),

    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Page tree or page geometry the library cannot work with
    #[error("Malformed PDF: {0}")]
    MalformedPdf(String),
}
