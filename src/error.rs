//! Error types for the casedoc library.

use std::io;
use thiserror::Error;

/// Result type alias for casedoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or inspecting documents.
///
/// Layout stages never fail: empty input degrades to placeholder text and
/// oversized tokens overflow. Errors only come from configuration, object
/// graph bookkeeping, output I/O and inspection of existing files.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF structure is corrupted or malformed.
    #[error("Corrupted PDF structure: {0}")]
    Corrupted(String),

    /// An object graph invariant was violated while assembling a document.
    #[error("Object graph invariant violated: {0}")]
    Invariant(String),

    /// Page geometry or typography is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error while serializing a layout plan.
    #[error("Rendering error: {0}")]
    Render(String),
}
