//! Error types for the hamspam library.
//!
//! All fallible operations return [`HamspamError`] through the [`Result`]
//! alias. Tokenization and classification never fail; errors come from
//! training configuration and from the data-provisioning layer.
//!
//! # Examples
//!
//! ```
//! use hamspam::error::{HamspamError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HamspamError::configuration("smoothing constant must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for hamspam operations.
#[derive(Error, Debug)]
pub enum HamspamError {
    /// I/O errors (reading dataset or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Training cannot produce a usable model (empty corpus, missing label,
    /// non-positive smoothing constant, invalid split fraction).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Dataset content errors (unknown label, malformed row)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Analysis-related errors (invalid tokenizer pattern)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Delimited-file decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with HamspamError.
pub type Result<T> = std::result::Result<T, HamspamError>;

impl HamspamError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        HamspamError::Configuration(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        HamspamError::Dataset(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        HamspamError::Analysis(msg.into())
    }

    /// Whether this error means training was invoked with an unusable setup.
    pub fn is_configuration(&self) -> bool {
        matches!(self, HamspamError::Configuration(_))
    }
}
