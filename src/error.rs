//! Error types for the Synonymous library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SynonymousError`] enum.
//!
//! # Examples
//!
//! ```
//! use synonymous::error::{Result, SynonymousError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynonymousError::invalid_input("Word and synonym cannot be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Synonymous operations.
#[derive(Error, Debug)]
pub enum SynonymousError {
    /// Rejected user input (empty word, self-synonym, malformed group).
    ///
    /// The message is displayed verbatim so that callers can show it to
    /// end users without further formatting.
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration errors (unreadable or malformed config and seed files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SynonymousError.
pub type Result<T> = std::result::Result<T, SynonymousError>;

impl SynonymousError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SynonymousError::InvalidInput(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SynonymousError::Config(msg.into())
    }

    /// Whether this error was caused by the caller's input rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SynonymousError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SynonymousError::invalid_input("Word and synonym cannot be the same");
        assert_eq!(error.to_string(), "Word and synonym cannot be the same");
        assert!(error.is_invalid_input());

        let error = SynonymousError::config("missing seed file");
        assert_eq!(error.to_string(), "Configuration error: missing seed file");
        assert!(!error.is_invalid_input());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SynonymousError::from(io_error);

        match error {
            SynonymousError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
