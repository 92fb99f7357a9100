//! # Error Handling
//!
//! [`FormError`] covers the faults that can happen *around* validation:
//! a bad configuration, a page handle of the wrong kind, a failing DOM call.
//!
//! A malformed email or a short password is not a `FormError`. Those are
//! ordinary outcomes reported as `false` plus a message in the error slot.
//!
//! ```rust
//! use lib_form::error::{FormError, Result};
//!
//! fn min_length(raw: &str) -> Result<usize> {
//!     raw.parse()
//!         .map_err(|_| FormError::Config(format!("'{raw}' is not a length")))
//! }
//!
//! assert!(min_length("6").is_ok());
//! assert!(min_length("six").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, FormError>`.
pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// Configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration has already been initialized")]
    AlreadyInitialized,

    /// A handle supplied by the page is missing or of the wrong kind.
    #[error("Handle error: {0}")]
    Handle(String),

    /// A DOM call made on behalf of the validator failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration or error payload could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::Decoding(format!("JSON error: {}", err))
    }
}
