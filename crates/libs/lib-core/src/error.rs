//! # Centralized Error Handling
//!
//! [`AppError`] is the error type shared by configuration loading, the
//! contract provider traits and the mint operations.
//!
//! ## Error Categories
//!
//! 1. **Startup** - [`Config`](AppError::Config): the page refuses to mount
//! 2. **Reads** - [`Provider`](AppError::Provider), [`Decoding`](AppError::Decoding):
//!    the page stays on its loading indicator
//! 3. **Actions** - [`Claim`](AppError::Claim), [`Share`](AppError::Share):
//!    surfaced to the visitor, the page stays interactive
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_wallet(address: Option<&str>) -> Result<&str> {
//!     address.ok_or_else(|| AppError::InvalidInput("Connect a wallet first".to_string()))
//! }
//!
//! let err = require_wallet(None).unwrap_err();
//! assert_eq!(err.user_message(), "Connect a wallet first");
//! ```

use thiserror::Error;

use crate::units::UnitsError;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Missing or invalid build configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The contract SDK or the node failed to answer a read.
    #[error("Provider error: {0}")]
    Provider(String),

    /// A claim transaction was rejected, reverted or failed to submit.
    #[error("Claim error: {0}")]
    Claim(String),

    /// The image-transform endpoint failed.
    #[error("Share error: {0}")]
    Share(String),

    /// A value read from the SDK had an unexpected shape.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid user input or a precondition the visitor can fix.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Message suitable for showing to the visitor.
    ///
    /// Claim and input errors pass the underlying message through untouched,
    /// so a wallet rejection reads exactly as the wallet reported it.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Claim(msg)
            | AppError::InvalidInput(msg)
            | AppError::Provider(msg)
            | AppError::Share(msg) => msg.clone(),
            AppError::Config(_) | AppError::Decoding(_) => self.to_string(),
        }
    }
}

impl From<UnitsError> for AppError {
    fn from(err: UnitsError) -> Self {
        AppError::Decoding(err.to_string())
    }
}
