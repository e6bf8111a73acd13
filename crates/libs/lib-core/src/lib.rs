//! # Core Library
//!
//! Configuration, errors, the mint page view model and the traits the page
//! uses to talk to the drop contract. Nothing here touches the DOM, so the
//! whole crate is testable natively.

pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod units;

// Re-export commonly used types
pub use config::{ChainId, Config};
pub use error::{AppError, Result};
pub use model::{DropSnapshot, MintFlow, MintView};
