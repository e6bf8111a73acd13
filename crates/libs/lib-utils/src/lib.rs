//! # Utilities Library
//!
//! Environment variable access and input validation helpers.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse};
pub use validation::{validate_evm_address, validate_not_empty};
