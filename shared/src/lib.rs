//! # Shared Data Transfer Objects Library
//!
//! This library defines the data exchanged between the mint page and the
//! contract SDK glue running in the browser, plus the image-transform endpoint.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::drop`]**: Contract metadata and claim conditions of an NFT drop
//!   - **[`dto::nft`]**: Tokens owned by the connected wallet and claim receipts
//!   - **[`dto::share`]**: Image-transform endpoint response
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The SDK glue hands plain JavaScript objects across the wasm boundary, so the
//! DTOs follow the SDK's naming:
//! - Field names use **snake_case** in Rust and **camelCase** in JSON
//! - Big numbers arrive as decimal strings, never as JS numbers
//! - Optional fields are omitted when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::drop::ClaimCondition;
//!
//! let json = r#"{
//!     "availableSupply": "unlimited",
//!     "quantityLimitPerTransaction": "5",
//!     "price": "0",
//!     "currencyMetadata": { "displayValue": "0.0", "decimals": 18, "symbol": "ETH", "value": "0" }
//! }"#;
//! let condition: ClaimCondition = serde_json::from_str(json).unwrap();
//! assert_eq!(condition.currency_metadata.symbol, "ETH");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library, everything here is public API
pub use dto::*;
pub use utils::*;
