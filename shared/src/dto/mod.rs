//! # Data Transfer Objects (DTOs)
//!
//! Data structures read from the drop contract through the SDK glue, and the
//! response of the image-transform endpoint.
//!
//! ## Module Organization
//!
//! - [`drop`] - Contract metadata, claim conditions and currency metadata
//! - [`nft`] - Owned tokens and claim receipts
//! - [`share`] - Image-transform endpoint response
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Big numbers**: decimal strings, parsed by `lib-core` where arithmetic is needed
//! - **Optional fields**: omitted when `None`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "metadata": {
//!     "id": "17",
//!     "name": "Lion #17",
//!     "image": "ipfs://bafy.../17.png",
//!     "attributes": [{ "trait_type": "Mane", "value": "Gold" }]
//!   },
//!   "owner": "0x9f2c...41aa"
//! }
//! ```

pub mod drop;
pub mod nft;
pub mod share;

pub use drop::*;
pub use nft::*;
pub use share::*;
