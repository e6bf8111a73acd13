//! # Mint Page Model
//!
//! Pure state and derivations behind the mint page.
//!
//! - [`drop`] - What was read from the contract and what follows from it
//!   (readiness, pricing, supply progress)
//! - [`view`] - Local view state: terms, quantity, alert, share selection
//! - [`share`] - Share links for owned tokens

pub mod drop;
pub mod share;
pub mod view;

pub use drop::{DropSnapshot, Readiness, SupplyLimit, SupplyProgress};
pub use share::{ShareOptions, ShareSelection, ShareSize};
pub use view::{AlertState, LoadTicket, MintFlow, MintView, Severity, WALLET_REQUIRED};
