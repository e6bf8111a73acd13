//! # Contract Services
//!
//! [`provider`] declares what the mint page needs from the outside world; the
//! browser implementation lives in `mint-web`, tests use in-memory mocks.
//! [`mint`] composes those capabilities into the page's operations.

pub mod mint;
pub mod provider;

pub use mint::{claim, load_drop, open_drop, prepare_share};
pub use provider::{ContractProvider, DropContract, ImageTransform, WalletConnector};
