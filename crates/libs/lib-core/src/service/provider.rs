//! # Service Traits
//!
//! Traits for dependency injection between the mint operations and the
//! contract SDK running in the page.
//!
//! Futures produced in the browser hold `JsValue`s and are not `Send`, hence
//! `#[async_trait(?Send)]` throughout.

use async_trait::async_trait;
use shared::dto::{ClaimCondition, ClaimReceipt, ContractKind, ContractMetadata, OwnedToken};

use crate::config::ChainId;
use crate::error::Result;

/// Resolves contract handles by address and kind.
#[async_trait(?Send)]
pub trait ContractProvider {
    type Contract: DropContract;

    async fn contract(&self, address: &str, kind: ContractKind) -> Result<Self::Contract>;
}

/// Reads and writes of an NFT drop contract.
#[async_trait(?Send)]
pub trait DropContract {
    async fn metadata(&self) -> Result<ContractMetadata>;

    async fn unclaimed_supply(&self) -> Result<u64>;

    async fn claimed_supply(&self) -> Result<u64>;

    /// `None` when the contract has no active claim phase.
    async fn active_claim_condition(&self) -> Result<Option<ClaimCondition>>;

    async fn owned_tokens(&self, owner: &str) -> Result<Vec<OwnedToken>>;

    /// Submit a claim for `quantity` tokens to the connected wallet.
    ///
    /// Returns one receipt per minted token.
    async fn claim(&self, quantity: u32) -> Result<Vec<ClaimReceipt>>;
}

/// Turns a token image into a URL fit for sharing.
#[async_trait(?Send)]
pub trait ImageTransform {
    async fn share_url(&self, image: &str) -> Result<String>;
}

/// Wallet connection state of the visitor.
#[async_trait(?Send)]
pub trait WalletConnector {
    /// Address of the connected account, if any.
    fn address(&self) -> Option<String>;

    /// Ask the wallet for an account on `chain`, returning its address.
    async fn connect(&self, chain: ChainId) -> Result<String>;
}
