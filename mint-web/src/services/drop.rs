//! NFT Drop Integration via wasm-bindgen
//!
//! Talks to the contract SDK that `index.html` loads as `window.ThirdwebSDK`.
//! The glue below flattens SDK objects (BigNumbers, nested receipts) into the
//! plain shapes of the `shared` DTOs before they cross into Rust.

use async_trait::async_trait;
use lib_core::config::ChainId;
use lib_core::service::{ContractProvider, DropContract};
use lib_core::{AppError, Result};
use serde::de::DeserializeOwned;
use shared::dto::{ClaimCondition, ClaimReceipt, ContractKind, ContractMetadata, OwnedToken};
use wasm_bindgen::prelude::*;

use super::js_error_message;

// ============================================================================
// CONTRACT SDK GLUE (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
const contracts = new Map();

function sdkClass() {
    const Sdk = window.ThirdwebSDK || (window.thirdweb && window.thirdweb.ThirdwebSDK);
    if (!Sdk) {
        throw new Error('Contract SDK is not loaded');
    }
    return Sdk;
}

export async function getContract(chainId, address, kind, account) {
    const key = chainId + ':' + address.toLowerCase() + ':' + (account ? account.toLowerCase() : 'read');
    if (contracts.has(key)) {
        return contracts.get(key);
    }

    const Sdk = sdkClass();
    let sdk;
    if (account) {
        if (!window.ethereum || !window.ethers) {
            throw new Error('No wallet found to sign with');
        }
        const provider = new window.ethers.providers.Web3Provider(window.ethereum, 'any');
        sdk = Sdk.fromSigner(provider.getSigner(account), chainId);
    } else {
        sdk = new Sdk(chainId);
    }

    const contract = await sdk.getContract(address, kind);
    contracts.set(key, contract);
    return contract;
}

export async function contractMetadata(contract) {
    const metadata = await contract.metadata.get();
    return {
        name: String(metadata.name || ''),
        image: metadata.image || null,
        description: metadata.description || null,
    };
}

export async function unclaimedSupply(contract) {
    return (await contract.totalUnclaimedSupply()).toString();
}

export async function claimedSupply(contract) {
    return (await contract.totalClaimedSupply()).toString();
}

export async function activeClaimCondition(contract) {
    let condition;
    try {
        condition = await contract.claimConditions.getActive();
    } catch (error) {
        const message = (error && error.message) || String(error);
        if (message.toLowerCase().includes('no active')) {
            return null;
        }
        throw error;
    }

    const currency = condition.currencyMetadata;
    const limit = condition.quantityLimitPerTransaction !== undefined
        ? condition.quantityLimitPerTransaction
        : condition.maxClaimablePerWallet;
    return {
        availableSupply: String(condition.availableSupply),
        quantityLimitPerTransaction: String(limit === undefined ? '0' : limit),
        price: condition.price.toString(),
        currencyMetadata: {
            displayValue: String(currency.displayValue || ''),
            decimals: Number(currency.decimals),
            symbol: String(currency.symbol || ''),
            value: currency.value ? currency.value.toString() : '',
        },
    };
}

function plainAttributes(attributes) {
    if (!Array.isArray(attributes)) {
        return [];
    }
    return attributes.map((a) => ({
        trait_type: String(a.trait_type === undefined ? '' : a.trait_type),
        value: String(a.value === undefined ? '' : a.value),
    }));
}

export async function ownedTokens(contract, owner) {
    const nfts = await contract.getOwned(owner);
    return nfts.map((nft) => ({
        metadata: {
            id: nft.metadata.id.toString(),
            name: String(nft.metadata.name || ''),
            image: String(nft.metadata.image || ''),
            description: nft.metadata.description || null,
            attributes: plainAttributes(nft.metadata.attributes),
        },
        owner: String(nft.owner || owner),
    }));
}

export async function claimTokens(contract, quantity) {
    const results = await contract.erc721.claim(quantity);
    return results.map((result) => ({
        id: result.id.toString(),
        transactionHash: result.receipt ? result.receipt.transactionHash : null,
    }));
}
")]
extern "C" {
    #[wasm_bindgen(catch, js_name = getContract)]
    async fn get_contract(
        chain_id: f64,
        address: &str,
        kind: &str,
        account: Option<String>,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = contractMetadata)]
    async fn contract_metadata(contract: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = unclaimedSupply)]
    async fn unclaimed_supply(contract: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = claimedSupply)]
    async fn claimed_supply(contract: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = activeClaimCondition)]
    async fn active_claim_condition(contract: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = ownedTokens)]
    async fn owned_tokens(contract: &JsValue, owner: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = claimTokens)]
    async fn claim_tokens(contract: &JsValue, quantity: u32) -> std::result::Result<JsValue, JsValue>;
}

// ============================================================================
// DROP SERVICE
// ============================================================================

fn provider_error(err: JsValue) -> AppError {
    AppError::Provider(js_error_message(&err))
}

fn decode<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AppError::Decoding(format!("{}: {}", what, e)))
}

fn decode_count(value: JsValue, what: &str) -> Result<u64> {
    let raw = value
        .as_string()
        .ok_or_else(|| AppError::Decoding(format!("{} is not a string", what)))?;
    raw.parse::<u64>()
        .map_err(|_| AppError::Decoding(format!("{} is not a count: {:?}", what, raw)))
}

/// Resolves drop contracts through the SDK on a fixed chain.
///
/// With an account the SDK signs as that account; without one it is read-only.
#[derive(Clone, Debug)]
pub struct SdkProvider {
    chain_id: ChainId,
    account: Option<String>,
}

impl SdkProvider {
    pub fn new(chain_id: ChainId, account: Option<String>) -> Self {
        Self { chain_id, account }
    }
}

#[async_trait(?Send)]
impl ContractProvider for SdkProvider {
    type Contract = SdkDrop;

    async fn contract(&self, address: &str, kind: ContractKind) -> Result<SdkDrop> {
        let handle = get_contract(
            self.chain_id.0 as f64,
            address,
            kind.as_str(),
            self.account.clone(),
        )
        .await
        .map_err(provider_error)?;
        Ok(SdkDrop { handle })
    }
}

/// Handle of a resolved drop contract.
pub struct SdkDrop {
    handle: JsValue,
}

#[async_trait(?Send)]
impl DropContract for SdkDrop {
    async fn metadata(&self) -> Result<ContractMetadata> {
        let value = contract_metadata(&self.handle).await.map_err(provider_error)?;
        decode(value, "contract metadata")
    }

    async fn unclaimed_supply(&self) -> Result<u64> {
        let value = unclaimed_supply(&self.handle).await.map_err(provider_error)?;
        decode_count(value, "unclaimed supply")
    }

    async fn claimed_supply(&self) -> Result<u64> {
        let value = claimed_supply(&self.handle).await.map_err(provider_error)?;
        decode_count(value, "claimed supply")
    }

    async fn active_claim_condition(&self) -> Result<Option<ClaimCondition>> {
        let value = active_claim_condition(&self.handle)
            .await
            .map_err(provider_error)?;
        decode(value, "claim condition")
    }

    async fn owned_tokens(&self, owner: &str) -> Result<Vec<OwnedToken>> {
        let value = owned_tokens(&self.handle, owner).await.map_err(provider_error)?;
        decode(value, "owned tokens")
    }

    async fn claim(&self, quantity: u32) -> Result<Vec<ClaimReceipt>> {
        let value = claim_tokens(&self.handle, quantity)
            .await
            .map_err(|e| AppError::Claim(js_error_message(&e)))?;
        decode(value, "claim receipts")
    }
}
