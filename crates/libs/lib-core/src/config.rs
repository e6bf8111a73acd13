//! # Application Configuration
//!
//! The mint page is configured at build time. Values are resolved once at
//! startup through a lookup function and then passed around explicitly; the
//! web app reads `option_env!`, tests pass a closure over a map.
//!
//! | Variable                | Required | Default        |
//! |-------------------------|----------|----------------|
//! | `MINT_CONTRACT_ADDRESS` | yes      | -              |
//! | `MINT_CHAIN_ID`         | no       | `5` (Goerli)   |
//! | `MINT_IMAGE_API`        | no       | share raw image|
//!
//! ```rust
//! use lib_core::config::{ChainId, Config};
//!
//! let config = Config::from_lookup(|name| match name {
//!     "MINT_CONTRACT_ADDRESS" => Some("0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.chain_id, ChainId::GOERLI);
//! ```

use std::fmt;

use lib_utils::validation::validate_evm_address;

use crate::error::{AppError, Result};

pub const ENV_CONTRACT_ADDRESS: &str = "MINT_CONTRACT_ADDRESS";
pub const ENV_CHAIN_ID: &str = "MINT_CHAIN_ID";
pub const ENV_IMAGE_API: &str = "MINT_IMAGE_API";

/// Marketplace page prefix for a token of the configured contract.
pub const MARKETPLACE_ASSET_BASE: &str = "https://opensea.io/assets/ethereum";

/// EVM chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MAINNET: ChainId = ChainId(1);
    pub const GOERLI: ChainId = ChainId(5);
    pub const SEPOLIA: ChainId = ChainId(11_155_111);
    pub const POLYGON: ChainId = ChainId(137);
    pub const MUMBAI: ChainId = ChainId(80_001);

    /// Parse a chain id the way the page always has: anything that is not a
    /// positive integer falls back to Goerli.
    pub fn parse_or_default(value: Option<&str>) -> ChainId {
        value
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|id| *id != 0)
            .map(ChainId)
            .unwrap_or(ChainId::GOERLI)
    }

    pub fn name(&self) -> Option<&'static str> {
        match *self {
            ChainId::MAINNET => Some("Ethereum"),
            ChainId::GOERLI => Some("Goerli"),
            ChainId::SEPOLIA => Some("Sepolia"),
            ChainId::POLYGON => Some("Polygon"),
            ChainId::MUMBAI => Some("Mumbai"),
            _ => None,
        }
    }

    /// `0x`-prefixed hex form used by `wallet_switchEthereumChain`.
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "chain {}", self.0),
        }
    }
}

/// Mint page configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Address of the NFT drop contract
    pub contract_address: String,

    /// Chain the wallet is asked to switch to
    pub chain_id: ChainId,

    /// Base URL of the image-transform endpoint
    ///
    /// When unset, the token image itself is shared.
    pub image_api: Option<String>,
}

impl Config {
    /// Build the configuration from a variable lookup and validate it.
    ///
    /// # Errors
    ///
    /// [`AppError::Config`] when the contract address is missing or malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let contract_address = lookup(ENV_CONTRACT_ADDRESS)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "You need to supply the {} environment variable",
                    ENV_CONTRACT_ADDRESS
                ))
            })?;

        let chain_id = ChainId::parse_or_default(lookup(ENV_CHAIN_ID).as_deref());

        let image_api = lookup(ENV_IMAGE_API)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let config = Self {
            contract_address,
            chain_id,
            image_api,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        validate_evm_address(&self.contract_address, ENV_CONTRACT_ADDRESS).map_err(AppError::Config)?;

        if let Some(api) = &self.image_api {
            if !(api.starts_with("http://") || api.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "{} must be an http(s) URL, got {}",
                    ENV_IMAGE_API, api
                )));
            }
        }

        Ok(())
    }

    /// Marketplace page of one token of the drop.
    pub fn asset_url(&self, token_id: &str) -> String {
        format!("{}/{}/{}", MARKETPLACE_ASSET_BASE, self.contract_address, token_id)
    }
}
