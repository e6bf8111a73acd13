use serde::{Deserialize, Serialize};

/// One `{ trait_type, value }` pair from token metadata.
///
/// Token metadata follows the OpenSea convention, so these keys stay snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: String,
}

/// Metadata of a single token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftMetadata {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<NftAttribute>,
}

/// Token held by the connected wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnedToken {
    pub metadata: NftMetadata,
    #[serde(default)]
    pub owner: String,
}

impl OwnedToken {
    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn image(&self) -> &str {
        &self.metadata.image
    }
}

/// One minted token returned by a successful claim
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReceipt {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}
