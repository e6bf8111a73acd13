use serde::{Deserialize, Serialize};

/// Contract type requested from the SDK when resolving a contract handle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ContractKind {
    NftDrop,
}

impl ContractKind {
    /// Name of the contract type as understood by the SDK.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractKind::NftDrop => "nft-drop",
        }
    }
}

/// Collection-level metadata of the drop contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Currency a claim is priced in.
///
/// `display_value` is the human readable price (`"0.05"`), `value` the raw
/// base-unit amount (`"50000000000000000"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyMetadata {
    pub display_value: String,
    pub decimals: u8,
    pub symbol: String,
    #[serde(default)]
    pub value: String,
}

/// Snapshot of the active claim phase.
///
/// Supply and limit fields are strings because the SDK reports either an
/// integer or the literal `"unlimited"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimCondition {
    pub available_supply: String,
    pub quantity_limit_per_transaction: String,
    /// Raw price per token in the currency's base units
    pub price: String,
    pub currency_metadata: CurrencyMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_condition_from_sdk_json() {
        let json = r#"{
            "availableSupply": "250",
            "quantityLimitPerTransaction": "unlimited",
            "price": "500000000000000000",
            "currencyMetadata": {
                "displayValue": "0.5",
                "decimals": 18,
                "symbol": "ETH",
                "value": "500000000000000000"
            }
        }"#;

        let condition: ClaimCondition = serde_json::from_str(json).unwrap();
        assert_eq!(condition.available_supply, "250");
        assert_eq!(condition.quantity_limit_per_transaction, "unlimited");
        assert_eq!(condition.currency_metadata.display_value, "0.5");
        assert_eq!(condition.currency_metadata.decimals, 18);
    }

    #[test]
    fn test_contract_metadata_optional_fields() {
        let metadata: ContractMetadata = serde_json::from_str(r#"{"name":"Lions"}"#).unwrap();
        assert_eq!(metadata.name, "Lions");
        assert!(metadata.image.is_none());

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"name":"Lions"}"#);
    }

    #[test]
    fn test_contract_kind_name() {
        assert_eq!(ContractKind::NftDrop.as_str(), "nft-drop");
        assert_eq!(serde_json::to_string(&ContractKind::NftDrop).unwrap(), r#""nft-drop""#);
    }
}
