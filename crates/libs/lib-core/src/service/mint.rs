//! Mint page operations over the service traits.

use shared::dto::{ContractKind, OwnedToken};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::model::{AlertState, DropSnapshot, ShareSelection};
use crate::service::provider::{ContractProvider, DropContract, ImageTransform};

/// Resolve the configured drop contract.
pub async fn open_drop<P: ContractProvider>(provider: &P, config: &Config) -> Result<P::Contract> {
    log::debug!("Resolving drop contract {}", config.contract_address);
    provider
        .contract(&config.contract_address, ContractKind::NftDrop)
        .await
}

/// Read everything the mint page shows, concurrently.
///
/// Metadata gates rendering, so its failure fails the load. The other reads
/// are logged and left empty. Owned tokens are only read with an owner.
pub async fn load_drop<C: DropContract>(contract: &C, owner: Option<&str>) -> Result<DropSnapshot> {
    let owned = async {
        match owner {
            Some(owner) => contract.owned_tokens(owner).await,
            None => Ok(Vec::new()),
        }
    };

    let (metadata, unclaimed, claimed, condition, owned) = futures::join!(
        contract.metadata(),
        contract.unclaimed_supply(),
        contract.claimed_supply(),
        contract.active_claim_condition(),
        owned,
    );

    let metadata = metadata?;
    log::debug!("Loaded drop metadata for {}", metadata.name);

    Ok(DropSnapshot {
        metadata,
        unclaimed_supply: ok_or_warn(unclaimed, "unclaimed supply"),
        claimed_supply: ok_or_warn(claimed, "claimed supply"),
        claim_condition: ok_or_warn(condition, "active claim condition").flatten(),
        owned_tokens: ok_or_warn(owned, "owned tokens").unwrap_or_default(),
    })
}

fn ok_or_warn<T>(result: Result<T>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Failed to read {}: {}", what, err);
            None
        }
    }
}

/// Submit a claim and describe the outcome as an alert. Never retried.
pub async fn claim<C: DropContract>(contract: &C, quantity: u32) -> AlertState {
    log::info!("Submitting claim for {} token(s)", quantity);
    match contract.claim(quantity).await {
        Ok(receipts) => {
            log::info!("Claim succeeded, {} token(s) minted", receipts.len());
            AlertState::claimed(receipts.len())
        }
        Err(err) => {
            log::warn!("Claim failed: {}", err);
            AlertState::failed(err.user_message())
        }
    }
}

/// Resolve the share URL of `token`.
///
/// Without an image-transform endpoint the token image is shared as is.
pub async fn prepare_share<T: ImageTransform>(
    transform: Option<&T>,
    token: OwnedToken,
) -> Result<ShareSelection> {
    if token.image().is_empty() {
        return Err(AppError::Share(format!("token {} has no image", token.id())));
    }

    let share_url = match transform {
        Some(transform) => transform.share_url(token.image()).await?,
        None => token.image().to_string(),
    };

    Ok(ShareSelection { token, share_url })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use shared::dto::{ClaimCondition, ClaimReceipt, ContractMetadata, CurrencyMetadata, NftMetadata};

    use super::*;
    use crate::config::ChainId;
    use crate::model::{MintView, Severity};

    struct MockDrop {
        metadata: Result<ContractMetadata>,
        unclaimed: Result<u64>,
        claimed: Result<u64>,
        condition: Result<Option<ClaimCondition>>,
        owned: Result<Vec<OwnedToken>>,
        claim_result: Result<Vec<ClaimReceipt>>,
        /// Owned-token reads yield a few times before answering
        slow_owned: bool,
        calls: RefCell<Vec<String>>,
    }

    impl MockDrop {
        fn healthy() -> Self {
            Self {
                metadata: Ok(ContractMetadata {
                    name: "Lions".to_string(),
                    image: Some("https://img.example.com/cover.png".to_string()),
                    description: None,
                }),
                unclaimed: Ok(750),
                claimed: Ok(250),
                condition: Ok(Some(ClaimCondition {
                    available_supply: "750".to_string(),
                    quantity_limit_per_transaction: "5".to_string(),
                    price: "500000000000000000".to_string(),
                    currency_metadata: CurrencyMetadata {
                        display_value: "0.5".to_string(),
                        decimals: 18,
                        symbol: "ETH".to_string(),
                        value: "500000000000000000".to_string(),
                    },
                })),
                owned: Ok(vec![token("1", "https://img.example.com/1.png")]),
                claim_result: Ok(vec![]),
                slow_owned: false,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    #[async_trait(?Send)]
    impl DropContract for MockDrop {
        async fn metadata(&self) -> Result<ContractMetadata> {
            self.metadata.clone()
        }

        async fn unclaimed_supply(&self) -> Result<u64> {
            self.unclaimed.clone()
        }

        async fn claimed_supply(&self) -> Result<u64> {
            self.claimed.clone()
        }

        async fn active_claim_condition(&self) -> Result<Option<ClaimCondition>> {
            self.condition.clone()
        }

        async fn owned_tokens(&self, owner: &str) -> Result<Vec<OwnedToken>> {
            self.record(format!("owned_tokens({})", owner));
            if self.slow_owned {
                for _ in 0..3 {
                    tokio::task::yield_now().await;
                }
            }
            self.owned.clone()
        }

        async fn claim(&self, quantity: u32) -> Result<Vec<ClaimReceipt>> {
            self.record(format!("claim({})", quantity));
            self.claim_result.clone()
        }
    }

    struct MockProvider;

    #[async_trait(?Send)]
    impl ContractProvider for MockProvider {
        type Contract = MockDrop;

        async fn contract(&self, address: &str, kind: ContractKind) -> Result<MockDrop> {
            if kind != ContractKind::NftDrop || address.is_empty() {
                return Err(AppError::Provider("unknown contract".to_string()));
            }
            Ok(MockDrop::healthy())
        }
    }

    struct MockTransform {
        result: Result<String>,
    }

    #[async_trait(?Send)]
    impl ImageTransform for MockTransform {
        async fn share_url(&self, _image: &str) -> Result<String> {
            self.result.clone()
        }
    }

    fn token(id: &str, image: &str) -> OwnedToken {
        OwnedToken {
            metadata: NftMetadata {
                id: id.to_string(),
                name: format!("Lion #{}", id),
                image: image.to_string(),
                description: None,
                attributes: vec![],
            },
            owner: "0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa".to_string(),
        }
    }

    fn receipts(count: usize) -> Vec<ClaimReceipt> {
        (0..count)
            .map(|i| ClaimReceipt {
                id: i.to_string(),
                transaction_hash: Some("0xfeed".to_string()),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_open_drop_uses_configured_address() {
        let config = Config {
            contract_address: "0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa".to_string(),
            chain_id: ChainId::GOERLI,
            image_api: None,
        };
        assert!(open_drop(&MockProvider, &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_load_drop_reads_everything() {
        let drop = MockDrop::healthy();
        let snapshot = load_drop(&drop, Some("0xowner")).await.unwrap();

        assert_eq!(snapshot.metadata.name, "Lions");
        assert_eq!(snapshot.unclaimed_supply, Some(750));
        assert_eq!(snapshot.claimed_supply, Some(250));
        assert_eq!(snapshot.quantity_limit(), 5);
        assert_eq!(snapshot.owned_tokens.len(), 1);
        assert_eq!(drop.calls.borrow().as_slice(), ["owned_tokens(0xowner)"]);
    }

    #[tokio::test]
    async fn test_load_drop_without_wallet_skips_owned_tokens() {
        let drop = MockDrop::healthy();
        let snapshot = load_drop(&drop, None).await.unwrap();

        assert!(snapshot.owned_tokens.is_empty());
        assert!(drop.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_load_drop_fails_without_metadata() {
        let drop = MockDrop {
            metadata: Err(AppError::Provider("node unreachable".to_string())),
            ..MockDrop::healthy()
        };
        assert_eq!(
            load_drop(&drop, None).await,
            Err(AppError::Provider("node unreachable".to_string()))
        );
    }

    #[tokio::test]
    async fn test_load_drop_degrades_optional_reads() {
        let drop = MockDrop {
            unclaimed: Err(AppError::Provider("timeout".to_string())),
            claimed: Err(AppError::Provider("timeout".to_string())),
            condition: Err(AppError::Decoding("bad phase".to_string())),
            owned: Err(AppError::Provider("timeout".to_string())),
            ..MockDrop::healthy()
        };
        let snapshot = load_drop(&drop, Some("0xowner")).await.unwrap();

        assert_eq!(snapshot.unclaimed_supply, None);
        assert_eq!(snapshot.claimed_supply, None);
        assert_eq!(snapshot.claim_condition, None);
        assert!(snapshot.owned_tokens.is_empty());
        assert!(!snapshot.readiness().is_sold_out);
        assert_eq!(snapshot.supply_progress(), None);
    }

    #[tokio::test]
    async fn test_older_load_finishing_last_is_dropped() {
        let view = RefCell::new(MintView::new());
        let shown: RefCell<Option<DropSnapshot>> = RefCell::new(None);

        // Refresh for the connected owner, then a reload after disconnecting
        let with_owner = MockDrop {
            slow_owned: true,
            ..MockDrop::healthy()
        };
        let signed_out = MockDrop::healthy();

        let refresh = view.borrow_mut().begin_load();
        let older = async {
            let loaded = load_drop(&with_owner, Some("0xowner")).await.unwrap();
            if let Some(loaded) = view.borrow().accept_load(refresh, loaded) {
                *shown.borrow_mut() = Some(loaded);
            }
        };

        let after_disconnect = view.borrow_mut().begin_load();
        let newer = async {
            let loaded = load_drop(&signed_out, None).await.unwrap();
            if let Some(loaded) = view.borrow().accept_load(after_disconnect, loaded) {
                *shown.borrow_mut() = Some(loaded);
            }
        };

        futures::join!(older, newer);

        let shown = shown.into_inner().unwrap();
        assert!(shown.owned_tokens.is_empty());
        assert_eq!(with_owner.calls.borrow().as_slice(), ["owned_tokens(0xowner)"]);
    }

    #[tokio::test]
    async fn test_sold_out_drop() {
        let drop = MockDrop {
            unclaimed: Ok(0),
            claimed: Ok(0),
            ..MockDrop::healthy()
        };
        let snapshot = load_drop(&drop, None).await.unwrap();
        assert!(snapshot.readiness().is_sold_out);
    }

    #[tokio::test]
    async fn test_claim_success_alert() {
        let drop = MockDrop {
            claim_result: Ok(receipts(2)),
            ..MockDrop::healthy()
        };
        let alert = claim(&drop, 2).await;

        assert_eq!(alert.severity, Severity::Success);
        assert!(alert.open);
        assert!(alert.message.contains("2 NFTs"));
        assert_eq!(drop.calls.borrow().as_slice(), ["claim(2)"]);
    }

    #[tokio::test]
    async fn test_claim_failure_alert_carries_message() {
        let drop = MockDrop {
            claim_result: Err(AppError::Claim("user rejected".to_string())),
            ..MockDrop::healthy()
        };
        let alert = claim(&drop, 1).await;

        assert_eq!(alert, AlertState::failed("user rejected"));
        assert_eq!(alert.severity, Severity::Error);
        assert_eq!(drop.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_prepare_share_uses_transform() {
        let transform = MockTransform {
            result: Ok("https://share.example.com/1.png".to_string()),
        };
        let selection = prepare_share(Some(&transform), token("1", "ipfs://bafy/1.png"))
            .await
            .unwrap();

        assert_eq!(selection.share_url, "https://share.example.com/1.png");
        assert_eq!(selection.token.id(), "1");
    }

    #[tokio::test]
    async fn test_prepare_share_without_endpoint_shares_image() {
        let selection = prepare_share::<MockTransform>(None, token("4", "https://img.example.com/4.png"))
            .await
            .unwrap();
        assert_eq!(selection.share_url, "https://img.example.com/4.png");
    }

    #[tokio::test]
    async fn test_prepare_share_errors() {
        let transform = MockTransform {
            result: Err(AppError::Share("503".to_string())),
        };
        assert!(prepare_share(Some(&transform), token("1", "ipfs://bafy/1.png")).await.is_err());
        assert!(prepare_share(Some(&transform), token("2", "")).await.is_err());
    }
}
