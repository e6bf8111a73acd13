//! Drop state as read from the contract, and the flags and prices derived from it.

use std::str::FromStr;

use shared::dto::{ClaimCondition, ContractMetadata, OwnedToken};

use crate::error::AppError;
use crate::units::{format_units, parse_units, UnitsError, DEFAULT_DECIMALS};

/// Denominator of the supply progress bar.
pub const DISPLAY_SUPPLY: u64 = 1000;

/// Everything the mint page reads from the contract in one load.
///
/// Only the metadata is required; the other reads degrade to `None`/empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSnapshot {
    pub metadata: ContractMetadata,
    pub unclaimed_supply: Option<u64>,
    pub claimed_supply: Option<u64>,
    pub claim_condition: Option<ClaimCondition>,
    pub owned_tokens: Vec<OwnedToken>,
}

impl DropSnapshot {
    pub fn new(metadata: ContractMetadata) -> Self {
        Self {
            metadata,
            unclaimed_supply: None,
            claimed_supply: None,
            claim_condition: None,
            owned_tokens: Vec::new(),
        }
    }

    pub fn readiness(&self) -> Readiness {
        Readiness::evaluate(self.unclaimed_supply, self.claim_condition.as_ref())
    }

    pub fn quantity_limit(&self) -> u32 {
        quantity_limit(self.claim_condition.as_ref())
    }

    pub fn supply_progress(&self) -> Option<SupplyProgress> {
        SupplyProgress::from_counts(self.claimed_supply, self.unclaimed_supply)
    }
}

/// A supply or per-transaction limit as reported by the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyLimit {
    Limited(u64),
    Unlimited,
}

impl FromStr for SupplyLimit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(SupplyLimit::Unlimited);
        }
        s.parse::<u64>()
            .map(SupplyLimit::Limited)
            .map_err(|_| AppError::Decoding(format!("invalid supply value: {:?}", s)))
    }
}

/// Flags choosing which claim branch the page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readiness {
    pub is_sold_out: bool,
    pub is_not_ready: bool,
}

impl Readiness {
    /// Sold out when the unclaimed supply is exactly zero. Not ready when the
    /// active phase has no supply left.
    ///
    /// An available supply that does not parse leaves the phase ready; the
    /// contract still enforces supply on claim.
    pub fn evaluate(unclaimed_supply: Option<u64>, condition: Option<&ClaimCondition>) -> Self {
        let is_sold_out = unclaimed_supply == Some(0);

        let is_not_ready = match condition.map(|c| c.available_supply.parse::<SupplyLimit>()) {
            Some(Ok(SupplyLimit::Limited(0))) => true,
            Some(Err(err)) => {
                log::warn!("Treating claim phase as ready: {}", err);
                false
            }
            _ => false,
        };

        Self {
            is_sold_out,
            is_not_ready,
        }
    }
}

/// Upper bound for the quantity selector.
///
/// No condition, or a malformed limit, yields 0 so the increment stays
/// disabled. `"unlimited"` yields `u32::MAX`.
pub fn quantity_limit(condition: Option<&ClaimCondition>) -> u32 {
    let Some(condition) = condition else {
        return 0;
    };

    match condition.quantity_limit_per_transaction.parse::<SupplyLimit>() {
        Ok(SupplyLimit::Limited(limit)) => u32::try_from(limit).unwrap_or(u32::MAX),
        Ok(SupplyLimit::Unlimited) => u32::MAX,
        Err(err) => {
            log::warn!("Disabling quantity increment: {}", err);
            0
        }
    }
}

/// Price of a single token in base units. A missing condition is free.
pub fn unit_price(condition: Option<&ClaimCondition>) -> Result<u128, UnitsError> {
    match condition {
        Some(c) => {
            let display = if c.currency_metadata.display_value.is_empty() {
                "0"
            } else {
                c.currency_metadata.display_value.as_str()
            };
            parse_units(display, c.currency_metadata.decimals)
        }
        None => parse_units("0", DEFAULT_DECIMALS),
    }
}

/// Total owed for `quantity` tokens, in base units.
pub fn total_price(condition: Option<&ClaimCondition>, quantity: u32) -> Result<u128, UnitsError> {
    unit_price(condition)?
        .checked_mul(u128::from(quantity))
        .ok_or(UnitsError::Overflow)
}

/// Whether the phase's raw price is zero.
pub fn is_free(condition: &ClaimCondition) -> bool {
    condition.price.trim().parse::<u128>().map(|p| p == 0).unwrap_or(false)
}

/// Claim button caption: `Mint`, `Mint 3`, `Mint 3 (1.5 ETH)`, `Mint (Free)`.
pub fn mint_label(condition: Option<&ClaimCondition>, quantity: u32) -> String {
    let mut label = String::from("Mint");
    if quantity > 1 {
        label.push_str(&format!(" {}", quantity));
    }

    let Some(condition) = condition else {
        return label;
    };

    if is_free(condition) {
        label.push_str(" (Free)");
    } else if !condition.currency_metadata.display_value.is_empty() {
        match total_price(Some(condition), quantity) {
            Ok(total) => label.push_str(&format!(
                " ({} {})",
                format_units(total, condition.currency_metadata.decimals),
                condition.currency_metadata.symbol
            )),
            Err(err) => log::warn!("Omitting price from mint label: {}", err),
        }
    }

    label
}

/// Claimed count against the fixed display supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyProgress {
    pub claimed: u64,
}

impl SupplyProgress {
    /// Shown only once both counters have been read.
    pub fn from_counts(claimed: Option<u64>, unclaimed: Option<u64>) -> Option<Self> {
        match (claimed, unclaimed) {
            (Some(claimed), Some(_)) => Some(Self { claimed }),
            _ => None,
        }
    }

    pub fn percent(&self) -> f64 {
        (100.0 * self.claimed as f64 / DISPLAY_SUPPLY as f64).min(100.0)
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.claimed, DISPLAY_SUPPLY)
    }
}

#[cfg(test)]
mod tests {
    use shared::dto::CurrencyMetadata;

    use super::*;

    fn condition(available: &str, limit: &str, display: &str, price: &str) -> ClaimCondition {
        ClaimCondition {
            available_supply: available.to_string(),
            quantity_limit_per_transaction: limit.to_string(),
            price: price.to_string(),
            currency_metadata: CurrencyMetadata {
                display_value: display.to_string(),
                decimals: 18,
                symbol: "ETH".to_string(),
                value: price.to_string(),
            },
        }
    }

    fn half_ether() -> ClaimCondition {
        condition("100", "5", "0.5", "500000000000000000")
    }

    #[test]
    fn test_supply_limit_parsing() {
        assert_eq!("12".parse::<SupplyLimit>(), Ok(SupplyLimit::Limited(12)));
        assert_eq!("unlimited".parse::<SupplyLimit>(), Ok(SupplyLimit::Unlimited));
        assert_eq!("Unlimited".parse::<SupplyLimit>(), Ok(SupplyLimit::Unlimited));
        assert!("12abc".parse::<SupplyLimit>().is_err());
        assert!("".parse::<SupplyLimit>().is_err());
    }

    #[test]
    fn test_sold_out_when_unclaimed_is_zero() {
        let readiness = Readiness::evaluate(Some(0), Some(&half_ether()));
        assert!(readiness.is_sold_out);

        assert!(!Readiness::evaluate(Some(3), None).is_sold_out);
        assert!(!Readiness::evaluate(None, None).is_sold_out);
    }

    #[test]
    fn test_not_ready_when_phase_supply_is_zero() {
        let phase = condition("0", "5", "0.5", "500000000000000000");
        let readiness = Readiness::evaluate(Some(250), Some(&phase));
        assert!(readiness.is_not_ready);
        assert!(!readiness.is_sold_out);
    }

    #[test]
    fn test_unlimited_or_malformed_phase_supply_is_ready() {
        let unlimited = condition("unlimited", "5", "0", "0");
        assert!(!Readiness::evaluate(Some(1), Some(&unlimited)).is_not_ready);

        let malformed = condition("n/a", "5", "0", "0");
        assert!(!Readiness::evaluate(Some(1), Some(&malformed)).is_not_ready);

        assert!(!Readiness::evaluate(Some(1), None).is_not_ready);
    }

    #[test]
    fn test_quantity_limit() {
        assert_eq!(quantity_limit(None), 0);
        assert_eq!(quantity_limit(Some(&half_ether())), 5);
        assert_eq!(quantity_limit(Some(&condition("1", "unlimited", "0", "0"))), u32::MAX);
        assert_eq!(quantity_limit(Some(&condition("1", "lots", "0", "0"))), 0);
        assert_eq!(quantity_limit(Some(&condition("1", "99999999999", "0", "0"))), u32::MAX);
    }

    #[test]
    fn test_total_price_is_fixed_point() {
        let total = total_price(Some(&half_ether()), 3).unwrap();
        assert_eq!(total, 1_500_000_000_000_000_000);
        assert_eq!(format_units(total, 18), "1.5");
    }

    #[test]
    fn test_missing_condition_is_free() {
        assert_eq!(unit_price(None), Ok(0));
        assert_eq!(total_price(None, 7), Ok(0));
    }

    #[test]
    fn test_empty_display_value_is_zero() {
        let phase = condition("10", "1", "", "0");
        assert_eq!(unit_price(Some(&phase)), Ok(0));
    }

    #[test]
    fn test_mint_label() {
        assert_eq!(mint_label(None, 1), "Mint");
        assert_eq!(mint_label(None, 2), "Mint 2");
        assert_eq!(mint_label(Some(&half_ether()), 1), "Mint (0.5 ETH)");
        assert_eq!(mint_label(Some(&half_ether()), 3), "Mint 3 (1.5 ETH)");
        assert_eq!(mint_label(Some(&condition("10", "2", "1", "1000000000000000000")), 2), "Mint 2 (2.0 ETH)");
        assert_eq!(mint_label(Some(&condition("10", "2", "0.0", "0")), 2), "Mint 2 (Free)");
    }

    #[test]
    fn test_mint_label_with_unparsable_price() {
        let phase = condition("10", "2", "a lot", "12");
        assert_eq!(mint_label(Some(&phase), 1), "Mint");
    }

    #[test]
    fn test_supply_progress() {
        assert_eq!(SupplyProgress::from_counts(Some(10), None), None);
        assert_eq!(SupplyProgress::from_counts(None, Some(10)), None);

        let progress = SupplyProgress::from_counts(Some(250), Some(0)).unwrap();
        assert_eq!(progress.label(), "250/1000");
        assert!((progress.percent() - 25.0).abs() < f64::EPSILON);

        let over = SupplyProgress::from_counts(Some(1500), Some(0)).unwrap();
        assert!((over.percent() - 100.0).abs() < f64::EPSILON);
    }
}
