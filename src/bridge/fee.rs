//! Fee decimal rescaling for non-standard chains
//!
//! Routers quote fees in the chain's native-unit granularity. A few networks
//! use fewer than 18 decimals for their native unit (Hedera quotes in
//! 8-decimal tinybars), so the raw quote must be multiplied by a per-chain
//! power of ten before it is attached as transaction value. Getting this
//! wrong under- or over-pays silently.
//!
//! The table matches a lower-cased fragment against the source chain's
//! display name. That mirrors the upstream protocol tooling, and it is
//! fragile the same way: a renamed chain silently loses its scaling. The
//! table is injected configuration so a selector-keyed replacement can land
//! without an API break.

use alloy_primitives::U256;
use tracing::debug;

/// One rescaling rule: chains whose display name contains `name_fragment`
/// (case-insensitively) have their quoted fee multiplied by `10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeScalingEntry {
    /// Lower-cased fragment matched against the chain display name
    pub name_fragment: String,
    /// Decimal exponent applied to the raw quote
    pub exponent: u32,
}

/// Per-chain fee rescaling table
///
/// # Example
///
/// ```rust
/// use ccip_rs::FeeScaling;
/// use alloy_primitives::U256;
///
/// let scaling = FeeScaling::default();
/// // Standard-decimals chains pass through unchanged.
/// assert_eq!(scaling.scale(U256::from(7u64), "mainnet"), U256::from(7u64));
/// // Hedera quotes in 8-decimal tinybars; the quote is raised to 18 decimals.
/// assert_eq!(
///     scaling.scale(U256::from(7u64), "hedera-testnet"),
///     U256::from(70_000_000_000u64)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeScaling {
    entries: Vec<FeeScalingEntry>,
}

impl Default for FeeScaling {
    /// The table shipped with the protocol tooling: Hedera, exponent 10.
    fn default() -> Self {
        Self {
            entries: vec![FeeScalingEntry {
                name_fragment: "hedera".to_string(),
                exponent: 10,
            }],
        }
    }
}

impl FeeScaling {
    /// A table with no entries; every quote passes through unchanged
    pub fn none() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a table from explicit entries
    pub fn new(entries: Vec<FeeScalingEntry>) -> Self {
        Self { entries }
    }

    /// Returns the decimal exponent for a chain display name, if any
    pub fn exponent_for(&self, chain_name: &str) -> Option<u32> {
        let chain_name = chain_name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| chain_name.contains(&entry.name_fragment))
            .map(|entry| entry.exponent)
    }

    /// Rescales a raw router quote for the given source chain
    pub fn scale(&self, raw_fee: U256, chain_name: &str) -> U256 {
        match self.exponent_for(chain_name) {
            Some(exponent) => {
                let scaled = raw_fee * U256::from(10u64).pow(U256::from(exponent));
                debug!(
                    chain_name = chain_name,
                    raw_fee = %raw_fee,
                    exponent = exponent,
                    scaled_fee = %scaled,
                    event = "fee_rescaled"
                );
                scaled
            }
            None => raw_fee,
        }
    }
}
