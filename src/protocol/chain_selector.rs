//! CCIP chain selector type
//!
//! CCIP identifies every supported network by a 64-bit chain selector that is
//! unrelated to the EVM chain id. Selectors are opaque: they are compared for
//! equality and transported as decimal strings, never used arithmetically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CcipError;

/// Opaque 64-bit identifier of a CCIP-connected chain
///
/// # Example
///
/// ```rust
/// use ccip_rs::ChainSelector;
///
/// let selector = ChainSelector::new(16015286601757825753);
/// assert_eq!(selector.as_u64(), 16015286601757825753);
/// assert_eq!(selector.to_string(), "16015286601757825753");
///
/// let parsed: ChainSelector = "16015286601757825753".parse().unwrap();
/// assert_eq!(parsed, selector);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainSelector(u64);

impl ChainSelector {
    /// Creates a selector from its raw 64-bit value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw 64-bit value
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns true for the zero selector, which never names a real chain
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for ChainSelector {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ChainSelector> for u64 {
    fn from(selector: ChainSelector) -> Self {
        selector.0
    }
}

impl FromStr for ChainSelector {
    type Err = CcipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self).map_err(|e| {
            CcipError::parameter(
                "chainSelector",
                format!("{s:?} is not a decimal 64-bit chain selector: {e}"),
            )
        })
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_decimal_string() {
        let selector = ChainSelector::new(5009297550715157269);
        let parsed: ChainSelector = selector.to_string().parse().unwrap();
        assert_eq!(parsed, selector);
    }

    #[test]
    fn test_rejects_non_decimal_input() {
        let result = "0xdeadbeef".parse::<ChainSelector>();
        assert!(matches!(
            result.unwrap_err(),
            CcipError::Parameter { role, .. } if role == "chainSelector"
        ));
    }

    #[test]
    fn test_zero_is_flagged() {
        assert!(ChainSelector::new(0).is_zero());
        assert!(!ChainSelector::new(1).is_zero());
    }
}
