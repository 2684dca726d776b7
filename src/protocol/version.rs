//! Relay protocol generations
//!
//! Two incompatible onRamp generations coexist on live lanes. A contract
//! self-reports through `typeAndVersion()`; the legacy generation is selected
//! by exact string match against [`LEGACY_ON_RAMP_VERSION`], everything else
//! is treated as current. The generation decides which send event a receipt
//! carries, where the message id sits inside it, and what the dynamic config
//! calls its fee-quoting contract.
//!
//! Downstream code resolves the generation once per logical operation and
//! threads the answer through, so a relay upgrade between two calls cannot
//! split one operation across schemas.

use std::fmt;

/// `typeAndVersion()` string of the legacy onRamp generation
pub const LEGACY_ON_RAMP_VERSION: &str = "EVM2EVMOnRamp 1.5.0";

/// The two live onRamp generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RampGeneration {
    /// Lanes still served by `EVM2EVMOnRamp 1.5.0`
    Legacy,
    /// Everything newer
    Current,
}

impl RampGeneration {
    /// Selects the generation from a relay's self-reported version string
    ///
    /// Exact equality, not semantic-version comparison: the legacy sentinel
    /// is a single fixed deployment string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ccip_rs::{RampGeneration, LEGACY_ON_RAMP_VERSION};
    ///
    /// assert_eq!(
    ///     RampGeneration::from_type_and_version(LEGACY_ON_RAMP_VERSION),
    ///     RampGeneration::Legacy
    /// );
    /// assert_eq!(
    ///     RampGeneration::from_type_and_version("OnRamp 1.6.0"),
    ///     RampGeneration::Current
    /// );
    /// ```
    pub fn from_type_and_version(type_and_version: &str) -> Self {
        if type_and_version == LEGACY_ON_RAMP_VERSION {
            Self::Legacy
        } else {
            Self::Current
        }
    }

    /// Name of the send-confirmation event this generation emits
    pub const fn send_event_name(self) -> &'static str {
        match self {
            Self::Legacy => "CCIPSendRequested",
            Self::Current => "CCIPMessageSent",
        }
    }

    /// Dotted path of the message identifier inside the send event
    pub const fn message_id_path(self) -> &'static str {
        match self {
            Self::Legacy => "message.messageId",
            Self::Current => "message.header.messageId",
        }
    }

    /// Dynamic-config field naming the fee-quoting contract
    pub const fn fee_config_field(self) -> &'static str {
        match self {
            Self::Legacy => "priceRegistry",
            Self::Current => "feeQuoter",
        }
    }
}

impl fmt::Display for RampGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Current => write!(f, "current"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_legacy_requires_exact_match() {
        assert_eq!(
            RampGeneration::from_type_and_version("EVM2EVMOnRamp 1.5.0"),
            RampGeneration::Legacy
        );
        // Near-misses are NOT legacy; selection is equality, not parsing.
        for near_miss in [
            "EVM2EVMOnRamp 1.5.1",
            "EVM2EVMOnRamp 1.5.0 ",
            "evm2evmonramp 1.5.0",
            "",
        ] {
            assert_eq!(
                RampGeneration::from_type_and_version(near_miss),
                RampGeneration::Current,
                "{near_miss:?} must not select the legacy schema"
            );
        }
    }

    #[rstest]
    #[case(RampGeneration::Legacy, "CCIPSendRequested", "message.messageId", "priceRegistry")]
    #[case(
        RampGeneration::Current,
        "CCIPMessageSent",
        "message.header.messageId",
        "feeQuoter"
    )]
    fn test_generation_schema(
        #[case] generation: RampGeneration,
        #[case] event: &str,
        #[case] id_path: &str,
        #[case] fee_field: &str,
    ) {
        assert_eq!(generation.send_event_name(), event);
        assert_eq!(generation.message_id_path(), id_path);
        assert_eq!(generation.fee_config_field(), fee_field);
    }
}
