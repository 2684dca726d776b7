//! Address and message-id validation
//!
//! Every address-typed argument passes through [`validate_address`] before it
//! is placed in an outbound call, so malformed input and the zero sentinel are
//! rejected with a parameter error naming the offending role, before any
//! network traffic happens.

use alloy_primitives::{Address, FixedBytes};

use crate::error::{CcipError, Result};

/// Validates and canonicalizes an address string for the given role
///
/// Accepts checksummed or lower-case hex with a `0x` prefix. The all-zero
/// address is rejected: as a real endpoint it is always a misconfiguration,
/// and the native-fee sentinel is selected by *omitting* the fee token, never
/// by passing zero explicitly.
///
/// # Example
///
/// ```rust
/// use ccip_rs::validate_address;
///
/// let router = validate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d", "router").unwrap();
/// assert!(!router.is_zero());
///
/// assert!(validate_address("not-an-address", "router").is_err());
/// assert!(validate_address("0x0000000000000000000000000000000000000000", "router").is_err());
/// ```
pub fn validate_address(raw: &str, role: &str) -> Result<Address> {
    let address = raw.parse::<Address>().map_err(|e| {
        CcipError::parameter(role, format!("{raw:?} is not a valid address: {e}"))
    })?;

    if address.is_zero() {
        return Err(CcipError::parameter(
            role,
            format!("{raw:?} is the zero address"),
        ));
    }

    Ok(address)
}

/// Validates a message identifier string as a 32-byte hex value
pub fn validate_message_id(raw: &str) -> Result<FixedBytes<32>> {
    raw.parse::<FixedBytes<32>>().map_err(|e| {
        CcipError::parameter(
            "messageId",
            format!("{raw:?} is not a 32-byte hex message identifier: {e}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_checksummed_and_lowercase() {
        let checksummed = validate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d", "router");
        let lowercase = validate_address("0x742d35cc6634c0532925a3b844bc9e7595f8fa0d", "router");
        assert_eq!(checksummed.unwrap(), lowercase.unwrap());
    }

    #[test]
    fn test_rejects_zero_address_with_role() {
        let err = validate_address(
            "0x0000000000000000000000000000000000000000",
            "tokenAddress",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "tokenAddress"
        ));
        assert!(err.to_string().contains("zero address"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for raw in ["", "0x1234", "742d35Cc6634C0532925a3b844Bc9e7595f8fA0d!"] {
            assert!(validate_address(raw, "receiver").is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_message_id_must_be_32_bytes() {
        let ok = validate_message_id(
            "0x5cbd1b56e3c65f8b6bbfe6b1df9e0de4e5d8a7a0f1e1a2b3c4d5e6f708192a3b",
        );
        assert!(ok.is_ok());

        let err = validate_message_id("0x1234").unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "messageId"
        ));
    }
}
