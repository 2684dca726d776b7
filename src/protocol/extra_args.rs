//! Tagged extraArgs codecs for destination execution hints
//!
//! Every CCIP message carries an opaque `extraArgs` payload whose first four
//! bytes are a big-endian tag selecting the decoding format. Two formats
//! exist: the EVM-style `EVMExtraArgsV2` (ABI-tuple body) and the
//! account-model `SVMExtraArgsV1` (little-endian fixed layout with a
//! length-prefixed account list).
//!
//! The tags are the first four bytes of `keccak256` over the format's literal
//! name; they are fixed constants here, never re-derived per call.

use alloy_primitives::{hex, Bytes, FixedBytes};
use alloy_sol_types::{sol, SolValue};
use tracing::warn;

use crate::error::{CcipError, Result};

/// Tag prefix of the EVM-style args: `bytes4(keccak256("CCIP EVMExtraArgsV2"))`
pub const EVM_EXTRA_ARGS_V2_TAG: [u8; 4] = [0x18, 0x1d, 0xcf, 0x10];

/// Tag prefix of the account-model args: `bytes4(keccak256("CCIP SVMExtraArgsV1"))`
pub const SVM_EXTRA_ARGS_V1_TAG: [u8; 4] = [0x1f, 0x3b, 0x3a, 0xba];

sol! {
    struct EVMExtraArgsV2 {
        uint128 gasLimit;
        bool allowOutOfOrderExecution;
    }
}

/// EVM-destination execution hints
///
/// Encoded as the 4-byte tag followed by the ABI tuple
/// `(uint128 gasLimit, bool allowOutOfOrderExecution)`, 68 bytes total.
///
/// The default leaves `gas_limit` at zero (token-only transfer, no execution
/// on the destination) and allows out-of-order execution, which most
/// destination lanes require for parallel relaying.
///
/// # Example
///
/// ```rust
/// use ccip_rs::EvmExtraArgsV2;
///
/// let args = EvmExtraArgsV2 {
///     gas_limit: 100_000,
///     ..Default::default()
/// };
/// let encoded = args.encode();
/// assert_eq!(encoded.len(), EvmExtraArgsV2::ENCODED_LEN);
/// assert_eq!(EvmExtraArgsV2::decode(&encoded).unwrap(), args);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvmExtraArgsV2 {
    /// Gas made available to the receiver on the destination chain
    pub gas_limit: u128,
    /// Whether the message may be executed out of source order
    pub allow_out_of_order_execution: bool,
}

impl Default for EvmExtraArgsV2 {
    fn default() -> Self {
        Self {
            gas_limit: 0,
            allow_out_of_order_execution: true,
        }
    }
}

impl EvmExtraArgsV2 {
    /// Encoded length: 4-byte tag plus two 32-byte ABI words
    pub const ENCODED_LEN: usize = 68;

    /// Encodes to the tagged wire form
    ///
    /// Disabling out-of-order execution is allowed but advisory-logged:
    /// sequenced execution stalls lanes whose relayers deliver in parallel.
    pub fn encode(&self) -> Bytes {
        if !self.allow_out_of_order_execution {
            warn!(
                gas_limit = self.gas_limit,
                event = "sequenced_execution_requested"
            );
        }

        let body = EVMExtraArgsV2 {
            gasLimit: self.gas_limit,
            allowOutOfOrderExecution: self.allow_out_of_order_execution,
        }
        .abi_encode();

        let mut bytes = Vec::with_capacity(Self::ENCODED_LEN);
        bytes.extend_from_slice(&EVM_EXTRA_ARGS_V2_TAG);
        bytes.extend_from_slice(&body);
        Bytes::from(bytes)
    }

    /// Decodes the tagged wire form
    ///
    /// Fails on a buffer shorter than [`Self::ENCODED_LEN`] or whose leading
    /// four bytes are not [`EVM_EXTRA_ARGS_V2_TAG`].
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < Self::ENCODED_LEN {
            return Err(CcipError::parameter(
                "extraArgs",
                format!(
                    "too short for EVMExtraArgsV2: got {} bytes, need {}; encoding gasLimit \
                     100000 with out-of-order execution allowed yields \
                     0x181dcf1000000000000000000000000000000000000000000000000000000000000186a0\
                     0000000000000000000000000000000000000000000000000000000000000001",
                    data.len(),
                    Self::ENCODED_LEN,
                ),
            ));
        }

        check_tag(&EVM_EXTRA_ARGS_V2_TAG, data)?;

        let body = EVMExtraArgsV2::abi_decode(&data[4..])?;
        Ok(Self {
            gas_limit: body.gasLimit,
            allow_out_of_order_execution: body.allowOutOfOrderExecution,
        })
    }
}

/// Account-model (SVM) destination execution hints
///
/// A Borsh-like little-endian layout behind the big-endian tag:
///
/// ```text
/// [4-byte BE tag][4-byte LE computeUnits][8-byte LE writableBitmap]
/// [1-byte bool][32-byte tokenReceiver][4-byte LE accountCount][count * 32-byte account]
/// ```
///
/// The fixed prefix through the account count is [`Self::MIN_ENCODED_LEN`]
/// bytes; a well-formed buffer is exactly `53 + 32 * accountCount` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SvmExtraArgsV1 {
    /// Compute budget for the destination transaction
    pub compute_units: u32,
    /// Bitmap marking which of `accounts` must be writable
    pub account_is_writable_bitmap: u64,
    /// Whether the message may be executed out of source order
    pub allow_out_of_order_execution: bool,
    /// Destination account receiving the tokens
    pub token_receiver: FixedBytes<32>,
    /// Additional accounts loaded for the destination transaction
    pub accounts: Vec<FixedBytes<32>>,
}

impl SvmExtraArgsV1 {
    /// Length of the tag plus all fixed fields, including the account count
    pub const MIN_ENCODED_LEN: usize = 53;

    /// Encodes to the tagged wire form
    pub fn encode(&self) -> Bytes {
        let mut bytes = Vec::with_capacity(Self::MIN_ENCODED_LEN + 32 * self.accounts.len());
        bytes.extend_from_slice(&SVM_EXTRA_ARGS_V1_TAG);
        bytes.extend_from_slice(&self.compute_units.to_le_bytes());
        bytes.extend_from_slice(&self.account_is_writable_bitmap.to_le_bytes());
        bytes.push(u8::from(self.allow_out_of_order_execution));
        bytes.extend_from_slice(self.token_receiver.as_slice());
        bytes.extend_from_slice(&(self.accounts.len() as u32).to_le_bytes());
        for account in &self.accounts {
            bytes.extend_from_slice(account.as_slice());
        }
        Bytes::from(bytes)
    }

    /// Decodes the tagged wire form
    ///
    /// The account count is read only after the 53-byte fixed prefix is
    /// known to be present, and the buffer must then hold exactly
    /// `53 + 32 * count` bytes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < Self::MIN_ENCODED_LEN {
            return Err(CcipError::parameter(
                "extraArgs",
                format!(
                    "too short for SVMExtraArgsV1: got {} bytes, need at least {}; an empty \
                     account list for the zero token receiver encodes as 0x1f3b3aba followed \
                     by 49 zero bytes: \
                     0x1f3b3aba{}",
                    data.len(),
                    Self::MIN_ENCODED_LEN,
                    "00".repeat(49),
                ),
            ));
        }

        check_tag(&SVM_EXTRA_ARGS_V1_TAG, data)?;

        let compute_units = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let account_is_writable_bitmap = u64::from_le_bytes([
            data[8], data[9], data[10], data[11], data[12], data[13], data[14], data[15],
        ]);
        let allow_out_of_order_execution = data[16] != 0;
        let token_receiver = FixedBytes::from_slice(&data[17..49]);
        let count = u32::from_le_bytes([data[49], data[50], data[51], data[52]]) as usize;

        let expected = Self::MIN_ENCODED_LEN + 32 * count;
        if data.len() != expected {
            return Err(CcipError::parameter(
                "extraArgs",
                format!(
                    "SVMExtraArgsV1 account list mismatch: header declares {count} accounts, \
                     which requires exactly {expected} bytes, got {}",
                    data.len(),
                ),
            ));
        }

        let accounts = data[Self::MIN_ENCODED_LEN..]
            .chunks_exact(32)
            .map(FixedBytes::from_slice)
            .collect();

        Ok(Self {
            compute_units,
            account_is_writable_bitmap,
            allow_out_of_order_execution,
            token_receiver,
            accounts,
        })
    }
}

fn check_tag(expected: &[u8; 4], data: &[u8]) -> Result<()> {
    if &data[..4] != expected {
        return Err(CcipError::parameter(
            "extraArgs",
            format!(
                "tag mismatch: expected 0x{}, got 0x{}",
                hex::encode(expected),
                hex::encode(&data[..4]),
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::keccak256;
    use rstest::rstest;

    #[test]
    fn test_tags_match_format_name_hashes() {
        assert_eq!(
            EVM_EXTRA_ARGS_V2_TAG,
            keccak256(b"CCIP EVMExtraArgsV2")[..4]
        );
        assert_eq!(
            SVM_EXTRA_ARGS_V1_TAG,
            keccak256(b"CCIP SVMExtraArgsV1")[..4]
        );
    }

    #[test]
    fn test_evm_encode_known_vector() {
        let encoded = EvmExtraArgsV2 {
            gas_limit: 100_000,
            ..Default::default()
        }
        .encode();

        insta::assert_snapshot!(hex::encode(&encoded), @"181dcf1000000000000000000000000000000000000000000000000000000000000186a00000000000000000000000000000000000000000000000000000000000000001");
    }

    #[test]
    fn test_evm_encode_sequenced_execution_flips_trailing_word() {
        let encoded = EvmExtraArgsV2 {
            gas_limit: 100_000,
            allow_out_of_order_execution: false,
        }
        .encode();

        insta::assert_snapshot!(hex::encode(&encoded), @"181dcf1000000000000000000000000000000000000000000000000000000000000186a00000000000000000000000000000000000000000000000000000000000000000");
    }

    #[rstest]
    #[case(EvmExtraArgsV2::default())]
    #[case(EvmExtraArgsV2 { gas_limit: 1, allow_out_of_order_execution: true })]
    #[case(EvmExtraArgsV2 { gas_limit: u128::MAX, allow_out_of_order_execution: false })]
    fn test_evm_round_trip(#[case] args: EvmExtraArgsV2) {
        assert_eq!(EvmExtraArgsV2::decode(&args.encode()).unwrap(), args);
    }

    #[test]
    fn test_evm_decode_too_short() {
        let err = EvmExtraArgsV2::decode(&[0x18, 0x1d]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("got 2 bytes, need 68"), "{message}");
        assert!(message.contains("0x181dcf10"), "{message}");
    }

    #[test]
    fn test_evm_decode_wrong_tag() {
        let mut encoded = EvmExtraArgsV2::default().encode().to_vec();
        encoded[..4].copy_from_slice(&SVM_EXTRA_ARGS_V1_TAG);

        let err = EvmExtraArgsV2::decode(&encoded).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expected 0x181dcf10"), "{message}");
        assert!(message.contains("got 0x1f3b3aba"), "{message}");
    }

    #[rstest]
    #[case(SvmExtraArgsV1::default())]
    #[case(SvmExtraArgsV1 {
        compute_units: 400_000,
        account_is_writable_bitmap: 0b101,
        allow_out_of_order_execution: true,
        token_receiver: FixedBytes::from([7u8; 32]),
        accounts: vec![FixedBytes::from([1u8; 32]), FixedBytes::from([2u8; 32])],
    })]
    fn test_svm_round_trip(#[case] args: SvmExtraArgsV1) {
        assert_eq!(SvmExtraArgsV1::decode(&args.encode()).unwrap(), args);
    }

    #[test]
    fn test_svm_layout_is_little_endian() {
        let encoded = SvmExtraArgsV1 {
            compute_units: 0x0102_0304,
            account_is_writable_bitmap: 0x1122_3344_5566_7788,
            allow_out_of_order_execution: true,
            token_receiver: FixedBytes::ZERO,
            accounts: Vec::new(),
        }
        .encode();

        assert_eq!(encoded.len(), SvmExtraArgsV1::MIN_ENCODED_LEN);
        assert_eq!(&encoded[..4], &SVM_EXTRA_ARGS_V1_TAG);
        assert_eq!(&encoded[4..8], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(
            &encoded[8..16],
            &[0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]
        );
        assert_eq!(encoded[16], 1);
    }

    #[test]
    fn test_svm_decode_too_short() {
        let err = SvmExtraArgsV1::decode(&SVM_EXTRA_ARGS_V1_TAG).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("need at least 53"), "{message}");
        assert!(message.contains("0x1f3b3aba"), "{message}");
    }

    #[test]
    fn test_svm_decode_wrong_tag() {
        let encoded = SvmExtraArgsV1::default().encode();
        let mut tampered = encoded.to_vec();
        tampered[..4].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

        let err = SvmExtraArgsV1::decode(&tampered).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expected 0x1f3b3aba"), "{message}");
        assert!(message.contains("got 0xdeadbeef"), "{message}");
    }

    #[test]
    fn test_svm_decode_truncated_account_list() {
        let args = SvmExtraArgsV1 {
            accounts: vec![FixedBytes::from([3u8; 32]); 2],
            ..Default::default()
        };
        let encoded = args.encode();

        // Drop the last account but leave the declared count at 2.
        let err = SvmExtraArgsV1::decode(&encoded[..encoded.len() - 32]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("declares 2 accounts"), "{message}");
        assert!(message.contains("exactly 117 bytes"), "{message}");
    }
}
