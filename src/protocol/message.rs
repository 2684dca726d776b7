//! Canonical cross-chain message construction
//!
//! [`MessageRequest`] gathers the caller-facing options for one message and
//! renders the wire struct the router's `ccipSend`/`getFee` entrypoints take.
//! The receiver is ABI-encoded as a single address parameter so the field is
//! self-describing on any destination, and the extraArgs payload is always
//! appended in the EVM tagged format.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use bon::Builder;

use crate::contracts::router::Router;
use crate::protocol::extra_args::EvmExtraArgsV2;

/// Options for one outbound CCIP message
///
/// # Example
///
/// ```rust
/// use ccip_rs::MessageRequest;
/// use alloy_primitives::{address, U256};
///
/// let request = MessageRequest::builder()
///     .receiver(address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d"))
///     .token(address!("779877A7B0D9E8603169DdbD7836e478b4624789"))
///     .amount(U256::from(1_000_000u64))
///     .build();
///
/// let message = request.to_message();
/// assert_eq!(message.tokenAmounts.len(), 1);
/// assert_eq!(message.receiver.len(), 32); // ABI-encoded address
/// ```
#[derive(Builder, Clone, Debug)]
pub struct MessageRequest {
    /// Destination account the message is addressed to
    pub receiver: Address,

    /// Arbitrary payload delivered to the receiver
    pub data: Option<Bytes>,

    /// Token to transfer; paired with `amount`
    pub token: Option<Address>,

    /// Amount to transfer; paired with `token`
    pub amount: Option<U256>,

    /// Fee payment token; `None` selects native-currency payment
    pub fee_token: Option<Address>,

    /// Destination execution gas; zero means token-only, no execution
    #[builder(default)]
    pub gas_limit: u128,

    /// Out-of-order execution flag; sequenced execution is opt-in
    #[builder(default = true)]
    pub allow_out_of_order_execution: bool,
}

impl MessageRequest {
    /// Renders the wire message for fee quoting and submission
    ///
    /// `tokenAmounts` holds exactly one entry when both `token` and `amount`
    /// are present, otherwise none. The zero fee-token address is the native
    /// sentinel understood by the router.
    pub fn to_message(&self) -> Router::EVM2AnyMessage {
        let token_amounts = match (self.token, self.amount) {
            (Some(token), Some(amount)) => vec![Router::EVMTokenAmount { token, amount }],
            _ => Vec::new(),
        };

        Router::EVM2AnyMessage {
            receiver: self.receiver.abi_encode().into(),
            data: self.data.clone().unwrap_or_default(),
            tokenAmounts: token_amounts,
            feeToken: self.fee_token.unwrap_or(Address::ZERO),
            extraArgs: EvmExtraArgsV2 {
                gas_limit: self.gas_limit,
                allow_out_of_order_execution: self.allow_out_of_order_execution,
            }
            .encode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn receiver() -> Address {
        address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d")
    }

    #[test]
    fn test_receiver_is_abi_encoded_address_word() {
        let message = MessageRequest::builder().receiver(receiver()).build().to_message();

        assert_eq!(message.receiver.len(), 32);
        assert_eq!(&message.receiver[12..], receiver().as_slice());
        assert!(message.receiver[..12].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_token_amounts_requires_both_fields() {
        let token = address!("779877A7B0D9E8603169DdbD7836e478b4624789");

        let with_both = MessageRequest::builder()
            .receiver(receiver())
            .token(token)
            .amount(U256::from(42u64))
            .build()
            .to_message();
        assert_eq!(with_both.tokenAmounts.len(), 1);
        assert_eq!(with_both.tokenAmounts[0].token, token);
        assert_eq!(with_both.tokenAmounts[0].amount, U256::from(42u64));

        let token_only = MessageRequest::builder()
            .receiver(receiver())
            .token(token)
            .build()
            .to_message();
        assert!(token_only.tokenAmounts.is_empty());
    }

    #[test]
    fn test_native_fee_sentinel_when_fee_token_unset() {
        let message = MessageRequest::builder().receiver(receiver()).build().to_message();
        assert_eq!(message.feeToken, Address::ZERO);

        let fee_token = address!("779877A7B0D9E8603169DdbD7836e478b4624789");
        let explicit = MessageRequest::builder()
            .receiver(receiver())
            .fee_token(fee_token)
            .build()
            .to_message();
        assert_eq!(explicit.feeToken, fee_token);
    }

    #[test]
    fn test_extra_args_always_appended_with_defaults() {
        let message = MessageRequest::builder().receiver(receiver()).build().to_message();

        let args = EvmExtraArgsV2::decode(&message.extraArgs).unwrap();
        assert_eq!(args.gas_limit, 0);
        assert!(args.allow_out_of_order_execution);

        let custom = MessageRequest::builder()
            .receiver(receiver())
            .gas_limit(250_000)
            .allow_out_of_order_execution(false)
            .build()
            .to_message();
        let args = EvmExtraArgsV2::decode(&custom.extraArgs).unwrap();
        assert_eq!(args.gas_limit, 250_000);
        assert!(!args.allow_out_of_order_execution);
    }
}
