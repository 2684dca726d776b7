//! Per-call parameter and result types
//!
//! Addresses arrive as raw strings and are validated (role-named errors, zero
//! sentinel rejected) before any network call; see
//! [`validate_address`](crate::validate_address).

use alloy_primitives::{Bytes, FixedBytes, TxHash, U256};
use alloy_rpc_types::TransactionReceipt;
use bon::Builder;

use crate::bridge::config::WaitConfig;

/// Options for a token transfer
#[derive(Builder, Clone, Debug)]
pub struct TransferParams {
    /// Source-chain router address
    pub router: String,
    /// Sender account the provider signs for
    pub from: String,
    /// Token contract on the source chain
    pub token: String,
    /// Amount in the token's atomic units; must be greater than zero
    pub amount: U256,
    /// Receiving account on the destination chain
    pub receiver: String,
    /// Fee payment token; omit to pay in native currency
    pub fee_token: Option<String>,
    /// Optional payload delivered alongside the tokens
    pub data: Option<Bytes>,
    /// Destination execution gas; zero means token-only, no execution
    #[builder(default)]
    pub gas_limit: u128,
    /// Out-of-order execution flag; defaults to allowed
    #[builder(default = true)]
    pub allow_out_of_order_execution: bool,
    /// Receipt-wait overrides
    pub wait: Option<WaitConfig>,
}

/// Options for a pure message send (no token movement)
#[derive(Builder, Clone, Debug)]
pub struct MessageParams {
    /// Source-chain router address
    pub router: String,
    /// Sender account the provider signs for
    pub from: String,
    /// Receiving account on the destination chain
    pub receiver: String,
    /// Payload delivered to the receiver
    pub data: Bytes,
    /// Fee payment token; omit to pay in native currency
    pub fee_token: Option<String>,
    /// Destination execution gas
    #[builder(default)]
    pub gas_limit: u128,
    /// Out-of-order execution flag; defaults to allowed
    #[builder(default = true)]
    pub allow_out_of_order_execution: bool,
    /// Receipt-wait overrides
    pub wait: Option<WaitConfig>,
}

/// Options for a router approval on an ERC20 token
#[derive(Builder, Clone, Debug)]
pub struct ApproveParams {
    /// Router being approved as spender
    pub router: String,
    /// Token contract granting the allowance
    pub token: String,
    /// Owner account the provider signs for
    pub from: String,
    /// Allowance to set; zero is a valid (revoking) approval
    pub amount: U256,
    /// Receipt-wait overrides
    pub wait: Option<WaitConfig>,
}

/// Options for a destination-side delivery status check
#[derive(Builder, Clone, Debug)]
pub struct StatusParams {
    /// Destination-chain router address
    pub destination_router: String,
    /// Message identifier returned by the transfer
    pub message_id: String,
    /// Starting block for the completion-event scan; defaults to the
    /// current block minus the protocol lookback window
    pub from_block: Option<u64>,
}

/// Outcome of a completed submit flow
///
/// Only produced once the message identifier has been extracted from the
/// receipt; a flow that fails earlier returns an error, never a partial
/// result.
#[derive(Clone, Debug)]
pub struct TransferResult {
    /// Hash of the submitted transaction
    pub tx_hash: TxHash,
    /// Protocol-assigned message identifier from the send event
    pub message_id: FixedBytes<32>,
    /// The confirmed receipt the identifier was extracted from
    pub receipt: TransactionReceipt,
}
