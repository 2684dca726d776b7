//! OpenTelemetry span helpers for CCIP operations
//!
//! This module provides orthogonal span instrumentation following production
//! best practices: static span names, structured attributes, and separation
//! from business logic.
//!
//! # Usage
//!
//! These span helpers are used internally by the [`Ccip`](crate::Ccip)
//! implementation but are exposed publicly for advanced users who need custom
//! instrumentation or want to integrate with existing OpenTelemetry setups.
//!
//! # Example
//!
//! ```rust,no_run
//! use ccip_rs::{spans, ChainSelector};
//! use alloy_primitives::FixedBytes;
//!
//! let message_id = FixedBytes::from([0u8; 32]);
//! let span = spans::get_transfer_status(&message_id, ChainSelector::new(1));
//! let _guard = span.enter();
//! // Your custom status logic here
//! ```

use alloy_primitives::{hex, Address, FixedBytes, TxHash, U256};
use tracing::Span;

use crate::protocol::ChainSelector;

/// Create span for the end-to-end token transfer flow.
///
/// Parent: Top-level operation span (auto-attached by tracing)
/// Children: fee quoting, submission, receipt wait, id extraction
#[inline]
pub fn transfer(
    router: &Address,
    source: ChainSelector,
    destination: ChainSelector,
    amount: &U256,
) -> Span {
    tracing::info_span!(
        "ccip_rs.transfer",
        router = %router,
        source_selector = %source,
        destination_selector = %destination,
        amount = %amount,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the end-to-end message send flow.
#[inline]
pub fn send_message(
    router: &Address,
    source: ChainSelector,
    destination: ChainSelector,
    data_length: usize,
) -> Span {
    tracing::info_span!(
        "ccip_rs.send_message",
        router = %router,
        source_selector = %source,
        destination_selector = %destination,
        data_length_bytes = data_length,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a router fee quote.
///
/// Parent: transfer or send_message span
/// Children: Provider RPC calls (from alloy instrumentation)
#[inline]
pub fn get_fee(router: &Address, destination: ChainSelector) -> Span {
    tracing::debug_span!(
        "ccip_rs.get_fee",
        router = %router,
        destination_selector = %destination,
    )
}

/// Create span for waiting for transaction confirmation.
///
/// Parent: transfer or send_message span
/// Children: Provider RPC calls (polling)
#[inline]
pub fn wait_for_confirmation(tx_hash: TxHash, required_confirmations: u64) -> Span {
    tracing::debug_span!(
        "ccip_rs.wait_for_confirmation",
        tx_hash = %tx_hash,
        required_confirmations = required_confirmations,
    )
}

/// Create span for message-id extraction from a confirmed receipt.
///
/// Parent: transfer or send_message span
/// Children: onRamp version resolution RPC calls
#[inline]
pub fn extract_message_id(tx_hash: TxHash, destination: ChainSelector) -> Span {
    tracing::debug_span!(
        "ccip_rs.extract_message_id",
        tx_hash = %tx_hash,
        destination_selector = %destination,
    )
}

/// Create span for the destination-side delivery status scan.
///
/// Parent: Top-level operation span
/// Children: ccip_rs.scan_off_ramp (one per candidate endpoint)
#[inline]
pub fn get_transfer_status(message_id: &FixedBytes<32>, source: ChainSelector) -> Span {
    tracing::info_span!(
        "ccip_rs.get_transfer_status",
        message_id = %hex::encode(message_id),
        source_selector = %source,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for scanning one offRamp's completion-event log.
///
/// Parent: ccip_rs.get_transfer_status
/// Children: Provider RPC calls
#[inline]
pub fn scan_off_ramp(off_ramp: &Address, from_block: u64) -> Span {
    tracing::debug_span!(
        "ccip_rs.scan_off_ramp",
        off_ramp = %off_ramp,
        from_block = from_block,
    )
}

/// Create span for a router approval.
#[inline]
pub fn approve(token: &Address, router: &Address, amount: &U256) -> Span {
    tracing::info_span!(
        "ccip_rs.approve",
        token = %token,
        router = %router,
        amount = %amount,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Record error attributes on the current span.
///
/// Follows OpenTelemetry semantic conventions for error tracking:
/// - error.type: The error type/variant
/// - error.message: Human-readable error message
/// - error.source: Optional upstream cause
///
/// # Example
///
/// ```rust,no_run
/// use ccip_rs::spans;
/// use ccip_rs::CcipError;
///
/// # fn example() -> Result<(), CcipError> {
/// let span = tracing::info_span!("ccip_rs.operation");
/// let _guard = span.enter();
///
/// let result = some_operation();
/// if let Err(ref e) = result {
///     spans::record_error(e);
/// }
/// result
/// # }
/// # fn some_operation() -> Result<(), CcipError> { Ok(()) }
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = tracing::Span::current();
    current_span.record(
        "error.type",
        error.to_string().split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", error.to_string());
    current_span.record("otel.status_code", "ERROR");

    // Record error chain if available
    if let Some(source) = error.source() {
        current_span.record("error.source", source.to_string());
    }
}

/// Record error attributes with custom context on the current span.
///
/// This variant allows adding additional context fields to the error.
pub fn record_error_with_context(
    error_type: &str,
    error_message: &str,
    additional_context: Option<&str>,
) {
    let current_span = tracing::Span::current();
    current_span.record("error.type", error_type);
    current_span.record("error.message", error_message);
    current_span.record("otel.status_code", "ERROR");

    if let Some(context) = additional_context {
        current_span.record("error.context", context);
    }
}
