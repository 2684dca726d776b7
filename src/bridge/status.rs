//! Destination-side delivery status scan
//!
//! Discovery and scan logic behind
//! [`Ccip::get_transfer_status`](crate::Ccip::get_transfer_status): find the
//! offRamps registered for the source lane, then walk their completion-event
//! logs over a bounded block window looking for the message identifier. The endpoint set is small
//! (typically one, a couple more right after a relay upgrade) so the scan is
//! a plain ordered loop; each query is independent and read-only.

use alloy_network::Ethereum;
use alloy_primitives::{Address, FixedBytes};
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use tracing::{debug, info, Instrument};

use crate::bridge::config::STATUS_SCAN_LOOKBACK_BLOCKS;
use crate::contracts::offramp::{execution_state_changed_topics, EVM2EVMOffRamp, OffRamp};
use crate::contracts::router::Router;
use crate::contracts::RouterContract;
use crate::error::{CcipError, Result};
use crate::protocol::{ChainSelector, TransferStatus};
use crate::spans;

/// Scans the lane's offRamps for a completion event matching `message_id`
///
/// Returns the state of the first match across endpoints, `None` when the
/// lane exists but no event has been observed yet, and an error when no
/// offRamp serves the source selector at all.
pub(crate) async fn scan_for_status<P: Provider<Ethereum> + Clone>(
    provider: &P,
    router: Address,
    source: ChainSelector,
    message_id: FixedBytes<32>,
    from_block: Option<u64>,
) -> Result<Option<TransferStatus>> {
    let router_contract = RouterContract::new(router, provider.clone());

    let candidates: Vec<Router::OffRamp> = router_contract
        .get_off_ramps()
        .await?
        .into_iter()
        .filter(|entry| entry.sourceChainSelector == source.as_u64())
        .collect();

    if candidates.is_empty() {
        // Distinct from "not yet delivered": this lane was never configured.
        return Err(CcipError::ContractCall(format!(
            "no offRamp registered on router {router} for source chain selector {source}"
        )));
    }

    let from_block = match from_block {
        Some(block) => block,
        None => provider
            .get_block_number()
            .await?
            .saturating_sub(STATUS_SCAN_LOOKBACK_BLOCKS),
    };

    debug!(
        candidates = candidates.len(),
        from_block = from_block,
        event = "status_scan_started"
    );

    for candidate in candidates {
        let span = spans::scan_off_ramp(&candidate.offRamp, from_block);
        let logs = async {
            let filter = Filter::new()
                .address(candidate.offRamp)
                .event_signature(execution_state_changed_topics().to_vec())
                .from_block(from_block);
            provider.get_logs(&filter).await
        }
        .instrument(span)
        .await?;

        for log in &logs {
            let Some((found_id, state)) = decode_completion_event(log) else {
                continue;
            };
            if found_id != message_id {
                continue;
            }

            let status = TransferStatus::from_u8(state).ok_or_else(|| {
                CcipError::EventLog(format!(
                    "offRamp {} reported unknown execution state {state} for message {message_id}",
                    candidate.offRamp
                ))
            })?;

            info!(
                off_ramp = %candidate.offRamp,
                status = %status,
                event = "completion_event_found"
            );
            return Ok(Some(status));
        }
    }

    debug!(event = "no_completion_event_observed");
    Ok(None)
}

/// Decodes either generation's `ExecutionStateChanged`, keyed by topic0
fn decode_completion_event(log: &Log) -> Option<(FixedBytes<32>, u8)> {
    let topic0 = log.topics().first()?;

    if *topic0 == EVM2EVMOffRamp::ExecutionStateChanged::SIGNATURE_HASH {
        let decoded = log.log_decode::<EVM2EVMOffRamp::ExecutionStateChanged>().ok()?;
        Some((decoded.inner.data.messageId, decoded.inner.data.state))
    } else if *topic0 == OffRamp::ExecutionStateChanged::SIGNATURE_HASH {
        let decoded = log.log_decode::<OffRamp::ExecutionStateChanged>().ok()?;
        Some((decoded.inner.data.messageId, decoded.inner.data.state))
    } else {
        None
    }
}
