//! OffRamp contract bindings for both relay generations
//!
//! Completion is observed through the `ExecutionStateChanged` event. The two
//! generations emit it with different signatures (the current one adds the
//! source selector, message hash, and gas used), so the destination-side
//! status scan filters on both topic hashes and decodes per topic.

use alloy_primitives::B256;
use alloy_sol_types::{sol, SolEvent};

/// Topic-0 hashes of both generations' completion events, legacy first
pub fn execution_state_changed_topics() -> [B256; 2] {
    [
        EVM2EVMOffRamp::ExecutionStateChanged::SIGNATURE_HASH,
        OffRamp::ExecutionStateChanged::SIGNATURE_HASH,
    ]
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract EVM2EVMOffRamp {
        event ExecutionStateChanged(uint64 indexed sequenceNumber, bytes32 indexed messageId, uint8 state, bytes returnData);

        function typeAndVersion() external pure returns (string memory);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract OffRamp {
        event ExecutionStateChanged(uint64 indexed sourceChainSelector, uint64 indexed sequenceNumber, bytes32 indexed messageId, bytes32 messageHash, uint8 state, bytes returnData, uint256 gasUsed);

        function typeAndVersion() external pure returns (string memory);
    }
);
