//! Token pool bindings for rate-limiter reads
//!
//! Each pool throttles its lanes with outbound and inbound token buckets.
//! Both reads are snapshots of remote state; nothing here mutates the pool.

use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_sol_types::sol;
use tracing::debug;

use crate::protocol::ChainSelector;

use TokenPool::TokenPoolInstance;

/// Token pool wrapper
pub struct TokenPoolContract<P: Provider<Ethereum>> {
    instance: TokenPoolInstance<P>,
}

impl<P: Provider<Ethereum>> TokenPoolContract<P> {
    /// Create a new pool wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "token_pool_initialized"
        );
        Self {
            instance: TokenPoolInstance::new(address, provider),
        }
    }

    /// Reads the outbound (source-side) bucket for the remote lane
    pub async fn outbound_rate_limiter_state(
        &self,
        remote: ChainSelector,
    ) -> Result<TokenPool::TokenBucket, alloy_contract::Error> {
        self.instance
            .getCurrentOutboundRateLimiterState(remote.as_u64())
            .call()
            .await
    }

    /// Reads the inbound (destination-side) bucket for the remote lane
    pub async fn inbound_rate_limiter_state(
        &self,
        remote: ChainSelector,
    ) -> Result<TokenPool::TokenBucket, alloy_contract::Error> {
        self.instance
            .getCurrentInboundRateLimiterState(remote.as_u64())
            .call()
            .await
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract TokenPool {
        struct TokenBucket {
            uint128 tokens;
            uint32 lastUpdated;
            bool isEnabled;
            uint128 capacity;
            uint128 rate;
        }

        function getCurrentOutboundRateLimiterState(uint64 remoteChainSelector) external view returns (TokenBucket memory);
        function getCurrentInboundRateLimiterState(uint64 remoteChainSelector) external view returns (TokenBucket memory);
    }
);
