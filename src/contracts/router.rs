//! Router contract bindings and wrapper
//!
//! The router is the single caller-facing entrypoint on each chain: it quotes
//! fees, accepts outbound messages, and knows the onRamp for every
//! destination lane and the offRamps for every source lane.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::sol;
use tracing::{debug, info};

use crate::protocol::ChainSelector;

use Router::RouterInstance;

/// Router contract wrapper
///
/// # Example
///
/// ```rust,no_run
/// use ccip_rs::{ChainSelector, RouterContract};
/// use alloy_primitives::address;
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let router = RouterContract::new(
///     address!("F694E193200268f9a4868e4Aa017A0118C9a8177"),
///     provider,
/// );
///
/// let supported = router
///     .is_chain_supported(ChainSelector::new(16015286601757825753))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct RouterContract<P: Provider<Ethereum>> {
    instance: RouterInstance<P>,
}

impl<P: Provider<Ethereum>> RouterContract<P> {
    /// Create a new router wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "router_contract_initialized"
        );
        Self {
            instance: RouterInstance::new(address, provider),
        }
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    /// Quotes the fee for sending `message` to the destination lane
    ///
    /// The quote is in the message's fee token, or the native unit when the
    /// message carries the native sentinel. Decimal rescaling for
    /// non-standard chains happens in the client, not here.
    pub async fn get_fee(
        &self,
        destination: ChainSelector,
        message: &Router::EVM2AnyMessage,
    ) -> Result<U256, alloy_contract::Error> {
        let fee = self
            .instance
            .getFee(destination.as_u64(), message.clone())
            .call()
            .await?;

        debug!(
            destination_selector = %destination,
            fee = %fee,
            contract_address = %self.instance.address(),
            event = "fee_quoted"
        );

        Ok(fee)
    }

    /// Create the transaction request for the `ccipSend` entrypoint
    ///
    /// `value` attaches native currency to pay the fee; it is `None` when a
    /// fee token is specified in the message (payment then rides on the
    /// token's allowance, arranged by the caller beforehand).
    pub fn ccip_send_transaction(
        &self,
        destination: ChainSelector,
        message: Router::EVM2AnyMessage,
        from: Address,
        value: Option<U256>,
    ) -> TransactionRequest {
        info!(
            from = %from,
            destination_selector = %destination,
            token_amounts = message.tokenAmounts.len(),
            data_length_bytes = message.data.len(),
            native_value = %value.unwrap_or(U256::ZERO),
            contract_address = %self.instance.address(),
            event = "ccip_send_transaction_created"
        );

        let mut call = self
            .instance
            .ccipSend(destination.as_u64(), message)
            .from(from);
        if let Some(value) = value {
            call = call.value(value);
        }
        call.into_transaction_request()
    }

    /// Returns the onRamp serving the destination lane, zero if none
    pub async fn get_on_ramp(
        &self,
        destination: ChainSelector,
    ) -> Result<Address, alloy_contract::Error> {
        self.instance.getOnRamp(destination.as_u64()).call().await
    }

    /// Returns all offRamp endpoints registered on this router
    pub async fn get_off_ramps(&self) -> Result<Vec<Router::OffRamp>, alloy_contract::Error> {
        self.instance.getOffRamps().call().await
    }

    /// Whether the destination lane is currently serviceable
    pub async fn is_chain_supported(
        &self,
        destination: ChainSelector,
    ) -> Result<bool, alloy_contract::Error> {
        self.instance
            .isChainSupported(destination.as_u64())
            .call()
            .await
    }
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Router {
        struct EVMTokenAmount {
            address token;
            uint256 amount;
        }

        struct EVM2AnyMessage {
            bytes receiver;
            bytes data;
            EVMTokenAmount[] tokenAmounts;
            address feeToken;
            bytes extraArgs;
        }

        struct OffRamp {
            uint64 sourceChainSelector;
            address offRamp;
        }

        function getFee(uint64 destinationChainSelector, EVM2AnyMessage memory message) external view returns (uint256);
        function ccipSend(uint64 destinationChainSelector, EVM2AnyMessage memory message) external payable returns (bytes32);
        function getOnRamp(uint64 destChainSelector) external view returns (address);
        function getOffRamps() external view returns (OffRamp[] memory);
        function isChainSupported(uint64 destChainSelector) external view returns (bool);
    }
);
