use alloy_network::Ethereum;
use alloy_provider::Provider;
use async_trait::async_trait;

use crate::bridge::params::{MessageParams, StatusParams, TransferParams, TransferResult};
use crate::error::Result;
use crate::protocol::{ChainSelector, TransferStatus};

use super::Ccip;

/// Common trait interface for CCIP client implementations
///
/// Abstracts the lane operations behind an object-safe surface so callers
/// can hold clients for different provider types uniformly, or substitute a
/// test double.
///
/// # Dynamic Dispatch
///
/// ```rust,no_run
/// # use ccip_rs::{Ccip, CcipTransfer, ChainSelector};
/// # use alloy_chains::NamedChain;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # use alloy_provider::ProviderBuilder;
/// # let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let client = Ccip::builder()
///     .source_provider(provider.clone())
///     .destination_provider(provider)
///     .source_chain(NamedChain::Sepolia)
///     .source_selector(ChainSelector::new(16015286601757825753))
///     .destination_selector(ChainSelector::new(3478487238524512106))
///     .build();
///
/// // Use as trait object for dynamic dispatch
/// let lane: &dyn CcipTransfer = &client;
/// let source = lane.source_selector();
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait CcipTransfer: Send + Sync {
    /// Returns the source chain selector of this lane
    fn source_selector(&self) -> ChainSelector;

    /// Returns the destination chain selector of this lane
    fn destination_selector(&self) -> ChainSelector;

    /// Transfers tokens across the lane
    ///
    /// See [`Ccip::transfer`] for flow and failure semantics.
    async fn transfer(&self, params: TransferParams) -> Result<TransferResult>;

    /// Sends an arbitrary message across the lane
    ///
    /// See [`Ccip::send_message`].
    async fn send_message(&self, params: MessageParams) -> Result<TransferResult>;

    /// Reports delivery status on the destination chain
    ///
    /// `Ok(None)` means the lane exists but no completion event has been
    /// observed yet; callers poll.
    async fn get_transfer_status(&self, params: StatusParams) -> Result<Option<TransferStatus>>;
}

#[async_trait]
impl<P: Provider<Ethereum> + Clone> CcipTransfer for Ccip<P> {
    fn source_selector(&self) -> ChainSelector {
        self.source_selector()
    }

    fn destination_selector(&self) -> ChainSelector {
        self.destination_selector()
    }

    async fn transfer(&self, params: TransferParams) -> Result<TransferResult> {
        self.transfer(params).await
    }

    async fn send_message(&self, params: MessageParams) -> Result<TransferResult> {
        self.send_message(params).await
    }

    async fn get_transfer_status(&self, params: StatusParams) -> Result<Option<TransferStatus>> {
        self.get_transfer_status(params).await
    }
}
