use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_network::Ethereum;
use alloy_primitives::{hex, Address, FixedBytes, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionReceipt;
use bon::Builder;
use tracing::{error, info, Instrument};

use crate::bridge::config::WaitConfig;
use crate::bridge::fee::FeeScaling;
use crate::bridge::params::{
    ApproveParams, MessageParams, StatusParams, TransferParams, TransferResult,
};
use crate::bridge::status::scan_for_status;
use crate::contracts::onramp::{EVM2EVMOnRamp, OnRamp};
use crate::contracts::{
    Erc20Contract, OnRampConfig, OnRampContract, RouterContract, TokenAdminRegistryContract,
    TokenPoolContract,
};
use crate::error::{CcipError, Result};
use crate::protocol::{
    validate_address, validate_message_id, ChainSelector, MessageRequest, RampGeneration,
    RateLimiterState, TransferStatus,
};
use crate::spans;

use crate::contracts::router::Router;
use alloy_sol_types::SolEvent;

/// CCIP client for one source→destination lane
///
/// Drives the end-to-end flow for token transfers and arbitrary messages:
/// validate, quote the fee, submit through the router, wait for inclusion,
/// resolve the onRamp generation, and extract the protocol-assigned message
/// identifier from the receipt. On the destination side it scans offRamp
/// completion events to report delivery status.
///
/// Every operation is call-scoped: nothing is cached across calls, and a
/// failure aborts the flow without partial results. Retries are deliberately
/// absent; a resend after a submission-stage failure can duplicate the
/// transfer if the first submission actually landed, and that risk belongs to
/// the caller, not hidden here.
///
/// # Example
///
/// ```rust,no_run
/// # use ccip_rs::{Ccip, ChainSelector, TransferParams, CcipError};
/// # use alloy_chains::NamedChain;
/// # use alloy_primitives::U256;
/// # async fn example() -> Result<(), CcipError> {
/// # use alloy_provider::ProviderBuilder;
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
///
/// let client = Ccip::builder()
///     .source_provider(provider.clone())
///     .destination_provider(provider)
///     .source_chain(NamedChain::Sepolia)
///     .source_selector(ChainSelector::new(16015286601757825753))
///     .destination_selector(ChainSelector::new(3478487238524512106))
///     .build();
///
/// let result = client
///     .transfer(
///         TransferParams::builder()
///             .router("0xF694E193200268f9a4868e4Aa017A0118C9a8177".to_string())
///             .from("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".to_string())
///             .token("0x779877A7B0D9E8603169DdbD7836e478b4624789".to_string())
///             .amount(U256::from(1_000_000u64))
///             .receiver("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".to_string())
///             .build(),
///     )
///     .await?;
/// println!("message id: {}", result.message_id);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
pub struct Ccip<P: Provider<Ethereum> + Clone> {
    source_provider: P,
    destination_provider: P,
    source_chain: NamedChain,
    source_selector: ChainSelector,
    destination_selector: ChainSelector,

    /// Fee decimal-rescaling table; defaults to the protocol table
    #[builder(default)]
    fee_scaling: FeeScaling,
}

impl<P: Provider<Ethereum> + Clone> Ccip<P> {
    /// Returns the source chain
    pub fn source_chain(&self) -> NamedChain {
        self.source_chain
    }

    /// Returns the source chain selector
    pub fn source_selector(&self) -> ChainSelector {
        self.source_selector
    }

    /// Returns the destination chain selector
    pub fn destination_selector(&self) -> ChainSelector {
        self.destination_selector
    }

    /// Returns the source provider
    pub fn source_provider(&self) -> &P {
        &self.source_provider
    }

    /// Returns the destination provider
    pub fn destination_provider(&self) -> &P {
        &self.destination_provider
    }

    /// Returns the fee rescaling table in use
    pub fn fee_scaling(&self) -> &FeeScaling {
        &self.fee_scaling
    }

    /// Transfers tokens across the lane
    ///
    /// Validation happens before any network call; a parameter error means
    /// nothing was submitted. When no fee token is given the router quote is
    /// attached as native value; a specified fee token is assumed to be
    /// pre-approved through [`Ccip::approve`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An address is malformed or zero, or the amount is zero
    /// - The submission or receipt wait fails (surfaced unchanged, no retry)
    /// - The confirmed receipt carries no recognizable send event
    pub async fn transfer(&self, params: TransferParams) -> Result<TransferResult> {
        let router = validate_address(&params.router, "router")?;
        let from = validate_address(&params.from, "sender")?;
        let token = validate_address(&params.token, "token")?;
        let receiver = validate_address(&params.receiver, "receiver")?;
        let fee_token = match &params.fee_token {
            Some(raw) => Some(validate_address(raw, "feeToken")?),
            None => None,
        };
        if params.amount.is_zero() {
            return Err(CcipError::parameter(
                "amount",
                "transfer amount must be greater than zero",
            ));
        }

        let span = spans::transfer(
            &router,
            self.source_selector,
            self.destination_selector,
            &params.amount,
        );

        let request = MessageRequest::builder()
            .receiver(receiver)
            .token(token)
            .amount(params.amount)
            .maybe_data(params.data.clone())
            .maybe_fee_token(fee_token)
            .gas_limit(params.gas_limit)
            .allow_out_of_order_execution(params.allow_out_of_order_execution)
            .build();

        self.submit_flow(
            router,
            from,
            request,
            fee_token.is_some(),
            params.wait.unwrap_or_default(),
        )
        .instrument(span)
        .await
    }

    /// Sends an arbitrary message across the lane, no token movement
    ///
    /// Same flow and failure semantics as [`Ccip::transfer`], minus the
    /// amount validation: a pure message carries data only.
    pub async fn send_message(&self, params: MessageParams) -> Result<TransferResult> {
        let router = validate_address(&params.router, "router")?;
        let from = validate_address(&params.from, "sender")?;
        let receiver = validate_address(&params.receiver, "receiver")?;
        let fee_token = match &params.fee_token {
            Some(raw) => Some(validate_address(raw, "feeToken")?),
            None => None,
        };

        let span = spans::send_message(
            &router,
            self.source_selector,
            self.destination_selector,
            params.data.len(),
        );

        let request = MessageRequest::builder()
            .receiver(receiver)
            .data(params.data.clone())
            .maybe_fee_token(fee_token)
            .gas_limit(params.gas_limit)
            .allow_out_of_order_execution(params.allow_out_of_order_execution)
            .build();

        self.submit_flow(
            router,
            from,
            request,
            fee_token.is_some(),
            params.wait.unwrap_or_default(),
        )
        .instrument(span)
        .await
    }

    /// Quotes the fee for a message, rescaled for the source chain
    ///
    /// Standard-decimals chains get the raw router quote; chains in the
    /// rescaling table get `raw * 10^k`.
    pub async fn get_fee(&self, router: &str, request: &MessageRequest) -> Result<U256> {
        let router = validate_address(router, "router")?;
        let span = spans::get_fee(&router, self.destination_selector);

        let contract = RouterContract::new(router, self.source_provider.clone());
        let message = request.to_message();
        async move { self.quote_fee(&contract, &message).await }
            .instrument(span)
            .await
    }

    /// Reports the delivery status of a message on the destination chain
    ///
    /// Discovers the offRamps registered for this client's source lane and
    /// scans their completion events for the message identifier. `Ok(None)`
    /// means "not yet observed" and callers are expected to poll; a lane
    /// with no offRamp at all is an error, because it was never configured.
    pub async fn get_transfer_status(&self, params: StatusParams) -> Result<Option<TransferStatus>> {
        let router = validate_address(&params.destination_router, "destinationRouter")?;
        let message_id = validate_message_id(&params.message_id)?;
        if self.source_selector.is_zero() {
            return Err(CcipError::parameter(
                "sourceChainSelector",
                "a non-zero source chain selector is required to identify the lane",
            ));
        }

        let span = spans::get_transfer_status(&message_id, self.source_selector);
        scan_for_status(
            &self.destination_provider,
            router,
            self.source_selector,
            message_id,
            params.from_block,
        )
        .instrument(span)
        .await
    }

    /// Approves the router to spend `amount` of a token
    ///
    /// Approval is the caller-driven prerequisite for token-fee payment and
    /// token transfers; it is never performed implicitly by the send flows.
    /// A zero amount is a valid, allowance-revoking approval.
    pub async fn approve(&self, params: ApproveParams) -> Result<TransactionReceipt> {
        let router = validate_address(&params.router, "router")?;
        let token = validate_address(&params.token, "token")?;
        let from = validate_address(&params.from, "sender")?;
        let wait = params.wait.unwrap_or_default();

        let span = spans::approve(&token, &router, &params.amount);
        async move {
            let erc20 = Erc20Contract::new(token, self.source_provider.clone());
            let tx_request = erc20.approve_transaction(from, router, params.amount);

            let pending = self.source_provider.send_transaction(tx_request).await?;
            let tx_hash = *pending.tx_hash();

            let mut pending = pending.with_required_confirmations(wait.confirmations);
            if let Some(secs) = wait.timeout_secs {
                pending = pending.with_timeout(Some(Duration::from_secs(secs)));
            }
            let receipt = pending.get_receipt().await?;

            info!(
                tx_hash = %tx_hash,
                amount = %params.amount,
                event = "router_approval_confirmed"
            );
            Ok(receipt)
        }
        .instrument(span)
        .await
    }

    /// Reads the router's current allowance on a token for `owner`
    pub async fn get_allowance(&self, router: &str, token: &str, owner: &str) -> Result<U256> {
        let router = validate_address(router, "router")?;
        let token = validate_address(token, "token")?;
        let owner = validate_address(owner, "owner")?;

        let erc20 = Erc20Contract::new(token, self.source_provider.clone());
        Ok(erc20.allowance(owner, router).await?)
    }

    /// Whether the router can currently service this client's destination lane
    pub async fn is_chain_supported(&self, router: &str) -> Result<bool> {
        let router = validate_address(router, "router")?;
        let contract = RouterContract::new(router, self.source_provider.clone());
        Ok(contract.is_chain_supported(self.destination_selector).await?)
    }

    /// Reads the lane's onRamp dynamic config behind its generation
    ///
    /// The generation is resolved fresh from the onRamp's own
    /// `typeAndVersion()` and used consistently for the config read, so the
    /// returned [`OnRampConfig`] variant and its
    /// [`fee_quoting_contract`](OnRampConfig::fee_quoting_contract) accessor
    /// always agree with the contract that answered.
    pub async fn get_on_ramp_config(&self, router: &str) -> Result<OnRampConfig> {
        let router = validate_address(router, "router")?;
        let contract = RouterContract::new(router, self.source_provider.clone());

        let on_ramp = self.resolve_on_ramp(&contract).await?;
        let on_ramp_contract = OnRampContract::new(on_ramp, self.source_provider.clone());
        let generation = on_ramp_contract.generation().await?;
        Ok(on_ramp_contract.dynamic_config(generation).await?)
    }

    /// Reads the outbound rate-limiter snapshot for a token on this lane
    ///
    /// Walks onRamp → token admin registry → pool; a zero address at any
    /// step is a configuration error surfaced immediately, never defaulted.
    pub async fn get_token_rate_limiter_state(
        &self,
        router: &str,
        token: &str,
    ) -> Result<RateLimiterState> {
        let router = validate_address(router, "router")?;
        let token = validate_address(token, "token")?;
        let contract = RouterContract::new(router, self.source_provider.clone());

        let on_ramp = self.resolve_on_ramp(&contract).await?;
        let on_ramp_contract = OnRampContract::new(on_ramp, self.source_provider.clone());
        let generation = on_ramp_contract.generation().await?;
        let static_config = on_ramp_contract.static_config(generation).await?;

        let registry = static_config.token_admin_registry();
        if registry.is_zero() {
            return Err(CcipError::ContractCall(format!(
                "onRamp {on_ramp} reports no token admin registry"
            )));
        }

        let pool = TokenAdminRegistryContract::new(registry, self.source_provider.clone())
            .get_pool(token)
            .await?;
        if pool.is_zero() {
            return Err(CcipError::ContractCall(format!(
                "token {token} has no registered pool in {registry}"
            )));
        }

        let bucket = TokenPoolContract::new(pool, self.source_provider.clone())
            .outbound_rate_limiter_state(self.destination_selector)
            .await?;
        Ok(bucket.into())
    }

    /// Shared submit→wait→extract flow behind `transfer` and `send_message`
    async fn submit_flow(
        &self,
        router: Address,
        from: Address,
        request: MessageRequest,
        fee_token_specified: bool,
        wait: WaitConfig,
    ) -> Result<TransferResult> {
        let message = request.to_message();
        let router_contract = RouterContract::new(router, self.source_provider.clone());

        // Native value rides along only when no fee token was specified; a
        // token-paid fee is drawn from the allowance instead.
        let value = if fee_token_specified {
            None
        } else {
            Some(self.quote_fee(&router_contract, &message).await?)
        };

        let tx_request =
            router_contract.ccip_send_transaction(self.destination_selector, message, from, value);
        let pending = self.source_provider.send_transaction(tx_request).await?;
        let tx_hash = *pending.tx_hash();

        info!(
            tx_hash = %tx_hash,
            confirmations = wait.confirmations,
            event = "ccip_send_submitted"
        );

        let mut pending = pending.with_required_confirmations(wait.confirmations);
        if let Some(secs) = wait.timeout_secs {
            pending = pending.with_timeout(Some(Duration::from_secs(secs)));
        }
        let receipt = pending.get_receipt().await?;

        let message_id = self.extract_message_id(&router_contract, &receipt).await?;

        info!(
            tx_hash = %tx_hash,
            message_id = %hex::encode(message_id),
            event = "send_flow_completed"
        );

        Ok(TransferResult {
            tx_hash,
            message_id,
            receipt,
        })
    }

    async fn quote_fee(
        &self,
        router: &RouterContract<P>,
        message: &Router::EVM2AnyMessage,
    ) -> Result<U256> {
        let raw = router.get_fee(self.destination_selector, message).await?;
        let scaled = self.fee_scaling.scale(raw, &self.source_chain.to_string());

        info!(
            raw_fee = %raw,
            scaled_fee = %scaled,
            source_chain = %self.source_chain,
            event = "fee_resolved"
        );
        Ok(scaled)
    }

    async fn resolve_on_ramp(&self, router: &RouterContract<P>) -> Result<Address> {
        let on_ramp = router.get_on_ramp(self.destination_selector).await?;
        if on_ramp.is_zero() {
            return Err(CcipError::ContractCall(format!(
                "router {} reports no onRamp for destination chain selector {}",
                router.address(),
                self.destination_selector
            )));
        }
        Ok(on_ramp)
    }

    /// Resolves the onRamp generation and reads the message identifier out
    /// of the receipt's send event at the generation's nested path
    async fn extract_message_id(
        &self,
        router: &RouterContract<P>,
        receipt: &TransactionReceipt,
    ) -> Result<FixedBytes<32>> {
        let span = spans::extract_message_id(receipt.transaction_hash, self.destination_selector);
        async move {
            let on_ramp = self.resolve_on_ramp(router).await?;

            // Resolved fresh per call: the router is caller-supplied and the
            // onRamp behind a lane changes across upgrades.
            let generation = OnRampContract::new(on_ramp, self.source_provider.clone())
                .generation()
                .await?;

            let message_id = match generation {
                RampGeneration::Legacy => receipt
                    .inner
                    .logs()
                    .iter()
                    .filter(|log| {
                        log.topics().first().is_some_and(|topic| {
                            *topic == EVM2EVMOnRamp::CCIPSendRequested::SIGNATURE_HASH
                        })
                    })
                    .find_map(|log| log.log_decode::<EVM2EVMOnRamp::CCIPSendRequested>().ok())
                    .map(|decoded| decoded.inner.data.message.messageId),
                RampGeneration::Current => receipt
                    .inner
                    .logs()
                    .iter()
                    .filter(|log| {
                        log.topics()
                            .first()
                            .is_some_and(|topic| *topic == OnRamp::CCIPMessageSent::SIGNATURE_HASH)
                    })
                    .find_map(|log| log.log_decode::<OnRamp::CCIPMessageSent>().ok())
                    .map(|decoded| decoded.inner.data.message.header.messageId),
            };

            message_id.ok_or_else(|| {
                spans::record_error_with_context(
                    "MessageIdNotFound",
                    "message ID not found in the transaction logs",
                    Some(&format!(
                        "Receipt contained {} logs but none matched {}",
                        receipt.inner.logs().len(),
                        generation.send_event_name()
                    )),
                );
                error!(
                    available_logs = receipt.inner.logs().len(),
                    generation = %generation,
                    event = "message_id_not_found"
                );
                CcipError::EventLog(format!(
                    "message ID not found in the transaction logs: no {} event from onRamp \
                     {on_ramp} carries {}",
                    generation.send_event_name(),
                    generation.message_id_path()
                ))
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_provider::ProviderBuilder;
    use rstest::rstest;

    const ROUTER: &str = "0xF694E193200268f9a4868e4Aa017A0118C9a8177";
    const TOKEN: &str = "0x779877A7B0D9E8603169DdbD7836e478b4624789";
    const ACCOUNT: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d";
    const ZERO: &str = "0x0000000000000000000000000000000000000000";

    fn test_client() -> Ccip<impl Provider<Ethereum> + Clone> {
        let provider =
            ProviderBuilder::new().connect_http("http://localhost:8545".parse().unwrap());
        Ccip::builder()
            .source_provider(provider.clone())
            .destination_provider(provider)
            .source_chain(NamedChain::Sepolia)
            .source_selector(ChainSelector::new(16015286601757825753))
            .destination_selector(ChainSelector::new(3478487238524512106))
            .build()
    }

    fn transfer_params() -> TransferParams {
        TransferParams::builder()
            .router(ROUTER.to_string())
            .from(ACCOUNT.to_string())
            .token(TOKEN.to_string())
            .amount(U256::from(1_000_000u64))
            .receiver(ACCOUNT.to_string())
            .build()
    }

    #[test]
    fn test_builder_pattern() {
        let client = test_client();
        assert_eq!(client.source_chain(), NamedChain::Sepolia);
        assert_eq!(
            client.source_selector(),
            ChainSelector::new(16015286601757825753)
        );
        assert_eq!(
            client.destination_selector(),
            ChainSelector::new(3478487238524512106)
        );
        // The protocol rescaling table is attached by default.
        assert_eq!(client.fee_scaling().exponent_for("hedera"), Some(10));
    }

    #[tokio::test]
    async fn test_transfer_rejects_zero_amount_before_any_network_call() {
        let client = test_client();
        let params = TransferParams::builder()
            .router(ROUTER.to_string())
            .from(ACCOUNT.to_string())
            .token(TOKEN.to_string())
            .amount(U256::ZERO)
            .receiver(ACCOUNT.to_string())
            .build();

        // No RPC endpoint is listening; reaching the network would fail with
        // a transport error instead of the parameter error asserted here.
        let err = client.transfer(params).await.unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "amount"
        ));
    }

    #[rstest]
    #[case::zero_router(ZERO, ACCOUNT, "router")]
    #[case::malformed_router("0x1234", ACCOUNT, "router")]
    #[case::zero_sender(ROUTER, ZERO, "sender")]
    #[tokio::test]
    async fn test_transfer_validates_addresses_by_role(
        #[case] router: &str,
        #[case] from: &str,
        #[case] expected_role: &str,
    ) {
        let client = test_client();
        let params = TransferParams::builder()
            .router(router.to_string())
            .from(from.to_string())
            .token(TOKEN.to_string())
            .amount(U256::from(1u64))
            .receiver(ACCOUNT.to_string())
            .build();

        let err = client.transfer(params).await.unwrap_err();
        assert!(
            matches!(err, CcipError::Parameter { ref role, .. } if role == expected_role),
            "expected {expected_role} parameter error, got {err}"
        );
    }

    #[tokio::test]
    async fn test_transfer_validates_fee_token_when_present() {
        let client = test_client();
        let mut params = transfer_params();
        params.fee_token = Some(ZERO.to_string());

        let err = client.transfer(params).await.unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "feeToken"
        ));
    }

    #[tokio::test]
    async fn test_send_message_validates_receiver() {
        let client = test_client();
        let params = MessageParams::builder()
            .router(ROUTER.to_string())
            .from(ACCOUNT.to_string())
            .receiver("not-an-address".to_string())
            .data(alloy_primitives::Bytes::from_static(b"hello"))
            .build();

        let err = client.send_message(params).await.unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "receiver"
        ));
    }

    #[tokio::test]
    async fn test_status_validates_message_id_format() {
        let client = test_client();
        let params = StatusParams::builder()
            .destination_router(ROUTER.to_string())
            .message_id("0x1234".to_string())
            .build();

        let err = client.get_transfer_status(params).await.unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "messageId"
        ));
    }

    #[tokio::test]
    async fn test_status_requires_non_zero_source_selector() {
        let provider =
            ProviderBuilder::new().connect_http("http://localhost:8545".parse().unwrap());
        let client = Ccip::builder()
            .source_provider(provider.clone())
            .destination_provider(provider)
            .source_chain(NamedChain::Sepolia)
            .source_selector(ChainSelector::new(0))
            .destination_selector(ChainSelector::new(3478487238524512106))
            .build();

        let params = StatusParams::builder()
            .destination_router(ROUTER.to_string())
            .message_id(
                "0x5cbd1b56e3c65f8b6bbfe6b1df9e0de4e5d8a7a0f1e1a2b3c4d5e6f708192a3b".to_string(),
            )
            .build();

        let err = client.get_transfer_status(params).await.unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "sourceChainSelector"
        ));
    }

    #[tokio::test]
    async fn test_approve_validates_before_network() {
        let client = test_client();
        let params = ApproveParams::builder()
            .router(ROUTER.to_string())
            .token(ZERO.to_string())
            .from(ACCOUNT.to_string())
            .amount(U256::ZERO)
            .build();

        // Zero token address fails validation; the zero *amount* is a valid
        // revoking approval and must not be rejected.
        let err = client.approve(params).await.unwrap_err();
        assert!(matches!(
            err,
            CcipError::Parameter { ref role, .. } if role == "token"
        ));
    }
}
