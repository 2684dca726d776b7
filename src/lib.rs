//! # ccip-rs
//!
//! A production-ready Rust SDK for Chainlink's Cross-Chain Interoperability
//! Protocol (CCIP).
//!
//! This library provides a safe, ergonomic interface for transferring tokens
//! and sending arbitrary messages across blockchain networks through CCIP
//! lanes, and for tracking a message to completion on the destination chain.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ccip_rs::{Ccip, CcipError, ChainSelector, TransferParams};
//! use alloy_chains::NamedChain;
//! use alloy_primitives::U256;
//!
//! # async fn example() -> Result<(), CcipError> {
//! # use alloy_provider::ProviderBuilder;
//! // Set up providers and create the lane client
//! let sepolia = ProviderBuilder::new().connect("http://localhost:8545").await?;
//! let arbitrum = ProviderBuilder::new().connect("http://localhost:8546").await?;
//!
//! let client = Ccip::builder()
//!     .source_provider(sepolia)
//!     .destination_provider(arbitrum)
//!     .source_chain(NamedChain::Sepolia)
//!     .source_selector(ChainSelector::new(16015286601757825753))
//!     .destination_selector(ChainSelector::new(3478487238524512106))
//!     .build();
//!
//! // Submit a transfer and keep the protocol-assigned message id
//! let result = client
//!     .transfer(
//!         TransferParams::builder()
//!             .router("0xF694E193200268f9a4868e4Aa017A0118C9a8177".to_string())
//!             .from("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".to_string())
//!             .token("0x779877A7B0D9E8603169DdbD7836e478b4624789".to_string())
//!             .amount(U256::from(1_000_000u64))
//!             .receiver("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d".to_string())
//!             .build(),
//!     )
//!     .await?;
//! println!("message id: {}", result.message_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tracking Delivery
//!
//! ```rust,no_run
//! use ccip_rs::{Ccip, StatusParams};
//! # use ccip_rs::{CcipError, ChainSelector};
//! # use alloy_chains::NamedChain;
//! # use alloy_network::Ethereum;
//! # use alloy_provider::Provider;
//!
//! # async fn example<P: Provider<Ethereum> + Clone>(client: Ccip<P>) -> Result<(), CcipError> {
//! // On the destination chain, poll until a completion event appears
//! let status = client
//!     .get_transfer_status(
//!         StatusParams::builder()
//!             .destination_router("0x141fa059441E0ca23ce184B6A78bafD2A517DdE8".to_string())
//!             .message_id(
//!                 "0x5cbd1b56e3c65f8b6bbfe6b1df9e0de4e5d8a7a0f1e1a2b3c4d5e6f708192a3b"
//!                     .to_string(),
//!             )
//!             .build(),
//!     )
//!     .await?;
//!
//! match status {
//!     Some(status) => println!("delivered: {status}"),
//!     None => println!("not yet observed, keep polling"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Direct Contract Access
//!
//! For advanced use cases, you can use the contract wrappers directly:
//!
//! ```rust,no_run
//! use ccip_rs::{ChainSelector, RouterContract};
//! use alloy_primitives::address;
//! use alloy_provider::ProviderBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
//! let router = RouterContract::new(
//!     address!("F694E193200268f9a4868e4Aa017A0118C9a8177"),
//!     provider,
//! );
//! let supported = router
//!     .is_chain_supported(ChainSelector::new(3478487238524512106))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Type-safe contract interactions** using Alloy
//! - **Both relay generations** handled behind one resolver, selected from
//!   the contract's own `typeAndVersion()` report
//! - **Bit-exact extraArgs codecs** for EVM and account-model destinations
//! - **Comprehensive error handling** with a taxonomy that separates bad
//!   parameters, misconfigured contracts, missing events, and transport
//!   failures
//! - **Builder pattern** for intuitive API usage
//!
//! ## Public API
//!
//! - [`Ccip`] and [`CcipTransfer`] - The lane client and its object-safe facade
//! - [`TransferParams`], [`MessageParams`], [`StatusParams`], [`ApproveParams`],
//!   [`TransferResult`], [`WaitConfig`] - Per-call options and results
//! - [`EvmExtraArgsV2`] and [`SvmExtraArgsV1`] - Tagged extraArgs codecs
//! - [`MessageRequest`] - Canonical message construction
//! - [`RampGeneration`] and [`OnRampConfig`] - Relay generation handling
//! - [`ChainSelector`], [`TransferStatus`], [`RateLimiterState`] - Protocol
//!   value types
//! - [`CcipError`] and [`Result`] - Error types for error handling
//! - Contract wrappers for direct contract interaction:
//!   [`RouterContract`], [`OnRampContract`], [`Erc20Contract`],
//!   [`TokenAdminRegistryContract`], [`TokenPoolContract`]

mod bridge;
mod contracts;
mod error;
mod protocol;

// Public API - minimal surface for stability
pub use bridge::{
    ApproveParams, Ccip, CcipTransfer, FeeScaling, FeeScalingEntry, MessageParams, StatusParams,
    TransferParams, TransferResult, WaitConfig, DEFAULT_CONFIRMATIONS, STATUS_SCAN_LOOKBACK_BLOCKS,
};
pub use contracts::router::Router;
pub use contracts::{
    Erc20Contract, OnRampConfig, OnRampContract, OnRampStaticConfig, RouterContract,
    TokenAdminRegistryContract, TokenPoolContract,
};
pub use error::{CcipError, Result};
pub use protocol::{
    validate_address, validate_message_id, ChainSelector, EvmExtraArgsV2, MessageRequest,
    RampGeneration, RateLimiterState, SvmExtraArgsV1, TransferStatus, EVM_EXTRA_ARGS_V2_TAG,
    LEGACY_ON_RAMP_VERSION, SVM_EXTRA_ARGS_V1_TAG,
};

// Public module for advanced users who need custom instrumentation
pub mod spans;
