//! CCIP protocol types and wire formats
//!
//! Pure, network-free building blocks: the chain selector, address
//! validation, the tagged extraArgs codecs, message construction, relay
//! generation selection, and the read-only state snapshots.

pub mod address;
pub mod chain_selector;
pub mod extra_args;
pub mod message;
pub mod rate_limiter;
pub mod status;
pub mod version;

pub use address::{validate_address, validate_message_id};
pub use chain_selector::ChainSelector;
pub use extra_args::{
    EvmExtraArgsV2, SvmExtraArgsV1, EVM_EXTRA_ARGS_V2_TAG, SVM_EXTRA_ARGS_V1_TAG,
};
pub use message::MessageRequest;
pub use rate_limiter::RateLimiterState;
pub use status::TransferStatus;
pub use version::{RampGeneration, LEGACY_ON_RAMP_VERSION};
