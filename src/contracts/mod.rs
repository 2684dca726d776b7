//! CCIP contract bindings
//!
//! This module contains Alloy contract bindings and typed wrappers for the
//! CCIP on-chain surface: the router, both onRamp and offRamp generations,
//! the token admin registry, token pools, and a minimal ERC20.
//!
//! The ABI schemas are fixed external constants declared inline with `sol!`;
//! the wrappers add structured logging and keep the two relay generations'
//! schemas behind variant types so version branches stay exhaustive.

pub mod erc20;
pub mod offramp;
pub mod onramp;
pub mod router;
pub mod token_admin_registry;
pub mod token_pool;

pub use erc20::Erc20Contract;
pub use onramp::{OnRampConfig, OnRampContract, OnRampStaticConfig};
pub use router::RouterContract;
pub use token_admin_registry::TokenAdminRegistryContract;
pub use token_pool::TokenPoolContract;
