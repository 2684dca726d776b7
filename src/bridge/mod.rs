// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Core CCIP client implementation
//!
//! This module provides the primary types and functionality for moving
//! tokens and messages across chains through CCIP lanes.

mod bridge_trait;
mod ccip;
mod config;
mod fee;
mod params;
mod status;

pub use bridge_trait::CcipTransfer;
pub use ccip::Ccip;
pub use config::{WaitConfig, DEFAULT_CONFIRMATIONS, STATUS_SCAN_LOOKBACK_BLOCKS};
pub use fee::{FeeScaling, FeeScalingEntry};
pub use params::{ApproveParams, MessageParams, StatusParams, TransferParams, TransferResult};
