//! Destination-side execution states
//!
//! An offRamp reports each delivered message's execution state in its
//! `ExecutionStateChanged` event. The progression is one-way and owned by the
//! remote contract; this client only reads it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Execution state of a message on the destination chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransferStatus {
    /// No execution attempt recorded yet
    Untouched = 0,
    /// Execution started but not finished
    InProgress = 1,
    /// Delivered and executed successfully
    Success = 2,
    /// Execution failed on the destination
    Failure = 3,
}

impl TransferStatus {
    /// Returns the on-chain state byte
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maps the on-chain state byte, `None` for unknown values
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Untouched),
            1 => Some(Self::InProgress),
            2 => Some(Self::Success),
            3 => Some(Self::Failure),
            _ => None,
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untouched => write!(f, "untouched"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}
