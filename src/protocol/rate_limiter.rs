//! Lane rate-limiter snapshots
//!
//! Token pools throttle lane throughput with a token bucket. The pool exposes
//! the bucket as a point-in-time read; this client never mutates it.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of a token-bucket rate limiter
///
/// Mirrors the pool contract's bucket struct. `tokens` refills toward
/// `capacity` at `rate` per second from `last_updated`; a disabled bucket
/// imposes no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterState {
    /// Capacity currently available to consume
    pub tokens: u128,
    /// Unix seconds of the last bucket update
    pub last_updated: u32,
    /// Whether the limiter is active for this lane
    pub is_enabled: bool,
    /// Maximum bucket fill
    pub capacity: u128,
    /// Refill rate in tokens per second
    pub rate: u128,
}

impl From<crate::contracts::token_pool::TokenPool::TokenBucket> for RateLimiterState {
    fn from(bucket: crate::contracts::token_pool::TokenPool::TokenBucket) -> Self {
        Self {
            tokens: bucket.tokens,
            last_updated: bucket.lastUpdated,
            is_enabled: bucket.isEnabled,
            capacity: bucket.capacity,
            rate: bucket.rate,
        }
    }
}
