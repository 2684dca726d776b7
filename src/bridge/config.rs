/// Default confirmation depth before a submission is considered included
pub const DEFAULT_CONFIRMATIONS: u64 = 2;

/// Default lookback window, in blocks, for the destination status scan
///
/// Bounds the completion-event query without a full-history scan; callers
/// tracking an old transfer pass an explicit starting block instead.
pub const STATUS_SCAN_LOOKBACK_BLOCKS: u64 = 10_000;

/// Configuration for receipt-wait behavior.
///
/// Controls how long the client waits for an included transaction after
/// submission. The client imposes no timeout of its own; absent an explicit
/// timeout the wait runs until the transport gives up or the caller drops
/// the future.
///
/// # Examples
///
/// ```rust
/// use ccip_rs::WaitConfig;
///
/// // Use defaults (2 confirmations, no client-side timeout)
/// let config = WaitConfig::default();
///
/// // Customize wait behavior
/// let config = WaitConfig::default()
///     .with_confirmations(5)
///     .with_timeout_secs(120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Number of blocks the inclusion must be buried under.
    pub confirmations: u64,
    /// Optional upper bound on the wait, in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for WaitConfig {
    /// Creates the default wait configuration.
    ///
    /// - `confirmations`: 2
    /// - `timeout_secs`: none
    ///
    /// Two confirmations ride out the single-block reorgs that are routine
    /// on fast chains while staying cheap to wait for.
    fn default() -> Self {
        Self {
            confirmations: DEFAULT_CONFIRMATIONS,
            timeout_secs: None,
        }
    }
}

impl WaitConfig {
    /// Sets the required confirmation depth.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ccip_rs::WaitConfig;
    ///
    /// let config = WaitConfig::default().with_confirmations(1);
    /// assert_eq!(config.confirmations, 1);
    /// ```
    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// Sets an upper bound on the receipt wait, in seconds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ccip_rs::WaitConfig;
    ///
    /// let config = WaitConfig::default().with_timeout_secs(120);
    /// assert_eq!(config.timeout_secs, Some(120));
    /// ```
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WaitConfig::default();
        assert_eq!(config.confirmations, 2);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = WaitConfig::default()
            .with_confirmations(5)
            .with_timeout_secs(90);
        assert_eq!(config.confirmations, 5);
        assert_eq!(config.timeout_secs, Some(90));
    }

    #[test]
    fn test_config_is_copy() {
        let config = WaitConfig::default();
        let copied = config;
        assert_eq!(config, copied);
    }
}
