// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC20 contract bindings for approval and allowance operations
//!
//! Paying a CCIP fee in a token, or sending tokens at all, requires the
//! router to be approved on the token first. Approval is a separate,
//! caller-driven step; the client never approves implicitly.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::sol;
use tracing::{debug, info};

use Erc20::Erc20Instance;

/// ERC20 contract wrapper for approval operations
///
/// # Example
///
/// ```rust,no_run
/// use ccip_rs::Erc20Contract;
/// use alloy_primitives::{address, U256};
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let link = address!("779877A7B0D9E8603169DdbD7836e478b4624789");
/// let router = address!("F694E193200268f9a4868e4Aa017A0118C9a8177");
///
/// let erc20 = Erc20Contract::new(link, provider);
///
/// let owner = address!("1234567890123456789012345678901234567890");
/// let allowance = erc20.allowance(owner, router).await?;
///
/// if allowance < U256::from(1_000_000u64) {
///     let tx = erc20.approve_transaction(owner, router, U256::from(1_000_000u64));
///     // Send transaction...
/// }
/// # Ok(())
/// # }
/// ```
pub struct Erc20Contract<P: Provider<Ethereum>> {
    instance: Erc20Instance<P>,
}

impl<P: Provider<Ethereum>> Erc20Contract<P> {
    /// Create a new ERC20 contract wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "erc20_contract_initialized"
        );
        Self {
            instance: Erc20Instance::new(address, provider),
        }
    }

    /// Get the current allowance for a spender
    ///
    /// Returns the amount of tokens that `spender` is allowed to spend on
    /// behalf of `owner`. A zero allowance is a normal state, not an error.
    pub async fn allowance(
        &self,
        owner: Address,
        spender: Address,
    ) -> Result<U256, alloy_contract::Error> {
        debug!(
            owner = %owner,
            spender = %spender,
            contract_address = %self.instance.address(),
            event = "checking_allowance"
        );

        let result = self.instance.allowance(owner, spender).call().await?;

        info!(
            owner = %owner,
            spender = %spender,
            allowance = %result,
            contract_address = %self.instance.address(),
            event = "allowance_retrieved"
        );

        Ok(result)
    }

    /// Create a transaction request to approve a spender
    ///
    /// This creates but does not send the approval transaction. The caller is
    /// responsible for signing and sending the transaction.
    pub fn approve_transaction(
        &self,
        from: Address,
        spender: Address,
        amount: U256,
    ) -> TransactionRequest {
        info!(
            from = %from,
            spender = %spender,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "approve_transaction_created"
        );

        self.instance
            .approve(spender, amount)
            .from(from)
            .into_transaction_request()
    }

    /// Get the token balance of an address
    pub async fn balance_of(&self, account: Address) -> Result<U256, alloy_contract::Error> {
        debug!(
            account = %account,
            contract_address = %self.instance.address(),
            event = "checking_balance"
        );

        let result = self.instance.balanceOf(account).call().await?;

        info!(
            account = %account,
            balance = %result,
            contract_address = %self.instance.address(),
            event = "balance_retrieved"
        );

        Ok(result)
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

// Minimal ERC20 interface for approval operations
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Erc20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
    }
);
