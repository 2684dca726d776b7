//! Token admin registry bindings
//!
//! The registry maps each transferable token to its pool. An unregistered
//! token resolves to the zero address; callers surface that as a contract
//! call error rather than defaulting.

use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_sol_types::sol;
use tracing::debug;

use TokenAdminRegistry::TokenAdminRegistryInstance;

/// Token admin registry wrapper
pub struct TokenAdminRegistryContract<P: Provider<Ethereum>> {
    instance: TokenAdminRegistryInstance<P>,
}

impl<P: Provider<Ethereum>> TokenAdminRegistryContract<P> {
    /// Create a new registry wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "token_admin_registry_initialized"
        );
        Self {
            instance: TokenAdminRegistryInstance::new(address, provider),
        }
    }

    /// Returns the pool registered for `token`, zero if unregistered
    pub async fn get_pool(&self, token: Address) -> Result<Address, alloy_contract::Error> {
        self.instance.getPool(token).call().await
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract TokenAdminRegistry {
        function getPool(address token) external view returns (address);
    }
);
