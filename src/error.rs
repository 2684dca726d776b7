use thiserror::Error;

#[derive(Error, Debug)]
pub enum CcipError {
    #[error("Invalid {role}: {reason}")]
    Parameter { role: String, reason: String },

    #[error("Contract call failed: {0}")]
    ContractCall(String),

    #[error("Event log error: {0}")]
    EventLog(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),

    #[error("Contract error: {0}")]
    Contract(#[from] alloy_contract::Error),

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] alloy_provider::PendingTransactionError),

    #[error("ABI encoding/decoding error: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    #[error("Hex conversion error: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),
}

impl CcipError {
    /// Builds a [`CcipError::Parameter`] for a named argument.
    ///
    /// Parameter errors are raised before any network call is made, so a
    /// caller seeing one knows nothing was submitted on-chain.
    pub fn parameter(role: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parameter {
            role: role.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CcipError>;
