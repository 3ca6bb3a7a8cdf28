use alloy::{
    primitives::{Bytes, TxHash},
    sol_types::decode_revert_reason,
};
use std::time::Duration;

/// JSON-RPC error code nodes use for execution failures.
const EXECUTION_ERROR_CODE: i64 = 3;

/// Errors returned by a [`WalletTransport`].
///
/// None of these are retried automatically; the caller decides.
///
/// [`WalletTransport`]: crate::WalletTransport
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The endpoint could not be reached or returned a malformed response.
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::TransportError),
    /// The call reverted on chain.
    #[error("execution reverted: {message}")]
    Reverted {
        /// Decoded revert reason, or the node's error message.
        message: String,
        /// Raw revert data, if the node returned it.
        data: Option<Bytes>,
    },
    /// The node rejected the transaction, e.g. insufficient funds or a nonce
    /// conflict.
    #[error("transaction rejected: {0}")]
    Rejected(String),
    /// The connected chain is not the configured one.
    #[error("connected to chain id {actual}, expected {expected}")]
    ChainMismatch {
        /// The configured chain id.
        expected: u64,
        /// The chain id reported by the endpoint.
        actual: u64,
    },
    /// The transaction was not included before the deadline. Its outcome is
    /// unknown.
    #[error("transaction {tx_hash} not confirmed within {}s", timeout.as_secs())]
    Timeout {
        /// The submitted transaction.
        tx_hash: TxHash,
        /// The time waited.
        timeout: Duration,
    },
}

impl TransportError {
    /// Classify an `eth_call` failure.
    ///
    /// An error response is a revert only when it carries revert data, uses
    /// the execution error code, or says so in its message. Rate limits and
    /// other node errors stay transport failures.
    pub fn from_call(err: alloy::transports::TransportError) -> Self {
        let Some(payload) = err.as_error_resp() else {
            return Self::Rpc(err);
        };

        let data = payload.as_revert_data();
        let is_revert = data.is_some()
            || payload.code == EXECUTION_ERROR_CODE
            || payload.message.contains("revert");
        if !is_revert {
            return Self::Rpc(err);
        }

        let message = data
            .as_ref()
            .and_then(|d| decode_revert_reason(d))
            .unwrap_or_else(|| payload.message.to_string());
        Self::Reverted { message, data }
    }

    /// Classify a broadcast failure. Error responses from the node are
    /// rejections; anything else is a transport failure.
    pub fn from_send(err: alloy::transports::TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload) => Self::Rejected(payload.message.to_string()),
            None => Self::Rpc(err),
        }
    }

    /// True if this is a [`TransportError::Timeout`].
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
