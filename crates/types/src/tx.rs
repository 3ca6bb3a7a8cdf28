//! Transaction requests and receipts exchanged with a wallet transport.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use std::fmt;

/// A contract call to be signed and broadcast.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionRequest {
    /// Recipient contract or account.
    to: Address,
    /// Call data.
    data: Bytes,
    /// Native value attached to the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<U256>,
}

impl TransactionRequest {
    /// Create a new request with no native value.
    pub const fn new(to: Address, data: Bytes) -> Self {
        Self { to, data, value: None }
    }

    /// Attach native value to the request.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// Get the recipient.
    pub const fn to(&self) -> Address {
        self.to
    }

    /// Get the call data.
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get the native value, if set.
    pub const fn value(&self) -> Option<U256> {
        self.value
    }
}

/// Execution status of an included transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    /// The transaction executed successfully.
    Success,
    /// The transaction was included but reverted.
    Reverted,
}

impl TxStatus {
    /// Status from the boolean receipt flag.
    pub const fn from_success(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::Reverted
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Reverted => f.write_str("reverted"),
        }
    }
}

/// The outcome of an included transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Transaction hash.
    tx_hash: TxHash,
    /// Execution status.
    status: TxStatus,
    /// Number of the including block, if the node reported it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block: Option<u64>,
}

impl TransactionReceipt {
    /// Create a new receipt.
    pub const fn new(tx_hash: TxHash, status: TxStatus, block: Option<u64>) -> Self {
        Self { tx_hash, status, block }
    }

    /// Get the transaction hash.
    pub const fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Get the execution status.
    pub const fn status(&self) -> TxStatus {
        self.status
    }

    /// Get the including block number.
    pub const fn block(&self) -> Option<u64> {
        self.block
    }

    /// True if the transaction executed successfully.
    pub const fn is_success(&self) -> bool {
        matches!(self.status, TxStatus::Success)
    }
}
