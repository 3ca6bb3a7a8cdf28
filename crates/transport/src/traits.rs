use crate::TransportError;
use actionkit_constants::Network;
use actionkit_types::{TransactionReceipt, TransactionRequest};
use alloy::primitives::{Address, Bytes, Selector, TxHash, U256};
use core::future::Future;
use std::time::Duration;

/// A wallet capable of EVM operations.
///
/// Implementors hold the signing credential and are responsible for
/// serializing nonce acquisition: at most one in-flight submission may
/// consume a given nonce.
pub trait WalletTransport: Send + Sync {
    /// The wallet's address.
    fn address(&self) -> Address;

    /// Query the endpoint for the network it serves.
    fn network(&self) -> impl Future<Output = Result<Network, TransportError>> + Send;

    /// Read contract state with an `eth_call`. No transaction is sent.
    ///
    /// Fails with [`TransportError::Reverted`] on a chain-level revert,
    /// carrying the raw revert data when the node returned it.
    fn get_state(
        &self,
        contract: Address,
        selector: Selector,
        encoded_args: &[u8],
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send;

    /// Sign and broadcast a transaction, returning its hash.
    ///
    /// Failures are never retried.
    fn submit(
        &self,
        request: &TransactionRequest,
    ) -> impl Future<Output = Result<TxHash, TransportError>> + Send;

    /// Wait until the transaction is included, or `timeout` elapses.
    ///
    /// An included transaction that reverted yields a receipt with
    /// [`TxStatus::Reverted`]. Never resubmits.
    ///
    /// [`TxStatus::Reverted`]: actionkit_types::TxStatus::Reverted
    fn await_confirmation(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> impl Future<Output = Result<TransactionReceipt, TransportError>> + Send;

    /// Get the native asset balance of an address.
    fn native_balance(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<U256, TransportError>> + Send;
}
