//! A scripted [`WalletTransport`].

use crate::users::TEST_USERS;
use actionkit_constants::{base_sepolia, Network};
use actionkit_transport::{TransportError, WalletTransport};
use actionkit_types::{TransactionReceipt, TransactionRequest, TxStatus};
use alloy::primitives::{Address, Bytes, Selector, TxHash, U256};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

/// A recorded `get_state` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCall {
    /// The contract called.
    pub contract: Address,
    /// The function selector.
    pub selector: Selector,
    /// The encoded arguments, without the selector.
    pub args: Bytes,
}

#[derive(Debug, Default)]
struct MockState {
    state_calls: Vec<StateCall>,
    submissions: Vec<TransactionRequest>,
    confirmations: Vec<(TxHash, Duration)>,
    network_queries: usize,
    balance_queries: Vec<Address>,

    state_responses: VecDeque<Result<Bytes, TransportError>>,
    submit_responses: VecDeque<Result<TxHash, TransportError>>,
    confirmation_responses: VecDeque<Result<TxStatus, TransportError>>,
}

/// A mock [`WalletTransport`] that records every call and answers from
/// scripted queues.
///
/// When a queue is empty, `get_state` fails, `submit` returns a
/// deterministic hash and `await_confirmation` reports success.
#[derive(Debug, Clone)]
pub struct MockTransport {
    address: Address,
    network: Network,
    native_balance: U256,
    state: Arc<Mutex<MockState>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// A transport for the first test user on Base Sepolia.
    pub fn new() -> Self {
        Self {
            address: TEST_USERS[0],
            network: base_sepolia::NETWORK,
            native_balance: U256::ZERO,
            state: Default::default(),
        }
    }

    /// Set the wallet address.
    pub const fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Set the network reported by `network()`.
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Set the native balance reported for every address.
    pub const fn with_native_balance(mut self, balance: U256) -> Self {
        self.native_balance = balance;
        self
    }

    /// Queue raw `get_state` return data.
    pub fn push_state(&self, data: impl Into<Bytes>) {
        self.state.lock().unwrap().state_responses.push_back(Ok(data.into()));
    }

    /// Queue a single-word `get_state` return value.
    pub fn push_uint(&self, value: U256) {
        self.push_state(value.to_be_bytes::<32>().to_vec());
    }

    /// Queue a `get_state` failure.
    pub fn push_state_error(&self, error: TransportError) {
        self.state.lock().unwrap().state_responses.push_back(Err(error));
    }

    /// Queue the hash returned by the next `submit`.
    pub fn push_tx_hash(&self, tx_hash: TxHash) {
        self.state.lock().unwrap().submit_responses.push_back(Ok(tx_hash));
    }

    /// Queue a `submit` failure.
    pub fn push_submit_error(&self, error: TransportError) {
        self.state.lock().unwrap().submit_responses.push_back(Err(error));
    }

    /// Queue the status of the next confirmed receipt.
    pub fn push_receipt(&self, status: TxStatus) {
        self.state.lock().unwrap().confirmation_responses.push_back(Ok(status));
    }

    /// Queue an `await_confirmation` failure.
    pub fn push_confirmation_error(&self, error: TransportError) {
        self.state.lock().unwrap().confirmation_responses.push_back(Err(error));
    }

    /// Queue a confirmation timeout for the next `await_confirmation`.
    pub fn push_timeout(&self) {
        self.state.lock().unwrap().confirmation_responses.push_back(Err(TransportError::Timeout {
            tx_hash: TxHash::ZERO,
            timeout: Duration::ZERO,
        }));
    }

    /// Recorded `get_state` calls.
    pub fn state_calls(&self) -> Vec<StateCall> {
        self.state.lock().unwrap().state_calls.clone()
    }

    /// Recorded submissions.
    pub fn submissions(&self) -> Vec<TransactionRequest> {
        self.state.lock().unwrap().submissions.clone()
    }

    /// Recorded confirmation waits.
    pub fn confirmations(&self) -> Vec<(TxHash, Duration)> {
        self.state.lock().unwrap().confirmations.clone()
    }

    /// Total number of chain I/O calls made.
    pub fn io_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.state_calls.len()
            + state.submissions.len()
            + state.confirmations.len()
            + state.network_queries
            + state.balance_queries.len()
    }
}

impl WalletTransport for MockTransport {
    fn address(&self) -> Address {
        self.address
    }

    async fn network(&self) -> Result<Network, TransportError> {
        self.state.lock().unwrap().network_queries += 1;
        Ok(self.network.clone())
    }

    async fn get_state(
        &self,
        contract: Address,
        selector: Selector,
        encoded_args: &[u8],
    ) -> Result<Bytes, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.state_calls.push(StateCall {
            contract,
            selector,
            args: Bytes::copy_from_slice(encoded_args),
        });
        state
            .state_responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Rejected("no scripted state".to_string())))
    }

    async fn submit(&self, request: &TransactionRequest) -> Result<TxHash, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.submissions.push(request.clone());
        let n = state.submissions.len() as u8;
        state.submit_responses.pop_front().unwrap_or(Ok(TxHash::with_last_byte(n)))
    }

    async fn await_confirmation(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Result<TransactionReceipt, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.confirmations.push((tx_hash, timeout));
        match state.confirmation_responses.pop_front().unwrap_or(Ok(TxStatus::Success)) {
            Ok(status) => Ok(TransactionReceipt::new(tx_hash, status, Some(1))),
            Err(TransportError::Timeout { .. }) => {
                Err(TransportError::Timeout { tx_hash, timeout })
            }
            Err(e) => Err(e),
        }
    }

    async fn native_balance(&self, address: Address) -> Result<U256, TransportError> {
        self.state.lock().unwrap().balance_queries.push(address);
        Ok(self.native_balance)
    }
}
