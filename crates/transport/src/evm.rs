use crate::{NonceManager, TransportError, WalletTransport};
use actionkit_constants::Network;
use actionkit_types::{
    build_call, config::DEFAULT_POLL_INTERVAL, ActionKitConfig, TransactionReceipt,
    TransactionRequest, TxStatus,
};
use alloy::{
    network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, Selector, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest as RpcTransactionRequest,
    signers::local::PrivateKeySigner,
};
use std::{fmt, time::Duration};
use tokio::time::{sleep, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

/// A [`WalletTransport`] backed by an alloy provider speaking JSON-RPC.
///
/// Two variants are available:
/// - [`EvmTransport::local_signer`] signs locally with a private key and
///   broadcasts raw transactions.
/// - [`EvmTransport::remote_signer`] sends unsigned transactions with
///   `eth_sendTransaction`, leaving signing to the node.
///
/// The nonce for the sending address is tracked locally, see
/// [`NonceManager`].
pub struct EvmTransport {
    /// The provider used for all RPC calls.
    provider: DynProvider,
    /// The sending address.
    from: Address,
    /// Nonce state for `from`.
    nonce: NonceManager,
    /// Interval between receipt polls.
    poll_interval: Duration,
}

impl fmt::Debug for EvmTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvmTransport")
            .field("from", &self.from)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl EvmTransport {
    /// Create a transport from a provider and the address it sends from.
    pub fn new(provider: DynProvider, from: Address) -> Self {
        Self { provider, from, nonce: NonceManager::new(), poll_interval: DEFAULT_POLL_INTERVAL }
    }

    /// Connect to `rpc_url`, signing locally with `signer`.
    pub fn local_signer(signer: PrivateKeySigner, rpc_url: Url) -> Self {
        let from = signer.address();
        let provider =
            ProviderBuilder::new().wallet(EthereumWallet::new(signer)).connect_http(rpc_url);
        Self::new(provider.erased(), from)
    }

    /// Connect to `rpc_url`, letting the node sign for `from`.
    pub fn remote_signer(from: Address, rpc_url: Url) -> Self {
        let provider = ProviderBuilder::new().connect_http(rpc_url);
        Self::new(provider.erased(), from)
    }

    /// Create a local-signer transport from the configuration.
    pub fn from_config(config: &ActionKitConfig) -> Self {
        Self::local_signer(config.signer().clone(), config.rpc_url().clone())
            .with_poll_interval(config.poll_interval())
    }

    /// Create a local-signer transport from the configuration and check that
    /// the endpoint serves the configured chain.
    pub async fn connect_checked(config: &ActionKitConfig) -> Result<Self, TransportError> {
        let transport = Self::from_config(config);
        transport.check_network(config.network()).await?;
        Ok(transport)
    }

    /// Fail with [`TransportError::ChainMismatch`] unless the endpoint serves
    /// `expected`.
    pub async fn check_network(&self, expected: &Network) -> Result<(), TransportError> {
        let actual = self.network().await?.chain_id();
        if actual != expected.chain_id() {
            warn!(expected = expected.chain_id(), actual, "endpoint serves another chain");
            return Err(TransportError::ChainMismatch { expected: expected.chain_id(), actual });
        }
        Ok(())
    }

    /// Set the interval between receipt polls.
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Get the provider.
    pub const fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Get the nonce state.
    pub const fn nonce_manager(&self) -> &NonceManager {
        &self.nonce
    }

    fn rpc_request(&self, request: &TransactionRequest, nonce: u64) -> RpcTransactionRequest {
        RpcTransactionRequest::default()
            .with_from(self.from)
            .with_to(request.to())
            .with_input(request.data().clone())
            .with_value(request.value().unwrap_or_default())
            .with_nonce(nonce)
    }
}

impl WalletTransport for EvmTransport {
    fn address(&self) -> Address {
        self.from
    }

    #[instrument(skip_all)]
    async fn network(&self) -> Result<Network, TransportError> {
        let chain_id = self.provider.get_chain_id().await?;
        Ok(Network::from(chain_id))
    }

    #[instrument(skip_all, fields(%contract, %selector))]
    async fn get_state(
        &self,
        contract: Address,
        selector: Selector,
        encoded_args: &[u8],
    ) -> Result<Bytes, TransportError> {
        let tx = RpcTransactionRequest::default()
            .with_to(contract)
            .with_input(build_call(selector, encoded_args));

        self.provider
            .call(tx)
            .await
            .inspect_err(|e| warn!(%e, "eth_call failed"))
            .map_err(TransportError::from_call)
    }

    #[instrument(skip_all, fields(from = %self.from, to = %request.to()))]
    async fn submit(&self, request: &TransactionRequest) -> Result<TxHash, TransportError> {
        let lease = self.nonce.lease().await;

        let nonce = match lease.cached() {
            Some(nonce) => nonce,
            None => {
                let nonce = self.provider.get_transaction_count(self.from).pending().await?;
                debug!(nonce, "fetched pending nonce");
                nonce
            }
        };

        match self.provider.send_transaction(self.rpc_request(request, nonce)).await {
            Ok(pending) => {
                let tx_hash = *pending.tx_hash();
                lease.commit(nonce);
                debug!(nonce, %tx_hash, "transaction broadcast");
                Ok(tx_hash)
            }
            Err(e) => {
                // The transaction may or may not have reached the mempool.
                lease.reset();
                warn!(nonce, %e, "broadcast failed, nonce reset");
                Err(TransportError::from_send(e))
            }
        }
    }

    #[instrument(skip(self), fields(timeout_secs = timeout.as_secs()))]
    async fn await_confirmation(
        &self,
        tx_hash: TxHash,
        timeout: Duration,
    ) -> Result<TransactionReceipt, TransportError> {
        let deadline = Instant::now() + timeout;

        loop {
            // The transaction is already broadcast, so a failed poll says
            // nothing about its outcome.
            match self.provider.get_transaction_receipt(tx_hash).await {
                Ok(Some(receipt)) => {
                    let status = TxStatus::from_success(receipt.status());
                    debug!(%status, block = ?receipt.block_number, "transaction included");
                    return Ok(TransactionReceipt::new(tx_hash, status, receipt.block_number));
                }
                Ok(None) => {}
                Err(e) => warn!(%e, "receipt poll failed"),
            }

            let now = Instant::now();
            if now >= deadline {
                warn!("confirmation deadline passed");
                return Err(TransportError::Timeout { tx_hash, timeout });
            }
            sleep(self.poll_interval.min(deadline - now)).await;
        }
    }

    #[instrument(skip(self))]
    async fn native_balance(&self, address: Address) -> Result<U256, TransportError> {
        self.provider.get_balance(address).await.map_err(Into::into)
    }
}
