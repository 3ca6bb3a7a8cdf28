//! Startup configuration.
//!
//! Everything here is loaded once before any action is reachable. A missing
//! or malformed value aborts initialization.

mod env_utils;
pub use env_utils::{
    load_address, load_address_opt, load_network_opt, load_string, load_string_opt, load_u64,
    load_u64_opt, load_url,
};

mod error;
pub use error::ConfigError;

use actionkit_constants::{base_sepolia, Network, TokenDeployment, USDC_DECIMALS};
use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use std::{fmt, time::Duration};
use url::Url;

/// Environment variable holding the `0x`-prefixed signing key.
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
/// Environment variable holding the JSON-RPC endpoint URL.
pub const RPC_URL: &str = "RPC_URL";
/// Environment variable holding the target chain id or network name.
pub const CHAIN_ID: &str = "CHAIN_ID";
/// Environment variable holding the USDC contract address.
pub const USDC_ADDRESS: &str = "USDC_ADDRESS";
/// Environment variable holding the confirmation timeout in seconds.
pub const CONFIRMATION_TIMEOUT_SECS: &str = "CONFIRMATION_TIMEOUT_SECS";
/// Environment variable holding the receipt poll interval in milliseconds.
pub const POLL_INTERVAL_MS: &str = "POLL_INTERVAL_MS";

/// Default time to wait for a transaction to be included.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(120);
/// Default interval between receipt polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Parse a `0x`-prefixed hex private key.
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner, ConfigError> {
    let key = key.trim();
    if !key.starts_with("0x") {
        return Err(ConfigError::PrivateKey("private key must start with 0x hex prefix".into()));
    }
    // Never echo the key itself.
    key.parse::<PrivateKeySigner>()
        .map_err(|_| ConfigError::PrivateKey("private key must be 32 bytes of hex".into()))
}

/// Configuration for an actionkit deployment.
#[derive(Clone)]
pub struct ActionKitConfig {
    /// The signing credential.
    signer: PrivateKeySigner,
    /// JSON-RPC endpoint.
    rpc_url: Url,
    /// The network the wallet operates on.
    network: Network,
    /// The USDC deployment used by the USDC provider.
    usdc: TokenDeployment,
    /// Time to wait for inclusion before reporting a transfer as pending.
    confirmation_timeout: Duration,
    /// Interval between receipt polls.
    poll_interval: Duration,
}

/// Scheme, host and port only. Hosted endpoints often carry an API key in
/// the path, query or userinfo.
fn redacted_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}/..", url.scheme()),
        None => format!("{}://{host}/..", url.scheme()),
    }
}

impl fmt::Debug for ActionKitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionKitConfig")
            .field("address", &self.signer.address())
            .field("rpc_url", &redacted_url(&self.rpc_url))
            .field("network", &self.network)
            .field("usdc", &self.usdc)
            .field("confirmation_timeout", &self.confirmation_timeout)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl ActionKitConfig {
    /// Create a new configuration with default timeouts.
    pub fn new(
        signer: PrivateKeySigner,
        rpc_url: Url,
        network: Network,
        usdc: TokenDeployment,
    ) -> Self {
        Self {
            signer,
            rpc_url,
            network,
            usdc,
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Load the configuration from the environment.
    ///
    /// `PRIVATE_KEY` and `RPC_URL` are required. `CHAIN_ID` defaults to Base
    /// Sepolia. `USDC_ADDRESS` defaults to the known deployment on the chain
    /// and is required on chains without one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let signer = parse_private_key(&load_string(PRIVATE_KEY)?)?;
        let rpc_url = load_url(RPC_URL)?;
        let network = load_network_opt(CHAIN_ID)?.unwrap_or(base_sepolia::NETWORK);
        let usdc = usdc_for(&network, load_address_opt(USDC_ADDRESS)?)?;

        let mut config = Self::new(signer, rpc_url, network, usdc);
        if let Some(secs) = load_u64_opt(CONFIRMATION_TIMEOUT_SECS)? {
            config = config.with_confirmation_timeout(Duration::from_secs(secs));
        }
        if let Some(millis) = load_u64_opt(POLL_INTERVAL_MS)? {
            config = config.with_poll_interval(Duration::from_millis(millis));
        }
        Ok(config)
    }

    /// Set the confirmation timeout.
    pub fn with_confirmation_timeout(mut self, timeout: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// Set the receipt poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Get the signer.
    pub const fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the RPC endpoint.
    pub const fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Get the configured network.
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Get the USDC deployment.
    pub const fn usdc(&self) -> TokenDeployment {
        self.usdc
    }

    /// Get the confirmation timeout.
    pub const fn confirmation_timeout(&self) -> Duration {
        self.confirmation_timeout
    }

    /// Get the receipt poll interval.
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

fn usdc_for(
    network: &Network,
    configured: Option<Address>,
) -> Result<TokenDeployment, ConfigError> {
    match (configured, network.known()) {
        (Some(address), Some(known)) => Ok(known.usdc().at(address)),
        (Some(address), None) => Ok(TokenDeployment::new("USDC", address, USDC_DECIMALS)),
        (None, Some(known)) => Ok(known.usdc()),
        (None, None) => Err(ConfigError::MissingToken(network.chain_id())),
    }
}
