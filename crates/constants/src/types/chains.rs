use crate::{
    base_mainnet, base_sepolia, ethereum_mainnet, ethereum_sepolia, Network, TokenDeployment,
};
use alloy::primitives::ChainId;
use std::str::FromStr;

/// The list of known networks as a string.
const KNOWN_NETWORKS: &str = "base-sepolia, base-mainnet, ethereum-mainnet, ethereum-sepolia";

/// Error type for parsing a network from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNetworkError {
    /// The network name is not supported.
    #[error("network {0} is not parseable. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
}

/// Networks with built-in constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownNetwork {
    /// Base Sepolia testnet.
    BaseSepolia,
    /// Base mainnet.
    BaseMainnet,
    /// Ethereum mainnet.
    EthereumMainnet,
    /// Ethereum Sepolia testnet.
    EthereumSepolia,
    /// Local test network.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownNetwork {
    /// Look up a known network by chain id.
    pub const fn from_chain_id(chain_id: ChainId) -> Option<Self> {
        match chain_id {
            base_sepolia::CHAIN_ID => Some(Self::BaseSepolia),
            base_mainnet::CHAIN_ID => Some(Self::BaseMainnet),
            ethereum_mainnet::CHAIN_ID => Some(Self::EthereumMainnet),
            ethereum_sepolia::CHAIN_ID => Some(Self::EthereumSepolia),
            #[cfg(any(test, feature = "test-utils"))]
            crate::test_utils::CHAIN_ID => Some(Self::Test),
            _ => None,
        }
    }

    /// Get the network identity.
    pub const fn network(self) -> Network {
        match self {
            Self::BaseSepolia => base_sepolia::NETWORK,
            Self::BaseMainnet => base_mainnet::NETWORK,
            Self::EthereumMainnet => ethereum_mainnet::NETWORK,
            Self::EthereumSepolia => ethereum_sepolia::NETWORK,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::NETWORK,
        }
    }

    /// Get the chain id.
    pub const fn chain_id(self) -> ChainId {
        match self {
            Self::BaseSepolia => base_sepolia::CHAIN_ID,
            Self::BaseMainnet => base_mainnet::CHAIN_ID,
            Self::EthereumMainnet => ethereum_mainnet::CHAIN_ID,
            Self::EthereumSepolia => ethereum_sepolia::CHAIN_ID,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::CHAIN_ID,
        }
    }

    /// Get the network identifier, e.g. `base-sepolia`.
    pub const fn network_id(self) -> &'static str {
        match self {
            Self::BaseSepolia => base_sepolia::NETWORK_ID,
            Self::BaseMainnet => base_mainnet::NETWORK_ID,
            Self::EthereumMainnet => ethereum_mainnet::NETWORK_ID,
            Self::EthereumSepolia => ethereum_sepolia::NETWORK_ID,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::NETWORK_ID,
        }
    }

    /// Get the USDC deployment on this network.
    pub const fn usdc(self) -> TokenDeployment {
        match self {
            Self::BaseSepolia => base_sepolia::USDC,
            Self::BaseMainnet => base_mainnet::USDC,
            Self::EthereumMainnet => ethereum_mainnet::USDC,
            Self::EthereumSepolia => ethereum_sepolia::USDC,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::USDC,
        }
    }
}

impl FromStr for KnownNetwork {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            "base-sepolia" => Ok(Self::BaseSepolia),
            "base-mainnet" | "base" => Ok(Self::BaseMainnet),
            "ethereum-mainnet" | "mainnet" => Ok(Self::EthereumMainnet),
            "ethereum-sepolia" | "sepolia" => Ok(Self::EthereumSepolia),
            _ => Err(ParseNetworkError::NetworkNotSupported(s)),
        }
    }
}
