/// Base mainnet constants.
pub mod base_mainnet;

/// Base Sepolia testnet constants.
pub mod base_sepolia;

/// Ethereum mainnet constants.
pub mod ethereum_mainnet;

/// Ethereum Sepolia testnet constants.
pub mod ethereum_sepolia;

/// Test utilities for networks.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
