//! Constants for Ethereum mainnet.

use crate::{Network, TokenDeployment, USDC_DECIMALS};
use alloy::primitives::{address, Address};

/// Network identifier for Ethereum mainnet.
pub const NETWORK_ID: &str = "ethereum-mainnet";
/// Chain ID for Ethereum mainnet.
pub const CHAIN_ID: u64 = 1;
/// Ethereum mainnet network.
pub const NETWORK: Network = Network::named(CHAIN_ID, NETWORK_ID);

/// USDC token contract on Ethereum mainnet.
pub const USDC_ADDRESS: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
/// USDC deployment on Ethereum mainnet.
pub const USDC: TokenDeployment = TokenDeployment::new("USDC", USDC_ADDRESS, USDC_DECIMALS);
