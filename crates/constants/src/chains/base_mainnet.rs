//! Constants for Base mainnet.

use crate::{Network, TokenDeployment, USDC_DECIMALS};
use alloy::primitives::{address, Address};

/// Network identifier for Base mainnet.
pub const NETWORK_ID: &str = "base-mainnet";
/// Chain ID for Base mainnet.
pub const CHAIN_ID: u64 = 8453;
/// Base mainnet network.
pub const NETWORK: Network = Network::named(CHAIN_ID, NETWORK_ID);

/// USDC token contract on Base mainnet.
pub const USDC_ADDRESS: Address = address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
/// USDC deployment on Base mainnet.
pub const USDC: TokenDeployment = TokenDeployment::new("USDC", USDC_ADDRESS, USDC_DECIMALS);
