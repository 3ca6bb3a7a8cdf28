//! Constants for the Ethereum Sepolia testnet.

use crate::{Network, TokenDeployment, USDC_DECIMALS};
use alloy::primitives::{address, Address};

/// Network identifier for Ethereum Sepolia.
pub const NETWORK_ID: &str = "ethereum-sepolia";
/// Chain ID for Ethereum Sepolia.
pub const CHAIN_ID: u64 = 11155111;
/// Ethereum Sepolia network.
pub const NETWORK: Network = Network::named(CHAIN_ID, NETWORK_ID);

/// USDC token contract on Ethereum Sepolia.
pub const USDC_ADDRESS: Address = address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");
/// USDC deployment on Ethereum Sepolia.
pub const USDC: TokenDeployment = TokenDeployment::new("USDC", USDC_ADDRESS, USDC_DECIMALS);
