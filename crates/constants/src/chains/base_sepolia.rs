//! Constants for the Base Sepolia testnet.

use crate::{Network, TokenDeployment, USDC_DECIMALS};
use alloy::primitives::{address, Address};

/// Network identifier for Base Sepolia.
pub const NETWORK_ID: &str = "base-sepolia";
/// Chain ID for Base Sepolia.
pub const CHAIN_ID: u64 = 84532;
/// Base Sepolia network.
pub const NETWORK: Network = Network::named(CHAIN_ID, NETWORK_ID);

/// USDC token contract on Base Sepolia.
pub const USDC_ADDRESS: Address = address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e");
/// USDC deployment on Base Sepolia.
pub const USDC: TokenDeployment = TokenDeployment::new("USDC", USDC_ADDRESS, USDC_DECIMALS);
