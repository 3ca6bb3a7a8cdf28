//! Constants for local test networks.

use crate::{Network, TokenDeployment, USDC_DECIMALS};
use alloy::primitives::Address;

/// Network identifier for the local test network.
pub const NETWORK_ID: &str = "test";
/// Chain ID for the local test network.
pub const CHAIN_ID: u64 = 31337;
/// The local test network.
pub const NETWORK: Network = Network::named(CHAIN_ID, NETWORK_ID);

/// Test address for the USDC contract.
pub const USDC_ADDRESS: Address = Address::repeat_byte(0x55);
/// USDC deployment on the test network.
pub const USDC: TokenDeployment = TokenDeployment::new("USDC", USDC_ADDRESS, USDC_DECIMALS);

/// A chain id that no provider in the tests supports.
pub const UNSUPPORTED_CHAIN_ID: u64 = 999_999;
/// A network that no provider in the tests supports.
pub const UNSUPPORTED_NETWORK: Network = Network::unnamed(UNSUPPORTED_CHAIN_ID);
