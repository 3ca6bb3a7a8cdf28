//! actionkit network constants.
//!
//! This crate contains the identities of the EVM networks actionkit knows
//! about, the token deployments on those networks, and the
//! [`SupportedNetworks`] predicate that action providers use to declare where
//! their actions may run.
//!

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::base_mainnet;
pub use chains::base_sepolia;
pub use chains::ethereum_mainnet;
pub use chains::ethereum_sepolia;
#[cfg(any(test, feature = "test-utils"))]
pub use chains::test_utils;

mod network;
pub use network::{Network, SupportedNetworks};

mod types;
pub use types::{KnownNetwork, ParseNetworkError, TokenDeployment};

/// Number of decimals used by every USDC deployment.
pub const USDC_DECIMALS: u8 = 6;

/// Number of decimals of the native asset (ETH) on every known network.
pub const NATIVE_DECIMALS: u8 = 18;
