//! Built-in action providers.

pub mod usdc;
pub use usdc::UsdcActionProvider;

pub mod wallet;
pub use wallet::WalletActionProvider;
