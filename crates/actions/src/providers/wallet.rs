//! Wallet introspection actions.

use crate::{
    ActionError, ActionHandler, ActionProvider, ActionSchema, ActionSpec, CallArgs, ProviderError,
};
use actionkit_constants::{Network, NATIVE_DECIMALS};
use actionkit_transport::{TransportError, WalletTransport};
use actionkit_types::format_units;
use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use tracing::warn;

/// Provider name.
pub const PROVIDER_NAME: &str = "wallet";
/// Wallet details action name.
pub const GET_WALLET_DETAILS: &str = "get_wallet_details";

/// Fractional digits shown for the native balance.
const DISPLAY_PRECISION: u8 = 6;

/// Builds the wallet [`ActionProvider`]. Supports every network.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletActionProvider;

impl WalletActionProvider {
    /// Build the provider.
    pub fn build<W: WalletTransport>(self) -> Result<ActionProvider<W>, ProviderError> {
        ActionProvider::builder(PROVIDER_NAME)
            .action(ActionSpec::new(
                GET_WALLET_DETAILS,
                "Get the wallet's address, the network it is connected to and its native \
                 balance. Takes no inputs.",
                ActionSchema::empty(),
                WalletDetails,
            ))
            .build()
    }
}

#[derive(Debug)]
struct WalletDetails;

impl WalletDetails {
    async fn fetch<W: WalletTransport>(
        wallet: &W,
        address: Address,
    ) -> Result<(Network, U256), TransportError> {
        let network = wallet.network().await?;
        let balance = wallet.native_balance(address).await?;
        Ok((network, balance))
    }
}

#[async_trait]
impl<W: WalletTransport> ActionHandler<W> for WalletDetails {
    async fn call(&self, wallet: &W, _args: CallArgs) -> Result<String, ActionError> {
        let address = wallet.address();

        match Self::fetch(wallet, address).await {
            Ok((network, balance)) => Ok(format!(
                "Wallet {address} on network {} ({}) has a native balance of {} ETH",
                network.chain_id(),
                network.name().unwrap_or("unknown"),
                format_units(balance, NATIVE_DECIMALS, DISPLAY_PRECISION),
            )),
            Err(e) => {
                warn!(%address, %e, "wallet details query failed");
                Ok(format!("Error getting wallet details: {e}"))
            }
        }
    }
}
