//! Connects to the configured chain, registers the built-in providers and
//! answers a USDC balance query for the wallet.
//!
//! Reads `PRIVATE_KEY`, `RPC_URL` and optionally `CHAIN_ID`, `USDC_ADDRESS`,
//! `CONFIRMATION_TIMEOUT_SECS` and `POLL_INTERVAL_MS` from the environment.

use actionkit_actions::{
    providers::{usdc::GET_BALANCE, UsdcActionProvider, WalletActionProvider},
    ActionRegistry,
};
use actionkit_transport::{EvmTransport, WalletTransport};
use actionkit_types::ActionKitConfig;
use eyre::Context;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ActionKitConfig::from_env().wrap_err("invalid configuration")?;
    info!(?config, "loaded configuration");

    let transport = EvmTransport::connect_checked(&config)
        .await
        .wrap_err("could not connect to the configured chain")?;
    let address = transport.address();

    let registry = ActionRegistry::new(transport)
        .with_provider(WalletActionProvider.build()?)?
        .with_provider(UsdcActionProvider::from_config(&config).build()?)?;

    for action in registry.actions_for(config.network()) {
        println!("{}", action.to_json());
    }

    let raw = json!({ "user_address": address.to_string() });
    let raw = raw.as_object().cloned().unwrap_or_default();
    println!("{}", registry.invoke(GET_BALANCE, &raw, config.network()).await);

    Ok(())
}
