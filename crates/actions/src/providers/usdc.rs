//! USDC balance and transfer actions.
//!
//! Both actions talk to the token contract through the ERC-20 interface.
//! Transport failures are reported in the result text rather than as
//! errors, so a conversational caller always receives a readable answer.

use crate::{
    ActionError, ActionHandler, ActionProvider, ActionSchema, ActionSpec, CallArgs, Constraint,
    FieldSpec, ProviderError,
};
use actionkit_constants::{base_sepolia, SupportedNetworks, TokenDeployment};
use actionkit_transport::{TransportError, WalletTransport};
use actionkit_types::{
    config::DEFAULT_CONFIRMATION_TIMEOUT, format_units, ActionKitConfig, ContractInterface,
    FunctionEntry, TransactionRequest,
};
use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Provider name.
pub const PROVIDER_NAME: &str = "usdc-provider";
/// Balance query action name.
pub const GET_BALANCE: &str = "get_usdc_balance";
/// Transfer action name.
pub const TRANSFER: &str = "transfer_usdc";

/// Input field: the account whose balance is queried.
pub const USER_ADDRESS: &str = "user_address";
/// Input field: the transfer recipient.
pub const TO_ADDRESS: &str = "to_address";
/// Input field: the transfer amount in smallest units.
pub const AMOUNT: &str = "amount";

/// Fractional digits shown in amounts.
const DISPLAY_PRECISION: u8 = 2;

/// Configures and builds the USDC [`ActionProvider`].
///
/// By default the provider supports only Base Sepolia and uses its USDC
/// deployment.
#[derive(Debug, Clone)]
pub struct UsdcActionProvider {
    token: TokenDeployment,
    networks: SupportedNetworks,
    confirmation_timeout: Duration,
}

impl Default for UsdcActionProvider {
    fn default() -> Self {
        Self::new(base_sepolia::USDC)
    }
}

impl UsdcActionProvider {
    /// Create a provider for `token`, supported on Base Sepolia.
    pub fn new(token: TokenDeployment) -> Self {
        Self {
            token,
            networks: SupportedNetworks::only([base_sepolia::CHAIN_ID]),
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
        }
    }

    /// Create a provider for the configured token, supported only on the
    /// configured network.
    pub fn from_config(config: &ActionKitConfig) -> Self {
        Self::new(config.usdc())
            .with_supported_networks(SupportedNetworks::only([config.network().chain_id()]))
            .with_confirmation_timeout(config.confirmation_timeout())
    }

    /// Set the supported networks.
    pub fn with_supported_networks(mut self, networks: SupportedNetworks) -> Self {
        self.networks = networks;
        self
    }

    /// Set how long a transfer waits for inclusion before being reported as
    /// pending.
    pub const fn with_confirmation_timeout(mut self, timeout: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// Get the token deployment.
    pub const fn token(&self) -> TokenDeployment {
        self.token
    }

    /// Get the supported networks.
    pub const fn supported_networks(&self) -> &SupportedNetworks {
        &self.networks
    }

    /// Get the confirmation timeout.
    pub const fn confirmation_timeout(&self) -> Duration {
        self.confirmation_timeout
    }

    /// Build the provider with its two actions: [`GET_BALANCE`] then
    /// [`TRANSFER`].
    pub fn build<W: WalletTransport>(self) -> Result<ActionProvider<W>, ProviderError> {
        let erc20 = ContractInterface::erc20();

        let get_balance = ActionSpec::new(
            GET_BALANCE,
            "Get the USDC balance of an address. Takes `user_address`, a 0x-prefixed \
             40 hex digit account address.",
            ActionSchema::new([FieldSpec::address(USER_ADDRESS)
                .with_description("The address whose USDC balance to get")])?,
            GetBalance { token: self.token, balance_of: erc20.function("balanceOf")? },
        );

        let transfer = ActionSpec::new(
            TRANSFER,
            "Transfer USDC from the wallet to another address. Takes `to_address`, the \
             recipient, and `amount` in smallest units (1 USDC = 1000000).",
            ActionSchema::new([
                FieldSpec::address(TO_ADDRESS).with_description("The recipient address"),
                FieldSpec::uint(AMOUNT)
                    .with_description("The amount to transfer in smallest units, 6 decimals")
                    .with_constraint(Constraint::positive()),
            ])?,
            Transfer {
                token: self.token,
                transfer: erc20.function("transfer")?,
                timeout: self.confirmation_timeout,
            },
        );

        ActionProvider::builder(PROVIDER_NAME)
            .action(get_balance)
            .action(transfer)
            .supported_networks(self.networks)
            .build()
    }
}

/// The address as the caller wrote it, falling back to its checksummed form.
fn echoed(args: &CallArgs, field: &str, address: Address) -> String {
    args.text(field).map_or_else(|| address.to_string(), str::to_owned)
}

#[derive(Debug)]
struct GetBalance {
    token: TokenDeployment,
    balance_of: FunctionEntry,
}

impl GetBalance {
    async fn balance_of<W: WalletTransport>(
        &self,
        wallet: &W,
        user: Address,
    ) -> Result<U256, ActionError> {
        let args = self.balance_of.encode_args(&[DynSolValue::Address(user)])?;
        let data = wallet.get_state(self.token.address(), self.balance_of.selector(), &args).await?;

        match self.balance_of.decode_output(&data)?.as_slice() {
            [DynSolValue::Uint(balance, _)] => Ok(*balance),
            other => Err(ActionError::handler(format!("unexpected balanceOf output {other:?}"))),
        }
    }
}

#[async_trait]
impl<W: WalletTransport> ActionHandler<W> for GetBalance {
    #[instrument(skip_all, fields(token = %self.token.address()))]
    async fn call(&self, wallet: &W, args: CallArgs) -> Result<String, ActionError> {
        let user = args.address(USER_ADDRESS)?;

        match self.balance_of(wallet, user).await {
            Ok(balance) => {
                let amount = format_units(balance, self.token.decimals(), DISPLAY_PRECISION);
                Ok(format!("User {} has {amount} USDC", echoed(&args, USER_ADDRESS, user)))
            }
            Err(e) => {
                warn!(%user, %e, "balance query failed");
                Ok(format!("Error checking USDC balance: {e}"))
            }
        }
    }
}

#[derive(Debug)]
struct Transfer {
    token: TokenDeployment,
    transfer: FunctionEntry,
    timeout: Duration,
}

#[async_trait]
impl<W: WalletTransport> ActionHandler<W> for Transfer {
    #[instrument(skip_all, fields(token = %self.token.address()))]
    async fn call(&self, wallet: &W, args: CallArgs) -> Result<String, ActionError> {
        let to = args.address(TO_ADDRESS)?;
        let amount = args.uint(AMOUNT)?;

        let data =
            self.transfer.encode_call(&[DynSolValue::Address(to), DynSolValue::Uint(amount, 256)])?;
        let request = TransactionRequest::new(self.token.address(), data).with_value(U256::ZERO);

        let tx_hash = match wallet.submit(&request).await {
            Ok(tx_hash) => tx_hash,
            Err(e) => {
                warn!(%to, %e, "transfer submission failed");
                return Ok(format!("Error transferring USDC: {e}"));
            }
        };
        debug!(%tx_hash, %to, %amount, "transfer submitted");

        match wallet.await_confirmation(tx_hash, self.timeout).await {
            Ok(receipt) if receipt.is_success() => {
                let amount = format_units(amount, self.token.decimals(), DISPLAY_PRECISION);
                Ok(format!(
                    "Successfully transferred {amount} USDC to {}. Transaction hash: {tx_hash}",
                    echoed(&args, TO_ADDRESS, to)
                ))
            }
            Ok(_) => {
                warn!(%tx_hash, "transfer reverted");
                Ok(format!("Error transferring USDC: transaction {tx_hash} reverted"))
            }
            Err(TransportError::Timeout { timeout, .. }) => Ok(format!(
                "USDC transfer {tx_hash} is pending: outcome unknown after {}s",
                timeout.as_secs()
            )),
            Err(e) => {
                warn!(%tx_hash, %e, "confirmation failed");
                Ok(format!("Error transferring USDC: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionkit_constants::{base_mainnet, Network};
    use actionkit_transport::EvmTransport;

    #[test]
    fn default_scope_is_base_sepolia() {
        let provider = UsdcActionProvider::default();
        assert_eq!(provider.token(), base_sepolia::USDC);
        assert!(provider.supported_networks().supports(&base_sepolia::NETWORK));
        assert!(!provider.supported_networks().supports(&base_mainnet::NETWORK));
        assert_eq!(provider.confirmation_timeout(), DEFAULT_CONFIRMATION_TIMEOUT);
    }

    #[test]
    fn declares_two_actions() {
        let provider: ActionProvider<EvmTransport> = UsdcActionProvider::default().build().unwrap();
        assert_eq!(provider.name(), PROVIDER_NAME);

        let names: Vec<_> = provider.list_actions().iter().map(ActionSpec::name).collect();
        assert_eq!(names, [GET_BALANCE, TRANSFER]);

        let transfer = provider.action(TRANSFER).unwrap().schema().json_schema();
        assert_eq!(transfer["required"], serde_json::json!([TO_ADDRESS, AMOUNT]));
        assert_eq!(transfer["properties"][AMOUNT]["minimum"], 1);
        assert!(!provider.supports_network(&Network::unnamed(1)));
    }
}
