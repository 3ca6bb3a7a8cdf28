use crate::{validate, ActionDescriptor, ActionError, ActionProvider, ActionSpec};
use actionkit_constants::Network;
use serde_json::{Map, Value};
use std::{collections::HashMap, fmt};
use tracing::{debug, instrument, warn};

/// Errors registering a provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// An action name is already registered by another provider.
    #[error("action `{name}` is already registered by provider `{existing_provider}`")]
    DuplicateActionName {
        /// The colliding action name.
        name: String,
        /// The provider that registered it first.
        existing_provider: String,
    },
}

/// Aggregates providers into a flat, name-keyed action surface and
/// dispatches invocations to them with the held wallet.
///
/// Action names are unique across all registered providers.
pub struct ActionRegistry<W> {
    wallet: W,
    providers: Vec<ActionProvider<W>>,
    /// Action name to (provider index, action index).
    index: HashMap<String, (usize, usize)>,
}

impl<W: fmt::Debug> fmt::Debug for ActionRegistry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("wallet", &self.wallet)
            .field("providers", &self.providers)
            .finish_non_exhaustive()
    }
}

impl<W> ActionRegistry<W> {
    /// Create an empty registry around a wallet.
    pub fn new(wallet: W) -> Self {
        Self { wallet, providers: Vec::new(), index: HashMap::new() }
    }

    /// Register a provider and return the registry.
    pub fn with_provider(mut self, provider: ActionProvider<W>) -> Result<Self, RegistryError> {
        self.register(provider)?;
        Ok(self)
    }

    /// Register a provider.
    ///
    /// Fails if any of its action names is already registered. On failure
    /// the registry is unchanged.
    pub fn register(&mut self, provider: ActionProvider<W>) -> Result<(), RegistryError> {
        for action in provider.list_actions() {
            if let Some(&(existing, _)) = self.index.get(action.name()) {
                return Err(RegistryError::DuplicateActionName {
                    name: action.name().to_string(),
                    existing_provider: self.providers[existing].name().to_string(),
                });
            }
        }

        let provider_idx = self.providers.len();
        for (action_idx, action) in provider.list_actions().iter().enumerate() {
            self.index.insert(action.name().to_string(), (provider_idx, action_idx));
        }
        debug!(
            provider = provider.name(),
            actions = provider.list_actions().len(),
            "registered provider"
        );
        self.providers.push(provider);
        Ok(())
    }

    /// Get the wallet.
    pub const fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Get the registered providers in registration order.
    pub fn providers(&self) -> &[ActionProvider<W>] {
        &self.providers
    }

    /// Look up an action and its owning provider.
    pub fn lookup(&self, name: &str) -> Option<(&ActionProvider<W>, &ActionSpec<W>)> {
        let &(provider_idx, action_idx) = self.index.get(name)?;
        let provider = self.providers.get(provider_idx)?;
        provider.list_actions().get(action_idx).map(|action| (provider, action))
    }

    /// Describe every action, in registration then declaration order.
    pub fn list_actions(&self) -> Vec<ActionDescriptor> {
        self.providers.iter().flat_map(ActionProvider::descriptors).collect()
    }

    /// Describe the actions usable on `network`.
    pub fn actions_for(&self, network: &Network) -> Vec<ActionDescriptor> {
        self.providers
            .iter()
            .filter(|provider| provider.supports_network(network))
            .flat_map(ActionProvider::descriptors)
            .collect()
    }
}

impl<W: Sync> ActionRegistry<W> {
    /// Invoke an action by name.
    ///
    /// Checks run in order: the action exists, its provider supports
    /// `network`, and `raw` validates against its schema. Only then is the
    /// handler called.
    #[instrument(skip_all, fields(action = name, chain_id = network.chain_id()))]
    pub async fn try_invoke(
        &self,
        name: &str,
        raw: &Map<String, Value>,
        network: &Network,
    ) -> Result<String, ActionError> {
        let (provider, action) =
            self.lookup(name).ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;

        if !provider.supports_network(network) {
            return Err(ActionError::NetworkMismatch {
                action: name.to_string(),
                network: network.clone(),
                supported: provider.supported_networks().clone(),
            });
        }

        let args = validate(action.schema(), raw)?;
        debug!(provider = provider.name(), "dispatching");
        action.handler().call(&self.wallet, args).await
    }

    /// Invoke an action by name, rendering any error as `Error: ...`.
    ///
    /// Always returns text.
    pub async fn invoke(&self, name: &str, raw: &Map<String, Value>, network: &Network) -> String {
        match self.try_invoke(name, raw, network).await {
            Ok(result) => result,
            Err(e) => {
                warn!(action = name, %e, "action failed");
                format!("Error: {e}")
            }
        }
    }
}
