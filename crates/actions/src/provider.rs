use crate::{schema::SchemaError, ActionDescriptor, ActionSpec};
use actionkit_constants::{Network, SupportedNetworks};
use actionkit_types::AbiError;
use std::{collections::HashSet, fmt};

/// Errors building an [`ActionProvider`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Two actions of the provider share a name.
    #[error("provider `{provider}` declares action `{action}` more than once")]
    DuplicateAction {
        /// The provider.
        provider: String,
        /// The repeated action name.
        action: String,
    },
    /// An action schema is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// A contract interface the provider needs could not be resolved.
    #[error("contract interface error: {0}")]
    Abi(#[from] AbiError),
}

/// An immutable bundle of related actions, scoped to a set of networks.
pub struct ActionProvider<W> {
    name: String,
    actions: Vec<ActionSpec<W>>,
    networks: SupportedNetworks,
}

impl<W> fmt::Debug for ActionProvider<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionProvider")
            .field("name", &self.name)
            .field("actions", &self.actions)
            .field("networks", &self.networks)
            .finish()
    }
}

impl<W> Clone for ActionProvider<W> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            actions: self.actions.clone(),
            networks: self.networks.clone(),
        }
    }
}

impl<W> ActionProvider<W> {
    /// Start building a provider.
    pub fn builder(name: impl Into<String>) -> ActionProviderBuilder<W> {
        ActionProviderBuilder {
            name: name.into(),
            actions: Vec::new(),
            networks: SupportedNetworks::default(),
        }
    }

    /// Get the provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the actions in declaration order.
    pub fn list_actions(&self) -> &[ActionSpec<W>] {
        &self.actions
    }

    /// Look up an action by name.
    pub fn action(&self, name: &str) -> Option<&ActionSpec<W>> {
        self.actions.iter().find(|action| action.name() == name)
    }

    /// Describe the actions in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = ActionDescriptor> + '_ {
        self.actions.iter().map(ActionSpec::descriptor)
    }

    /// Get the supported networks.
    pub const fn supported_networks(&self) -> &SupportedNetworks {
        &self.networks
    }

    /// True if the provider's actions may run on `network`.
    pub fn supports_network(&self, network: &Network) -> bool {
        self.networks.supports(network)
    }
}

/// True if `provider`'s actions may be exposed or invoked on `network`.
pub fn supports<W>(provider: &ActionProvider<W>, network: &Network) -> bool {
    provider.supports_network(network)
}

/// Builder for [`ActionProvider`]. Defaults to supporting every network.
pub struct ActionProviderBuilder<W> {
    name: String,
    actions: Vec<ActionSpec<W>>,
    networks: SupportedNetworks,
}

impl<W> fmt::Debug for ActionProviderBuilder<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionProviderBuilder")
            .field("name", &self.name)
            .field("actions", &self.actions)
            .field("networks", &self.networks)
            .finish()
    }
}

impl<W> ActionProviderBuilder<W> {
    /// Add an action.
    pub fn action(mut self, action: ActionSpec<W>) -> Self {
        self.actions.push(action);
        self
    }

    /// Add several actions.
    pub fn actions(mut self, actions: impl IntoIterator<Item = ActionSpec<W>>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Restrict the provider to the given networks.
    pub fn supported_networks(mut self, networks: SupportedNetworks) -> Self {
        self.networks = networks;
        self
    }

    /// Build the provider, rejecting repeated action names.
    pub fn build(self) -> Result<ActionProvider<W>, ProviderError> {
        let mut seen = HashSet::with_capacity(self.actions.len());
        for action in &self.actions {
            if !seen.insert(action.name()) {
                return Err(ProviderError::DuplicateAction {
                    provider: self.name.clone(),
                    action: action.name().to_string(),
                });
            }
        }
        Ok(ActionProvider { name: self.name, actions: self.actions, networks: self.networks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionError, ActionHandler, ActionSchema, CallArgs};
    use actionkit_constants::base_sepolia;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ActionHandler<()> for Echo {
        async fn call(&self, _: &(), _: CallArgs) -> Result<String, ActionError> {
            Ok("echo".to_string())
        }
    }

    fn spec(name: &str) -> ActionSpec<()> {
        ActionSpec::new(name, "test action", ActionSchema::empty(), Echo)
    }

    #[test]
    fn declaration_order() {
        let provider = ActionProvider::builder("p")
            .action(spec("b"))
            .actions([spec("a"), spec("c")])
            .build()
            .unwrap();

        let names: Vec<_> = provider.list_actions().iter().map(ActionSpec::name).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert!(provider.action("a").is_some());
        assert!(provider.action("d").is_none());
    }

    #[test]
    fn duplicate_action() {
        let err = ActionProvider::builder("p").action(spec("a")).action(spec("a")).build();
        assert_eq!(
            err.unwrap_err(),
            ProviderError::DuplicateAction { provider: "p".into(), action: "a".into() }
        );
    }

    #[test]
    fn network_scope() {
        let all = ActionProvider::<()>::builder("all").build().unwrap();
        assert!(supports(&all, &Network::unnamed(12345)));

        let only = ActionProvider::<()>::builder("only")
            .supported_networks(SupportedNetworks::only([base_sepolia::CHAIN_ID]))
            .build()
            .unwrap();
        assert!(only.supports_network(&base_sepolia::NETWORK));
        assert!(!supports(&only, &Network::unnamed(1)));
    }
}
