use crate::{KnownNetwork, ParseNetworkError};
use alloy::primitives::ChainId;
use std::{borrow::Cow, collections::BTreeSet, fmt, hash, str::FromStr};

/// An EVM network identity.
///
/// Networks are identified by their chain id alone. The name is carried for
/// display purposes and does not participate in equality or hashing.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// The chain id.
    chain_id: ChainId,
    /// Optional human-readable network name, e.g. `base-sepolia`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<Cow<'static, str>>,
}

impl Network {
    /// Create a network with a static name.
    pub const fn named(chain_id: ChainId, name: &'static str) -> Self {
        Self { chain_id, name: Some(Cow::Borrowed(name)) }
    }

    /// Create a network without a name.
    pub const fn unnamed(chain_id: ChainId) -> Self {
        Self { chain_id, name: None }
    }

    /// Set the network name.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the chain id.
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Get the network name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the [`KnownNetwork`] with this chain id, if any.
    pub const fn known(&self) -> Option<KnownNetwork> {
        KnownNetwork::from_chain_id(self.chain_id)
    }
}

impl From<ChainId> for Network {
    fn from(chain_id: ChainId) -> Self {
        match KnownNetwork::from_chain_id(chain_id) {
            Some(known) => known.network(),
            None => Self::unnamed(chain_id),
        }
    }
}

impl From<KnownNetwork> for Network {
    fn from(known: KnownNetwork) -> Self {
        known.network()
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for Network {}

impl hash::Hash for Network {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.chain_id),
            None => write!(f, "{}", self.chain_id),
        }
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    /// Parse either a decimal chain id or a known network name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(chain_id) = s.parse::<ChainId>() {
            return Ok(chain_id.into());
        }
        s.parse::<KnownNetwork>().map(Into::into)
    }
}

/// The set of networks on which an action provider's actions may run.
///
/// This is the single authority consulted before actions are exposed or
/// invoked for a connected network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SupportedNetworks {
    /// Every network.
    #[default]
    All,
    /// Only the networks with these chain ids.
    Only(BTreeSet<ChainId>),
}

impl SupportedNetworks {
    /// Support only the given chain ids.
    pub fn only(chain_ids: impl IntoIterator<Item = ChainId>) -> Self {
        Self::Only(chain_ids.into_iter().collect())
    }

    /// Support only the given networks.
    pub fn networks<'a>(networks: impl IntoIterator<Item = &'a Network>) -> Self {
        Self::only(networks.into_iter().map(Network::chain_id))
    }

    /// True if the chain id is supported.
    pub fn supports_chain_id(&self, chain_id: ChainId) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.contains(&chain_id),
        }
    }

    /// True if the network is supported.
    pub fn supports(&self, network: &Network) -> bool {
        self.supports_chain_id(network.chain_id())
    }
}

impl fmt::Display for SupportedNetworks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all networks"),
            Self::Only(ids) => {
                f.write_str("chain ids [")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{id}")?;
                }
                f.write_str("]")
            }
        }
    }
}
