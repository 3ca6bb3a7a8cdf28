use crate::ValidationError;
use actionkit_constants::{Network, SupportedNetworks};
use actionkit_transport::TransportError;
use actionkit_types::AbiError;

/// Errors surfacing from an action invocation.
///
/// [`ActionRegistry::invoke`] renders every variant as an `Error: ...`
/// string, so none of these reach the caller as a fault.
///
/// [`ActionRegistry::invoke`]: crate::ActionRegistry::invoke
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ActionError {
    /// No action is registered under the name.
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    /// The owning provider does not support the current network.
    #[error("action `{action}` is not available on {network}; supported: {supported}")]
    NetworkMismatch {
        /// The requested action.
        action: String,
        /// The current network.
        network: Network,
        /// The networks the provider supports.
        supported: SupportedNetworks,
    },
    /// The input failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Call data could not be encoded, or return data decoded.
    #[error("abi error: {0}")]
    Abi(#[from] AbiError),
    /// Chain I/O failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A handler-specific failure.
    #[error("{0}")]
    Handler(String),
}

impl ActionError {
    /// Create a handler-specific error.
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }
}
