use actionkit_constants::ParseNetworkError;

/// Error type for [`crate::config`] module. Captures errors related to loading
/// configuration from the environment or other sources.
///
/// Every variant is fatal at startup: nothing is reachable until the
/// configuration loads.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error loading from environment variable
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing environment variable
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Error parsing hex from environment variable
    #[error("failed to parse hex: {0}")]
    Hex(#[from] alloy::hex::FromHexError),
    /// Error parsing a URL
    #[error("failed to parse URL: {0}")]
    Url(#[from] url::ParseError),
    /// Error parsing a network
    #[error(transparent)]
    Network(#[from] ParseNetworkError),
    /// The signing credential is malformed.
    #[error("invalid private key: {0}")]
    PrivateKey(String),
    /// No token address was configured and none is known for the chain.
    #[error("no USDC address configured for chain id {0}; set USDC_ADDRESS")]
    MissingToken(u64),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
