use crate::config::ConfigError;
use actionkit_constants::Network;
use alloy::primitives::Address;
use std::env;
use url::Url;

/// Load a variable from the environment
pub fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a variable from the environment
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Load a variable from the environment
pub fn load_u64(key: &str) -> Result<u64, ConfigError> {
    let val = load_string(key)?;
    val.trim().parse::<u64>().map_err(Into::into)
}

/// Load a variable from the environment. Absent is `Ok(None)`, present but
/// malformed is an error.
pub fn load_u64_opt(key: &str) -> Result<Option<u64>, ConfigError> {
    load_string_opt(key).map(|val| val.trim().parse::<u64>()).transpose().map_err(Into::into)
}

/// Load a variable from the environment
pub fn load_url(key: &str) -> Result<Url, ConfigError> {
    load_string(key)?.parse().map_err(Into::into)
}

/// Load a variable from the environment
pub fn load_address(key: &str) -> Result<Address, ConfigError> {
    load_string(key)?.parse().map_err(Into::into)
}

/// Load a variable from the environment. Absent is `Ok(None)`, present but
/// malformed is an error.
pub fn load_address_opt(key: &str) -> Result<Option<Address>, ConfigError> {
    load_string_opt(key).map(|val| val.parse()).transpose().map_err(Into::into)
}

/// Load a network, given as a chain id or a known network name, from the
/// environment.
pub fn load_network_opt(key: &str) -> Result<Option<Network>, ConfigError> {
    load_string_opt(key).map(|val| val.parse()).transpose().map_err(Into::into)
}
