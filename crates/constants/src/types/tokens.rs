use alloy::primitives::Address;

/// A token contract deployed on a network.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TokenDeployment {
    /// Ticker symbol, e.g. `USDC`.
    symbol: &'static str,
    /// Contract address.
    address: Address,
    /// Number of decimals in the token's smallest unit.
    decimals: u8,
}

impl TokenDeployment {
    /// Create a new token deployment.
    pub const fn new(symbol: &'static str, address: Address, decimals: u8) -> Self {
        Self { symbol, address, decimals }
    }

    /// Use a different contract address for the same token.
    pub const fn at(self, address: Address) -> Self {
        Self { address, ..self }
    }

    /// Get the ticker symbol.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Get the contract address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Get the number of decimals.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }
}
