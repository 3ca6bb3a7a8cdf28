mod chains;
pub use chains::{KnownNetwork, ParseNetworkError};

mod tokens;
pub use tokens::TokenDeployment;
