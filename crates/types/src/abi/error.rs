/// Errors produced while encoding or decoding contract-call data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    /// A value could not be encoded as its declared type.
    #[error("encoding error: {0}")]
    Encoding(String),
    /// Return data did not match the expected types.
    #[error("decoding error: {0}")]
    Decoding(String),
    /// The string is not a 20-byte hex address.
    #[error("invalid address {0:?}: expected 0x followed by 40 hex digits")]
    InvalidAddress(String),
    /// A mixed-case address whose checksum disagrees with the canonical form.
    #[error("checksum mismatch for address {given}: expected {expected}")]
    ChecksumMismatch {
        /// The address as given.
        given: String,
        /// The EIP-55 checksummed form.
        expected: String,
    },
    /// The contract interface description could not be parsed.
    #[error("invalid contract interface: {0}")]
    Interface(String),
    /// The function is not part of the contract interface.
    #[error("function {0} not found in contract interface")]
    UnknownFunction(String),
}
