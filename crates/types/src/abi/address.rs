use crate::abi::AbiError;
use alloy::primitives::Address;

/// Parse a `0x`-prefixed, 40-hex-digit address.
///
/// All-lowercase and all-uppercase addresses are accepted as-is. Mixed-case
/// addresses must carry a valid EIP-55 checksum.
pub fn parse_address(s: &str) -> Result<Address, AbiError> {
    let invalid = || AbiError::InvalidAddress(s.to_string());

    let digits = s.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let address: Address = digits.parse().map_err(|_| invalid())?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        let expected = address.to_checksum(None);
        if expected[2..] != *digits {
            return Err(AbiError::ChecksumMismatch { given: s.to_string(), expected });
        }
    }

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const EXPECTED: Address = address!("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");

    #[test]
    fn accepts_any_single_case() {
        assert_eq!(parse_address(&CHECKSUMMED.to_lowercase()).unwrap(), EXPECTED);
        let upper = format!("0x{}", CHECKSUMMED[2..].to_uppercase());
        assert_eq!(parse_address(&upper).unwrap(), EXPECTED);
    }

    #[test]
    fn accepts_valid_checksum() {
        assert_eq!(parse_address(CHECKSUMMED).unwrap(), EXPECTED);
    }

    #[test]
    fn rejects_bad_checksum() {
        let bad = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD";
        assert_eq!(
            parse_address(bad).unwrap_err(),
            AbiError::ChecksumMismatch { given: bad.to_string(), expected: CHECKSUMMED.to_string() }
        );
    }

    #[test]
    fn rejects_malformed() {
        for s in [
            "0x123",
            "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "0xzzaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "",
        ] {
            assert_eq!(parse_address(s).unwrap_err(), AbiError::InvalidAddress(s.to_string()));
        }
    }
}
