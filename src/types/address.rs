//! Address-shape matching.

use once_cell::sync::Lazy;
use regex::Regex;

static ETHEREUM_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("ethereum address regex must compile")
});

/// Whether `s` has the shape of a hex Ethereum address (`0x` + 40 hex chars).
///
/// Only the shape is checked; the EIP-55 checksum is not verified.
pub fn is_ethereum_address(s: &str) -> bool {
    ETHEREUM_ADDRESS_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_checksummed_and_lowercase() {
        assert!(is_ethereum_address("0xdAC17F958D2ee523a2206206994597C13D831ec7"));
        assert!(is_ethereum_address("0xdac17f958d2ee523a2206206994597c13d831ec7"));
        assert!(is_ethereum_address("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_rejects_tickers() {
        assert!(!is_ethereum_address("USDT"));
        assert!(!is_ethereum_address("stETH"));
        assert!(!is_ethereum_address("OUSDProxy"));
        assert!(!is_ethereum_address(""));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        // missing prefix
        assert!(!is_ethereum_address("dAC17F958D2ee523a2206206994597C13D831ec7"));
        // uppercase prefix
        assert!(!is_ethereum_address("0XdAC17F958D2ee523a2206206994597C13D831ec7"));
        // 39 and 41 hex chars
        assert!(!is_ethereum_address("0xdAC17F958D2ee523a2206206994597C13D831ec"));
        assert!(!is_ethereum_address("0xdAC17F958D2ee523a2206206994597C13D831ec70"));
        // non-hex
        assert!(!is_ethereum_address("0xgAC17F958D2ee523a2206206994597C13D831ec7"));
        // surrounding whitespace
        assert!(!is_ethereum_address(" 0xdAC17F958D2ee523a2206206994597C13D831ec7"));
        // short placeholder
        assert!(!is_ethereum_address("0xC"));
    }
}
