//! Token-related types.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Outcome of resolving a symbol against the address book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedAddress {
    /// Symbol as supplied by the caller.
    pub symbol: String,
    /// Address from the book, or the symbol itself when passed through.
    pub address: String,
    /// Address book network the symbol was resolved against.
    pub network: String,
}

/// Information about a resolved token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token contract address.
    pub address: String,
    /// On-chain token symbol.
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
}

/// Balance information response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceInfo {
    /// Holder address.
    pub address: String,
    /// Token information.
    pub token: TokenInfo,
    /// Human-readable balance with proper decimals.
    pub balance: String,
    /// Raw balance in smallest unit.
    pub balance_raw: String,
}

/// Format a U256 value with decimals to a human-readable string.
pub fn format_units(value: U256, decimals: u8) -> String {
    if value == U256::ZERO {
        return "0".to_string();
    }

    let value_str = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return value_str;
    }

    let len = value_str.len();
    if len <= decimals {
        // Value is less than 1, pad with zeros
        let zeros = decimals - len;
        let decimal_part = value_str.trim_end_matches('0');
        format!("0.{}{}", "0".repeat(zeros), decimal_part)
    } else {
        let (integer, decimal) = value_str.split_at(len - decimals);
        let decimal = decimal.trim_end_matches('0');
        if decimal.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, decimal)
        }
    }
}
