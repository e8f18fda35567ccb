//! Static symbol-to-address table.
//!
//! The book is keyed by network name and then by symbol. It is loaded once,
//! either from a JSON document or from the built-in mainnet defaults, and is
//! read-only afterwards.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{AppError, Result},
    ethereum::constants::{MAINNET, MAINNET_TOKENS},
};

/// Immutable mapping of `network -> symbol -> address`.
///
/// Addresses are kept as strings exactly as configured; they are not
/// validated when loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    networks: HashMap<String, HashMap<String, String>>,
}

impl AddressBook {
    /// Create an address book from an already-built table.
    pub fn new(networks: HashMap<String, HashMap<String, String>>) -> Self {
        Self { networks }
    }

    /// Create a single-network address book from `(symbol, address)` pairs.
    pub fn for_network<I, S, A>(network: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
        A: Into<String>,
    {
        let table = entries.into_iter().map(|(s, a)| (s.into(), a.into())).collect();
        Self { networks: HashMap::from([(network.to_string(), table)]) }
    }

    /// Built-in mainnet address book.
    pub fn mainnet() -> Self {
        Self::for_network(
            MAINNET,
            MAINNET_TOKENS.iter().map(|(symbol, address)| (*symbol, address.to_checksum(None))),
        )
    }

    /// Parse an address book from JSON, e.g. `{"mainnet": {"USDT": "0x..."}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let book: Self = serde_json::from_str(json)?;
        Ok(book)
    }

    /// Load an address book from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read address book {}: {}", path.display(), e))
        })?;

        let book = Self::from_json_str(&json)?;
        info!(path = %path.display(), entries = book.len(), "Loaded address book");
        Ok(book)
    }

    /// Look up the address configured for `symbol` on `network`.
    pub fn get(&self, network: &str, symbol: &str) -> Option<&str> {
        self.networks.get(network)?.get(symbol).map(String::as_str)
    }

    /// Network names present in the book, sorted.
    pub fn networks(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.networks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Symbols configured for `network`, sorted.
    pub fn symbols(&self, network: &str) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .networks
            .get(network)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        symbols.sort_unstable();
        symbols
    }

    /// Total number of entries across all networks.
    pub fn len(&self) -> usize {
        self.networks.values().map(HashMap::len).sum()
    }

    /// Whether the book has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
