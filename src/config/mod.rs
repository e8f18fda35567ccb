//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::{error::AppError, ethereum::constants::MAINNET};

/// Network key used when `ADDRESS_BOOK_NETWORK` is not set.
pub const DEFAULT_NETWORK: &str = MAINNET;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Optional private key (hex, with or without 0x prefix). Read-only when absent.
    pub private_key: Option<String>,
    /// Optional path to a JSON address book. Built-in mainnet table when absent.
    pub address_book_path: Option<PathBuf>,
    /// Address book network to resolve symbols against.
    pub network: String,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_PRIVATE_KEY`: Private key for a signing provider
    /// - `ADDRESS_BOOK_PATH`: JSON address book (`{"mainnet": {"USDT": "0x..."}}`)
    /// - `ADDRESS_BOOK_NETWORK`: Network key inside the address book (default: mainnet)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let rpc_url = env::var("ETHEREUM_RPC_URL").map_err(|_| {
            AppError::Config("ETHEREUM_RPC_URL environment variable not set".into())
        })?;

        let private_key = non_empty_var("ETHEREUM_PRIVATE_KEY");
        let address_book_path = non_empty_var("ADDRESS_BOOK_PATH").map(PathBuf::from);
        let network =
            non_empty_var("ADDRESS_BOOK_NETWORK").unwrap_or_else(|| DEFAULT_NETWORK.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { rpc_url, private_key, address_book_path, network, log_level })
    }

    /// Read-only configuration against the built-in mainnet address book.
    pub fn read_only(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            private_key: None,
            address_book_path: None,
            network: DEFAULT_NETWORK.to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
