//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use alloy::{
    primitives::Bytes,
    providers::{DynProvider, Provider, ProviderBuilder},
    sol_types::SolValue,
    transports::mock::Asserter,
};
use asset_resolver_mcp::{AddressBook, AssetResolver, AssetResolverServer, Config};

/// USDT on mainnet, as a literal address.
pub const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

/// Vitalik's public address.
pub const HOLDER: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

/// A provider backed by a scripted response queue instead of a node.
pub fn mocked_provider() -> (Asserter, DynProvider) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone()).erased();
    (asserter, provider)
}

/// ABI-encode a single return value as `eth_call` output.
pub fn encoded<T: SolValue>(value: T) -> Bytes {
    Bytes::from(value.abi_encode())
}

/// Mainnet resolver over the given `(symbol, address)` entries.
pub fn resolver(entries: &[(&str, &str)]) -> AssetResolver {
    let book = AddressBook::for_network("mainnet", entries.iter().copied());
    AssetResolver::mainnet(Arc::new(book))
}

/// Helper to create a live server from environment variables.
pub fn create_test_server() -> Option<AssetResolverServer> {
    let _ = dotenvy::dotenv();

    let rpc_url = std::env::var("ETHEREUM_RPC_URL").ok()?;
    if rpc_url.is_empty() {
        return None;
    }

    let mut config = Config::read_only(rpc_url);
    config.log_level = "warn".to_string();

    AssetResolverServer::new(config).ok()
}

/// Skip test if server cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_server {
    () => {
        match common::create_test_server() {
            Some(server) => server,
            None => {
                eprintln!("Skipping test: ETHEREUM_RPC_URL not set");
                return;
            }
        }
    };
}
