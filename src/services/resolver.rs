//! Symbol resolution service.
//!
//! Maps token symbols to addresses using the address book, and binds resolved
//! addresses to ERC20 contract handles.

use std::sync::Arc;

use alloy::{primitives::Address, providers::Provider};
use tracing::debug;

use crate::{
    config::DEFAULT_NETWORK,
    error::{AppError, Result},
    ethereum::contracts::{AssetContract, IERC20Metadata},
    services::AddressBook,
    types::is_ethereum_address,
};

/// Suffix tried when a bare symbol is not in the address book.
pub const PROXY_SUFFIX: &str = "Proxy";

/// Resolves token symbols against one network of an address book.
///
/// A symbol resolves, in order, to:
/// 1. its own address book entry,
/// 2. the entry for `symbol + "Proxy"`,
/// 3. the symbol itself, so literal addresses pass through unchanged.
///
/// Empty entries count as missing. Resolution fails only when all three
/// candidates are empty.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    book: Arc<AddressBook>,
    network: String,
}

impl AssetResolver {
    /// Create a resolver for `network` in `book`.
    pub fn new(book: Arc<AddressBook>, network: impl Into<String>) -> Self {
        Self { book, network: network.into() }
    }

    /// Create a resolver for the `mainnet` section of `book`.
    pub fn mainnet(book: Arc<AddressBook>) -> Self {
        Self::new(book, DEFAULT_NETWORK)
    }

    /// Network this resolver reads from.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Address book backing this resolver.
    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    fn lookup(&self, symbol: &str) -> Option<&str> {
        self.book.get(&self.network, symbol).filter(|address| !address.is_empty())
    }

    fn resolve(&self, symbol: &str) -> Result<String> {
        let asset_address = self
            .lookup(symbol)
            .or_else(|| self.lookup(&format!("{symbol}{PROXY_SUFFIX}")))
            .unwrap_or(symbol);

        if asset_address.is_empty() {
            return Err(AppError::Resolution(symbol.to_string()));
        }
        Ok(asset_address.to_string())
    }

    /// Resolve a symbol to an address string.
    ///
    /// Unknown symbols are returned unchanged.
    pub fn resolve_address(&self, symbol: &str) -> Result<String> {
        let asset_address = self.resolve(symbol)?;
        debug!(symbol = %symbol, address = %asset_address, "Resolved symbol to address");
        Ok(asset_address)
    }

    /// Resolve a symbol to an ERC20 contract handle bound to `provider`.
    ///
    /// When `symbol` is itself a literal address, the contract's `symbol()` is
    /// read once for logging. A failure of that read is returned to the caller.
    pub async fn resolve_asset<P>(&self, symbol: &str, provider: P) -> Result<AssetContract<P>>
    where
        P: Provider,
    {
        let asset_address = self.resolve(symbol)?;
        let is_literal = is_ethereum_address(symbol);

        if !is_literal {
            debug!(symbol = %symbol, address = %asset_address, "Resolved symbol to address");
        }

        let address: Address = asset_address
            .parse()
            .map_err(|_| AppError::InvalidAddress(asset_address.clone()))?;
        let asset = IERC20Metadata::new(address, provider);

        if is_literal {
            let onchain_symbol = asset.symbol().call().await?;
            debug!(
                address = %address,
                symbol = %onchain_symbol,
                "Resolved address to on-chain asset"
            );
        }

        Ok(asset)
    }
}
