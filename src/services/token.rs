//! Token query service.
//!
//! Reads metadata and balances through contract handles produced by the
//! resolver.

use std::sync::Arc;

use alloy::{primitives::Address, providers::Provider};

use crate::{
    error::Result,
    ethereum::{
        contracts::{AssetContract, TokenMetadata},
        SignerProvider,
    },
    services::AssetResolver,
    types::{format_units, BalanceInfo, TokenInfo},
};

/// Service for querying ERC20 tokens by symbol.
#[derive(Clone)]
pub struct TokenService<P = SignerProvider> {
    provider: P,
    resolver: Arc<AssetResolver>,
}

impl<P> TokenService<P>
where
    P: Provider + Clone,
{
    /// Create a new token service.
    pub fn new(provider: P, resolver: Arc<AssetResolver>) -> Self {
        Self { provider, resolver }
    }

    /// Resolve `symbol` to a contract handle on this service's provider.
    pub async fn asset(&self, symbol: &str) -> Result<AssetContract<P>> {
        self.resolver.resolve_asset(symbol, self.provider.clone()).await
    }

    /// Get token metadata (name, symbol, decimals) for a symbol or address.
    pub async fn get_token_metadata(&self, symbol: &str) -> Result<TokenMetadata> {
        let asset = self.asset(symbol).await?;
        Ok(read_metadata(&asset).await)
    }

    /// Get the ERC20 balance of `holder` for a symbol or address.
    pub async fn get_balance(&self, holder: Address, symbol: &str) -> Result<BalanceInfo> {
        tracing::debug!(holder = %holder, token = %symbol, "Querying ERC20 balance");

        let asset = self.asset(symbol).await?;
        let metadata = read_metadata(&asset).await;
        let balance = asset.balanceOf(holder).call().await?;

        Ok(BalanceInfo {
            address: format!("{holder:?}"),
            token: TokenInfo {
                address: format!("{:?}", metadata.address),
                symbol: metadata.symbol,
                decimals: metadata.decimals,
            },
            balance: format_units(balance, metadata.decimals),
            balance_raw: balance.to_string(),
        })
    }
}

/// Read name, symbol and decimals, substituting defaults for failed reads.
///
/// Reads are issued in the order symbol, name, decimals.
pub async fn read_metadata<P: Provider>(asset: &AssetContract<P>) -> TokenMetadata {
    let symbol = asset.symbol().call().await.unwrap_or_else(|_| "UNKNOWN".to_string());
    let name = asset.name().call().await.unwrap_or_else(|_| "Unknown Token".to_string());
    let decimals = asset.decimals().call().await.unwrap_or(18);

    TokenMetadata { address: *asset.address(), name, symbol, decimals }
}
