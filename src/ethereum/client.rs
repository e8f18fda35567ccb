//! Ethereum RPC client.

use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
};

use crate::{
    error::{AppError, Result},
    ethereum::WalletManager,
};

/// Type-erased provider, optionally carrying a signing wallet.
pub type SignerProvider = DynProvider<Ethereum>;

/// Ethereum RPC client wrapper.
///
/// Construction does NOT make any network calls; the HTTP connection is used
/// lazily on the first contract read.
#[derive(Clone)]
pub struct EthereumClient {
    provider: SignerProvider,
    signer: Option<Address>,
}

impl EthereumClient {
    /// Create a read-only client.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Self::build(rpc_url, None)
    }

    /// Create a client whose provider signs with `wallet`.
    pub fn with_wallet(rpc_url: &str, wallet: &WalletManager) -> Result<Self> {
        Self::build(rpc_url, Some(wallet))
    }

    fn build(rpc_url: &str, wallet: Option<&WalletManager>) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        let provider = match wallet {
            Some(wallet) => {
                ProviderBuilder::new().wallet(wallet.ethereum_wallet()).connect_http(url).erased()
            }
            None => ProviderBuilder::new().connect_http(url).erased(),
        };
        let signer = wallet.map(WalletManager::address);

        tracing::info!(
            rpc_url = %rpc_url,
            signer = ?signer,
            "Ethereum client created (lazy initialization)"
        );

        Ok(Self { provider, signer })
    }

    /// Get the provider used to bind contract handles.
    pub fn provider(&self) -> &SignerProvider {
        &self.provider
    }

    /// Address of the attached signer, if any.
    pub fn signer_address(&self) -> Option<Address> {
        self.signer
    }
}
