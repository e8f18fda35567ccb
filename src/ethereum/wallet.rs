//! Local signing key management.

use alloy::{network::EthereumWallet, primitives::Address, signers::local::PrivateKeySigner};

use crate::error::{AppError, Result};

/// Holds the local signer that backs a signing provider.
#[derive(Clone)]
pub struct WalletManager {
    signer: PrivateKeySigner,
}

impl WalletManager {
    /// Create a wallet manager from a hex private key, with or without 0x prefix.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let key = private_key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);

        let signer: PrivateKeySigner = key.parse().map_err(
            |e: alloy::signers::local::LocalSignerError| AppError::Wallet(e.to_string()),
        )?;

        tracing::info!(address = %signer.address(), "Signer loaded");

        Ok(Self { signer })
    }

    /// Address of the signing account.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Network wallet for attaching to a provider.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address()).finish()
    }
}
