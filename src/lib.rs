//! Asset Resolver MCP Server Library
//!
//! Resolves human-readable token symbols ("USDT", "stETH", "OUSD") to
//! addresses and ERC20 contract handles using a static address book.
//!
//! # Features
//!
//! - **Address resolution**: symbol, then `symbol + "Proxy"`, then pass-through
//! - **Contract handles**: ERC20 bindings on any alloy provider or signer
//! - **MCP tools**: resolve addresses, read token metadata and balances
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use asset_resolver_mcp::{AddressBook, AssetResolver};
//!
//! let resolver = AssetResolver::mainnet(Arc::new(AddressBook::mainnet()));
//! let usdt = resolver.resolve_address("USDT")?;
//! let ousd = resolver.resolve_asset("OUSD", provider).await?;
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod mcp;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::contracts::{AssetContract, TokenMetadata};
pub use mcp::AssetResolverServer;
pub use services::{AddressBook, AssetResolver, TokenService};
