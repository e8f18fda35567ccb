//! Smart contract bindings.

pub mod erc20;

pub use erc20::{AssetContract, TokenMetadata, IERC20Metadata};
