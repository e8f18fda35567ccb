//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::AssetResolverServer;
pub use server::{GetBalanceInput, ResolveAddressInput, ResolveAssetInput};
