//! ERC20 token contract bindings.

use alloy::{network::Ethereum, primitives::Address, sol};
use serde::{Deserialize, Serialize};

// ERC20 interface with the optional metadata extension
sol! {
    #[sol(rpc)]
    interface IERC20Metadata {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);

        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);

        function transfer(address to, uint256 value) external returns (bool);
        function approve(address spender, uint256 value) external returns (bool);
        function transferFrom(address from, address to, uint256 value) external returns (bool);
    }
}

/// A resolved ERC20 contract bound to a provider.
pub type AssetContract<P> = IERC20Metadata::IERC20MetadataInstance<P, Ethereum>;

/// Metadata read from an ERC20 contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token contract address.
    pub address: Address,
    /// Token name (e.g., "Tether USD").
    pub name: String,
    /// Token symbol (e.g., "USDT").
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
}
