//! Ethereum network constants.
//!
//! Contains the network key and the mainnet token addresses seeding the default
//! address book.

use alloy::primitives::{address, Address};

/// Address book key for Ethereum Mainnet.
pub const MAINNET: &str = "mainnet";

// ============================================================================
// Core Token Addresses (Ethereum Mainnet)
// ============================================================================

/// Wrapped Ether (WETH) address on Ethereum Mainnet.
pub const WETH_ADDRESS: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// USDC address on Ethereum Mainnet.
pub const USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// USDT address on Ethereum Mainnet.
pub const USDT_ADDRESS: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");

/// DAI address on Ethereum Mainnet.
pub const DAI_ADDRESS: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");

/// WBTC address on Ethereum Mainnet.
pub const WBTC_ADDRESS: Address = address!("2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");

/// UNI token address on Ethereum Mainnet.
pub const UNI_ADDRESS: Address = address!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984");

/// LINK token address on Ethereum Mainnet.
pub const LINK_ADDRESS: Address = address!("514910771AF9Ca656af840dff83E8264EcF986CA");

/// Curve DAO token address on Ethereum Mainnet.
pub const CRV_ADDRESS: Address = address!("D533a949740bb3306d119CC777fa900bA034cd52");

/// Convex token address on Ethereum Mainnet.
pub const CVX_ADDRESS: Address = address!("4e3FBD56CD56c3e72c1403e103b45Db9da5B9D2B");

// ============================================================================
// Liquid Staking Tokens (Ethereum Mainnet)
// ============================================================================

/// Lido stETH address on Ethereum Mainnet.
pub const STETH_ADDRESS: Address = address!("ae7ab96520DE3A18E5e111B5EaAb095312D7fE84");

/// Lido wstETH address on Ethereum Mainnet.
pub const WSTETH_ADDRESS: Address = address!("7f39C581F595B53c5cb19bD0b3f8dA6c935E2Ca0");

/// Rocket Pool rETH address on Ethereum Mainnet.
pub const RETH_ADDRESS: Address = address!("ae78736Cd615f374D3085123A210448E74Fc6393");

/// Frax frxETH address on Ethereum Mainnet.
pub const FRXETH_ADDRESS: Address = address!("5E8422345238F34275888049021821E8E08CAa1f");

// ============================================================================
// Upgradeable Token Proxies (Ethereum Mainnet)
// ============================================================================

/// Origin Dollar (OUSD) proxy address on Ethereum Mainnet.
pub const OUSD_PROXY_ADDRESS: Address = address!("2A8e1E676Ec238d8A992307B495b45B3fEAa5e86");

/// Origin Ether (OETH) proxy address on Ethereum Mainnet.
pub const OETH_PROXY_ADDRESS: Address = address!("856c4Efb76C1D1AE02e20CEB03A2A6a08b0b8dC3");

/// Symbols seeding the built-in mainnet address book.
///
/// Proxied tokens are keyed with the `Proxy` suffix so they resolve through the
/// proxy fallback.
pub const MAINNET_TOKENS: &[(&str, Address)] = &[
    ("WETH", WETH_ADDRESS),
    ("USDC", USDC_ADDRESS),
    ("USDT", USDT_ADDRESS),
    ("DAI", DAI_ADDRESS),
    ("WBTC", WBTC_ADDRESS),
    ("UNI", UNI_ADDRESS),
    ("LINK", LINK_ADDRESS),
    ("CRV", CRV_ADDRESS),
    ("CVX", CVX_ADDRESS),
    ("stETH", STETH_ADDRESS),
    ("wstETH", WSTETH_ADDRESS),
    ("rETH", RETH_ADDRESS),
    ("frxETH", FRXETH_ADDRESS),
    ("OUSDProxy", OUSD_PROXY_ADDRESS),
    ("OETHProxy", OETH_PROXY_ADDRESS),
];
