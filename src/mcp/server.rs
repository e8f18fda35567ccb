//! MCP server implementation.

use std::sync::Arc;

use alloy::primitives::Address;
use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::{
    config::Config,
    error::AppError,
    ethereum::{EthereumClient, WalletManager},
    services::{AddressBook, AssetResolver, TokenService},
    types::{is_ethereum_address, ResolvedAddress},
};

/// Asset Resolver MCP Server.
///
/// Provides tools for resolving token symbols to addresses and contracts.
#[derive(Clone)]
pub struct AssetResolverServer {
    resolver: Arc<AssetResolver>,
    token_service: TokenService,
    tool_router: ToolRouter<Self>,
}

impl AssetResolverServer {
    /// Create a new Asset Resolver MCP Server.
    ///
    /// No network calls are made during startup. The RPC endpoint is first
    /// used when a tool reads from a contract.
    pub fn new(config: Config) -> Result<Self, AppError> {
        tracing::info!("Initializing Asset Resolver MCP Server");

        let book = match &config.address_book_path {
            Some(path) => AddressBook::from_file(path)?,
            None => AddressBook::mainnet(),
        };
        let resolver = Arc::new(AssetResolver::new(Arc::new(book), config.network.clone()));

        let client = match &config.private_key {
            Some(key) => {
                let wallet = WalletManager::from_private_key(key)?;
                EthereumClient::with_wallet(&config.rpc_url, &wallet)?
            }
            None => EthereumClient::new(&config.rpc_url)?,
        };

        let token_service = TokenService::new(client.provider().clone(), resolver.clone());

        tracing::info!(
            network = %config.network,
            symbols = resolver.address_book().symbols(&config.network).len(),
            "Asset Resolver MCP Server initialized successfully"
        );

        Ok(Self { resolver, token_service, tool_router: Self::tool_router() })
    }
}

/// Input parameters for the resolve_address tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct ResolveAddressInput {
    /// Token symbol (e.g., "USDT", "stETH", "OUSD") or a 0x address.
    pub symbol: String,
}

/// Input parameters for the resolve_asset tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct ResolveAssetInput {
    /// Token symbol (e.g., "USDT", "stETH", "OUSD") or a 0x address.
    pub symbol: String,
}

/// Input parameters for the get_balance tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetBalanceInput {
    /// Holder address to query (0x...).
    pub address: String,
    /// Token symbol or 0x token address.
    pub token: String,
}

/// Parse a holder address, requiring the full `0x` + 40 hex form.
fn parse_address(s: &str) -> Result<Address, McpError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(McpError::invalid_params("Address cannot be empty", None));
    }

    if !is_ethereum_address(trimmed) {
        return Err(McpError::invalid_params(
            format!("Address must be 0x followed by 40 hex characters: {}", s),
            None,
        ));
    }

    trimmed.parse::<Address>().map_err(|e| {
        McpError::invalid_params(format!("Invalid address format '{}': {}", s, e), None)
    })
}

#[tool_router]
impl AssetResolverServer {
    /// Resolve a token symbol to its address.
    ///
    /// Tries the symbol, then the symbol with a "Proxy" suffix, and otherwise
    /// returns the input unchanged.
    #[tool(
        description = "Resolve a token symbol (e.g. USDT, stETH, OUSD) to its contract address using the configured address book. Unknown symbols are returned unchanged."
    )]
    pub async fn resolve_address(
        &self,
        Parameters(input): Parameters<ResolveAddressInput>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol, "resolve_address called");

        let address = self.resolver.resolve_address(&input.symbol)?;

        let result = ResolvedAddress {
            symbol: input.symbol,
            address,
            network: self.resolver.network().to_string(),
        };

        serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    /// Resolve a token symbol or address to its ERC20 contract and read its metadata.
    ///
    /// Metadata reads that fail are reported as "UNKNOWN", "Unknown Token" and
    /// 18 decimals rather than as an error.
    #[tool(
        description = "Resolve a token symbol or 0x address to its ERC20 contract and return the on-chain name, symbol and decimals. If a metadata read fails, the values default to symbol \"UNKNOWN\", name \"Unknown Token\" and 18 decimals."
    )]
    pub async fn resolve_asset(
        &self,
        Parameters(input): Parameters<ResolveAssetInput>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol, "resolve_asset called");

        let metadata = self.token_service.get_token_metadata(&input.symbol).await?;

        serde_json::to_string_pretty(&metadata)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    /// Query the ERC20 balance of a holder for a token symbol or address.
    #[tool(description = "Query the ERC20 token balance of a wallet address. The token may be given by symbol or 0x address.")]
    pub async fn get_balance(
        &self,
        Parameters(input): Parameters<GetBalanceInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.address, token = %input.token, "get_balance called");

        let holder = parse_address(&input.address)?;
        let result = self.token_service.get_balance(holder, &input.token).await?;

        serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AssetResolverServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "asset-resolver-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Asset Resolver MCP Server. Resolves token symbols to addresses and \
                 ERC20 contracts, and reads token metadata and balances."
                    .to_string(),
            ),
        }
    }
}
