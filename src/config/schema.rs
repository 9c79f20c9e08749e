//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults that target a local development node, so an
//! empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};

/// Default JSON-RPC endpoint of a local development node.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// First contract address deployed by a fresh Anvil/Hardhat node.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FundMeConfig {
    /// Wallet provider settings.
    pub wallet: WalletConfig,

    /// Target contract.
    pub contract: ContractConfig,

    /// Metadata used when deriving the chain descriptor.
    pub chain: ChainConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Wallet provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// When false the provider is reported as absent.
    pub enabled: bool,

    /// JSON-RPC endpoint the provider talks to.
    pub rpc_url: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            rpc_timeout_secs: 10,
        }
    }
}

/// Target contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the deployed FundMe contract.
    pub address: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTRACT_ADDRESS.to_string(),
        }
    }
}

/// Static chain metadata combined with the queried chain id.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Display name of the chain.
    pub name: String,

    /// RPC endpoint advertised in the chain descriptor.
    pub rpc_url: String,

    /// Native currency metadata.
    pub native_currency: NativeCurrencyConfig,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            name: "Custom Chain".to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            native_currency: NativeCurrencyConfig::default(),
        }
    }
}

/// Native currency metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NativeCurrencyConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for NativeCurrencyConfig {
    fn default() -> Self {
        Self {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Include module targets in log lines.
    pub log_targets: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "fundme_console=info".to_string(),
            log_targets: false,
        }
    }
}
