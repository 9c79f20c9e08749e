//! Wallet provider capability.
//!
//! A provider is whatever answers account, chain and transaction requests
//! on the user's behalf, in the spirit of an EIP-1193 injected provider.
//! The coordinator never looks for one in the environment; it is handed a
//! [`ProviderDetection`] that is either `Present` or `Absent`.
//!
//! # Data Flow
//! ```text
//! FundMeConfig.wallet
//!     → ProviderDetection::detect (probe chain id)
//!     → Present(Arc<dyn WalletProvider>) | Absent
//!     → WalletClient / PublicClient (blockchain module)
//! ```

pub mod rpc;

use std::fmt;
use std::sync::Arc;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::blockchain::types::BlockchainResult;
use crate::config::WalletConfig;

pub use rpc::RpcWalletProvider;

/// Notification pushed by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The set of exposed accounts changed. Empty means disconnected.
    AccountsChanged(Vec<Address>),
    /// The active chain changed.
    ChainChanged(u64),
}

/// Requests the coordinator makes of a wallet provider.
#[async_trait]
pub trait WalletProvider: Send + Sync + fmt::Debug {
    /// Ask the wallet for its accounts (`eth_requestAccounts`).
    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>>;

    /// Current chain id (`eth_chainId`).
    async fn chain_id(&self) -> BlockchainResult<u64>;

    /// Native balance of `address` at the latest block.
    async fn balance(&self, address: Address) -> BlockchainResult<U256>;

    /// Execute `request` without submitting it (`eth_call`).
    async fn call(&self, request: TransactionRequest) -> BlockchainResult<Bytes>;

    /// Sign and submit `request`, returning its hash.
    async fn send_transaction(&self, request: TransactionRequest) -> BlockchainResult<TxHash>;

    /// Account and chain change notifications, when the provider has them.
    fn subscribe(&self) -> Option<broadcast::Receiver<ProviderEvent>> {
        None
    }
}

/// Outcome of looking for a wallet provider.
#[derive(Debug, Clone)]
pub enum ProviderDetection {
    Present(Arc<dyn WalletProvider>),
    Absent,
}

impl ProviderDetection {
    /// Wrap a concrete provider.
    pub fn present<P: WalletProvider + 'static>(provider: P) -> Self {
        Self::Present(Arc::new(provider))
    }

    /// Build an RPC provider from config and check it answers.
    ///
    /// A disabled, misconfigured or unreachable endpoint counts as absent.
    pub async fn detect(config: &WalletConfig) -> Self {
        if !config.enabled {
            tracing::info!("Wallet provider disabled by configuration");
            return Self::Absent;
        }

        let provider = match RpcWalletProvider::from_config(config) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::warn!(error = %e, "Could not build wallet provider");
                return Self::Absent;
            }
        };

        match provider.chain_id().await {
            Ok(chain_id) => {
                tracing::info!(
                    rpc_url = %config.rpc_url,
                    chain_id,
                    "Wallet provider detected"
                );
                Self::present(provider)
            }
            Err(e) => {
                tracing::warn!(
                    rpc_url = %config.rpc_url,
                    error = %e,
                    "Wallet provider unreachable"
                );
                Self::Absent
            }
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn provider(&self) -> Option<&Arc<dyn WalletProvider>> {
        match self {
            Self::Present(provider) => Some(provider),
            Self::Absent => None,
        }
    }
}
