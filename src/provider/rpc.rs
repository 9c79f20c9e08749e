//! JSON-RPC backed wallet provider.
//!
//! # Security
//! - Private keys are loaded ONLY from the environment
//! - Keys are never logged or serialized
//!
//! Without a key the node is asked to sign (`eth_accounts` +
//! `eth_sendTransaction`), which is what a local Anvil or Hardhat node
//! does with its unlocked development accounts.

use std::future::IntoFuture;
use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::{TransportError, TransportResult};
use async_trait::async_trait;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::config::WalletConfig;
use crate::provider::WalletProvider;

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "FUNDME_PRIVATE_KEY";

/// EIP-1193 "user rejected the request" error code.
const USER_REJECTED_CODE: i64 = 4001;

/// Wallet provider talking to a JSON-RPC endpoint.
#[derive(Clone)]
pub struct RpcWalletProvider {
    provider: DynProvider,
    /// Set when transactions are signed locally.
    signer_address: Option<Address>,
    rpc_url: String,
    timeout_duration: Duration,
}

impl RpcWalletProvider {
    /// Build from config, signing locally if `FUNDME_PRIVATE_KEY` is set.
    pub fn from_config(config: &WalletConfig) -> BlockchainResult<Self> {
        let signer = match std::env::var(PRIVATE_KEY_ENV_VAR) {
            Ok(key) => Some(parse_private_key(&key)?),
            Err(_) => None,
        };
        Self::new(config, signer)
    }

    /// Build with an explicit optional signer.
    pub fn new(config: &WalletConfig, signer: Option<PrivateKeySigner>) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::InvalidConfig(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let signer_address = signer.as_ref().map(|s| s.address());
        let provider = match signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect_http(url)
                .erased(),
            None => ProviderBuilder::new().connect_http(url).erased(),
        };

        tracing::debug!(
            rpc_url = %config.rpc_url,
            local_signer = signer_address.is_some(),
            "RPC wallet provider built"
        );

        Ok(Self {
            provider,
            signer_address,
            rpc_url: config.rpc_url.clone(),
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    async fn bounded<T, F>(&self, method: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = TransportResult<T>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::debug!(method, error = %e, "RPC request failed");
                Err(classify(e))
            }
            Err(_) => {
                tracing::debug!(method, "RPC request timed out");
                Err(BlockchainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }
}

#[async_trait]
impl WalletProvider for RpcWalletProvider {
    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>> {
        if let Some(address) = self.signer_address {
            return Ok(vec![address]);
        }
        self.bounded("eth_accounts", self.provider.get_accounts()).await
    }

    async fn chain_id(&self) -> BlockchainResult<u64> {
        self.bounded("eth_chainId", self.provider.get_chain_id()).await
    }

    async fn balance(&self, address: Address) -> BlockchainResult<U256> {
        self.bounded("eth_getBalance", self.provider.get_balance(address))
            .await
    }

    async fn call(&self, request: TransactionRequest) -> BlockchainResult<Bytes> {
        self.bounded("eth_call", self.provider.call(request)).await
    }

    async fn send_transaction(&self, request: TransactionRequest) -> BlockchainResult<TxHash> {
        let pending = self
            .bounded("eth_sendTransaction", self.provider.send_transaction(request))
            .await?;
        Ok(*pending.tx_hash())
    }
}

impl std::fmt::Debug for RpcWalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcWalletProvider")
            .field("rpc_url", &self.rpc_url)
            .field("signer_address", &self.signer_address)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}

/// Parse a hex private key, with or without `0x`.
pub fn parse_private_key(private_key_hex: &str) -> BlockchainResult<PrivateKeySigner> {
    let key_hex = private_key_hex
        .trim()
        .strip_prefix("0x")
        .unwrap_or(private_key_hex.trim());
    key_hex
        .parse()
        .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))
}

fn classify(error: TransportError) -> BlockchainError {
    if let Some(payload) = error.as_error_resp() {
        if payload.code == USER_REJECTED_CODE {
            return BlockchainError::Rejected(payload.message.to_string());
        }
    }
    BlockchainError::Rpc(error.to_string())
}
