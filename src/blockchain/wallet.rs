//! Transaction-signing handle and wallet session.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};

use crate::blockchain::client::SimulatedRequest;
use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::provider::WalletProvider;

/// Signing client over a wallet provider.
#[derive(Debug, Clone)]
pub struct WalletClient {
    provider: Arc<dyn WalletProvider>,
}

impl WalletClient {
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self { provider }
    }

    /// Ask the wallet for its addresses. May suspend until the user approves.
    pub async fn request_addresses(&self) -> BlockchainResult<Vec<Address>> {
        self.provider.request_accounts().await
    }

    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.provider.chain_id().await.map(ChainId)
    }

    /// Submit a simulated request.
    ///
    /// Fails with `ChainMismatch` if the wallet moved to another chain since
    /// the simulation.
    pub async fn write_contract(&self, simulated: SimulatedRequest) -> BlockchainResult<TxHash> {
        let current = self.get_chain_id().await?;
        if current != simulated.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: simulated.chain_id.0,
                actual: current.0,
            });
        }

        let function = simulated.call.function_name();
        let hash = self.provider.send_transaction(simulated.request).await?;
        tracing::info!(function, tx_hash = %hash, "Transaction submitted");
        Ok(hash)
    }
}

/// A connected wallet: the signing handle plus the addresses it exposed.
#[derive(Debug, Clone)]
pub struct WalletSession {
    client: WalletClient,
    accounts: Vec<Address>,
}

impl WalletSession {
    /// Create a signing handle and request addresses once.
    pub async fn open(provider: Arc<dyn WalletProvider>) -> BlockchainResult<Self> {
        let client = WalletClient::new(provider);
        let accounts = client.request_addresses().await?;
        tracing::info!(accounts = accounts.len(), "Wallet session opened");
        Ok(Self { client, accounts })
    }

    pub fn client(&self) -> &WalletClient {
        &self.client
    }

    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    /// First exposed account, the one transactions are sent from.
    pub fn primary_account(&self) -> BlockchainResult<Address> {
        self.accounts.first().copied().ok_or(BlockchainError::NoAccounts)
    }
}
