//! Read-only query handle.
//!
//! # Responsibilities
//! - Query native balances
//! - Simulate contract calls against current chain state
//! - Hand back the prepared request that a successful simulation validated

use std::sync::Arc;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::chain::ChainDescriptor;
use crate::blockchain::contract::ContractCall;
use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::provider::WalletProvider;

/// Arguments for [`PublicClient::simulate_contract`].
#[derive(Debug, Clone)]
pub struct SimulateParams {
    /// Contract being called.
    pub address: Address,
    pub call: ContractCall,
    /// Sender of the eventual transaction.
    pub account: Address,
    pub chain: Arc<ChainDescriptor>,
}

/// A request that passed simulation.
///
/// Only [`PublicClient::simulate_contract`] creates these, so a write can
/// never be issued without a preceding successful simulation.
#[derive(Debug, Clone)]
pub struct SimulatedRequest {
    pub(crate) request: TransactionRequest,
    pub(crate) call: ContractCall,
    pub(crate) chain_id: ChainId,
}

/// Read-only client over a wallet provider.
#[derive(Debug, Clone)]
pub struct PublicClient {
    provider: Arc<dyn WalletProvider>,
}

impl PublicClient {
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self { provider }
    }

    /// Native balance of `address`.
    pub async fn get_balance(&self, address: Address) -> BlockchainResult<U256> {
        self.provider.balance(address).await
    }

    /// Dry-run `params.call` and return the request to submit.
    pub async fn simulate_contract(&self, params: SimulateParams) -> BlockchainResult<SimulatedRequest> {
        let mut request = TransactionRequest::default()
            .with_from(params.account)
            .with_to(params.address)
            .with_input(params.call.calldata())
            .with_chain_id(params.chain.id.0);
        if let Some(value) = params.call.value() {
            request = request.with_value(value);
        }

        let function = params.call.function_name();
        let result = self
            .provider
            .call(request.clone())
            .await
            .map_err(|e| match e {
                BlockchainError::Rpc(reason) => BlockchainError::SimulationFailed { function, reason },
                other => other,
            })?;

        tracing::debug!(
            function,
            contract = %params.address,
            account = %params.account,
            chain_id = %params.chain.id,
            return_data = %result,
            "Contract call simulated"
        );

        Ok(SimulatedRequest {
            request,
            call: params.call,
            chain_id: params.chain.id,
        })
    }
}
