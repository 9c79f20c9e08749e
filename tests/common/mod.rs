//! Shared fakes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{address, Address, Bytes, TxHash, B256, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use tokio::sync::broadcast;

use fundme_console::blockchain::{BlockchainError, BlockchainResult};
use fundme_console::config::ChainConfig;
use fundme_console::provider::{ProviderDetection, ProviderEvent, WalletProvider};
use fundme_console::Coordinator;

pub const CONTRACT: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
pub const USER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// A request the fake provider received.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Request {
    RequestAccounts,
    ChainId,
    Balance(Address),
    Call(TransactionRequest),
    SendTransaction(TransactionRequest),
}

/// In-memory wallet provider that records every request.
#[derive(Debug)]
pub struct MockProvider {
    accounts: Vec<Address>,
    chain_id: AtomicU64,
    balance: U256,
    revert_reason: Option<String>,
    reject_accounts: bool,
    with_events: bool,
    switch_on_call: Mutex<Option<u64>>,
    requests: Mutex<Vec<Request>>,
    events: broadcast::Sender<ProviderEvent>,
}

#[allow(dead_code)]
impl MockProvider {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            accounts: vec![USER],
            chain_id: AtomicU64::new(LOCAL_CHAIN_ID),
            balance: U256::from(2_000_000_000_000_000_000u64),
            revert_reason: None,
            reject_accounts: false,
            with_events: true,
            switch_on_call: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Every `eth_call` fails with `reason`.
    pub fn reverting(mut self, reason: &str) -> Self {
        self.revert_reason = Some(reason.to_string());
        self
    }

    /// The user declines the account request.
    pub fn rejecting(mut self) -> Self {
        self.reject_accounts = true;
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<Address>) -> Self {
        self.accounts = accounts;
        self
    }

    /// Provider exposes no notification stream.
    pub fn without_events(mut self) -> Self {
        self.with_events = false;
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Request) -> bool) -> usize {
        self.requests().iter().filter(|r| matches(r)).count()
    }

    /// Switch chains, notifying subscribers when events are enabled.
    pub fn switch_chain(&self, chain_id: u64) {
        self.chain_id.store(chain_id, Ordering::SeqCst);
        if self.with_events {
            let _ = self.events.send(ProviderEvent::ChainChanged(chain_id));
        }
    }

    /// Move to `chain_id` during the next `eth_call`, without notifying.
    pub fn switch_chain_during_next_call(&self, chain_id: u64) {
        *self.switch_on_call.lock().unwrap() = Some(chain_id);
    }

    pub fn emit(&self, event: ProviderEvent) {
        let _ = self.events.send(event);
    }

    fn record(&self, request: Request) {
        self.requests.lock().unwrap().push(request);
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>> {
        self.record(Request::RequestAccounts);
        if self.reject_accounts {
            return Err(BlockchainError::Rejected("User rejected the request.".into()));
        }
        Ok(self.accounts.clone())
    }

    async fn chain_id(&self) -> BlockchainResult<u64> {
        self.record(Request::ChainId);
        Ok(self.chain_id.load(Ordering::SeqCst))
    }

    async fn balance(&self, address: Address) -> BlockchainResult<U256> {
        self.record(Request::Balance(address));
        Ok(self.balance)
    }

    async fn call(&self, request: TransactionRequest) -> BlockchainResult<Bytes> {
        self.record(Request::Call(request));
        if let Some(chain_id) = self.switch_on_call.lock().unwrap().take() {
            self.chain_id.store(chain_id, Ordering::SeqCst);
        }
        match &self.revert_reason {
            Some(reason) => Err(BlockchainError::Rpc(reason.clone())),
            None => Ok(Bytes::new()),
        }
    }

    async fn send_transaction(&self, request: TransactionRequest) -> BlockchainResult<TxHash> {
        self.record(Request::SendTransaction(request));
        Ok(B256::repeat_byte(0xab))
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<ProviderEvent>> {
        self.with_events.then(|| self.events.subscribe())
    }
}

/// Coordinator over `mock`, targeting [`CONTRACT`].
#[allow(dead_code)]
pub fn coordinator_with(mock: &Arc<MockProvider>) -> Coordinator {
    Coordinator::new(
        ProviderDetection::Present(mock.clone()),
        CONTRACT,
        ChainConfig::default(),
    )
}

/// Coordinator with no wallet provider.
#[allow(dead_code)]
pub fn coordinator_without_provider() -> Coordinator {
    Coordinator::new(ProviderDetection::Absent, CONTRACT, ChainConfig::default())
}
