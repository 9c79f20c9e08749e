//! UI event coordinator.
//!
//! # Responsibilities
//! - Run the connect, fund, balance and withdraw sequences
//! - Reflect connection and input state in the buttons
//! - Keep the chain descriptor cache in step with provider notifications
//!
//! Actions take `&mut self`, so a coordinator runs one action at a time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use alloy::primitives::{Address, TxHash, U256};
use thiserror::Error;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::units::{self, AmountError};
use crate::blockchain::{
    BlockchainError, ChainCache, ChainId, ContractCall, PublicClient, SimulateParams,
    WalletSession,
};
use crate::config::{ChainConfig, FundMeConfig};
use crate::observability::metrics;
use crate::provider::{ProviderDetection, ProviderEvent, WalletProvider};
use crate::ui::state::{ButtonId, UiState};

/// Errors surfaced by coordinator actions.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Amount(#[from] AmountError),
}

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(ButtonId),
    /// New text in the amount input.
    Input(String),
}

/// What a dispatched event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Connected { accounts: Vec<Address> },
    /// The action needed a wallet provider and there is none.
    ProviderMissing,
    Submitted { tx_hash: TxHash },
    Balance { wei: U256 },
    InputUpdated { fund_enabled: bool },
    /// The clicked button was disabled.
    Ignored(ButtonId),
}

/// Wires UI events to wallet and contract calls.
#[derive(Debug)]
pub struct Coordinator {
    detection: ProviderDetection,
    contract_address: Address,
    chain_config: ChainConfig,
    session: Option<WalletSession>,
    chain_cache: ChainCache,
    events: Option<broadcast::Receiver<ProviderEvent>>,
    ui: UiState,
}

impl Coordinator {
    pub fn new(
        detection: ProviderDetection,
        contract_address: Address,
        chain_config: ChainConfig,
    ) -> Self {
        let events = detection.provider().and_then(|provider| provider.subscribe());
        Self {
            detection,
            contract_address,
            chain_config,
            session: None,
            chain_cache: ChainCache::new(),
            events,
            ui: UiState::default(),
        }
    }

    /// Build from a validated config.
    pub fn from_config(
        detection: ProviderDetection,
        config: &FundMeConfig,
    ) -> CoordinatorResult<Self> {
        let contract_address: Address = config.contract.address.parse().map_err(|e| {
            BlockchainError::InvalidConfig(format!(
                "Invalid contract address '{}': {}",
                config.contract.address, e
            ))
        })?;
        Ok(Self::new(detection, contract_address, config.chain.clone()))
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn session(&self) -> Option<&WalletSession> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    pub fn chain_cache(&self) -> &ChainCache {
        &self.chain_cache
    }

    /// Route a UI event. Clicks on disabled buttons do nothing.
    pub async fn dispatch(&mut self, event: UiEvent) -> CoordinatorResult<ActionOutcome> {
        let button = match event {
            UiEvent::Input(text) => {
                self.set_amount(text);
                return Ok(ActionOutcome::InputUpdated {
                    fund_enabled: !self.ui.fund_button.disabled,
                });
            }
            UiEvent::Click(button) => button,
        };

        let action = button.action();
        if self.ui.button(button).disabled {
            tracing::debug!(button = button.element_id(), "Click on disabled button ignored");
            let result = Ok(ActionOutcome::Ignored(button));
            metrics::record_action(action, outcome_label(&result), Duration::ZERO);
            return result;
        }

        let span = tracing::info_span!("action", action, action_id = %Uuid::new_v4());
        let started = Instant::now();
        let result = self.run(button).instrument(span).await;

        metrics::record_action(action, outcome_label(&result), started.elapsed());
        result
    }

    async fn run(&mut self, button: ButtonId) -> CoordinatorResult<ActionOutcome> {
        let outcome = match button {
            ButtonId::Connect => match self.connect().await? {
                Some(accounts) => ActionOutcome::Connected { accounts },
                None => ActionOutcome::ProviderMissing,
            },
            ButtonId::Fund => self
                .fund()
                .await?
                .map_or(ActionOutcome::ProviderMissing, |tx_hash| {
                    ActionOutcome::Submitted { tx_hash }
                }),
            ButtonId::Balance => self
                .get_balance()
                .await?
                .map_or(ActionOutcome::ProviderMissing, |wei| ActionOutcome::Balance { wei }),
            ButtonId::Withdraw => self
                .withdraw()
                .await?
                .map_or(ActionOutcome::ProviderMissing, |tx_hash| {
                    ActionOutcome::Submitted { tx_hash }
                }),
        };
        Ok(outcome)
    }

    /// Open a wallet session, or show the install prompt when there is no
    /// provider. Returns the exposed accounts.
    pub async fn connect(&mut self) -> CoordinatorResult<Option<Vec<Address>>> {
        self.drain_provider_events();

        let Some(provider) = self.detection.provider().cloned() else {
            tracing::warn!("No wallet provider detected");
            self.ui.show_install_prompt();
            return Ok(None);
        };

        let session = WalletSession::open(provider).await?;
        let accounts = session.accounts().to_vec();
        self.session = Some(session);
        self.ui.show_connected();

        tracing::info!(?accounts, "Wallet connected");
        Ok(Some(accounts))
    }

    /// Simulate then send `fund()` with the current amount as value.
    pub async fn fund(&mut self) -> CoordinatorResult<Option<TxHash>> {
        let eth_amount = self.ui.eth_amount.clone();
        tracing::info!("Funding with {} ETH...", eth_amount);
        self.drain_provider_events();

        let Some(provider) = self.detection.provider().cloned() else {
            return Ok(None);
        };

        let value = units::to_wei(&eth_amount)?;
        let hash = self.simulate_and_write(provider, ContractCall::Fund { value }).await?;
        Ok(Some(hash))
    }

    /// Native balance of the contract, not of the connected account.
    pub async fn get_balance(&mut self) -> CoordinatorResult<Option<U256>> {
        self.drain_provider_events();

        let Some(provider) = self.detection.provider().cloned() else {
            return Ok(None);
        };

        let balance = PublicClient::new(provider)
            .get_balance(self.contract_address)
            .await?;
        tracing::info!(
            contract = %self.contract_address,
            balance = %units::to_ether(balance),
            "Contract balance"
        );
        Ok(Some(balance))
    }

    /// Simulate then send `withdraw()`, attaching no value.
    pub async fn withdraw(&mut self) -> CoordinatorResult<Option<TxHash>> {
        tracing::info!("Withdrawing...");
        self.drain_provider_events();

        let Some(provider) = self.detection.provider().cloned() else {
            return Ok(None);
        };

        let hash = self.simulate_and_write(provider, ContractCall::Withdraw).await?;
        Ok(Some(hash))
    }

    /// Store new amount text and revalidate the fund button.
    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.ui.set_amount(value.into());
    }

    /// Revalidate the fund button against the current amount.
    pub fn update_fund_button_state(&mut self) {
        self.ui.refresh_fund_button();
    }

    /// Apply a provider notification.
    pub fn handle_provider_event(&mut self, event: ProviderEvent) {
        match event {
            ProviderEvent::ChainChanged(chain_id) => {
                tracing::info!(chain_id, "Provider switched chain");
                let cached = self.chain_cache.get().map(|chain| chain.id);
                if cached != Some(ChainId(chain_id)) {
                    self.chain_cache.invalidate();
                }
            }
            ProviderEvent::AccountsChanged(accounts) => {
                tracing::info!(accounts = accounts.len(), "Provider accounts changed");
                self.chain_cache.invalidate();
                if accounts.is_empty() {
                    self.session = None;
                    self.ui.show_disconnected();
                }
            }
        }
    }

    // A fresh signing handle per write, as the wallet may have switched
    // accounts since connect.
    async fn simulate_and_write(
        &self,
        provider: Arc<dyn WalletProvider>,
        call: ContractCall,
    ) -> CoordinatorResult<TxHash> {
        let session = WalletSession::open(provider.clone()).await?;
        let account = session.primary_account()?;

        // Without notifications nothing would ever clear the cache.
        if self.events.is_none() {
            self.chain_cache.invalidate();
        }
        let chain = self
            .chain_cache
            .resolve(session.client(), &self.chain_config)
            .await?;

        let simulated = PublicClient::new(provider)
            .simulate_contract(SimulateParams {
                address: self.contract_address,
                call,
                account,
                chain,
            })
            .await?;

        match session.client().write_contract(simulated).await {
            Ok(hash) => Ok(hash),
            Err(e @ BlockchainError::ChainMismatch { .. }) => {
                self.chain_cache.invalidate();
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn drain_provider_events(&mut self) {
        let Some(receiver) = self.events.as_mut() else {
            return;
        };

        let mut pending = Vec::new();
        let mut lagged = false;
        let mut closed = false;
        loop {
            match receiver.try_recv() {
                Ok(event) => pending.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Missed provider notifications");
                    lagged = true;
                }
                Err(TryRecvError::Closed) => {
                    closed = true;
                    break;
                }
            }
        }

        if closed {
            self.events = None;
        }
        if lagged {
            self.chain_cache.invalidate();
        }
        for event in pending {
            self.handle_provider_event(event);
        }
    }
}

fn outcome_label(result: &CoordinatorResult<ActionOutcome>) -> &'static str {
    match result {
        Ok(ActionOutcome::ProviderMissing) => "no_provider",
        Ok(ActionOutcome::Ignored(_)) => "ignored",
        Ok(_) => "ok",
        Err(_) => "error",
    }
}
