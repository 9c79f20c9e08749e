//! FundMe console: connect a wallet, fund a contract, read its balance and
//! withdraw, driven by UI-style events.

pub mod blockchain;
pub mod config;
pub mod observability;
pub mod provider;
pub mod ui;

pub use config::FundMeConfig;
pub use provider::{ProviderDetection, WalletProvider};
pub use ui::{Coordinator, UiEvent};
