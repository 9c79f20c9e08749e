//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! ProviderDetection::Present(provider)
//!     → wallet.rs (WalletSession: addresses, signing handle)
//!     → chain.rs (chain id → ChainDescriptor, cached)
//!     → client.rs (PublicClient: balance, simulate)
//!     → wallet.rs (write_contract with the simulated request)
//! ```
//!
//! # Constraints
//! - A write only accepts a `SimulatedRequest`
//! - ABI encoding, signing and transport stay in `alloy`

pub mod chain;
pub mod client;
pub mod contract;
pub mod types;
pub mod units;
pub mod wallet;

pub use chain::{ChainCache, ChainDescriptor};
pub use client::{PublicClient, SimulateParams, SimulatedRequest};
pub use contract::ContractCall;
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use wallet::{WalletClient, WalletSession};
