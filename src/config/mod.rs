//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FundMeConfig (validated, immutable)
//!     → CLI overrides applied in main.rs, then revalidated
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a local node works with no file
//! - Private keys never live in the file; see `provider::rpc`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, parse_config, ConfigError};
pub use schema::{
    ChainConfig, ContractConfig, FundMeConfig, NativeCurrencyConfig, ObservabilityConfig,
    WalletConfig,
};
pub use validation::{validate_config, ValidationError};
