//! Configuration validation.
//!
//! Serde handles syntax; this module checks values: URLs parse, the
//! contract address is a valid hex address, timeouts are non-zero.
//! All errors are collected, not just the first.

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::FundMeConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a configuration, returning every error found.
pub fn validate_config(config: &FundMeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = url::Url::parse(&config.wallet.rpc_url) {
        errors.push(ValidationError::new(
            "wallet.rpc_url",
            format!("invalid URL '{}': {}", config.wallet.rpc_url, e),
        ));
    }

    if config.wallet.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "wallet.rpc_timeout_secs",
            "must be greater than zero",
        ));
    }

    if let Err(e) = config.contract.address.parse::<Address>() {
        errors.push(ValidationError::new(
            "contract.address",
            format!("invalid address '{}': {}", config.contract.address, e),
        ));
    }

    if config.chain.name.trim().is_empty() {
        errors.push(ValidationError::new("chain.name", "must not be empty"));
    }

    if let Err(e) = url::Url::parse(&config.chain.rpc_url) {
        errors.push(ValidationError::new(
            "chain.rpc_url",
            format!("invalid URL '{}': {}", config.chain.rpc_url, e),
        ));
    }

    let currency = &config.chain.native_currency;
    if currency.symbol.trim().is_empty() {
        errors.push(ValidationError::new(
            "chain.native_currency.symbol",
            "must not be empty",
        ));
    }
    if currency.decimals == 0 {
        errors.push(ValidationError::new(
            "chain.native_currency.decimals",
            "must be greater than zero",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
