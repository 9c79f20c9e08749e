//! Ether/wei conversion.
//!
//! Thin wrappers over `alloy::primitives::utils` with an amount-specific
//! error type.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;
use thiserror::Error;

/// An amount string that cannot be turned into wei.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ether amount '{input}': {reason}")]
pub struct AmountError {
    pub input: String,
    pub reason: String,
}

/// Returns true when `input` is non-empty and parses as a positive number.
///
/// This is the gate for enabling submission. It accepts some inputs that
/// `to_wei` later rejects, such as exponent notation or sub-wei amounts.
pub fn is_positive_amount(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    matches!(trimmed.parse::<f64>(), Ok(v) if v.is_finite() && v > 0.0)
}

/// Convert a decimal ether string to wei.
pub fn to_wei(input: &str) -> Result<U256, AmountError> {
    let trimmed = input.trim();
    if !is_positive_amount(trimmed) {
        return Err(AmountError {
            input: input.to_string(),
            reason: "amount must be a positive number".to_string(),
        });
    }
    let wei = parse_ether(trimmed).map_err(|e| AmountError {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    // Digits past 18 decimals are truncated by the parser.
    if wei.is_zero() {
        return Err(AmountError {
            input: input.to_string(),
            reason: "amount is smaller than 1 wei".to_string(),
        });
    }
    Ok(wei)
}

/// Format wei as a human-readable ether string.
pub fn to_ether(wei: U256) -> String {
    format_ether(wei)
}
