//! FundMe contract interface.

use alloy::primitives::{Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// Functions of the FundMe contract this client calls.
    #[derive(Debug)]
    interface FundMe {
        function fund() external payable;
        function withdraw() external;
    }
}

/// A state-changing call on the FundMe contract.
///
/// Only `Fund` carries a value, so a withdrawal can never send ether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractCall {
    Fund { value: U256 },
    Withdraw,
}

impl ContractCall {
    /// ABI function name.
    pub fn function_name(&self) -> &'static str {
        match self {
            ContractCall::Fund { .. } => "fund",
            ContractCall::Withdraw => "withdraw",
        }
    }

    /// Native value attached to the call, if any.
    pub fn value(&self) -> Option<U256> {
        match self {
            ContractCall::Fund { value } => Some(*value),
            ContractCall::Withdraw => None,
        }
    }

    /// ABI-encoded calldata.
    pub fn calldata(&self) -> Bytes {
        match self {
            ContractCall::Fund { .. } => FundMe::fundCall {}.abi_encode().into(),
            ContractCall::Withdraw => FundMe::withdrawCall {}.abi_encode().into(),
        }
    }
}
