use thiserror::Error;

use crate::input::NonNegativeInteger;

/// Why a bank, branch or account field could not be turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidFieldReason {
    #[error("could not be converted to an integer")]
    NotAnInteger,

    #[error("is a negative integer")]
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Bank number {0}")]
    BankNumberInvalid(InvalidFieldReason),

    #[error("Branch number {0}")]
    BranchNumberInvalid(InvalidFieldReason),

    #[error("Account number {0}")]
    AccountNumberInvalid(InvalidFieldReason),

    /// The bank number is well formed but no supported bank uses it.
    #[error("Unsupported bank number {0}")]
    UnsupportedBank(NonNegativeInteger),
}

impl ValidationError {
    /// Stable tag for the error, used as a metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::BankNumberInvalid(_) => "bank_number_invalid",
            ValidationError::BranchNumberInvalid(_) => "branch_number_invalid",
            ValidationError::AccountNumberInvalid(_) => "account_number_invalid",
            ValidationError::UnsupportedBank(_) => "unsupported_bank",
        }
    }
}
