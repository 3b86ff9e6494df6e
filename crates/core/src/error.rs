//! Ledger error model.

use thiserror::Error;

use crate::id::AccountNumber;
use crate::money::Money;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// A withdrawal asked for more than the account holds.
///
/// Returned by `Account::withdraw`; the ledger folds it into
/// [`LedgerError::InsufficientBalance`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Insufficient balance for withdrawal.")]
pub struct InsufficientBalance {
    pub requested: Money,
    pub available: Money,
}

/// Ledger-level error.
///
/// Every variant is an expected, recoverable outcome of a single request. The
/// display text is what the operator sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// `create_account` was given a number that is already registered.
    #[error("Account with this number already exists.")]
    AccountExists(AccountNumber),

    /// No account is registered under the number.
    #[error("Account not found.")]
    AccountNotFound(AccountNumber),

    #[error("Insufficient balance for withdrawal.")]
    InsufficientBalance { requested: Money, available: Money },

    /// A deposit amount was zero or negative.
    #[error("Deposit amount must be positive.")]
    InvalidAmount(Money),

    /// The resulting balance is outside the representable range.
    #[error("Balance would overflow.")]
    BalanceOverflow,
}

impl LedgerError {
    pub fn account_exists(number: impl Into<AccountNumber>) -> Self {
        Self::AccountExists(number.into())
    }

    pub fn not_found(number: impl Into<AccountNumber>) -> Self {
        Self::AccountNotFound(number.into())
    }

    pub fn invalid_amount(amount: Money) -> Self {
        Self::InvalidAmount(amount)
    }
}

impl From<InsufficientBalance> for LedgerError {
    fn from(value: InsufficientBalance) -> Self {
        Self::InsufficientBalance {
            requested: value.requested,
            available: value.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_keeps_amounts_when_converted() {
        let err: LedgerError = InsufficientBalance {
            requested: Money::from_units(150),
            available: Money::from_units(100),
        }
        .into();

        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                requested: Money::from_units(150),
                available: Money::from_units(100),
            }
        );
        assert_eq!(err.to_string(), "Insufficient balance for withdrawal.");
    }

    #[test]
    fn messages_are_operator_facing() {
        assert_eq!(
            LedgerError::not_found("999").to_string(),
            "Account not found."
        );
        assert_eq!(
            LedgerError::account_exists("001").to_string(),
            "Account with this number already exists."
        );
        assert_eq!(
            LedgerError::invalid_amount(Money::ZERO).to_string(),
            "Deposit amount must be positive."
        );
    }
}
