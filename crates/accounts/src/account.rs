use serde::{Deserialize, Serialize};

use ledgerbook_core::{AccountNumber, InsufficientBalance, LedgerError, LedgerResult, Money};

/// A named, balance-holding account.
///
/// Number and holder are fixed at construction. The balance only moves through
/// [`Account::deposit`] and [`Account::withdraw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: Money,
}

impl Account {
    /// Opening balance is taken as given, including zero or negative values.
    pub fn open(number: AccountNumber, holder: impl Into<String>, initial_deposit: Money) -> Self {
        Self {
            number,
            holder: holder.into(),
            balance: initial_deposit,
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Add a strictly positive amount; returns the new balance.
    pub fn deposit(&mut self, amount: Money) -> LedgerResult<Money> {
        if !amount.is_positive() {
            return Err(LedgerError::invalid_amount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(self.balance)
    }

    /// Subtract `amount` unless it exceeds the current balance; returns the new
    /// balance.
    ///
    /// Only the upper bound is checked. A zero or negative amount passes the
    /// guard and is applied as-is.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, WithdrawError> {
        if amount > self.balance {
            return Err(WithdrawError::Insufficient(InsufficientBalance {
                requested: amount,
                available: self.balance,
            }));
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(WithdrawError::Overflow)?;
        Ok(self.balance)
    }
}

/// Why [`Account::withdraw`] left the balance untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawError {
    Insufficient(InsufficientBalance),
    /// Only reachable with a negative amount pushing the balance past the
    /// decimal range.
    Overflow,
}

impl From<WithdrawError> for LedgerError {
    fn from(value: WithdrawError) -> Self {
        match value {
            WithdrawError::Insufficient(e) => e.into(),
            WithdrawError::Overflow => LedgerError::BalanceOverflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alice(balance: i64) -> Account {
        Account::open(AccountNumber::from("001"), "Alice", Money::from_units(balance))
    }

    #[test]
    fn deposit_adds_positive_amount() {
        let mut account = alice(100);

        let balance = account.deposit(Money::from_units(50)).unwrap();

        assert_eq!(balance, Money::from_units(150));
        assert_eq!(account.balance(), Money::from_units(150));
    }

    #[test]
    fn non_positive_deposit_is_rejected_without_mutation() {
        let mut account = alice(100);

        for amount in [Money::ZERO, Money::from_units(-20)] {
            let err = account.deposit(amount).unwrap_err();
            assert_eq!(err, LedgerError::InvalidAmount(amount));
        }
        assert_eq!(account.balance(), Money::from_units(100));
    }

    #[test]
    fn withdraw_up_to_full_balance() {
        let mut account = alice(100);

        assert_eq!(
            account.withdraw(Money::from_units(100)).unwrap(),
            Money::ZERO
        );
    }

    #[test]
    fn overdraw_reports_insufficient_balance() {
        let mut account = alice(100);

        let err = account.withdraw(Money::from_units(150)).unwrap_err();

        assert_eq!(
            err,
            WithdrawError::Insufficient(InsufficientBalance {
                requested: Money::from_units(150),
                available: Money::from_units(100),
            })
        );
        assert_eq!(account.balance(), Money::from_units(100));
    }

    #[test]
    fn negative_withdrawal_is_not_guarded() {
        let mut account = alice(100);

        let balance = account.withdraw(Money::from_units(-25)).unwrap();

        assert_eq!(balance, Money::from_units(125));
    }

    #[test]
    fn number_and_holder_are_fixed_at_open() {
        let account = alice(0);
        assert_eq!(account.number(), &AccountNumber::from("001"));
        assert_eq!(account.holder(), "Alice");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a withdrawal either applies exactly or leaves the balance
        /// untouched, depending only on whether it exceeds the balance.
        #[test]
        fn withdraw_is_exact_or_no_op(
            opening in 0i64..1_000_000i64,
            amount in 0i64..2_000_000i64,
        ) {
            let mut account = alice(opening);
            let result = account.withdraw(Money::from_cents(amount));

            if amount <= opening * 100 {
                prop_assert_eq!(result, Ok(Money::from_cents(opening * 100 - amount)));
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(account.balance(), Money::from_units(opening));
            }
        }
    }
}
