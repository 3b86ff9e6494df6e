use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ledgerbook_core::{AccountNumber, LedgerError, LedgerResult, Money};

use crate::account::Account;

/// Holder and balance of one account, as reported by [`Ledger::balance_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub holder: String,
    pub balance: Money,
}

/// Registry of accounts keyed by account number.
///
/// Owned by its caller rather than shared process-wide; a fresh `Ledger` is an
/// empty bank. Every operation resolves the account first and either applies
/// in full or leaves the ledger untouched.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    accounts: HashMap<AccountNumber, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account with `initial_deposit` as its opening balance.
    ///
    /// The opening balance is not validated.
    pub fn create_account(
        &mut self,
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        initial_deposit: Money,
    ) -> LedgerResult<&Account> {
        let number = number.into();
        if self.accounts.contains_key(&number) {
            tracing::warn!(account = %number, "account already exists");
            return Err(LedgerError::AccountExists(number));
        }

        let account = Account::open(number.clone(), holder, initial_deposit);
        tracing::info!(
            account = %number,
            holder = account.holder(),
            balance = %initial_deposit,
            "account created"
        );
        Ok(&*self.accounts.entry(number).or_insert(account))
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, number: &str, amount: Money) -> LedgerResult<Money> {
        let account = self.account_mut(number)?;
        match account.deposit(amount) {
            Ok(balance) => {
                tracing::info!(account = number, amount = %amount, balance = %balance, "deposit applied");
                Ok(balance)
            }
            Err(err) => {
                tracing::warn!(account = number, amount = %amount, error = %err, "deposit rejected");
                Err(err)
            }
        }
    }

    /// Returns the new balance. An overdraw comes back as
    /// [`LedgerError::InsufficientBalance`] with the balance unchanged.
    pub fn withdraw(&mut self, number: &str, amount: Money) -> LedgerResult<Money> {
        let account = self.account_mut(number)?;
        match account.withdraw(amount) {
            Ok(balance) => {
                tracing::info!(account = number, amount = %amount, balance = %balance, "withdrawal applied");
                Ok(balance)
            }
            Err(err) => {
                let err = LedgerError::from(err);
                tracing::warn!(account = number, amount = %amount, error = %err, "withdrawal rejected");
                Err(err)
            }
        }
    }

    pub fn balance_of(&self, number: &str) -> LedgerResult<BalanceReport> {
        let account = self.get(number).ok_or_else(|| {
            tracing::warn!(account = number, "balance query for unknown account");
            LedgerError::not_found(number)
        })?;
        tracing::debug!(account = number, balance = %account.balance(), "balance queried");
        Ok(BalanceReport {
            holder: account.holder().to_string(),
            balance: account.balance(),
        })
    }

    pub fn get(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number)
    }

    /// All accounts, in no particular order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_mut(&mut self, number: &str) -> LedgerResult<&mut Account> {
        match self.accounts.get_mut(number) {
            Some(account) => Ok(account),
            None => {
                tracing::warn!(account = number, "account not found");
                Err(LedgerError::not_found(number))
            }
        }
    }
}
