//! Accounts module (balance-holding accounts and the ledger that registers them).
//!
//! Pure domain logic only: no IO, no terminal, no persistence concerns.

pub mod account;
pub mod ledger;

pub use account::{Account, WithdrawError};
pub use ledger::{BalanceReport, Ledger};
