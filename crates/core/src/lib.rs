//! `ledgerbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod error;
pub mod id;
pub mod money;

pub use error::{InsufficientBalance, LedgerError, LedgerResult};
pub use id::AccountNumber;
pub use money::Money;
