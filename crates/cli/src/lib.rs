//! Interactive menu shell over an in-memory [`Ledger`](ledgerbook_accounts::Ledger).

pub mod config;
pub mod shell;

pub use config::Config;
pub use shell::{Shell, ShellExit};
