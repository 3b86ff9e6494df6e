use clap::Parser;

use ledgerbook_accounts::Ledger;
use ledgerbook_cli::{Config, Shell, ShellExit};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    ledgerbook_observability::init(&config.tracing());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(Ledger::new(), stdin.lock(), stdout.lock());

    match shell.run()? {
        ShellExit::Requested => tracing::info!("exit requested"),
        ShellExit::EndOfInput => tracing::info!("input closed"),
    }
    Ok(())
}
