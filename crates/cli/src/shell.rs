//! Line-oriented menu driving a [`Ledger`].
//!
//! The shell owns the ledger and talks to any `BufRead`/`Write` pair, so a
//! session can be scripted in tests exactly as an operator would type it.

use std::io::{self, BufRead, Write};

use ledgerbook_accounts::Ledger;
use ledgerbook_core::Money;

const MENU: &str = "\n--- Banking System ---\n\
1. Create an account\n\
2. Deposit money\n\
3. Withdraw money\n\
4. Check balance\n\
5. Exit\n";

/// How a session ended. Both cases mean a clean exit (status 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// The operator chose "Exit".
    Requested,
    /// Input was closed, possibly in the middle of a prompt.
    EndOfInput,
}

enum Interrupt {
    Closed,
    /// A line that is not valid UTF-8. The bytes have already been consumed.
    Unreadable,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub struct Shell<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Show the menu and serve requests until exit or end of input.
    pub fn run(&mut self) -> io::Result<ShellExit> {
        loop {
            match self.step() {
                Ok(Some(exit)) => return Ok(exit),
                Ok(None) => {}
                Err(Interrupt::Closed) => {
                    self.output.flush()?;
                    return Ok(ShellExit::EndOfInput);
                }
                Err(Interrupt::Unreadable) => {
                    tracing::debug!("discarded non-utf-8 input line");
                    writeln!(self.output, "Invalid input. Please try again.")?;
                }
                Err(Interrupt::Io(e)) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<Option<ShellExit>, Interrupt> {
        write!(self.output, "{MENU}")?;
        let choice = self.prompt("Choose an option: ")?;

        match choice.trim() {
            "1" => self.create_account()?,
            "2" => self.deposit()?,
            "3" => self.withdraw()?,
            "4" => self.check_balance()?,
            "5" => {
                writeln!(self.output, "Thank you for using the banking system.")?;
                self.output.flush()?;
                return Ok(Some(ShellExit::Requested));
            }
            other => {
                tracing::debug!(choice = other, "unknown menu option");
                writeln!(self.output, "Invalid option. Please try again.")?;
            }
        }
        Ok(None)
    }

    fn create_account(&mut self) -> Result<(), Interrupt> {
        let number = self.prompt("Enter Account Number: ")?;
        let holder = self.prompt("Enter Account Holder Name: ")?;
        let Some(initial) = self.prompt_amount("Enter Initial Deposit: ")? else {
            return Ok(());
        };

        match self.ledger.create_account(number, holder, initial) {
            Ok(_) => writeln!(self.output, "Account created successfully.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn deposit(&mut self) -> Result<(), Interrupt> {
        let number = self.prompt("Enter Account Number: ")?;
        let Some(amount) = self.prompt_amount("Enter Deposit Amount: ")? else {
            return Ok(());
        };

        match self.ledger.deposit(&number, amount) {
            Ok(_) => writeln!(self.output, "Successfully deposited ${amount}")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), Interrupt> {
        let number = self.prompt("Enter Account Number: ")?;
        let Some(amount) = self.prompt_amount("Enter Withdrawal Amount: ")? else {
            return Ok(());
        };

        match self.ledger.withdraw(&number, amount) {
            Ok(_) => writeln!(self.output, "Successfully withdrew ${amount}")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn check_balance(&mut self) -> Result<(), Interrupt> {
        let number = self.prompt("Enter Account Number: ")?;

        match self.ledger.balance_of(&number) {
            Ok(report) => {
                writeln!(self.output, "Account Holder: {}", report.holder)?;
                writeln!(self.output, "Current Balance: ${}", report.balance)?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, Interrupt> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => return Err(Interrupt::Closed),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => return Err(Interrupt::Unreadable),
            Err(e) => return Err(e.into()),
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// `None` when the reply is not a number; the operator has already been told.
    fn prompt_amount(&mut self, label: &str) -> Result<Option<Money>, Interrupt> {
        let raw = self.prompt(label)?;
        match raw.parse::<Money>() {
            Ok(amount) => Ok(Some(amount)),
            Err(err) => {
                tracing::debug!(error = %err, "rejected amount input");
                writeln!(self.output, "Invalid amount. Please enter a number.")?;
                Ok(None)
            }
        }
    }
}
