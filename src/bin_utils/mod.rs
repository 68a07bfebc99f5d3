//! Text menu driving a [`Bank`]. The binary runs it over stdin/stdout,
//! integration tests run it over byte buffers.

use std::io::{BufRead, Write};

use crate::{
    bank::{Bank, BankError},
    command::{CommandError, MenuCommand, parse_decimal, parse_word},
};
use anyhow::Result;
use csv_printer::{AccountRow, HistoryRow, print_rows};
use rust_decimal::Decimal;
use thiserror::Error;
pub mod csv_printer;

#[derive(Debug, Error)]
enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("Input closed")]
    InputClosed,
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Output(err.into())
    }
}

pub struct Session<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> Session<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    /// Runs until the operator picks Exit or the input ends.
    /// Only output failures abort the session; ledger and input errors are printed.
    pub fn run<B: Bank>(mut self, bank: &mut B) -> Result<()> {
        loop {
            self.print_menu()?;
            let choice = match self.ask("Enter your choice") {
                Ok(choice) => choice,
                Err(SessionError::InputClosed) => break,
                Err(SessionError::Output(err)) => return Err(err),
                Err(err) => return Err(err.into()),
            };
            let command = match choice.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            if command == MenuCommand::Exit {
                writeln!(self.output, "Exiting...")?;
                break;
            }
            match self.dispatch(command, bank) {
                Ok(()) => {}
                Err(SessionError::InputClosed) => break,
                Err(SessionError::Output(err)) => return Err(err),
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nBank Management System")?;
        for command in MenuCommand::ALL {
            writeln!(self.output, "{}. {}", command.choice(), command.label())?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    fn ask_word(&mut self, prompt: &str, field: &'static str) -> Result<String, SessionError> {
        let raw = self.ask(prompt)?;
        Ok(parse_word(field, &raw)?.to_owned())
    }

    fn ask_decimal(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> Result<Decimal, SessionError> {
        let raw = self.ask(prompt)?;
        Ok(parse_decimal(field, &raw)?)
    }

    fn dispatch<B: Bank>(
        &mut self,
        command: MenuCommand,
        bank: &mut B,
    ) -> Result<(), SessionError> {
        match command {
            MenuCommand::CreateAccount => {
                let id = self.ask_word("Enter Account Number", "account number")?;
                let holder_name = self.ask("Enter Account Holder Name")?;
                let password = self.ask_word("Enter Password", "password")?;
                let balance = self.ask_decimal("Enter Initial Balance", "initial balance")?;
                bank.create_account(&id, &holder_name, &password, balance)?;
                writeln!(self.output, "Account created successfully!")?;
            }
            MenuCommand::Deposit => {
                let id = self.ask_word("Enter Account Number", "account number")?;
                let amount = self.ask_decimal("Enter Amount to Deposit", "amount")?;
                let balance = bank.deposit_to(&id, amount)?;
                writeln!(self.output, "Deposited {amount:.2}. New balance: {balance:.2}")?;
            }
            MenuCommand::Withdraw => {
                let id = self.ask_word("Enter Account Number", "account number")?;
                let amount = self.ask_decimal("Enter Amount to Withdraw", "amount")?;
                // no password prompt for an unknown account
                bank.find_account(&id)?;
                let password = self.ask("Enter Password")?;
                let balance = bank.withdraw_from(&id, &password, amount)?;
                writeln!(self.output, "Withdrew {amount:.2}. New balance: {balance:.2}")?;
            }
            MenuCommand::Transfer => {
                let from_id = self.ask_word("Enter From Account Number", "account number")?;
                let to_id = self.ask_word("Enter To Account Number", "account number")?;
                let amount = self.ask_decimal("Enter Amount to Transfer", "amount")?;
                bank.transfer(&from_id, &to_id, amount)?;
                writeln!(self.output, "Transfer successful!")?;
            }
            MenuCommand::ShowAccount => {
                let id = self.ask_word("Enter Account Number", "account number")?;
                bank.find_account(&id)?;
                let password = self.ask("Enter Password")?;
                let acc = bank.authenticate(&id, &password)?;
                writeln!(self.output, "Account Number: {}", acc.id())?;
                writeln!(self.output, "Account Holder: {}", acc.holder_name())?;
                writeln!(self.output, "Balance: {:.2}", acc.balance())?;
            }
            MenuCommand::ShowHistory => {
                let id = self.ask_word("Enter Account Number", "account number")?;
                bank.find_account(&id)?;
                let password = self.ask("Enter Password")?;
                let acc = bank.authenticate(&id, &password)?;
                writeln!(self.output, "Transaction History for Account: {}", acc.id())?;
                if acc.history().is_empty() {
                    writeln!(self.output, "No transactions recorded.")?;
                } else {
                    print_rows(self.output, acc.history().iter().map(HistoryRow::from))?;
                }
            }
            MenuCommand::DeleteAccount => {
                let id = self.ask_word("Enter Account Number", "account number")?;
                bank.delete_account(&id)?;
                writeln!(self.output, "Account deleted successfully!")?;
            }
            MenuCommand::ApplyInterest => {
                let rate = self.ask_decimal("Enter Interest Rate", "interest rate")?;
                let credited = bank.apply_interest_to_all(rate)?;
                writeln!(self.output, "Interest added to {credited} account(s)!")?;
            }
            MenuCommand::ListAccounts => {
                writeln!(self.output, "All Accounts in the Bank:")?;
                print_rows(self.output, bank.accounts().map(AccountRow::from))?;
            }
            MenuCommand::Exit => {}
        }
        Ok(())
    }
}
