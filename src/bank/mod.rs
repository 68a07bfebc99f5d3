use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::{Account, AccountError};

pub mod in_memory_bank;
pub mod policy;

pub use policy::LedgerPolicy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("Account `{0}` not found")]
    AccountNotFound(String),
    #[error("Account `{0}` already exists")]
    DuplicateIdentifier(String),
    #[error("Incorrect password for account `{0}`")]
    IncorrectPassword(String),
    #[error("Opening balance {0} is negative")]
    NegativeOpeningBalance(Decimal),
    #[error("Interest rate {0} is negative")]
    NegativeInterestRate(Decimal),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Registry of accounts.
///
/// Every operation either fails without touching any account, or fully applies.
pub trait Bank {
    fn create_account(
        &mut self,
        id: &str,
        holder_name: &str,
        password: &str,
        opening_balance: Decimal,
    ) -> Result<(), BankError>;

    fn delete_account(&mut self, id: &str) -> Result<(), BankError>;

    fn find_account(&self, id: &str) -> Result<&Account, BankError>;

    /// Looks the account up and checks the password, for read access to details and history.
    fn authenticate(&self, id: &str, password: &str) -> Result<&Account, BankError>;

    /// Returns the new balance.
    fn deposit_to(&mut self, id: &str, amount: Decimal) -> Result<Decimal, BankError>;

    /// Returns the new balance. The password is checked before the withdrawal is attempted.
    fn withdraw_from(
        &mut self,
        id: &str,
        password: &str,
        amount: Decimal,
    ) -> Result<Decimal, BankError>;

    fn transfer(&mut self, from_id: &str, to_id: &str, amount: Decimal) -> Result<(), BankError>;

    /// Returns how many accounts were credited.
    fn apply_interest_to_all(&mut self, rate: Decimal) -> Result<usize, BankError>;

    /// Accounts in creation order.
    fn accounts(&self) -> impl Iterator<Item = &Account>;
}
