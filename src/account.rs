use std::fmt;

use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::transaction::{Transaction, TransactionKind};

pub type AccountId = String;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid {kind} amount {amount}, it must be greater than zero")]
    InvalidAmount {
        kind: TransactionKind,
        amount: Decimal,
    },
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },
    #[error("{kind} would take balance {balance} out of the supported range")]
    AmountOverflow {
        kind: TransactionKind,
        balance: Decimal,
    },
}

/// Stored password. Compared in plaintext, there is no hashing.
#[derive(Clone, PartialEq, Eq)]
struct Credential(String);

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    password: Credential,
    opening_balance: Decimal,
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        id: impl Into<AccountId>,
        holder_name: impl Into<String>,
        password: impl Into<String>,
        opening_balance: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            holder_name: holder_name.into(),
            password: Credential(password.into()),
            opening_balance,
            balance: opening_balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Transaction log, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn check_password(&self, candidate: &str) -> bool {
        self.password.0 == candidate
    }

    /// Balance recomputed from the opening balance and the log.
    /// Always equal to [`Account::balance`].
    pub fn replayed_balance(&self) -> Decimal {
        self.transactions
            .iter()
            .fold(self.opening_balance, |acc, tx| acc + tx.balance_delta())
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let tx = self.handle_deposit(amount)?;
        self.apply(tx);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let tx = self.handle_withdraw(amount)?;
        self.apply(tx);
        Ok(())
    }

    /// Credits `rate` percent of the current balance and returns the credited amount.
    /// Negative rates reduce the balance.
    pub fn add_interest(&mut self, rate: Decimal) -> Result<Decimal, AccountError> {
        let tx = self.handle_interest(rate)?;
        let interest = tx.amount();
        self.apply(tx);
        Ok(interest)
    }

    /// Only place where balance and log change.
    /// `tx` must come from a `handle_*` call on this account's current state,
    /// which has already checked that the new balance is representable.
    pub(crate) fn apply(&mut self, tx: Transaction) {
        self.balance += tx.balance_delta();
        self.transactions.push(tx);
    }

    fn check_range(&self, kind: TransactionKind, delta: Decimal) -> Result<(), AccountError> {
        match self.balance.checked_add(delta) {
            Some(_) => Ok(()),
            None => Err(AccountError::AmountOverflow {
                kind,
                balance: self.balance,
            }),
        }
    }

    pub(crate) fn handle_deposit(&self, amount: Decimal) -> Result<Transaction, AccountError> {
        if amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount {
                kind: TransactionKind::Deposit,
                amount,
            });
        }
        self.check_range(TransactionKind::Deposit, amount)?;
        Ok(Transaction::new(TransactionKind::Deposit, amount))
    }

    pub(crate) fn handle_withdraw(&self, amount: Decimal) -> Result<Transaction, AccountError> {
        if amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount {
                kind: TransactionKind::Withdraw,
                amount,
            });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.check_range(TransactionKind::Withdraw, -amount)?;
        Ok(Transaction::new(TransactionKind::Withdraw, amount))
    }

    pub(crate) fn handle_interest(&self, rate: Decimal) -> Result<Transaction, AccountError> {
        let interest = self
            .balance
            .checked_mul(rate)
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(AccountError::AmountOverflow {
                kind: TransactionKind::Interest,
                balance: self.balance,
            })?;
        self.check_range(TransactionKind::Interest, interest)?;
        Ok(Transaction::new(TransactionKind::Interest, interest))
    }
}
