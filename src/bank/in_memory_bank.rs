use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::account::{Account, AccountError};

use super::{Bank, BankError, LedgerPolicy};

/// Accounts kept in a `Vec` in creation order, looked up by linear scan.
#[derive(Debug, Default)]
pub struct InMemoryBank {
    accounts: Vec<Account>,
    policy: LedgerPolicy,
}

impl InMemoryBank {
    pub fn with_policy(policy: LedgerPolicy) -> Self {
        Self {
            accounts: Vec::new(),
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, BankError> {
        self.accounts
            .iter()
            .position(|acc| acc.id() == id)
            .ok_or_else(|| {
                debug!(account = id, "account lookup failed");
                BankError::AccountNotFound(id.to_owned())
            })
    }

    fn check_password(&self, idx: usize, password: &str) -> Result<(), BankError> {
        let acc = &self.accounts[idx];
        if !acc.check_password(password) {
            warn!(account = acc.id(), "password check failed");
            return Err(BankError::IncorrectPassword(acc.id().to_owned()));
        }
        Ok(())
    }
}

impl Bank for InMemoryBank {
    fn create_account(
        &mut self,
        id: &str,
        holder_name: &str,
        password: &str,
        opening_balance: Decimal,
    ) -> Result<(), BankError> {
        if self.accounts.iter().any(|acc| acc.id() == id) {
            return Err(BankError::DuplicateIdentifier(id.to_owned()));
        }
        self.policy.check_opening_balance(opening_balance)?;
        self.accounts
            .push(Account::new(id, holder_name, password, opening_balance));
        info!(account = id, %opening_balance, "account created");
        Ok(())
    }

    fn delete_account(&mut self, id: &str) -> Result<(), BankError> {
        let idx = self.position(id)?;
        // `remove` keeps the order of the remaining accounts
        let removed = self.accounts.remove(idx);
        info!(
            account = id,
            transactions = removed.history().len(),
            "account deleted"
        );
        Ok(())
    }

    fn find_account(&self, id: &str) -> Result<&Account, BankError> {
        let idx = self.position(id)?;
        Ok(&self.accounts[idx])
    }

    fn authenticate(&self, id: &str, password: &str) -> Result<&Account, BankError> {
        let idx = self.position(id)?;
        self.check_password(idx, password)?;
        Ok(&self.accounts[idx])
    }

    fn deposit_to(&mut self, id: &str, amount: Decimal) -> Result<Decimal, BankError> {
        let idx = self.position(id)?;
        let acc = &mut self.accounts[idx];
        acc.deposit(amount)?;
        info!(account = id, %amount, balance = %acc.balance(), "deposit applied");
        Ok(acc.balance())
    }

    fn withdraw_from(
        &mut self,
        id: &str,
        password: &str,
        amount: Decimal,
    ) -> Result<Decimal, BankError> {
        let idx = self.position(id)?;
        self.check_password(idx, password)?;
        let acc = &mut self.accounts[idx];
        acc.withdraw(amount)?;
        info!(account = id, %amount, balance = %acc.balance(), "withdrawal applied");
        Ok(acc.balance())
    }

    fn transfer(&mut self, from_id: &str, to_id: &str, amount: Decimal) -> Result<(), BankError> {
        let from_idx = self.position(from_id)?;
        let to_idx = self.position(to_id)?;

        let source = &self.accounts[from_idx];
        if amount > source.balance() {
            debug!(from = from_id, to = to_id, %amount, "transfer rejected");
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available: source.balance(),
            }
            .into());
        }
        // both sides are validated before either is touched
        let withdrawal = source.handle_withdraw(amount)?;
        let deposit = self.accounts[to_idx].handle_deposit(amount)?;
        self.accounts[from_idx].apply(withdrawal);
        self.accounts[to_idx].apply(deposit);

        info!(from = from_id, to = to_id, %amount, "transfer applied");
        Ok(())
    }

    fn apply_interest_to_all(&mut self, rate: Decimal) -> Result<usize, BankError> {
        self.policy.check_interest_rate(rate)?;
        // every account is checked before any is credited
        let credits = self
            .accounts
            .iter()
            .map(|acc| acc.handle_interest(rate))
            .collect::<Result<Vec<_>, _>>()?;
        for (acc, tx) in self.accounts.iter_mut().zip(credits) {
            debug!(account = acc.id(), interest = %tx.amount(), "interest credited");
            acc.apply(tx);
        }
        info!(%rate, accounts = self.accounts.len(), "interest applied");
        Ok(self.accounts.len())
    }

    fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }
}
