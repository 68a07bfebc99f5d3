use rust_decimal::{Decimal, prelude::Zero};

use super::BankError;

/// Validation switches for inputs the ledger accepts by default.
///
/// A negative interest rate works like a fee, and a negative opening balance
/// starts an account in debt. Both are allowed unless switched off here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    pub allow_negative_interest: bool,
    pub allow_negative_opening_balance: bool,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            allow_negative_interest: true,
            allow_negative_opening_balance: true,
        }
    }
}

impl LedgerPolicy {
    pub fn strict() -> Self {
        Self {
            allow_negative_interest: false,
            allow_negative_opening_balance: false,
        }
    }

    pub fn check_opening_balance(&self, amount: Decimal) -> Result<(), BankError> {
        if amount < Decimal::zero() && !self.allow_negative_opening_balance {
            return Err(BankError::NegativeOpeningBalance(amount));
        }
        Ok(())
    }

    pub fn check_interest_rate(&self, rate: Decimal) -> Result<(), BankError> {
        if rate < Decimal::zero() && !self.allow_negative_interest {
            return Err(BankError::NegativeInterestRate(rate));
        }
        Ok(())
    }
}
