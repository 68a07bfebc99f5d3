use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Interest,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
            TransactionKind::Interest => "Interest",
        };
        f.write_str(name)
    }
}

/// A single entry of an account's log.
///
/// Fields are private so a recorded entry cannot be altered after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Signed effect of this entry on the balance.
    pub fn balance_delta(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit | TransactionKind::Interest => self.amount,
            TransactionKind::Withdraw => -self.amount,
        }
    }
}
