use std::io::Write;

use crate::{
    account::Account,
    transaction::{Transaction, TransactionKind},
};
use csv::Writer;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Same layout as `ctime`, e.g. `Mon Oct 19 14:03:11 2026`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Serialize)]
pub struct AccountRow<'a> {
    pub account: &'a str,
    pub holder: &'a str,
    #[serde(serialize_with = "two_decimals")]
    pub balance: Decimal,
}

impl<'a> From<&'a Account> for AccountRow<'a> {
    fn from(acc: &'a Account) -> Self {
        Self {
            account: acc.id(),
            holder: acc.holder_name(),
            balance: acc.balance(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryRow {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(serialize_with = "two_decimals")]
    pub amount: Decimal,
    pub timestamp: String,
}

impl From<&Transaction> for HistoryRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            kind: tx.kind(),
            amount: tx.amount(),
            timestamp: tx.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

fn two_decimals<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{:.2}", value.round_dp(2)))
}

pub fn print_rows<W, S>(output: &mut W, rows: impl Iterator<Item = S>) -> anyhow::Result<()>
where
    W: Write,
    S: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
