use anyhow::{Context, Result};
use bank_ledger::{
    bank::{LedgerPolicy, in_memory_bank::InMemoryBank},
    bin_utils::Session,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Interactive in-memory bank ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger", version, about, long_about = None)]
struct Args {
    /// Refuse interest sweeps with a negative rate
    #[arg(long, env = "BANK_REJECT_NEGATIVE_INTEREST")]
    reject_negative_interest: bool,

    /// Refuse to open accounts with a negative initial balance
    #[arg(long, env = "BANK_REJECT_NEGATIVE_OPENING_BALANCE")]
    reject_negative_opening_balance: bool,
}

impl Args {
    fn policy(&self) -> LedgerPolicy {
        LedgerPolicy {
            allow_negative_interest: !self.reject_negative_interest,
            allow_negative_opening_balance: !self.reject_negative_opening_balance,
        }
    }
}

fn main() -> Result<()> {
    // logs go to stderr, stdout belongs to the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let policy = args.policy();
    tracing::debug!(?policy, "starting session");

    let mut bank = InMemoryBank::with_policy(policy);
    let session = Session {
        input: std::io::stdin().lock(),
        output: &mut std::io::stdout().lock(),
    };
    session
        .run(&mut bank)
        .context("Failed to write to the console")
}
