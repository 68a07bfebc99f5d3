use std::str::from_utf8;

use bank_ledger::{
    bank::{Bank, LedgerPolicy, in_memory_bank::InMemoryBank},
    bin_utils::Session,
    transaction::TransactionKind,
};
use rust_decimal::{Decimal, prelude::FromPrimitive};

fn run_session(bank: &mut InMemoryBank, script: &str) -> String {
    let mut output = Vec::new();
    let session = Session {
        input: script.as_bytes(),
        output: &mut output,
    };
    session.run(bank).unwrap();
    from_utf8(&output).unwrap().to_owned()
}

#[test]
fn deposit_and_password_gated_withdrawal() {
    let script = "\
1\nA1\nAlice Smith\npw1\n100\n\
2\nA1\n50\n\
3\nA1\n60\nwrong\n\
3\nA1\n60\npw1\n\
3\nZZ\n10\n\
6\nA1\npw1\n\
5\nA1\npw1\n\
10\n";
    let mut bank = InMemoryBank::default();
    let output = run_session(&mut bank, script);

    assert!(output.contains("Account created successfully!"));
    assert!(output.contains("Deposited 50.00. New balance: 150.00"));
    assert!(output.contains("Error: Incorrect password for account `A1`"));
    assert!(output.contains("Withdrew 60.00. New balance: 90.00"));
    assert!(output.contains("Error: Account `ZZ` not found"));
    assert!(output.contains("Transaction History for Account: A1"));
    assert!(output.contains("Account Holder: Alice Smith"));
    assert!(output.contains("Balance: 90.00"));
    assert!(output.ends_with("Exiting...\n"));

    let rows: Vec<_> = output
        .lines()
        .filter(|line| line.starts_with("Deposit,") || line.starts_with("Withdraw,"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("Deposit,50.00,"));
    assert!(rows[1].starts_with("Withdraw,60.00,"));

    let acc = bank.find_account("A1").unwrap();
    assert_eq!(acc.balance(), Decimal::from_u32(90).unwrap());
    let kinds: Vec<_> = acc.history().iter().map(|tx| tx.kind()).collect();
    assert_eq!(kinds, [TransactionKind::Deposit, TransactionKind::Withdraw]);
}

#[test]
fn transfers_listing_and_deletion() {
    // no Exit at the end, the session stops when input runs out
    let script = "\
1\nX\nXavier\npx\n100\n\
1\nY\nYvonne\npy\n50\n\
1\nX\nDup\np\n5\n\
4\nX\nY\n30\n\
4\nX\nY\n150\n\
2\nY\nabc\n\
42\n\
9\n\
7\nQ\n\
7\nY\n";
    let mut bank = InMemoryBank::default();
    let output = run_session(&mut bank, script);

    assert!(output.contains("Error: Account `X` already exists"));
    assert!(output.contains("Transfer successful!"));
    assert!(output.contains("Error: Insufficient balance: requested 150, available 70"));
    assert!(output.contains("Error: Invalid amount: `abc` is not a number"));
    assert!(output.contains("Invalid choice! Please try again."));
    assert!(output.contains("account,holder,balance"));
    assert!(output.lines().any(|line| line == "X,Xavier,70.00"));
    assert!(output.lines().any(|line| line == "Y,Yvonne,80.00"));
    assert!(output.contains("Error: Account `Q` not found"));
    assert!(output.contains("Account deleted successfully!"));
    assert!(!output.contains("Exiting..."));

    assert_eq!(bank.len(), 1);
    let x = bank.find_account("X").unwrap();
    assert_eq!(x.balance(), Decimal::from_u32(70).unwrap());
    assert_eq!(x.history().len(), 1);
}

#[test]
fn interest_sweep_follows_policy() {
    let script = "\
1\nA1\nAlice\npw\n200\n\
1\nA2\nBob\npw\n-20\n\
8\n10\n\
8\n-5\n\
10\n";

    let mut bank = InMemoryBank::default();
    let output = run_session(&mut bank, script);
    assert_eq!(output.matches("Interest added to 2 account(s)!").count(), 2);
    let balances: Vec<_> = bank.accounts().map(|acc| acc.balance()).collect();
    // 200 * 1.10 * 0.95 and -20 * 1.10 * 0.95
    assert_eq!(balances, [Decimal::new(209, 0), Decimal::new(-209, 1)]);

    let mut bank = InMemoryBank::with_policy(LedgerPolicy::strict());
    let output = run_session(&mut bank, script);
    assert!(output.contains("Error: Opening balance -20 is negative"));
    assert!(output.contains("Interest added to 1 account(s)!"));
    assert!(output.contains("Error: Interest rate -5 is negative"));
    assert_eq!(bank.len(), 1);
    let acc = bank.find_account("A1").unwrap();
    assert_eq!(acc.balance(), Decimal::from_u32(220).unwrap());
    assert_eq!(acc.history().len(), 1);
}

#[test]
fn amounts_out_of_range_are_reported() {
    let script = "\
1\nA1\nAl\npw\n79228162514264337593543950335\n\
1\nB1\nBo\npw\n10\n\
2\nA1\n1\n\
8\n500\n\
4\nB1\nA1\n5\n\
2\nB1\n5\n\
10\n";
    let mut bank = InMemoryBank::default();
    let output = run_session(&mut bank, script);

    assert_eq!(
        output
            .matches("would take balance 79228162514264337593543950335 out of the supported range")
            .count(),
        3
    );
    // the session keeps going after each rejection
    assert!(output.contains("Deposited 5.00. New balance: 15.00"));
    assert!(output.ends_with("Exiting...\n"));

    let a1 = bank.find_account("A1").unwrap();
    assert_eq!(a1.balance(), Decimal::MAX);
    assert!(a1.history().is_empty());
    let b1 = bank.find_account("B1").unwrap();
    assert_eq!(b1.balance(), Decimal::from_u32(15).unwrap());
    assert_eq!(b1.history().len(), 1);
}

#[test]
fn account_numbers_must_be_single_words() {
    let script = "\
1\n\n\
1\nA 1\n\
1\nA1\nAlice\n\n\
10\n";
    let mut bank = InMemoryBank::default();
    let output = run_session(&mut bank, script);

    assert!(output.contains("Error: Invalid account number: `` must be a single word"));
    assert!(output.contains("Error: Invalid account number: `A 1` must be a single word"));
    assert!(output.contains("Error: Invalid password: `` must be a single word"));
    assert!(bank.is_empty());
}
