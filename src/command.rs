use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
    ShowAccount,
    ShowHistory,
    DeleteAccount,
    ApplyInterest,
    ListAccounts,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid choice! Please try again.")]
    UnknownChoice(String),
    #[error("Invalid {field}: `{value}` is not a number")]
    MalformedNumber { field: &'static str, value: String },
    #[error("Invalid {field}: `{value}` must be a single word")]
    NotSingleWord { field: &'static str, value: String },
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 10] = [
        MenuCommand::CreateAccount,
        MenuCommand::Deposit,
        MenuCommand::Withdraw,
        MenuCommand::Transfer,
        MenuCommand::ShowAccount,
        MenuCommand::ShowHistory,
        MenuCommand::DeleteAccount,
        MenuCommand::ApplyInterest,
        MenuCommand::ListAccounts,
        MenuCommand::Exit,
    ];

    /// Number the operator types to pick this command.
    pub fn choice(self) -> usize {
        match self {
            MenuCommand::CreateAccount => 1,
            MenuCommand::Deposit => 2,
            MenuCommand::Withdraw => 3,
            MenuCommand::Transfer => 4,
            MenuCommand::ShowAccount => 5,
            MenuCommand::ShowHistory => 6,
            MenuCommand::DeleteAccount => 7,
            MenuCommand::ApplyInterest => 8,
            MenuCommand::ListAccounts => 9,
            MenuCommand::Exit => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::CreateAccount => "Create Account",
            MenuCommand::Deposit => "Deposit",
            MenuCommand::Withdraw => "Withdraw",
            MenuCommand::Transfer => "Transfer Funds",
            MenuCommand::ShowAccount => "Display Account Details",
            MenuCommand::ShowHistory => "Display Transaction History",
            MenuCommand::DeleteAccount => "Delete Account",
            MenuCommand::ApplyInterest => "Add Interest to All Accounts",
            MenuCommand::ListAccounts => "Display All Accounts (Admin)",
            MenuCommand::Exit => "Exit",
        }
    }
}

impl FromStr for MenuCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<usize>()
            .ok()
            .and_then(|n| Self::ALL.into_iter().find(|cmd| cmd.choice() == n))
            .ok_or_else(|| CommandError::UnknownChoice(s.to_owned()))
    }
}

/// Parses a user supplied decimal. Sign is not checked here, the ledger does that.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, CommandError> {
    let raw = raw.trim();
    Decimal::from_str(raw).map_err(|_| CommandError::MalformedNumber {
        field,
        value: raw.to_owned(),
    })
}

/// Parses a value that must be one non-empty, whitespace free word,
/// such as an account number.
pub fn parse_word<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains(char::is_whitespace) {
        return Err(CommandError::NotSingleWord {
            field,
            value: raw.to_owned(),
        });
    }
    Ok(raw)
}
