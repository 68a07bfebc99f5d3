/// Single ledger entry: what happened, how much, and when.
pub mod transaction;

/// Account balance and its transaction log.
/// Every change is first validated into a [`transaction::Transaction`], then applied.
pub mod account;

/// Parsing of raw operator input into menu commands and amounts.
pub mod command;

/// Account registry interface, plus "in memory" implementation.
/// Owns all accounts and coordinates cross-account operations like transfers.
///
/// NOTE: the trait is the place to plug in a registry with keyed lookup or
/// per-account locking, without touching the menu.
pub mod bank;

/// Menu session used by the binary. Lives in the library so the
/// integration tests can drive it too.
pub mod bin_utils;
