//! Error types for round and wallet operations.

use thiserror::Error;

/// Errors raised when validating a wager before any card is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Wager is outside the table limits.
    #[error("wager is outside the table limits")]
    OutOfRange,
    /// Wager exceeds the available balance.
    #[error("wager exceeds the available balance")]
    InsufficientBalance,
}

/// Errors raised by the wallet collaborator.
///
/// A wallet failure is reported distinctly from game outcomes: the in-memory
/// round state stays consistent, so the caller may retry the wallet operation
/// without re-dealing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The wallet service could not be reached.
    #[error("wallet service unavailable: {0}")]
    Unavailable(String),
    /// The wallet holds no entry for this user.
    #[error("no wallet entry for this user")]
    UnknownUser,
    /// The wallet refused the adjustment for lack of funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors raised when starting a round at a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    /// The wager was rejected synchronously; no card was dealt and no wallet
    /// call was made.
    #[error(transparent)]
    InvalidWager(#[from] WagerError),
    /// The wallet collaborator failed while reading the balance or applying
    /// the wager debit.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}
