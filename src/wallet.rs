//! Wallet collaborator interface, wallet effects, and an in-memory backend.

use std::collections::HashMap;
use std::fmt;

use crate::error::WalletError;

/// Authenticated identity used as the wallet key.
///
/// The identity comes from the external session layer; this crate never
/// manages credentials, tokens, or sessions itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Creates a user id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Balance-holding service the round engine debits and credits.
///
/// Implementations are external collaborators (a database-backed account
/// service, typically); [`MemoryWallet`] serves demos and tests.
pub trait Wallet {
    /// Returns the current balance for the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unavailable or the user is unknown.
    fn balance(&self, user: &UserId) -> Result<usize, WalletError>;

    /// Adjusts the balance by `delta` and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unavailable, the user is unknown,
    /// or a debit would overdraw the balance.
    fn adjust(&mut self, user: &UserId, delta: isize) -> Result<usize, WalletError>;

    /// Records the user's active wager marker. An amount of zero clears it.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unavailable or the user is unknown.
    fn set_active_wager(&mut self, user: &UserId, amount: usize) -> Result<(), WalletError>;
}

/// A wallet operation produced by a round transition.
///
/// Round operations never touch the wallet themselves; they return effects
/// for the table driver to execute as a distinct step, so a failing wallet
/// call leaves the in-memory round state untouched and retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEffect {
    /// Debit the amount from the balance.
    Debit(usize),
    /// Credit a payout to the balance.
    Payout(usize),
    /// Record the active wager marker.
    SetActiveWager(usize),
    /// Clear the active wager marker.
    ClearWager,
}

/// In-memory wallet backend for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryWallet {
    balances: HashMap<UserId, usize>,
    wagers: HashMap<UserId, usize>,
}

impl MemoryWallet {
    /// Creates an empty wallet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits an account, creating it if needed.
    pub fn fund(&mut self, user: UserId, amount: usize) {
        *self.balances.entry(user).or_insert(0) += amount;
    }

    /// Returns the recorded active wager for the user, zero if none.
    #[must_use]
    pub fn active_wager(&self, user: &UserId) -> usize {
        self.wagers.get(user).copied().unwrap_or(0)
    }
}

impl Wallet for MemoryWallet {
    fn balance(&self, user: &UserId) -> Result<usize, WalletError> {
        self.balances
            .get(user)
            .copied()
            .ok_or(WalletError::UnknownUser)
    }

    fn adjust(&mut self, user: &UserId, delta: isize) -> Result<usize, WalletError> {
        let balance = self
            .balances
            .get_mut(user)
            .ok_or(WalletError::UnknownUser)?;
        let next = balance
            .checked_add_signed(delta)
            .ok_or(WalletError::InsufficientFunds)?;
        *balance = next;
        Ok(next)
    }

    fn set_active_wager(&mut self, user: &UserId, amount: usize) -> Result<(), WalletError> {
        if !self.balances.contains_key(user) {
            return Err(WalletError::UnknownUser);
        }
        if amount == 0 {
            self.wagers.remove(user);
        } else {
            self.wagers.insert(user.clone(), amount);
        }
        Ok(())
    }
}
