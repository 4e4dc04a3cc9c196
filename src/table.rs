//! Table driver: glues the round engine to the wallet collaborator.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::{StartError, WagerError, WalletError};
use crate::round::{Phase, RevealSequence, Round, Turn};
use crate::rules::TableRules;
use crate::wallet::{UserId, Wallet, WalletEffect};

/// A single-seat blackjack table bound to a wallet account.
///
/// The table reads the balance before a round starts, executes the wallet
/// effects each operation produces, and keeps undelivered effects plus the
/// reveal sequence they gate when the wallet fails, so the caller can retry
/// the wallet step without re-dealing.
pub struct Table<W: Wallet> {
    wallet: W,
    user: UserId,
    rules: TableRules,
    round: Option<Round>,
    pending: VecDeque<WalletEffect>,
    stalled: Option<RevealSequence>,
}

impl<W: Wallet> Table<W> {
    /// Creates a table for the given wallet account with default rules.
    pub fn new(wallet: W, user: UserId) -> Self {
        Self::with_rules(wallet, user, TableRules::default())
    }

    /// Creates a table with custom rules.
    pub fn with_rules(wallet: W, user: UserId, rules: TableRules) -> Self {
        Self {
            wallet,
            user,
            rules,
            round: None,
            pending: VecDeque::new(),
            stalled: None,
        }
    }

    /// Returns the current balance from the wallet collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error when the wallet call fails.
    pub fn balance(&self) -> Result<usize, WalletError> {
        self.wallet.balance(&self.user)
    }

    /// Returns the current round phase, `NotStarted` when no round is
    /// active.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::NotStarted, Round::phase)
    }

    /// Returns the current round, if one has been started.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Returns the wallet backend.
    #[must_use]
    pub const fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Returns the wallet backend mutably, e.g. to fund an account.
    pub const fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    /// Starts a new round with the given wager and shuffle seed.
    ///
    /// A no-op (empty reveal sequence) while a previous round is unfinished
    /// or wallet effects are still awaiting retry.
    ///
    /// # Errors
    ///
    /// Returns an invalid-wager error when the wager fails validation (no
    /// card dealt, no wallet call made), or a wallet error when the balance
    /// read or the wager debit fails. After a failed debit the dealt round
    /// is retained; see [`Table::retry_wallet`].
    pub fn start_round(&mut self, wager: usize, seed: u64) -> Result<RevealSequence, StartError> {
        self.begin(wager, |rules, wager, balance| {
            Round::start(rules, wager, balance, seed)
        })
    }

    /// Starts a new round from a prepared deck instead of a seeded shuffle,
    /// for deterministic play (tests, externally shuffled shoes). Otherwise
    /// behaves exactly like [`Table::start_round`].
    ///
    /// # Errors
    ///
    /// Same as [`Table::start_round`].
    pub fn start_round_with_deck(
        &mut self,
        wager: usize,
        deck: Vec<Card>,
    ) -> Result<RevealSequence, StartError> {
        self.begin(wager, move |rules, wager, balance| {
            Round::start_with_deck(rules, wager, balance, deck)
        })
    }

    fn begin(
        &mut self,
        wager: usize,
        start: impl FnOnce(TableRules, usize, usize) -> Result<Turn, WagerError>,
    ) -> Result<RevealSequence, StartError> {
        let in_progress = self
            .round
            .as_ref()
            .is_some_and(|round| round.phase() != Phase::Complete);
        if in_progress || !self.pending.is_empty() {
            debug!(user = %self.user, "start ignored: round or wallet retry in progress");
            return Ok(RevealSequence::new());
        }

        let balance = self.wallet.balance(&self.user)?;
        let turn = start(self.rules.clone(), wager, balance)?;
        info!(user = %self.user, wager, "round started");
        Ok(self.absorb(turn)?)
    }

    /// Player action: draw one card. No-op outside a decision point.
    ///
    /// # Errors
    ///
    /// Returns an error when a wallet effect fails; the round state is
    /// retained for [`Table::retry_wallet`].
    pub fn hit(&mut self) -> Result<RevealSequence, WalletError> {
        self.act(Round::hit)
    }

    /// Player action: stand and let the dealer play out. No-op outside a
    /// decision point.
    ///
    /// # Errors
    ///
    /// Returns an error when a wallet effect fails; the round state is
    /// retained for [`Table::retry_wallet`].
    pub fn stand(&mut self) -> Result<RevealSequence, WalletError> {
        self.act(Round::stand)
    }

    /// Player action: double down. No-op outside a decision point or with
    /// more than two player cards.
    ///
    /// # Errors
    ///
    /// Returns an error when a wallet effect fails; the round state is
    /// retained for [`Table::retry_wallet`].
    pub fn double_down(&mut self) -> Result<RevealSequence, WalletError> {
        self.act(Round::double_down)
    }

    /// Retries wallet effects that failed earlier, oldest first.
    ///
    /// On success, returns the reveal sequence whose delivery the failure
    /// had blocked, if any is still undelivered.
    ///
    /// # Errors
    ///
    /// Returns the wallet error when the retried effect fails again.
    pub fn retry_wallet(&mut self) -> Result<Option<RevealSequence>, WalletError> {
        if self.pending.is_empty() {
            return Ok(self.stalled.take());
        }

        let reveals = self.stalled.take().unwrap_or_default();
        self.drain_pending(reveals).map(Some)
    }

    /// Returns whether wallet effects are awaiting retry.
    #[must_use]
    pub fn has_pending_wallet_ops(&self) -> bool {
        !self.pending.is_empty()
    }

    fn act(
        &mut self,
        op: impl FnOnce(Round) -> Turn,
    ) -> Result<RevealSequence, WalletError> {
        let Some(round) = self.round.take() else {
            debug!(user = %self.user, "action ignored: no active round");
            return Ok(RevealSequence::new());
        };
        self.absorb(op(round))
    }

    /// Stores the next round state and executes its wallet effects.
    fn absorb(&mut self, turn: Turn) -> Result<RevealSequence, WalletError> {
        let Turn {
            round,
            reveals,
            effects,
        } = turn;

        // A no-op turn carries no effects; only log real transitions.
        if !effects.is_empty() {
            if let Some(outcome) = round.outcome() {
                info!(user = %self.user, ?outcome, wager = round.wager(), "round complete");
            }
        }
        self.round = Some(round);
        self.pending.extend(effects);
        self.drain_pending(reveals)
    }

    fn drain_pending(&mut self, reveals: RevealSequence) -> Result<RevealSequence, WalletError> {
        while let Some(effect) = self.pending.front().copied() {
            if let Err(err) = self.apply(effect) {
                warn!(user = %self.user, %err, ?effect, "wallet effect failed; round state kept for retry");
                self.stalled = Some(reveals);
                return Err(err);
            }
            self.pending.pop_front();
        }
        Ok(reveals)
    }

    fn apply(&mut self, effect: WalletEffect) -> Result<(), WalletError> {
        match effect {
            WalletEffect::Debit(amount) => {
                #[expect(
                    clippy::cast_possible_wrap,
                    reason = "wager amounts fit in isize"
                )]
                let delta = -(amount as isize);
                let balance = self.wallet.adjust(&self.user, delta)?;
                debug!(user = %self.user, amount, balance, "wager debited");
                Ok(())
            }
            WalletEffect::Payout(amount) => {
                #[expect(
                    clippy::cast_possible_wrap,
                    reason = "payout amounts fit in isize"
                )]
                let delta = amount as isize;
                let balance = self.wallet.adjust(&self.user, delta)?;
                debug!(user = %self.user, amount, balance, "payout credited");
                Ok(())
            }
            WalletEffect::SetActiveWager(amount) => {
                self.wallet.set_active_wager(&self.user, amount)
            }
            WalletEffect::ClearWager => self.wallet.set_active_wager(&self.user, 0),
        }
    }
}
