//! Round engine and state transitions.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::WagerError;
use crate::hand::Hand;
use crate::result::Outcome;
use crate::rules::TableRules;
use crate::wallet::WalletEffect;

mod actions;
mod dealer;
pub mod reveal;
pub mod state;

pub use reveal::{RevealSequence, RoundSnapshot};
pub use state::Phase;

/// The result of a round operation.
///
/// Carries the next round state, the staged reveals the caller drives at its
/// own pace, and the wallet effects to execute against the balance service.
/// Out-of-phase operations return the round unchanged with empty reveals and
/// no effects.
#[derive(Debug)]
pub struct Turn {
    /// The round after the operation.
    pub round: Round,
    /// Discrete observable steps produced by the operation.
    pub reveals: RevealSequence,
    /// Wallet operations to execute, in order.
    pub effects: Vec<WalletEffect>,
}

/// One blackjack round: deck, hands, wager, phase, and outcome.
///
/// A round is an owned value. Every operation consumes the current round and
/// returns the next one inside a [`Turn`]; nothing is shared or mutated in
/// place across callers.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Vec<Card>,
    player: Hand,
    dealer: Hand,
    wager: usize,
    phase: Phase,
    outcome: Option<Outcome>,
    rules: TableRules,
}

/// Builds and shuffles a fresh 52-card deck.
fn fresh_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    cards.shuffle(rng);
    cards
}

impl Round {
    /// Starts a round with a freshly shuffled deck seeded from `seed`.
    ///
    /// Deals two cards to the player and two to the dealer (the second
    /// dealer card face down), produces the staged reveal schedule, and
    /// emits the wager debit effects. Natural blackjacks short-circuit the
    /// round to `Complete` before any decision is requested.
    ///
    /// # Errors
    ///
    /// Returns an error when the wager is outside the table limits or
    /// exceeds `balance`. Rejection happens before any card is dealt.
    pub fn start(
        rules: TableRules,
        wager: usize,
        balance: usize,
        seed: u64,
    ) -> Result<Turn, WagerError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = fresh_deck(&mut rng);
        Self::start_with_deck(rules, wager, balance, deck)
    }

    /// Starts a round from a prepared deck. Draws pop from the end of the
    /// deck, so the last element is the first card dealt.
    ///
    /// # Errors
    ///
    /// Returns an error when the wager is outside the table limits or
    /// exceeds `balance`.
    pub fn start_with_deck(
        rules: TableRules,
        wager: usize,
        balance: usize,
        deck: Vec<Card>,
    ) -> Result<Turn, WagerError> {
        if wager < rules.min_wager || wager > rules.max_wager {
            return Err(WagerError::OutOfRange);
        }
        if wager > balance {
            return Err(WagerError::InsufficientBalance);
        }

        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            wager,
            phase: Phase::Dealing,
            outcome: None,
            rules,
        };
        let mut reveals = RevealSequence::new();
        let mut effects = vec![
            WalletEffect::Debit(wager),
            WalletEffect::SetActiveWager(wager),
        ];

        // Deal order: player, dealer up card, player, dealer hole card.
        if let Some(card) = round.deck.pop() {
            round.player.deal_face_up(card);
        }
        reveals.push(round.snapshot());
        if let Some(card) = round.deck.pop() {
            round.dealer.deal_face_up(card);
        }
        reveals.push(round.snapshot());
        if let Some(card) = round.deck.pop() {
            round.player.deal_face_up(card);
        }
        reveals.push(round.snapshot());
        if let Some(card) = round.deck.pop() {
            round.dealer.deal_face_down(card);
        }
        reveals.push(round.snapshot());

        // Natural blackjack check, before any player decision.
        let player_natural = round.player.is_natural();
        let dealer_natural = round.dealer.is_natural();
        if player_natural || dealer_natural {
            let outcome = if player_natural && dealer_natural {
                Outcome::BlackjackPush
            } else if dealer_natural {
                Outcome::DealerBlackjack
            } else {
                Outcome::PlayerBlackjack
            };
            round.dealer.reveal_all();
            round.complete(outcome, &mut effects);
        } else {
            round.phase = Phase::AwaitingDecision;
        }
        reveals.push(round.snapshot());

        Ok(Turn {
            round,
            reveals,
            effects,
        })
    }

    /// Marks the round complete and emits the payout effects.
    fn complete(&mut self, outcome: Outcome, effects: &mut Vec<WalletEffect>) {
        self.phase = Phase::Complete;
        self.outcome = Some(outcome);

        let payout = outcome.payout(self.wager, &self.rules);
        if payout > 0 {
            effects.push(WalletEffect::Payout(payout));
        }
        effects.push(WalletEffect::ClearWager);
    }

    /// Draws the top card of the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Captures the current state as a presentation snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.phase,
            player_cards: self.player.codes(),
            dealer_cards: self.dealer.codes(),
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            message: self.outcome.map(Outcome::message),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current wager, including any double.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the final outcome once the round is complete.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the undrawn cards, bottom first; the last element is the next
    /// card dealt.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the rules the round was started with.
    #[must_use]
    pub const fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Returns whether the round is waiting on a player decision.
    #[must_use]
    pub fn awaiting_decision(&self) -> bool {
        self.phase == Phase::AwaitingDecision
    }

    /// Returns whether a double down is currently allowed: awaiting a
    /// decision, exactly two player cards, and a non-empty deck.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.awaiting_decision() && self.player.len() == 2 && !self.deck.is_empty()
    }
}
