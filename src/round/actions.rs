use crate::result::Outcome;
use crate::wallet::WalletEffect;

use super::{Phase, RevealSequence, Round, Turn};

impl Round {
    /// Returns the round unchanged, with no reveals and no effects.
    fn no_op(self) -> Turn {
        Turn {
            round: self,
            reveals: RevealSequence::new(),
            effects: Vec::new(),
        }
    }

    /// Player action: draw one card.
    ///
    /// Valid only while the round awaits a decision and the deck is
    /// non-empty; any other call is a no-op. A bust terminates the round,
    /// otherwise the round returns to awaiting a decision. Either way the
    /// turn carries a single snapshot showing the drawn card.
    #[must_use]
    pub fn hit(mut self) -> Turn {
        if self.phase != Phase::AwaitingDecision || self.deck.is_empty() {
            return self.no_op();
        }

        let mut reveals = RevealSequence::new();
        let mut effects = Vec::new();

        if let Some(card) = self.draw() {
            self.player.deal_face_up(card);
        }

        if self.player.is_bust() {
            self.complete(Outcome::PlayerBust, &mut effects);
        }
        reveals.push(self.snapshot());

        Turn {
            round: self,
            reveals,
            effects,
        }
    }

    /// Player action: stop drawing and let the dealer play out.
    ///
    /// Valid only while the round awaits a decision; any other call is a
    /// no-op. Reveals the hole card, runs the dealer draw-out, and resolves
    /// the outcome.
    #[must_use]
    pub fn stand(mut self) -> Turn {
        if self.phase != Phase::AwaitingDecision {
            return self.no_op();
        }

        let mut reveals = RevealSequence::new();
        let mut effects = Vec::new();
        self.run_dealer(&mut reveals, &mut effects);

        Turn {
            round: self,
            reveals,
            effects,
        }
    }

    /// Player action: double the wager, draw exactly one card, then stand.
    ///
    /// Valid only while the round awaits a decision with exactly two player
    /// cards and a non-empty deck; any other call is a no-op. The doubled
    /// wager is capped at the table maximum and the additional amount is a
    /// further debit effect. A bust forfeits the full doubled wager;
    /// otherwise the stand sequence runs automatically.
    #[must_use]
    pub fn double_down(mut self) -> Turn {
        if !self.can_double() {
            return self.no_op();
        }

        let mut reveals = RevealSequence::new();
        let mut effects = Vec::new();

        let doubled = (self.wager * 2).min(self.rules.max_wager);
        let extra = doubled - self.wager;
        self.wager = doubled;
        if extra > 0 {
            effects.push(WalletEffect::Debit(extra));
            effects.push(WalletEffect::SetActiveWager(doubled));
        }

        if let Some(card) = self.draw() {
            self.player.deal_face_up(card);
        }

        if self.player.is_bust() {
            self.complete(Outcome::PlayerBust, &mut effects);
            reveals.push(self.snapshot());
        } else {
            // The decision is spent; the stand sequence runs automatically.
            self.phase = Phase::Resolving;
            reveals.push(self.snapshot());
            self.run_dealer(&mut reveals, &mut effects);
        }

        Turn {
            round: self,
            reveals,
            effects,
        }
    }
}
