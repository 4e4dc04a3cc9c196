use crate::result::Outcome;
use crate::wallet::WalletEffect;

use super::{Phase, RevealSequence, Round};

impl Round {
    /// Reveals the hole card, draws the dealer to the stand threshold, and
    /// resolves the outcome.
    ///
    /// Each draw decision depends on the score after the previous draw, so
    /// the draws are strictly sequential and every intermediate hand is
    /// pushed as its own snapshot. The draw-out also stops if the deck is
    /// exhausted, in which case the round resolves on the current totals.
    pub(super) fn run_dealer(
        &mut self,
        reveals: &mut RevealSequence,
        effects: &mut Vec<WalletEffect>,
    ) {
        self.phase = Phase::Resolving;
        self.dealer.reveal_all();
        reveals.push(self.snapshot());

        while self.dealer.score() < self.rules.dealer_stands_on && !self.deck.is_empty() {
            if let Some(card) = self.draw() {
                self.dealer.deal_face_up(card);
            }
            reveals.push(self.snapshot());
        }

        let outcome = self.compare_totals();
        self.complete(outcome, effects);
        reveals.push(self.snapshot());
    }

    /// Applies the outcome table to the final totals.
    fn compare_totals(&self) -> Outcome {
        let player = self.player.score();
        let dealer = self.dealer.score();

        if player > 21 {
            Outcome::PlayerBust
        } else if dealer > 21 {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerWin
        } else if player < dealer {
            Outcome::DealerWin
        } else {
            Outcome::Push
        }
    }
}
