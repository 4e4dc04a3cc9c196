//! Round outcomes and payout resolution.

use serde::Serialize;

use crate::rules::TableRules;

/// Final outcome of a round.
///
/// Natural blackjacks are detected only on the initial two-card deal and
/// take precedence over all subsequent play, so the blackjack variants can
/// never follow a hit or a double down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Player has a natural blackjack and the dealer does not.
    PlayerBlackjack,
    /// Dealer has a natural blackjack and the player does not.
    DealerBlackjack,
    /// Both sides have natural blackjacks.
    BlackjackPush,
    /// Player total exceeded 21.
    PlayerBust,
    /// Dealer total exceeded 21 after the draw-out.
    DealerBust,
    /// Player total beats the dealer total.
    PlayerWin,
    /// Dealer total beats the player total.
    DealerWin,
    /// Equal totals; the wager is returned.
    Push,
}

impl Outcome {
    /// Returns the outcome text shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Player has Blackjack! You win.",
            Self::DealerBlackjack => "Dealer has Blackjack! You Lose.",
            Self::BlackjackPush => "Both have Blackjack! Push.",
            Self::PlayerBust => "You Busted!",
            Self::DealerBust => "Dealer Busted — You Win!",
            Self::PlayerWin => "You Win!",
            Self::DealerWin => "You Lose!",
            Self::Push => "Push! (Draw)",
        }
    }

    /// Returns the total credit for this outcome, given the final wager.
    ///
    /// A push returns exactly the wager, wins pay double, and a natural
    /// blackjack pays the wager plus the rounded `blackjack_pays` winnings
    /// (2.5x in total at the default 1.5 ratio). Losing outcomes pay nothing;
    /// the wager was already debited at round start.
    #[must_use]
    pub fn payout(self, wager: usize, rules: &TableRules) -> usize {
        match self {
            Self::PlayerBlackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (wager as f64) * rules.blackjack_pays;
                wager + rules.rounding_blackjack.apply(winnings)
            }
            Self::DealerBust | Self::PlayerWin => wager * 2,
            Self::BlackjackPush | Self::Push => wager,
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWin => 0,
        }
    }
}
