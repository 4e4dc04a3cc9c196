//! Round phase types.

use serde::Serialize;

/// Round phase.
///
/// A round moves `NotStarted -> Dealing -> AwaitingDecision -> Resolving ->
/// Complete`. Dealing auto-transitions to either `AwaitingDecision` or, on a
/// natural blackjack, straight to `Complete`. `Complete` is terminal; a new
/// round requires a fresh start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No round is active.
    NotStarted,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for a player decision.
    AwaitingDecision,
    /// Dealer plays out their hand.
    Resolving,
    /// Round has ended and the outcome is final.
    Complete,
}
