//! Hand representation and scoring.

use crate::card::Card;

/// Card code used for a concealed card in snapshots.
pub const FACE_DOWN_CODE: &str = "back";

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// A card dealt to a hand, either visible or concealed.
///
/// The dealer's hole card stays `FaceDown` until the round reveals it, so the
/// hand representation stays homogeneous and a reveal is a total transition
/// rather than a deleted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealtCard {
    /// A visible card.
    FaceUp(Card),
    /// A concealed card. Contributes nothing to visible scores.
    FaceDown(Card),
}

impl DealtCard {
    /// Returns the underlying card regardless of facing.
    #[must_use]
    pub const fn card(self) -> Card {
        match self {
            Self::FaceUp(card) | Self::FaceDown(card) => card,
        }
    }

    /// Returns whether the card is concealed.
    #[must_use]
    pub const fn is_face_down(self) -> bool {
        matches!(self, Self::FaceDown(_))
    }

    /// Turns the card face up.
    #[must_use]
    pub const fn revealed(self) -> Self {
        Self::FaceUp(self.card())
    }

    /// Returns the presentation code: the card's rank/suit code when visible,
    /// [`FACE_DOWN_CODE`] when concealed.
    #[must_use]
    pub fn code(self) -> String {
        match self {
            Self::FaceUp(card) => card.code(),
            Self::FaceDown(_) => FACE_DOWN_CODE.to_string(),
        }
    }
}

/// An ordered hand of dealt cards, used for both player and dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<DealtCard>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a visible card to the hand.
    pub fn deal_face_up(&mut self, card: Card) {
        self.cards.push(DealtCard::FaceUp(card));
    }

    /// Adds a concealed card to the hand.
    pub fn deal_face_down(&mut self, card: Card) {
        self.cards.push(DealtCard::FaceDown(card));
    }

    /// Turns every concealed card face up.
    pub fn reveal_all(&mut self) {
        for dealt in &mut self.cards {
            *dealt = dealt.revealed();
        }
    }

    /// Returns the dealt cards in order.
    #[must_use]
    pub fn cards(&self) -> &[DealtCard] {
        &self.cards
    }

    /// Returns the presentation codes for the hand, in deal order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|dealt| dealt.code()).collect()
    }

    /// Scores the visible cards of the hand.
    ///
    /// Every Ace is first counted as 11; while the total exceeds 21 and a
    /// soft Ace remains, one Ace is re-counted as 1. Concealed cards are
    /// excluded entirely. The result depends only on the multiset of visible
    /// cards, never on deal order.
    ///
    /// # Example
    ///
    /// ```
    /// use bitjack::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.deal_face_up(Card::new(Suit::Hearts, 1));
    /// hand.deal_face_up(Card::new(Suit::Spades, 1));
    /// hand.deal_face_up(Card::new(Suit::Clubs, 9));
    /// assert_eq!(hand.score(), 21);
    /// ```
    #[must_use]
    pub fn score(&self) -> u8 {
        let visible: Vec<Card> = self
            .cards
            .iter()
            .filter(|dealt| !dealt.is_face_down())
            .map(|dealt| dealt.card())
            .collect();
        evaluate_cards(&visible).0
    }

    /// Returns whether the visible total is soft (an Ace still counts as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let visible: Vec<Card> = self
            .cards
            .iter()
            .filter(|dealt| !dealt.is_face_down())
            .map(|dealt| dealt.card())
            .collect();
        evaluate_cards(&visible).1
    }

    /// Returns whether the visible total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is a natural blackjack: exactly two cards
    /// totalling 21, counting concealed cards.
    ///
    /// The dealer's natural is checked at deal time while the hole card is
    /// still concealed, so this peeks face-down cards where [`Hand::score`]
    /// does not.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        if self.cards.len() != 2 {
            return false;
        }
        let all: Vec<Card> = self.cards.iter().map(|dealt| dealt.card()).collect();
        evaluate_cards(&all).0 == 21
    }

    /// Returns the number of cards in the hand, concealed cards included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
