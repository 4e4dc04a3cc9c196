//! Table driver and wallet integration tests.

use bitjack::{
    Card, MemoryWallet, Outcome, Phase, StartError, Suit, Table, UserId, WagerError, Wallet,
    WalletError,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn deck_from_draws(draws: &[Card]) -> Vec<Card> {
    let mut deck = draws.to_vec();
    deck.reverse();
    deck
}

fn no_blackjack_draws() -> [Card; 4] {
    [
        card(Suit::Hearts, 5),   // player
        card(Suit::Clubs, 9),    // dealer up
        card(Suit::Diamonds, 6), // player
        card(Suit::Spades, 7),   // dealer hole
    ]
}

fn table_with_funds(amount: usize) -> (Table<MemoryWallet>, UserId) {
    let user = UserId::new("player-1");
    let mut wallet = MemoryWallet::new();
    wallet.fund(user.clone(), amount);
    (Table::new(wallet, user.clone()), user)
}

/// Wallet wrapper whose balance adjustments can be switched off, standing in
/// for a backend outage.
struct FlakyWallet {
    inner: MemoryWallet,
    fail_adjust: bool,
}

impl Wallet for FlakyWallet {
    fn balance(&self, user: &UserId) -> Result<usize, WalletError> {
        self.inner.balance(user)
    }

    fn adjust(&mut self, user: &UserId, delta: isize) -> Result<usize, WalletError> {
        if self.fail_adjust {
            return Err(WalletError::Unavailable("adjust offline".into()));
        }
        self.inner.adjust(user, delta)
    }

    fn set_active_wager(&mut self, user: &UserId, amount: usize) -> Result<(), WalletError> {
        self.inner.set_active_wager(user, amount)
    }
}

#[test]
fn start_debits_the_wager_and_marks_it_active() {
    let (mut table, user) = table_with_funds(500);

    let reveals = table
        .start_round_with_deck(100, deck_from_draws(&no_blackjack_draws()))
        .unwrap();
    assert_eq!(reveals.len(), 5);

    assert_eq!(table.phase(), Phase::AwaitingDecision);
    assert_eq!(table.balance().unwrap(), 400);
    assert_eq!(table.wallet().active_wager(&user), 100);
}

#[test]
fn winning_round_pays_double_and_clears_the_wager() {
    let (mut table, user) = table_with_funds(500);

    table
        .start_round_with_deck(
            100,
            deck_from_draws(&[
                card(Suit::Hearts, 10),  // player
                card(Suit::Diamonds, 10), // dealer up
                card(Suit::Clubs, 9),    // player -> 19
                card(Suit::Spades, 7),   // dealer hole -> 17, stands
            ]),
        )
        .unwrap();

    table.stand().unwrap();
    assert_eq!(table.phase(), Phase::Complete);
    assert_eq!(table.round().unwrap().outcome(), Some(Outcome::PlayerWin));
    assert_eq!(table.balance().unwrap(), 600);
    assert_eq!(table.wallet().active_wager(&user), 0);
}

#[test]
fn natural_blackjack_pays_two_and_a_half_times() {
    let (mut table, user) = table_with_funds(500);

    table
        .start_round_with_deck(
            100,
            deck_from_draws(&[
                card(Suit::Spades, 1),   // player
                card(Suit::Hearts, 9),   // dealer up
                card(Suit::Spades, 13),  // player -> natural 21
                card(Suit::Diamonds, 7), // dealer hole
            ]),
        )
        .unwrap();

    assert_eq!(table.phase(), Phase::Complete);
    assert_eq!(table.balance().unwrap(), 650);
    assert_eq!(table.wallet().active_wager(&user), 0);
}

#[test]
fn bust_after_doubling_forfeits_the_full_doubled_wager() {
    let (mut table, user) = table_with_funds(500);

    table
        .start_round_with_deck(
            400,
            deck_from_draws(&[
                card(Suit::Hearts, 10),
                card(Suit::Clubs, 10),
                card(Suit::Diamonds, 6),
                card(Suit::Spades, 9),
                card(Suit::Diamonds, 13), // double draw -> 26
            ]),
        )
        .unwrap();
    assert_eq!(table.balance().unwrap(), 100);

    table.double_down().unwrap();
    assert_eq!(table.round().unwrap().wager(), 500);
    assert_eq!(table.round().unwrap().outcome(), Some(Outcome::PlayerBust));
    assert_eq!(table.balance().unwrap(), 0);
    assert_eq!(table.wallet().active_wager(&user), 0);
}

#[test]
fn invalid_wagers_are_rejected_before_any_wallet_write() {
    let (mut table, user) = table_with_funds(100);

    let err = table.start_round(501, 1).unwrap_err();
    assert_eq!(err, StartError::InvalidWager(WagerError::OutOfRange));

    let err = table.start_round(200, 1).unwrap_err();
    assert_eq!(err, StartError::InvalidWager(WagerError::InsufficientBalance));

    assert_eq!(table.phase(), Phase::NotStarted);
    assert_eq!(table.balance().unwrap(), 100);
    assert_eq!(table.wallet().active_wager(&user), 0);
}

#[test]
fn actions_without_a_round_are_no_ops() {
    let (mut table, _user) = table_with_funds(100);

    assert!(table.hit().unwrap().is_empty());
    assert!(table.stand().unwrap().is_empty());
    assert!(table.double_down().unwrap().is_empty());
    assert_eq!(table.phase(), Phase::NotStarted);
}

#[test]
fn starting_over_an_unfinished_round_is_a_no_op() {
    let (mut table, _user) = table_with_funds(500);

    table
        .start_round_with_deck(100, deck_from_draws(&no_blackjack_draws()))
        .unwrap();
    assert_eq!(table.balance().unwrap(), 400);

    let reveals = table.start_round(50, 7).unwrap();
    assert!(reveals.is_empty());
    // The original round and its debit are untouched.
    assert_eq!(table.phase(), Phase::AwaitingDecision);
    assert_eq!(table.balance().unwrap(), 400);
}

#[test]
fn wallet_outage_keeps_the_round_for_retry() {
    let user = UserId::new("player-1");
    let mut inner = MemoryWallet::new();
    inner.fund(user.clone(), 500);
    let mut table = Table::new(
        FlakyWallet {
            inner,
            fail_adjust: true,
        },
        user.clone(),
    );

    let err = table
        .start_round_with_deck(100, deck_from_draws(&no_blackjack_draws()))
        .unwrap_err();
    assert_eq!(
        err,
        StartError::Wallet(WalletError::Unavailable("adjust offline".into()))
    );

    // The cards were dealt; the round survives the outage.
    assert_eq!(table.phase(), Phase::AwaitingDecision);
    assert!(table.has_pending_wallet_ops());

    // Retrying against a still-broken wallet fails again.
    assert!(table.retry_wallet().is_err());
    assert!(table.has_pending_wallet_ops());

    table.wallet_mut().fail_adjust = false;
    let reveals = table.retry_wallet().unwrap().expect("stalled reveals");
    assert_eq!(reveals.len(), 5);
    assert!(!table.has_pending_wallet_ops());
    assert_eq!(table.balance().unwrap(), 400);

    // Play continues normally after the retry.
    table.stand().unwrap();
    assert_eq!(table.phase(), Phase::Complete);
}
