//! A blackjack round engine with staged reveals and a pluggable wallet
//! backend.
//!
//! The crate owns the rules of a single blackjack round: deck management,
//! dealing, scoring, and turn sequencing. Each operation consumes the
//! current [`Round`] and returns a [`Turn`] carrying the next round state, a
//! finite [`RevealSequence`] of observable snapshots, and the
//! [`WalletEffect`]s to execute against an external balance service.
//! [`Table`] glues a round to a [`Wallet`] implementation keyed by the
//! authenticated [`UserId`].
//!
//! # Example
//!
//! ```
//! use bitjack::{MemoryWallet, Table, UserId};
//!
//! let mut wallet = MemoryWallet::new();
//! let user = UserId::new("player-1");
//! wallet.fund(user.clone(), 500);
//!
//! let mut table = Table::new(wallet, user);
//! for snapshot in table.start_round(25, 42)? {
//!     println!("{:?}: {:?}", snapshot.phase, snapshot.player_cards);
//! }
//! # Ok::<(), bitjack::StartError>(())
//! ```

pub mod card;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;
pub mod rules;
pub mod table;
pub mod wallet;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{StartError, WagerError, WalletError};
pub use hand::{DealtCard, FACE_DOWN_CODE, Hand};
pub use result::Outcome;
pub use round::{Phase, RevealSequence, Round, RoundSnapshot, Turn};
pub use rules::{RoundingMode, TableRules};
pub use table::Table;
pub use wallet::{MemoryWallet, UserId, Wallet, WalletEffect};
