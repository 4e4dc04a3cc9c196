//! Table rules and payout configuration.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

impl RoundingMode {
    /// Rounds a fractional amount to a whole payout.
    #[must_use]
    pub fn apply(self, amount: f64) -> usize {
        match self {
            Self::Up => amount.ceil() as usize,
            Self::Down => amount.floor() as usize,
            Self::Nearest => amount.round() as usize,
        }
    }
}

/// Rules for a blackjack table.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bitjack::TableRules;
///
/// let rules = TableRules::default()
///     .with_max_wager(1000)
///     .with_blackjack_pays(1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableRules {
    /// Minimum wager accepted at round start.
    pub min_wager: usize,
    /// Maximum wager; also caps the doubled wager after a double down.
    pub max_wager: usize,
    /// Dealer stands once their score reaches this total.
    pub dealer_stands_on: u8,
    /// Blackjack profit ratio (typically 1.5, for a 2.5x total payout).
    pub blackjack_pays: f64,
    /// Rounding mode for fractional blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            min_wager: 1,
            max_wager: 500,
            dealer_stands_on: 17,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl TableRules {
    /// Sets the minimum wager.
    ///
    /// # Example
    ///
    /// ```
    /// use bitjack::TableRules;
    ///
    /// let rules = TableRules::default().with_min_wager(5);
    /// assert_eq!(rules.min_wager, 5);
    /// ```
    #[must_use]
    pub const fn with_min_wager(mut self, min_wager: usize) -> Self {
        self.min_wager = min_wager;
        self
    }

    /// Sets the maximum wager.
    ///
    /// # Example
    ///
    /// ```
    /// use bitjack::TableRules;
    ///
    /// let rules = TableRules::default().with_max_wager(1000);
    /// assert_eq!(rules.max_wager, 1000);
    /// ```
    #[must_use]
    pub const fn with_max_wager(mut self, max_wager: usize) -> Self {
        self.max_wager = max_wager;
        self
    }

    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bitjack::TableRules;
    ///
    /// let rules = TableRules::default().with_dealer_stands_on(18);
    /// assert_eq!(rules.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the blackjack profit ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bitjack::TableRules;
    ///
    /// let rules = TableRules::default().with_blackjack_pays(1.2);
    /// assert_eq!(rules.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bitjack::{RoundingMode, TableRules};
    ///
    /// let rules = TableRules::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(rules.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
