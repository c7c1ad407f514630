//! Table configuration.
//!
//! All amounts are in chips. The defaults describe a 100 big blind heads-up
//! limit game with a 1/2 blind structure:
//!
//! - small bet = 1 big blind (preflop, flop)
//! - big bet = 2 big blinds (turn, river)
//! - three raises per street

use serde::{Deserialize, Serialize};

use super::action::Chips;

/// Table rules and session parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Forced bet of the small blind.
    pub small_blind: Chips,

    /// Forced bet of the big blind.
    pub big_blind: Chips,

    /// Stack each role starts the session with.
    pub starting_stack: Chips,

    /// Fixed bet and raise increment on the first two streets.
    /// Later streets use twice this amount.
    pub small_bet: Chips,

    /// Maximum raises per street.
    pub raise_cap: u8,

    /// Number of betting streets (4 = preflop, flop, turn, river).
    pub streets: u8,

    /// Seed for dealing and strategy sampling.
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 1,
            big_blind: 2,
            starting_stack: 200,
            small_bet: 2,
            raise_cap: 3,
            streets: 4,
            seed: 42,
        }
    }
}

impl TableConfig {
    /// Set both blinds. The small bet follows the big blind.
    #[must_use]
    pub fn with_blinds(mut self, small_blind: Chips, big_blind: Chips) -> Self {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self.small_bet = big_blind;
        self
    }

    /// Set the stack each role starts the session with.
    #[must_use]
    pub fn with_starting_stack(mut self, stack: Chips) -> Self {
        self.starting_stack = stack;
        self
    }

    /// Set the most raises allowed on one street.
    #[must_use]
    pub fn with_raise_cap(mut self, cap: u8) -> Self {
        self.raise_cap = cap;
        self
    }

    /// Set the session seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fixed bet for a street: the small bet early, twice that from the turn.
    #[must_use]
    pub fn bet_amount(&self, street: u8) -> Chips {
        if street < 2 {
            self.small_bet
        } else {
            2 * self.small_bet
        }
    }

    /// Fixed raise increment for a street. Same schedule as bets.
    #[must_use]
    pub fn raise_amount(&self, street: u8) -> Chips {
        self.bet_amount(street)
    }

    /// Index of the last street (the river by default).
    #[must_use]
    pub fn final_street(&self) -> u8 {
        self.streets.saturating_sub(1)
    }
}
