//! Wager decisions.
//!
//! An `Action` is a kind plus an amount of chips. The amount is always the
//! number of chips the action moves from the actor's stack into their bet:
//!
//! - `Fold` / `Check` move nothing (amount 0)
//! - `Call` moves what the actor owes
//! - `Bet` moves the fixed bet for the street
//! - `Raise` moves what the actor owes plus the fixed raise increment
//! - `Shove` moves the actor's whole remaining stack. A blind can leave the
//!   actor with nothing behind; the shove then moves 0 chips and only
//!   takes back the part of the opponent's bet it cannot match.
//!
//! Actions compare by (kind, amount), which is how policies are matched
//! against the legal set.

use serde::{Deserialize, Serialize};

use super::player::Role;

/// Chip amounts. One chip is the default small blind.
pub type Chips = u32;

/// The kind of wager decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Shove,
}

impl ActionKind {
    /// Whether actions of this kind carry a chip amount.
    #[must_use]
    pub const fn has_amount(self) -> bool {
        !matches!(self, ActionKind::Fold | ActionKind::Check)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::Shove => "shove",
        };
        f.write_str(name)
    }
}

/// An immutable wager decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// What the actor does.
    pub kind: ActionKind,

    /// Chips moved from stack to bet.
    pub amount: Chips,
}

impl Action {
    /// Create an action from a kind and amount.
    #[must_use]
    pub const fn new(kind: ActionKind, amount: Chips) -> Self {
        Self { kind, amount }
    }

    /// Give up the hand.
    #[must_use]
    pub const fn fold() -> Self {
        Self::new(ActionKind::Fold, 0)
    }

    /// Pass without adding chips.
    #[must_use]
    pub const fn check() -> Self {
        Self::new(ActionKind::Check, 0)
    }

    /// Match the opponent's bet.
    #[must_use]
    pub const fn call(amount: Chips) -> Self {
        Self::new(ActionKind::Call, amount)
    }

    /// Open the betting on a street.
    #[must_use]
    pub const fn bet(amount: Chips) -> Self {
        Self::new(ActionKind::Bet, amount)
    }

    /// Raise the opponent's bet by the fixed increment.
    #[must_use]
    pub const fn raise(amount: Chips) -> Self {
        Self::new(ActionKind::Raise, amount)
    }

    /// Put the whole remaining stack in.
    #[must_use]
    pub const fn shove(amount: Chips) -> Self {
        Self::new(ActionKind::Shove, amount)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == ActionKind::Shove && self.amount == 0 {
            f.write_str("all-in")
        } else if self.kind.has_amount() {
            write!(f, "{} {}", self.kind, self.amount)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// An action taken by a role on a given street.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The role that acted.
    pub role: Role,

    /// The action taken.
    pub action: Action,

    /// Street on which the action was taken (0 = preflop).
    pub street: u8,
}

impl ActionRecord {
    /// Record an action.
    #[must_use]
    pub fn new(role: Role, action: Action, street: u8) -> Self {
        Self { role, action, street }
    }
}
