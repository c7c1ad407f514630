use thiserror::Error;

use super::action::Action;
use super::player::Role;

/// Errors raised by the betting engine, the resolver and the deck.
///
/// None of these are retried; they propagate to the session or tree caller.
#[derive(Debug, Error)]
pub enum HoldemError {
    #[error("strategy sampled {action}, which is not a legal action")]
    InvalidAction { action: Action },

    #[error("{action} is not legal for {role}")]
    IllegalAction { role: Role, action: Action },

    #[error("no preference of {role} matches a legal action")]
    NoDecision { role: Role },

    #[error("malformed strategy: {0}")]
    MalformedStrategy(String),

    #[error("deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("the hand is already over")]
    HandOver,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("input error: {0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HoldemError>;
