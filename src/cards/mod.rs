//! Deck and hand evaluation.
//!
//! Card types and ranking come from `rs_poker`. The deck is shuffled with
//! the session's `GameRng` so dealing is reproducible from a seed.

pub mod deck;
pub mod evaluator;

pub use deck::{card_label, cards_label, parse_card, Deck};
pub use evaluator::{Evaluator, HandRanker};

pub use rs_poker::core::{Card, Rank};
