//! Hand scoring for showdowns.
//!
//! Scores are `rs_poker` ranks, which order higher-is-better: a strictly
//! greater `Rank` is the stronger hand, equal ranks split the pot.

use rs_poker::core::{Card, Hand, Rank, Rankable};

/// Scores a holding against the board.
pub trait Evaluator {
    /// Score the best five-card hand from `hole` plus `board`.
    fn evaluate(&self, board: &[Card], hole: &[Card; 2]) -> Rank;
}

/// Seven-card ranking through `rs_poker`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandRanker;

impl Evaluator for HandRanker {
    fn evaluate(&self, board: &[Card], hole: &[Card; 2]) -> Rank {
        let mut hand = Hand::default();
        for &card in board.iter().chain(hole.iter()) {
            hand.insert(card);
        }
        hand.rank()
    }
}

impl<F> Evaluator for F
where
    F: Fn(&[Card], &[Card; 2]) -> Rank,
{
    fn evaluate(&self, board: &[Card], hole: &[Card; 2]) -> Rank {
        self(board, hole)
    }
}
