//! The betting state machine and the tree builder encode the same street.
//!
//! Enumerating every legal action sequence on a fresh postflop street must
//! give as many folds and settled rounds as one street of the tree.

use limit_holdem::betting::HandState;
use limit_holdem::cards::Deck;
use limit_holdem::tree::{NodeLabel, TreeBuilder, TreeConfig};
use limit_holdem::{Action, GameRng, Role, Seats, TableConfig};

/// (folds, settled rounds) reachable from `hand`.
fn enumerate(hand: &HandState) -> (usize, usize) {
    if hand.hand_over {
        return (1, 0);
    }
    if hand.pot_is_good() {
        return (0, 1);
    }

    hand.available_actions(hand.to_act)
        .into_iter()
        .map(|action| {
            let mut next = hand.clone();
            next.apply(action).unwrap();
            enumerate(&next)
        })
        .fold((0, 0), |(f, s), (df, ds)| (f + df, s + ds))
}

fn fresh_flop(raise_cap: u8) -> HandState {
    let config = TableConfig::default().with_raise_cap(raise_cap);
    let mut deck = Deck::shuffled(&mut GameRng::new(0));
    let holes = Seats::new(deck.draw_hole().unwrap(), deck.draw_hole().unwrap());

    let mut hand = HandState::new(&config, Seats::with_value(200), Role::P0, holes);
    hand.apply(Action::call(1)).unwrap();
    hand.apply(Action::check()).unwrap();
    hand.advance_street(&deck.draw(3).unwrap());
    hand
}

/// (folds, continuations) on the only street of a one-outcome tree.
fn tree_street(raise_cap: u8) -> (usize, usize) {
    let config = TreeConfig::new(2, 1).with_raise_cap(raise_cap);
    let tree = TreeBuilder::new(config).unwrap().build().tree;

    let folds = tree.iter().filter(|(_, n)| n.label == NodeLabel::Fold).count();
    let calls = tree.iter().filter(|(_, n)| n.label == NodeLabel::Call).count();
    let check_checks = tree
        .iter()
        .filter(|(_, n)| n.label == NodeLabel::Check && tree.get(n.parent).label == NodeLabel::Check)
        .count();

    (folds, calls + check_checks)
}

#[test]
fn test_default_cap_has_17_sequences() {
    let (folds, settled) = enumerate(&fresh_flop(3));
    assert_eq!((folds, settled), (8, 9));
    assert_eq!(tree_street(3), (8, 9));
}

#[test]
fn test_state_machine_matches_tree_for_every_cap() {
    for raise_cap in 0..=5 {
        assert_eq!(
            enumerate(&fresh_flop(raise_cap)),
            tree_street(raise_cap),
            "raise cap {raise_cap}"
        );
    }
}
