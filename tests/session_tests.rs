//! Session integration tests: scripted hands, full sessions, determinism.

use limit_holdem::betting::{HandEvent, Outcome, TableState};
use limit_holdem::cards::{Card, Rank};
use limit_holdem::players::{CallingStation, OnlyAces, Scripted, UniformRandom};
use limit_holdem::{Action, HoldemError, Policy, Result, Role, Seats, Session, TableConfig};

fn tie(_: &[Card], _: &[Card; 2]) -> Rank {
    Rank::HighCard(0)
}

// =============================================================================
// Scripted Hands
// =============================================================================

#[test]
fn test_check_down_to_showdown() {
    // Role 0 is the first big blind and acts first after the flop.
    let p0 = Scripted::actions([Action::check(); 4]);
    let p1 = Scripted::actions([Action::call(1), Action::check(), Action::check(), Action::check()]);

    let mut session =
        Session::with_evaluator(TableConfig::default(), Box::new(p0), Box::new(p1), tie);

    let outcome = session.play_hand().unwrap();
    assert_eq!(outcome, Some(Outcome::Split { shares: Seats::new(2, 2) }));
    assert_eq!(session.stacks(), Seats::new(200, 200));

    let table = session.finish();
    let record = table.history.back().unwrap();
    let boards: Vec<usize> = record
        .events
        .iter()
        .filter_map(|e| match e {
            HandEvent::DealStreet { cards, .. } => Some(cards.len()),
            _ => None,
        })
        .collect();
    assert_eq!(boards, vec![3, 1, 1]);
}

#[test]
fn test_fold_preflop() {
    let p0 = Scripted::default();
    let p1 = Scripted::actions([Action::fold()]);
    let mut session = Session::new(TableConfig::default(), Box::new(p0), Box::new(p1));

    let outcome = session.play_hand().unwrap();
    assert_eq!(outcome, Some(Outcome::Folded { winner: Role::P0, pot: 3 }));
    assert_eq!(session.stacks(), Seats::new(201, 199));
    assert_eq!(session.net(Role::P0), 1);
    assert_eq!(session.net(Role::P1), -1);
}

#[test]
fn test_empty_preference_is_no_decision() {
    let mut session = Session::new(
        TableConfig::default(),
        Box::new(Scripted::default()),
        Box::new(Scripted::default()),
    );

    let err = session.play_hand().unwrap_err();
    assert!(matches!(err, HoldemError::NoDecision { role: Role::P1 }));
}

#[test]
fn test_illegal_fixed_action() {
    let p1 = Scripted::actions([Action::check()]);
    let mut session =
        Session::new(TableConfig::default(), Box::new(Scripted::default()), Box::new(p1));

    let err = session.play_hand().unwrap_err();
    assert!(matches!(
        err,
        HoldemError::IllegalAction { role: Role::P1, action } if action == Action::check()
    ));
}

#[test]
fn test_strategy_with_illegal_action() {
    let p1 = Scripted::new([Policy::Strategy(vec![(Action::bet(2), 1.0)])]);
    let mut session =
        Session::new(TableConfig::default(), Box::new(Scripted::default()), Box::new(p1));

    assert!(matches!(
        session.play_hand(),
        Err(HoldemError::InvalidAction { .. })
    ));
}

#[test]
fn test_closure_provider() {
    let timid = |table: &TableState, role: Role| -> Result<Policy> {
        let hand = table.current_hand()?;
        assert_eq!(hand.to_act, role);
        Ok(Policy::preference([Action::check(), Action::fold()]))
    };

    let mut session =
        Session::new(TableConfig::default(), Box::new(CallingStation), Box::new(timid));
    assert_eq!(session.play_hands(3).unwrap(), 3);
}

// =============================================================================
// Busting
// =============================================================================

#[test]
fn test_bust_ends_session() {
    let config = TableConfig::default().with_starting_stack(2);
    let p1 = Scripted::actions([Action::fold()]);
    let mut session = Session::new(config, Box::new(Scripted::default()), Box::new(p1));

    assert_eq!(session.play_hands(5).unwrap(), 1);
    assert!(session.table().game_over);
    assert_eq!(session.play_hand().unwrap(), None);

    let table = session.finish();
    let last = table.history.back().unwrap();
    assert_eq!(last.events, vec![HandEvent::Bust { role: Role::P1 }]);
    assert_eq!(last.outcome, None);
}

// =============================================================================
// Full Sessions
// =============================================================================

#[test]
fn test_long_session_conserves_chips() {
    let config = TableConfig::default().with_seed(3);
    let mut session = Session::new(config, Box::new(UniformRandom), Box::new(CallingStation));

    for _ in 0..200 {
        if session.play_hand().unwrap().is_none() {
            break;
        }
        let stacks = session.stacks();
        assert_eq!(stacks[Role::P0] + stacks[Role::P1], 400);
    }

    let table = session.finish();
    assert!(table.history.len() as u32 >= table.hands_played);
    for record in &table.history {
        if let Some(outcome) = record.outcome {
            assert!(outcome.pot() >= 2);
        }
    }
}

#[test]
fn test_big_blind_alternates_between_hands() {
    let mut session = Session::new(
        TableConfig::default().with_seed(5),
        Box::new(OnlyAces),
        Box::new(OnlyAces),
    );
    session.play_hands(6).unwrap();
    let table = session.finish();

    let blinds: Vec<Role> = table.history.iter().map(|r| r.big_blind).collect();
    assert_eq!(
        blinds,
        vec![Role::P0, Role::P1, Role::P0, Role::P1, Role::P0, Role::P1]
    );
}

#[test]
fn test_sessions_are_deterministic() {
    let run = |seed: u64| {
        let config = TableConfig::default().with_seed(seed);
        let mut session = Session::new(config, Box::new(UniformRandom), Box::new(UniformRandom));
        session.play_hands(50).unwrap();
        session.finish()
    };

    let a = run(11);
    let b = run(11);
    let c = run(12);

    assert_eq!(a.history, b.history);
    assert_eq!(a.stacks(), b.stacks());
    assert_ne!(a.history, c.history);
}
