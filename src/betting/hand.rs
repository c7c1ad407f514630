//! Per-hand betting state machine.
//!
//! `HandState` owns everything that lives for one hand: stacks, bets, pot,
//! street, board, raise count and the acted / big-blind / to-act flags. It
//! answers legality questions, applies actions, advances streets and pays
//! out the pot. It never touches a deck or an evaluator; `TableState` deals
//! the cards and scores showdowns.
//!
//! ## Chip accounting
//!
//! `stacks + bets + pot` is constant for the whole hand. Bets are swept
//! into the pot when a street advances or the hand ends.
//!
//! ## Street cadence
//!
//! The board grows 0 → 3 → 4 → 5. Once the final street's round is good,
//! the hand goes to showdown instead of dealing again.

use log::debug;
use rs_poker::core::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{Action, ActionKind, Chips, HoldemError, Result, Role, Seats, TableConfig};

/// How a hand ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The other role folded.
    Folded { winner: Role, pot: Chips },
    /// Higher score at showdown.
    Showdown { winner: Role, pot: Chips },
    /// Equal scores; each role receives its share.
    Split { shares: Seats<Chips> },
}

impl Outcome {
    /// Check if a role won the whole pot.
    #[must_use]
    pub fn is_winner(&self, role: Role) -> bool {
        match self {
            Outcome::Folded { winner, .. } | Outcome::Showdown { winner, .. } => *winner == role,
            Outcome::Split { .. } => false,
        }
    }

    /// Total chips awarded.
    #[must_use]
    pub fn pot(&self) -> Chips {
        match self {
            Outcome::Folded { pot, .. } | Outcome::Showdown { pot, .. } => *pot,
            Outcome::Split { shares } => shares.values().sum(),
        }
    }
}

/// State of one heads-up fixed-limit hand.
#[derive(Clone, Debug)]
pub struct HandState {
    /// Community cards dealt so far (0, 3, 4 or 5).
    pub board: Vec<Card>,

    /// Current street: 0 = preflop, 1 = flop, 2 = turn, 3 = river.
    pub street: u8,

    /// Chips already swept into the pot from earlier streets.
    pub pot: Chips,

    /// Raises made on the current street.
    pub raise_count: u8,

    /// Chips behind for each role.
    pub stacks: Seats<Chips>,

    /// Chips committed on the current street.
    pub bets: Seats<Chips>,

    /// Whether each role has acted on the current street.
    pub acted: Seats<bool>,

    /// The big blind for this hand.
    pub big_blind: Role,

    /// The role whose turn it is.
    pub to_act: Role,

    /// Hole cards.
    pub holes: Seats<[Card; 2]>,

    /// Set once a fold or showdown has paid out the pot.
    pub hand_over: bool,

    /// Payout, once the hand is over.
    pub outcome: Option<Outcome>,

    rules: TableConfig,
}

impl HandState {
    /// Check whether both roles can post their blinds.
    #[must_use]
    pub fn can_post_blinds(config: &TableConfig, stacks: &Seats<Chips>, big_blind: Role) -> bool {
        stacks[big_blind] >= config.big_blind && stacks[big_blind.other()] >= config.small_blind
    }

    /// Start a hand: post blinds and put action on the small blind.
    ///
    /// # Panics
    ///
    /// Panics if a stack cannot cover its blind; check
    /// [`HandState::can_post_blinds`] first.
    #[must_use]
    pub fn new(
        config: &TableConfig,
        stacks: Seats<Chips>,
        big_blind: Role,
        holes: Seats<[Card; 2]>,
    ) -> Self {
        assert!(
            Self::can_post_blinds(config, &stacks, big_blind),
            "Stacks must cover the blinds"
        );

        let small_blind = big_blind.other();
        let mut hand = Self {
            board: Vec::with_capacity(5),
            street: 0,
            pot: 0,
            raise_count: 0,
            stacks,
            bets: Seats::with_value(0),
            acted: Seats::with_value(false),
            big_blind,
            to_act: small_blind,
            holes,
            hand_over: false,
            outcome: None,
            rules: config.clone(),
        };

        hand.stacks[big_blind] -= config.big_blind;
        hand.bets[big_blind] = config.big_blind;
        hand.stacks[small_blind] -= config.small_blind;
        hand.bets[small_blind] = config.small_blind;

        hand
    }

    /// The table rules this hand is played under.
    #[must_use]
    pub fn rules(&self) -> &TableConfig {
        &self.rules
    }

    /// The small blind for this hand.
    #[must_use]
    pub fn small_blind(&self) -> Role {
        self.big_blind.other()
    }

    /// Chips on the table: stacks, bets and pot.
    #[must_use]
    pub fn total_chips(&self) -> Chips {
        self.stacks.values().sum::<Chips>() + self.bets.values().sum::<Chips>() + self.pot
    }

    // === Sizing ===

    /// Fixed bet for the current street.
    #[must_use]
    pub fn bet_amount(&self) -> Chips {
        self.rules.bet_amount(self.street)
    }

    /// Fixed raise increment for the current street.
    #[must_use]
    pub fn raise_amount(&self) -> Chips {
        self.rules.raise_amount(self.street)
    }

    /// Chips `role` must add to match the opponent's bet.
    #[must_use]
    pub fn to_call(&self, role: Role) -> Chips {
        self.bets[role.other()].saturating_sub(self.bets[role])
    }

    /// Chips a raise by `role` moves: the call plus the raise increment.
    #[must_use]
    pub fn raise_total(&self, role: Role) -> Chips {
        self.to_call(role) + self.raise_amount()
    }

    // === Legality Predicates ===

    /// Whether `role` owes chips to match the opponent.
    #[must_use]
    pub fn facing_bet_raise(&self, role: Role) -> bool {
        self.bets[role] < self.bets[role.other()]
    }

    /// Whether the bets are level.
    #[must_use]
    pub fn facing_call(&self, role: Role) -> bool {
        self.bets[role] == self.bets[role.other()]
    }

    /// Whether the role's stack covers what it owes.
    #[must_use]
    pub fn can_cover_bet(&self, role: Role) -> bool {
        self.stacks[role] >= self.to_call(role)
    }

    /// The unraised big blind's unexercised preflop option.
    #[must_use]
    pub fn has_bb_option(&self, role: Role) -> bool {
        role == self.big_blind && self.street == 0 && self.facing_call(role) && !self.acted[role]
    }

    /// Check: nothing owed, and no bet yet or the big blind's option.
    #[must_use]
    pub fn can_check(&self, role: Role) -> bool {
        !self.facing_bet_raise(role) && (self.bets[role] == 0 || self.has_bb_option(role))
    }

    /// Bet: nothing committed this street and both roles have chips.
    #[must_use]
    pub fn can_bet(&self, role: Role) -> bool {
        self.bets[role] == 0
            && !self.facing_bet_raise(role)
            && self.stacks[role] >= self.bet_amount()
            && self.stacks[role.other()] > 0
    }

    /// Call: facing a bet the stack can cover.
    #[must_use]
    pub fn can_call(&self, role: Role) -> bool {
        self.facing_bet_raise(role) && self.can_cover_bet(role)
    }

    /// Raise: under the cap, facing a bet or holding the option, and able to pay.
    #[must_use]
    pub fn can_raise(&self, role: Role) -> bool {
        let under_cap = self.raise_count < self.rules.raise_cap;
        let opening = self.facing_bet_raise(role) || self.has_bb_option(role);
        let can_pay = self.stacks[role] >= self.raise_total(role);

        under_cap && opening && can_pay && self.stacks[role.other()] > 0
    }

    /// All-in for less than the call.
    ///
    /// Offered with amount 0 when posting the blind already put the whole
    /// stack in; the shove then only returns the uncalled part.
    #[must_use]
    pub fn can_shove(&self, role: Role) -> bool {
        self.facing_bet_raise(role) && !self.can_call(role)
    }

    /// Fold: only when facing a bet.
    #[must_use]
    pub fn can_fold(&self, role: Role) -> bool {
        self.facing_bet_raise(role)
    }

    /// Legal actions for `role`, in the order Check, Bet, Call, Raise,
    /// Shove, Fold.
    ///
    /// Empty unless `role` is to act and the hand is still running.
    #[must_use]
    pub fn available_actions(&self, role: Role) -> Vec<Action> {
        if self.hand_over || role != self.to_act {
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(4);

        if self.can_check(role) {
            actions.push(Action::check());
        }
        if self.can_bet(role) {
            actions.push(Action::bet(self.bet_amount()));
        }
        if self.can_call(role) {
            actions.push(Action::call(self.to_call(role)));
        }
        if self.can_raise(role) {
            actions.push(Action::raise(self.raise_total(role)));
        }
        if self.can_shove(role) {
            actions.push(Action::shove(self.stacks[role]));
        }
        if self.can_fold(role) {
            actions.push(Action::fold());
        }

        actions
    }

    // === Transitions ===

    /// Apply an action for the role to act.
    ///
    /// The action must be one of `available_actions(to_act)`. Unless the
    /// action ends the hand, the turn passes to the other role.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        if self.hand_over {
            return Err(HoldemError::HandOver);
        }

        let role = self.to_act;
        if !self.available_actions(role).contains(&action) {
            return Err(HoldemError::IllegalAction { role, action });
        }

        debug!("street {}: {} {}", self.street, role, action);

        let other = role.other();
        self.acted[role] = true;

        match action.kind {
            ActionKind::Fold => {
                self.declare_winner(other);
                return Ok(());
            }
            ActionKind::Check => {}
            ActionKind::Call => {
                self.stacks[role] -= action.amount;
                self.bets[role] = self.bets[other];
            }
            ActionKind::Bet => {
                self.stacks[role] -= action.amount;
                self.bets[role] = action.amount;
            }
            ActionKind::Raise => {
                self.raise_count += 1;
                self.stacks[role] -= action.amount;
                self.bets[role] += action.amount;
            }
            ActionKind::Shove => {
                self.stacks[role] -= action.amount;
                self.bets[role] += action.amount;

                // The part of the opponent's bet the shove cannot match goes back.
                let uncalled = self.bets[other] - self.bets[role];
                self.bets[other] -= uncalled;
                self.stacks[other] += uncalled;
            }
        }

        self.to_act = other;
        Ok(())
    }

    /// A role is all-in and bets are level: nobody can act any more.
    #[must_use]
    pub fn betting_closed(&self) -> bool {
        self.facing_call(Role::P0) && self.stacks.values().any(|&s| s == 0)
    }

    /// The betting round is settled and the hand can move on.
    #[must_use]
    pub fn pot_is_good(&self) -> bool {
        let bets_level = self.facing_call(Role::P0);
        let both_acted = self.acted.values().all(|&a| a);
        let option_open = self.has_bb_option(self.big_blind);

        !self.hand_over && bets_level && (both_acted || self.betting_closed()) && !option_open
    }

    /// Whether the board is complete and the next settled round is showdown.
    #[must_use]
    pub fn is_final_street(&self) -> bool {
        self.street >= self.rules.final_street()
    }

    /// Board cards the next street deals: 3 for the flop, then 1.
    #[must_use]
    pub fn cards_for_next_street(&self) -> usize {
        if self.board.is_empty() {
            3
        } else {
            1
        }
    }

    /// Sweep bets into the pot and open the next street.
    pub fn advance_street(&mut self, cards: &[Card]) {
        debug_assert_eq!(cards.len(), self.cards_for_next_street());

        self.collect_bets();
        self.acted = Seats::with_value(false);
        self.raise_count = 0;
        self.to_act = self.big_blind;
        self.street += 1;
        self.board.extend_from_slice(cards);

        debug!("street {}: board {}", self.street, crate::cards::cards_label(&self.board));
    }

    /// Pay the pot according to both roles' scores.
    ///
    /// Strictly greater scores win; equal scores split the pot.
    pub fn settle_showdown(&mut self, scores: Seats<Rank>) -> Outcome {
        match scores[Role::P0].cmp(&scores[Role::P1]) {
            Ordering::Greater => self.award(Role::P0, true),
            Ordering::Less => self.award(Role::P1, true),
            Ordering::Equal => self.split_pot(),
        }
    }

    /// Give the whole pot to `winner` (fold or uncontested).
    pub fn declare_winner(&mut self, winner: Role) -> Outcome {
        self.award(winner, false)
    }

    fn award(&mut self, winner: Role, showdown: bool) -> Outcome {
        self.collect_bets();
        let pot = std::mem::take(&mut self.pot);
        self.stacks[winner] += pot;

        let result = if showdown {
            Outcome::Showdown { winner, pot }
        } else {
            Outcome::Folded { winner, pot }
        };
        self.finish(result)
    }

    /// Halve the pot; an odd chip goes to the big blind.
    fn split_pot(&mut self) -> Outcome {
        self.collect_bets();
        let pot = std::mem::take(&mut self.pot);

        let mut shares = Seats::with_value(pot / 2);
        shares[self.big_blind] += pot % 2;
        for role in Role::ALL {
            self.stacks[role] += shares[role];
        }

        self.finish(Outcome::Split { shares })
    }

    fn finish(&mut self, result: Outcome) -> Outcome {
        self.hand_over = true;
        self.outcome = Some(result);
        result
    }

    fn collect_bets(&mut self) {
        for role in Role::ALL {
            self.pot += std::mem::take(&mut self.bets[role]);
        }
    }
}

impl std::fmt::Display for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::cards::cards_label;

        writeln!(f, "Street: {}", self.street)?;
        writeln!(f, "Board: {}", cards_label(&self.board))?;
        writeln!(f, "Pot: {}", self.pot)?;
        for role in Role::ALL {
            let blind = if role == self.big_blind { " (bb)" } else { "" };
            writeln!(
                f,
                "{}{}: stack {} bet {}",
                role, blind, self.stacks[role], self.bets[role]
            )?;
        }
        write!(f, "To act: {}", self.to_act)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_card;

    fn holes() -> Seats<[Card; 2]> {
        let c = |s| parse_card(s).unwrap();
        Seats::new([c("As"), c("Ad")], [c("7c"), c("2h")])
    }

    fn board(n: usize) -> Vec<Card> {
        ["Kh", "9d", "4s", "3c", "Jd"][..n]
            .iter()
            .map(|s| parse_card(s).unwrap())
            .collect()
    }

    /// Default table, role 0 in the big blind.
    fn fresh() -> HandState {
        HandState::new(&TableConfig::default(), Seats::with_value(200), Role::P0, holes())
    }

    /// A fresh flop with nothing bet yet.
    fn flop() -> HandState {
        let mut hand = fresh();
        hand.apply(Action::call(1)).unwrap();
        hand.apply(Action::check()).unwrap();
        hand.advance_street(&board(3));
        hand
    }

    #[test]
    fn test_blinds_posted() {
        let hand = fresh();

        assert_eq!(hand.bets, Seats::new(2, 1));
        assert_eq!(hand.stacks, Seats::new(198, 199));
        assert_eq!(hand.to_act, Role::P1);
        assert_eq!(hand.small_blind(), Role::P1);
        assert_eq!(hand.total_chips(), 400);
    }

    #[test]
    fn test_can_post_blinds() {
        let config = TableConfig::default();
        assert!(HandState::can_post_blinds(&config, &Seats::new(2, 1), Role::P0));
        assert!(!HandState::can_post_blinds(&config, &Seats::new(1, 200), Role::P0));
        assert!(!HandState::can_post_blinds(&config, &Seats::new(200, 0), Role::P0));
    }

    #[test]
    fn test_small_blind_opening_actions() {
        let hand = fresh();

        assert_eq!(
            hand.available_actions(Role::P1),
            vec![Action::call(1), Action::raise(3), Action::fold()]
        );
        assert!(hand.available_actions(Role::P0).is_empty());
    }

    #[test]
    fn test_limp_and_check_settles_preflop() {
        let mut hand = fresh();

        hand.apply(Action::call(1)).unwrap();
        assert!(hand.has_bb_option(Role::P0));
        assert!(!hand.pot_is_good());
        assert_eq!(
            hand.available_actions(Role::P0),
            vec![Action::check(), Action::raise(2)]
        );

        hand.apply(Action::check()).unwrap();
        assert!(hand.pot_is_good());
        assert_eq!(hand.bets, Seats::new(2, 2));

        hand.advance_street(&board(3));
        assert_eq!(hand.pot, 4);
        assert_eq!(hand.board.len(), 3);
        assert_eq!(hand.street, 1);
        assert_eq!(hand.to_act, Role::P0);
        assert_eq!(hand.bets, Seats::new(0, 0));
    }

    #[test]
    fn test_bb_option_raise() {
        let mut hand = fresh();
        hand.apply(Action::call(1)).unwrap();
        hand.apply(Action::raise(2)).unwrap();

        assert_eq!(hand.bets, Seats::new(4, 2));
        assert_eq!(hand.raise_count, 1);
        assert!(!hand.has_bb_option(Role::P0));
        assert_eq!(
            hand.available_actions(Role::P1),
            vec![Action::call(2), Action::raise(4), Action::fold()]
        );
    }

    #[test]
    fn test_postflop_opening_actions() {
        let hand = flop();
        assert_eq!(
            hand.available_actions(Role::P0),
            vec![Action::check(), Action::bet(2)]
        );
    }

    #[test]
    fn test_big_bet_on_turn() {
        let mut hand = flop();
        hand.apply(Action::check()).unwrap();
        hand.apply(Action::check()).unwrap();
        hand.advance_street(&board(4)[3..]);

        assert_eq!(hand.street, 2);
        assert_eq!(hand.board.len(), 4);
        assert_eq!(hand.bet_amount(), 4);

        hand.apply(Action::bet(4)).unwrap();
        assert_eq!(
            hand.available_actions(Role::P1),
            vec![Action::call(4), Action::raise(8), Action::fold()]
        );
    }

    #[test]
    fn test_raise_cap() {
        let mut hand = flop();
        hand.apply(Action::bet(2)).unwrap();
        hand.apply(Action::raise(4)).unwrap();
        hand.apply(Action::raise(4)).unwrap();
        hand.apply(Action::raise(4)).unwrap();

        assert_eq!(hand.raise_count, 3);
        assert_eq!(hand.bets, Seats::new(6, 8));
        assert_eq!(
            hand.available_actions(Role::P0),
            vec![Action::call(2), Action::fold()]
        );
    }

    #[test]
    fn test_illegal_action_rejected() {
        let mut hand = fresh();
        let err = hand.apply(Action::check()).unwrap_err();

        assert!(matches!(
            err,
            HoldemError::IllegalAction { role: Role::P1, .. }
        ));
        assert_eq!(hand.bets, Seats::new(2, 1));
        assert!(!hand.acted[Role::P1]);
    }

    #[test]
    fn test_fold_awards_outstanding_bets() {
        let mut hand = fresh();
        hand.apply(Action::fold()).unwrap();

        assert!(hand.hand_over);
        assert_eq!(
            hand.outcome,
            Some(Outcome::Folded { winner: Role::P0, pot: 3 })
        );
        assert_eq!(hand.stacks, Seats::new(201, 199));
        assert_eq!(hand.total_chips(), 400);
        assert!(hand.available_actions(Role::P0).is_empty());
        assert!(matches!(hand.apply(Action::check()), Err(HoldemError::HandOver)));
    }

    #[test]
    fn test_shove_for_less() {
        let mut hand = flop();
        hand.stacks = Seats::new(198, 1);
        hand.pot = 201;
        hand.apply(Action::bet(2)).unwrap();

        assert!(!hand.can_call(Role::P1));
        assert!(hand.can_shove(Role::P1));
        assert_eq!(
            hand.available_actions(Role::P1),
            vec![Action::shove(1), Action::fold()]
        );

        hand.apply(Action::shove(1)).unwrap();
        assert_eq!(hand.stacks[Role::P1], 0);
        assert_eq!(hand.bets[Role::P1], 1);
        assert_eq!(hand.bets[Role::P0], 1);
        assert_eq!(hand.stacks[Role::P0], 197);
        assert!(hand.betting_closed());
        assert!(hand.pot_is_good());
    }

    #[test]
    fn test_blind_all_in_shoves_nothing() {
        let config = TableConfig::default();
        let mut hand = HandState::new(&config, Seats::new(200, 1), Role::P0, holes());
        assert_eq!(hand.stacks[Role::P1], 0);

        let actions = hand.available_actions(Role::P1);
        assert_eq!(actions, vec![Action::shove(0), Action::fold()]);
        assert_eq!(actions[0].to_string(), "all-in");

        hand.apply(Action::shove(0)).unwrap();
        assert_eq!(hand.bets, Seats::new(1, 1));
        assert_eq!(hand.stacks, Seats::new(199, 0));
        assert!(hand.betting_closed());

        // The big blind still closes the preflop round.
        assert!(!hand.pot_is_good());
        assert_eq!(hand.available_actions(Role::P0), vec![Action::check()]);
        hand.apply(Action::check()).unwrap();
        assert!(hand.pot_is_good());
        assert_eq!(hand.total_chips(), 201);
    }

    #[test]
    fn test_all_in_runs_out_the_board() {
        let mut hand = flop();
        hand.stacks = Seats::new(198, 0);
        hand.pot = 202;

        assert!(hand.pot_is_good());
        hand.advance_street(&board(4)[3..]);
        assert!(hand.pot_is_good());
    }

    #[test]
    fn test_showdown_higher_rank_wins() {
        let mut hand = fresh();
        hand.apply(Action::call(1)).unwrap();
        hand.apply(Action::check()).unwrap();

        let result = hand.settle_showdown(Seats::new(Rank::OnePair(3), Rank::HighCard(9)));
        assert_eq!(result, Outcome::Showdown { winner: Role::P0, pot: 4 });
        assert_eq!(hand.stacks, Seats::new(202, 198));
    }

    #[test]
    fn test_showdown_tie_splits() {
        let mut hand = fresh();
        hand.apply(Action::call(1)).unwrap();
        hand.apply(Action::check()).unwrap();

        let result = hand.settle_showdown(Seats::with_value(Rank::Straight(4)));
        assert_eq!(result, Outcome::Split { shares: Seats::new(2, 2) });
        assert_eq!(hand.stacks, Seats::with_value(200));
    }

    #[test]
    fn test_split_odd_chip_to_big_blind() {
        let mut hand = fresh();
        hand.pot = 1;

        hand.apply(Action::call(1)).unwrap();
        hand.apply(Action::check()).unwrap();
        let result = hand.settle_showdown(Seats::with_value(Rank::HighCard(1)));

        assert_eq!(result, Outcome::Split { shares: Seats::new(3, 2) });
        assert_eq!(result.pot(), 5);
    }

    #[test]
    fn test_final_street() {
        let mut hand = flop();
        assert!(!hand.is_final_street());
        for n in [4, 5] {
            hand.apply(Action::check()).unwrap();
            hand.apply(Action::check()).unwrap();
            hand.advance_street(&board(n)[n - 1..]);
        }
        assert_eq!(hand.street, 3);
        assert_eq!(hand.board.len(), 5);
        assert!(hand.is_final_street());
    }

    #[test]
    fn test_hand_result_helpers() {
        let result = Outcome::Showdown { winner: Role::P1, pot: 10 };
        assert!(result.is_winner(Role::P1));
        assert!(!result.is_winner(Role::P0));
        assert_eq!(result.pot(), 10);

        let split = Outcome::Split { shares: Seats::new(5, 5) };
        assert!(!split.is_winner(Role::P0));
        assert_eq!(split.pot(), 10);
    }
}
