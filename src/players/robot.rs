//! Built-in bots.

use std::collections::VecDeque;

use rs_poker::core::Value;

use super::ActionProvider;
use crate::betting::{HandState, TableState};
use crate::core::{Action, Result, Role};
use crate::policy::Policy;

/// Bets and raises with pocket aces; otherwise checks, or folds to a bet.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnlyAces;

impl OnlyAces {
    /// Bet or raise with pocket aces, otherwise check or fold.
    #[must_use]
    pub fn policy_for(&self, hand: &HandState, role: Role) -> Policy {
        if hand.holes[role].iter().all(|card| card.value == Value::Ace) {
            Policy::preference([
                Action::bet(hand.bet_amount()),
                Action::raise(hand.raise_total(role)),
                Action::call(hand.to_call(role)),
                Action::shove(hand.stacks[role]),
                Action::check(),
            ])
        } else {
            Policy::preference([Action::check(), Action::fold()])
        }
    }
}

impl ActionProvider for OnlyAces {
    fn policy(&mut self, table: &TableState, role: Role) -> Result<Policy> {
        Ok(self.policy_for(table.current_hand()?, role))
    }
}

/// Plays every legal action with equal probability.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl ActionProvider for UniformRandom {
    fn policy(&mut self, table: &TableState, role: Role) -> Result<Policy> {
        let hand = table.current_hand()?;
        Ok(Policy::uniform(&hand.available_actions(role)))
    }
}

/// Never folds and never raises.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallingStation;

impl ActionProvider for CallingStation {
    fn policy(&mut self, table: &TableState, role: Role) -> Result<Policy> {
        let hand = table.current_hand()?;
        Ok(Policy::preference([
            Action::check(),
            Action::call(hand.to_call(role)),
            Action::shove(hand.stacks[role]),
        ]))
    }
}

/// Replays queued policies in order.
///
/// Once the queue runs dry it returns an empty preference, which the
/// driver reports as `NoDecision`.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    queue: VecDeque<Policy>,
}

impl Scripted {
    /// Queue policies to hand out in order.
    #[must_use]
    pub fn new(policies: impl IntoIterator<Item = Policy>) -> Self {
        Self {
            queue: policies.into_iter().collect(),
        }
    }

    /// Script of fixed actions.
    #[must_use]
    pub fn actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self::new(actions.into_iter().map(Policy::Fixed))
    }

    /// Policies not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ActionProvider for Scripted {
    fn policy(&mut self, _table: &TableState, _role: Role) -> Result<Policy> {
        Ok(self.queue.pop_front().unwrap_or_else(|| Policy::preference([])))
    }
}
