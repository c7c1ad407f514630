//! Recursive expansion of fixed-limit betting into an extensive-form tree.
//!
//! ## Street shape
//!
//! Every street starts with Player1 to act:
//!
//! ```text
//! b ─┬─ f                     Player2 folds
//!    ├─ c                     Player2 calls
//!    └─ r ─┬─ f / c / r ...   raise ladder, alternating, up to raise_cap
//! x ─┬─ x                     check-check
//!    └─ b ─┬─ f / c / r ...   Player2 bets, same ladder
//! ```
//!
//! Folds end in a payoff leaf. Check-check and calls continue: they either
//! expand the next street directly or branch into `nps` chance nodes first.
//! With `L = raise_cap + 1`, every street has `2L` folds and `2L + 1`
//! continuations.

use log::{debug, trace};

use super::config::TreeConfig;
use super::node::{NodeId, NodeLabel, Owner};
use super::tree::GameTree;
use crate::core::Result;

/// A finished tree with its payoff leaf count.
#[derive(Clone, Debug)]
pub struct TreeBuild {
    pub tree: GameTree,
    pub payoffs: u64,
}

/// Builds a [`GameTree`] from a [`TreeConfig`].
#[derive(Debug)]
pub struct TreeBuilder {
    config: TreeConfig,
    tree: GameTree,
    payoffs: u64,
}

impl TreeBuilder {
    /// Create a builder for a validated config.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `nps` is 0.
    pub fn new(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tree: GameTree::new(),
            payoffs: 0,
        })
    }

    /// Expand the whole tree.
    ///
    /// The root gets `nps` chance children at depth 0, each expanded as the
    /// first street.
    #[must_use]
    pub fn build(mut self) -> TreeBuild {
        let root = self.tree.root();
        let chances: Vec<NodeId> = (0..self.config.nps)
            .map(|i| self.tree.add_child(root, Owner::Nature, NodeLabel::Chance(i), 0))
            .collect();

        for chance in chances {
            self.expand_street(chance);
        }

        debug!(
            "built tree: {} nodes, {} payoffs ({:?})",
            self.tree.len(),
            self.payoffs,
            self.config
        );

        TreeBuild {
            tree: self.tree,
            payoffs: self.payoffs,
        }
    }

    /// Expand one betting round below `node`.
    fn expand_street(&mut self, node: NodeId) {
        let depth = self.tree.get(node).depth + 1;

        if depth >= self.config.n_rounds {
            self.add_payoff(node, depth);
            return;
        }

        trace!("street at depth {depth} under {}", self.tree.path_string(node));

        let mut folds = Vec::new();
        let mut continuations = Vec::new();

        let bet = self.tree.add_child(node, Owner::Player1, NodeLabel::Bet, depth);
        self.add_ladder(bet, depth, &mut folds, &mut continuations);

        let check = self.tree.add_child(node, Owner::Player1, NodeLabel::Check, depth);
        continuations.push(self.tree.add_child(check, Owner::Player2, NodeLabel::Check, depth));
        let check_bet = self.tree.add_child(check, Owner::Player2, NodeLabel::Bet, depth);
        self.add_ladder(check_bet, depth, &mut folds, &mut continuations);

        for fold in folds {
            self.add_payoff(fold, depth + 1);
        }
        for continuation in continuations {
            self.continue_from(continuation);
        }
    }

    /// Responses to a bet: fold, call, and raises until the cap.
    fn add_ladder(
        &mut self,
        bet: NodeId,
        depth: u16,
        folds: &mut Vec<NodeId>,
        continuations: &mut Vec<NodeId>,
    ) {
        let mut aggressor = bet;
        let mut responder = self.tree.get(bet).owner.opponent();
        let mut raises = 0;

        loop {
            folds.push(self.tree.add_child(aggressor, responder, NodeLabel::Fold, depth));
            continuations.push(self.tree.add_child(aggressor, responder, NodeLabel::Call, depth));

            if raises >= self.config.raise_cap {
                break;
            }

            aggressor = self.tree.add_child(aggressor, responder, NodeLabel::Raise, depth);
            responder = responder.opponent();
            raises += 1;
        }
    }

    /// Carry a settled round on to the next street.
    fn continue_from(&mut self, node: NodeId) {
        let depth = self.tree.get(node).depth;

        if self.config.nps == 1 || depth + 1 >= self.config.n_rounds {
            self.expand_street(node);
            return;
        }

        let chances: Vec<NodeId> = (0..self.config.nps)
            .map(|i| self.tree.add_child(node, Owner::Nature, NodeLabel::Chance(i), depth + 1))
            .collect();

        for chance in chances {
            self.expand_street(chance);
        }
    }

    fn add_payoff(&mut self, parent: NodeId, depth: u16) {
        self.tree.add_child(parent, Owner::Payoff, NodeLabel::Payoff, depth);
        self.payoffs += 1;
    }
}

/// Payoff leaves a build with `config` produces, computed in closed form.
///
/// Returns `None` when the count does not fit in a `u64`.
#[must_use]
pub fn expected_payoffs(config: &TreeConfig) -> Option<u64> {
    let ladder = u64::from(config.raise_cap) + 1;
    let folds = 2 * ladder;
    let continuations = 2 * ladder + 1;
    let nps = u64::from(config.nps);
    let rounds = u32::from(config.n_rounds);

    // Payoffs below a node expanded as a street at `depth`.
    let mut below = vec![0u64; rounds as usize + 2];
    for depth in (0..=rounds).rev() {
        below[depth as usize] = if depth + 1 >= rounds {
            1
        } else {
            let next = if nps == 1 || depth + 2 >= rounds {
                below[depth as usize + 1]
            } else {
                nps.checked_mul(below[depth as usize + 2])?
            };
            continuations.checked_mul(next)?.checked_add(folds)?
        };
    }

    nps.checked_mul(below[0])
}
