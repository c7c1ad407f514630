//! Policies and their resolution against a legal action set.
//!
//! Providers never pick an action directly. They hand back a [`Policy`],
//! and the driver resolves it against `available_actions` for the acting
//! role:
//!
//! - `Fixed` is returned as is; the state machine rejects it later if it
//!   is illegal.
//! - `Preference` picks the first entry present in the legal set.
//! - `Strategy` draws from a weighted distribution; the draw must be legal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, GameRng, HoldemError, Result};

/// What a provider wants to do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Policy {
    /// Play exactly this action.
    Fixed(Action),

    /// Play the first of these that is legal.
    Preference(SmallVec<[Action; 4]>),

    /// Draw one action with probability proportional to its weight.
    Strategy(Vec<(Action, f64)>),
}

impl Policy {
    /// Ordered preference list.
    #[must_use]
    pub fn preference(actions: impl IntoIterator<Item = Action>) -> Self {
        Policy::Preference(actions.into_iter().collect())
    }

    /// Equal weight on every action.
    #[must_use]
    pub fn uniform(actions: &[Action]) -> Self {
        Policy::Strategy(actions.iter().map(|&a| (a, 1.0)).collect())
    }

    /// Pick one action for the acting role.
    ///
    /// Returns `Ok(None)` when a preference matches nothing in `legal`.
    ///
    /// # Errors
    ///
    /// - `MalformedStrategy` if a strategy is empty, has a negative or
    ///   non-finite weight, or its weights sum to zero.
    /// - `InvalidAction` if a strategy draws an action outside `legal`.
    pub fn resolve(&self, legal: &[Action], rng: &mut GameRng) -> Result<Option<Action>> {
        match self {
            Policy::Fixed(action) => Ok(Some(*action)),

            Policy::Preference(actions) => Ok(actions.iter().find(|a| legal.contains(a)).copied()),

            Policy::Strategy(entries) => {
                let weights = validate_weights(entries)?;
                let index = rng
                    .choose_weighted(&weights)
                    .ok_or_else(|| HoldemError::MalformedStrategy("no positive weight".into()))?;

                let action = entries[index].0;
                if legal.contains(&action) {
                    Ok(Some(action))
                } else {
                    Err(HoldemError::InvalidAction { action })
                }
            }
        }
    }
}

impl From<Action> for Policy {
    fn from(action: Action) -> Self {
        Policy::Fixed(action)
    }
}

fn validate_weights(entries: &[(Action, f64)]) -> Result<Vec<f64>> {
    if entries.is_empty() {
        return Err(HoldemError::MalformedStrategy("empty strategy".into()));
    }

    let mut weights = Vec::with_capacity(entries.len());
    for (action, weight) in entries {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(HoldemError::MalformedStrategy(format!(
                "weight {weight} for {action}"
            )));
        }
        weights.push(*weight);
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(HoldemError::MalformedStrategy(format!("total weight {total}")));
    }

    Ok(weights)
}
