//! Action providers: where policies come from.
//!
//! The driver asks the acting role's provider for a [`Policy`] and resolves
//! it against the legal actions itself. Providers may block (a human at the
//! terminal) but never mutate the table.
//!
//! - [`OnlyAces`]: raises with pocket aces, otherwise checks or folds
//! - [`UniformRandom`]: uniform strategy over the legal actions
//! - [`CallingStation`]: checks or calls, never folds
//! - [`Human`]: interactive prompt
//! - [`Scripted`]: replays a queue of policies

pub mod human;
pub mod robot;

pub use human::Human;
pub use robot::{CallingStation, OnlyAces, Scripted, UniformRandom};

use crate::betting::TableState;
use crate::core::{Result, Role};
use crate::policy::Policy;

/// Supplies a policy for a role when it is that role's turn.
pub trait ActionProvider {
    /// Choose a policy for `role` in the current hand.
    fn policy(&mut self, table: &TableState, role: Role) -> Result<Policy>;
}

impl<F> ActionProvider for F
where
    F: FnMut(&TableState, Role) -> Result<Policy>,
{
    fn policy(&mut self, table: &TableState, role: Role) -> Result<Policy> {
        self(table, role)
    }
}
