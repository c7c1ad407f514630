//! # limit-holdem
//!
//! Heads-up fixed-limit Texas hold'em, encoded twice:
//!
//! 1. **Betting state machine**: drives one hand action by action, for
//!    interactive or simulated play.
//! 2. **Game tree builder**: enumerates the same betting rules into an
//!    extensive-form tree with explicit chance nodes, for analysis and
//!    visualisation.
//!
//! The two share only plain constants such as the raise cap, never code.
//!
//! ## Design Principles
//!
//! 1. **Integer Chips**: All amounts are `u32` chips; the small blind is the
//!    smallest unit.
//!
//! 2. **Policies, Not Actions**: Providers return a `Policy` (fixed,
//!    preference list or weighted strategy) and the driver resolves it
//!    against the legal actions.
//!
//! 3. **Deterministic Sessions**: Dealing and strategy draws come from
//!    ChaCha8 streams forked from one seed.
//!
//! ## Modules
//!
//! - `core`: Roles, seats, actions, configuration, RNG, errors
//! - `cards`: Deck and hand evaluation (`rs_poker`)
//! - `policy`: Policy sum type and resolution
//! - `betting`: Hand state machine and table state
//! - `players`: Action providers (bots, human, scripted)
//! - `driver`: Session loop
//! - `tree`: Extensive-form tree builder and exports

pub mod betting;
pub mod cards;
pub mod core;
pub mod driver;
pub mod players;
pub mod policy;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, Chips, GameRng, HoldemError, Result, Role,
    Seats, TableConfig,
};

pub use crate::cards::{Deck, Evaluator, HandRanker};

pub use crate::policy::Policy;

pub use crate::betting::{HandEvent, HandRecord, HandState, Outcome, TableState};

pub use crate::players::{ActionProvider, CallingStation, Human, OnlyAces, Scripted, UniformRandom};

pub use crate::driver::Session;

pub use crate::tree::{
    expected_payoffs, Coloring, GameTree, NodeId, NodeLabel, Owner, TreeBuild, TreeBuilder,
    TreeConfig, TreeNode, TreeStats,
};
