//! Core types: seats, actions, configuration, RNG and errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! cards, betting rounds or trees.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionKind, ActionRecord, Chips};
pub use config::TableConfig;
pub use error::{HoldemError, Result};
pub use player::{Role, Seats};
pub use rng::GameRng;
