//! Fixed-limit betting rules.
//!
//! - [`HandState`]: one hand's state machine (legality, actions, streets,
//!   payouts)
//! - [`TableState`]: the session around it (deck, names, history)

pub mod hand;
pub mod table;

pub use hand::{HandState, Outcome};
pub use table::{HandEvent, HandRecord, TableState};
