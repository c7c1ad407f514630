//! Hand driver: runs hands between two action providers.

pub mod session;

pub use session::Session;
