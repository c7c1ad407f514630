//! Extensive-form game tree for heads-up fixed-limit betting.
//!
//! ## Components
//!
//! - [`TreeConfig`]: rounds, chance branching and raise cap
//! - [`TreeBuilder`]: recursive street expansion
//! - [`GameTree`]: arena of [`TreeNode`]s addressed by [`NodeId`]
//! - [`Coloring`]: Graphviz export colour schemes
//!
//! ```
//! use limit_holdem::tree::{expected_payoffs, TreeBuilder, TreeConfig};
//!
//! let config = TreeConfig::new(2, 2);
//! let built = TreeBuilder::new(config).unwrap().build();
//! assert_eq!(built.payoffs, 34);
//! assert_eq!(Some(built.payoffs), expected_payoffs(&config));
//! ```

pub mod builder;
pub mod config;
pub mod dot;
pub mod node;
#[allow(clippy::module_inception)]
pub mod tree;

pub use builder::{expected_payoffs, TreeBuild, TreeBuilder};
pub use config::TreeConfig;
pub use dot::Coloring;
pub use node::{NodeId, NodeLabel, Owner, TreeNode};
pub use tree::{GameTree, TreeStats};
