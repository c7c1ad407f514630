//! Tree nodes and arena indices.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index into the `GameTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Wrap an arena index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Arena index of this node.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Who a node belongs to.
///
/// For decision nodes this is the player whose action the node records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Nature,
    Player1,
    Player2,
    Payoff,
}

impl Owner {
    /// The other player. Nature and payoff nodes map to themselves.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Owner::Player1 => Owner::Player2,
            Owner::Player2 => Owner::Player1,
            other => other,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Owner::Nature => "nature",
            Owner::Player1 => "p1",
            Owner::Player2 => "p2",
            Owner::Payoff => "payoff",
        };
        write!(f, "{name}")
    }
}

/// What a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeLabel {
    Root,
    /// The i-th chance outcome.
    Chance(u32),
    Check,
    Bet,
    Fold,
    Call,
    Raise,
    Payoff,
}

impl std::fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeLabel::Root => write!(f, "root"),
            NodeLabel::Chance(i) => write!(f, "{i}"),
            NodeLabel::Check => write!(f, "x"),
            NodeLabel::Bet => write!(f, "b"),
            NodeLabel::Fold => write!(f, "f"),
            NodeLabel::Call => write!(f, "c"),
            NodeLabel::Raise => write!(f, "r"),
            NodeLabel::Payoff => write!(f, "p"),
        }
    }
}

/// A node in the game tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub owner: Owner,
    pub label: NodeLabel,

    /// Street depth; nodes of one betting round share a depth.
    pub depth: u16,

    /// Parent (NONE for the root).
    pub parent: NodeId,

    pub children: SmallVec<[NodeId; 4]>,
}

impl TreeNode {
    /// A node with no children yet.
    #[must_use]
    pub fn new(owner: Owner, label: NodeLabel, depth: u16, parent: NodeId) -> Self {
        Self {
            owner,
            label,
            depth,
            parent,
            children: SmallVec::new(),
        }
    }

    /// Whether the node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
