//! Arena-backed game tree.
//!
//! Nodes live in a flat `Vec<TreeNode>` and refer to each other by
//! `NodeId`. Parents are plain indices, so the tree serializes as is.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::node::{NodeId, NodeLabel, Owner, TreeNode};

/// Extensive-form game tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTree {
    /// A tree holding only the Nature root.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(TreeNode::new(Owner::Nature, NodeLabel::Root, 0, NodeId::NONE));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// The Nature root.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Append a node under `parent`, returning its ID.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        owner: Owner,
        label: NodeLabel,
        depth: u16,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(TreeNode::new(owner, label, depth, parent));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Children of `id` in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is allocated on creation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Nodes without children.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.iter().filter(|(_, n)| n.is_leaf())
    }

    /// Labels from the root down to `id`, root excluded.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<NodeLabel> {
        let mut labels = Vec::new();
        let mut current = id;
        while !current.is_none() && current != self.root {
            let node = self.get(current);
            labels.push(node.label);
            current = node.parent;
        }
        labels.reverse();
        labels
    }

    /// Path of `id` as a compact string, e.g. `0/b/r/c/p`.
    #[must_use]
    pub fn path_string(&self, id: NodeId) -> String {
        self.path(id)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Node counts by owner, leaves and depth.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut by_owner = FxHashMap::default();
        for node in &self.nodes {
            *by_owner.entry(node.owner).or_insert(0) += 1;
        }

        TreeStats {
            node_count: self.nodes.len(),
            leaf_count: self.leaves().count(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            by_owner,
        }
    }
}

/// Summary of a tree's shape.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    pub node_count: usize,
    pub leaf_count: usize,
    pub max_depth: u16,
    pub by_owner: FxHashMap<Owner, usize>,
}

impl TreeStats {
    /// Nodes owned by `owner`.
    #[must_use]
    pub fn count(&self, owner: Owner) -> usize {
        self.by_owner.get(&owner).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes ({} nature, {} p1, {} p2, {} payoff), {} leaves, max depth {}",
            self.node_count,
            self.count(Owner::Nature),
            self.count(Owner::Player1),
            self.count(Owner::Player2),
            self.count(Owner::Payoff),
            self.leaf_count,
            self.max_depth
        )
    }
}
