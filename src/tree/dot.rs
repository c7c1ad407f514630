//! Graphviz export.

use std::fmt::Write;

use super::node::{Owner, TreeNode};
use super::tree::GameTree;

/// Depth palette for decision nodes.
const DEPTH_COLORS: [&str; 10] = [
    "lightgreen",
    "lightcoral",
    "blue",
    "lightyellow",
    "lightpink",
    "red",
    "pink",
    "yellow",
    "green",
    "orange",
];

/// How decision nodes are coloured. Nature and payoff nodes always use
/// their own colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coloring {
    /// One colour per player.
    #[default]
    Player,
    /// One colour per street depth.
    Depth,
}

impl Coloring {
    /// Graphviz fill colour for `node`.
    #[must_use]
    pub fn color(self, node: &TreeNode) -> &'static str {
        match (node.owner, self) {
            (Owner::Nature, _) => "purple",
            (Owner::Payoff, _) => "lightgray",
            (Owner::Player1, Coloring::Player) => "lightgreen",
            (Owner::Player2, Coloring::Player) => "lightcoral",
            (_, Coloring::Depth) => DEPTH_COLORS[usize::from(node.depth) % DEPTH_COLORS.len()],
        }
    }
}

impl GameTree {
    /// Render the tree as a Graphviz `digraph`.
    #[must_use]
    pub fn to_dot(&self, coloring: Coloring) -> String {
        let mut out = String::with_capacity(self.len() * 64);
        out.push_str("digraph game {\n");
        out.push_str("  node [style=filled, shape=circle, fontsize=9];\n");

        // Writing to a String cannot fail.
        for (id, node) in self.iter() {
            let _ = writeln!(
                out,
                "  n{} [label=\"{}\", fillcolor=\"{}\"];",
                id.0,
                node.label,
                coloring.color(node)
            );
        }
        for (id, node) in self.iter() {
            for child in &node.children {
                let _ = writeln!(out, "  n{} -> n{};", id.0, child.0);
            }
        }

        out.push_str("}\n");
        out
    }
}
