// SPDX-License-Identifier: MIT

//! Accumulator threaded through one graph build

use super::identity::NodeIdentity;
use super::types::{ExpressionGraph, GraphEdge, GraphNode, NodeCategory};

/// Labels longer than this are truncated
pub const LABEL_MAX_CHARS: usize = 15;
/// Characters kept from a truncated label
pub const LABEL_KEEP_CHARS: usize = 12;
pub const ELLIPSIS: &str = "...";

/// Cut a readable form longer than 15 chars down to 12 chars plus `...`
pub fn truncate_label(text: &str) -> String {
    if text.chars().count() > LABEL_MAX_CHARS {
        let kept: String = text.chars().take(LABEL_KEEP_CHARS).collect();
        format!("{}{}", kept, ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Owns the nodes, edges and id registry of a single build
#[derive(Debug, Default)]
pub(crate) struct BuildContext {
    identity: NodeIdentity,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl BuildContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit a node and, when a parent is given, its single inbound edge.
    /// Returns the new node id.
    pub(crate) fn add_node(
        &mut self,
        category: NodeCategory,
        label: impl Into<String>,
        suggested_name: Option<&str>,
        parent: Option<(&str, &str)>,
    ) -> String {
        let id = self.identity.next_id(category, suggested_name);
        self.nodes.push(GraphNode::new(id.clone(), category, label));
        if let Some((parent_id, edge_label)) = parent {
            self.edges.push(GraphEdge::new(parent_id, id.as_str(), edge_label));
        }
        id
    }

    pub(crate) fn finish(self) -> ExpressionGraph {
        let root_id = self
            .nodes
            .first()
            .map(|n| n.id.clone())
            .unwrap_or_default();
        ExpressionGraph {
            nodes: self.nodes,
            edges: self.edges,
            root_id,
        }
    }
}
