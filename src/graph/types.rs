// SPDX-License-Identifier: MIT

//! Expression graph type definitions
//!
//! This module defines the node/edge model handed to rendering surfaces,
//! including the fixed style table keyed by node category.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Visual and semantic classification of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Function,
    ConditionalRoot,
    ConditionSlot,
    ThenSlot,
    ElseSlot,
    Literal,
    ColumnReference,
    SubExpression,
    Fallback,
    Placeholder,
}

/// Rendering hints derived from the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub color: &'static str,
    pub size: u32,
}

/// A node in the expression graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Unique identifier within one graph
    pub id: String,
    pub category: NodeCategory,
    /// Display text
    pub label: String,
    pub style: NodeStyle,
}

/// A directed parent-to-child edge
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// Edge label, possibly empty
    #[serde(default)]
    pub label: String,
}

/// Result of one visualization build
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ExpressionGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Id of the entry node
    pub root_id: String,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 10] = [
        NodeCategory::Function,
        NodeCategory::ConditionalRoot,
        NodeCategory::ConditionSlot,
        NodeCategory::ThenSlot,
        NodeCategory::ElseSlot,
        NodeCategory::Literal,
        NodeCategory::ColumnReference,
        NodeCategory::SubExpression,
        NodeCategory::Fallback,
        NodeCategory::Placeholder,
    ];

    /// Identifier-safe name, also used as the id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Function => "function",
            NodeCategory::ConditionalRoot => "conditional_root",
            NodeCategory::ConditionSlot => "condition_slot",
            NodeCategory::ThenSlot => "then_slot",
            NodeCategory::ElseSlot => "else_slot",
            NodeCategory::Literal => "literal",
            NodeCategory::ColumnReference => "column_reference",
            NodeCategory::SubExpression => "sub_expression",
            NodeCategory::Fallback => "fallback",
            NodeCategory::Placeholder => "placeholder",
        }
    }

    /// Style lookup; downstream renderers rely on these values staying fixed
    pub fn style(&self) -> NodeStyle {
        let (color, size) = match self {
            NodeCategory::Function => ("#FF6B00", 1500),        // Vivid orange
            NodeCategory::ConditionalRoot => ("#FF1493", 1800), // Deep pink
            NodeCategory::ConditionSlot => ("#C71585", 1600),   // Medium violet red
            NodeCategory::SubExpression => ("#9400D3", 1400),   // Dark violet
            NodeCategory::ThenSlot => ("#1E90FF", 1400),        // Dodger blue
            NodeCategory::ElseSlot => ("#00CED1", 1400),        // Dark turquoise
            NodeCategory::Literal => ("#00CC66", 1300),         // Spring green
            NodeCategory::ColumnReference => ("#4B0082", 1400), // Indigo
            NodeCategory::Fallback => ("#555555", 1200),        // Dark gray
            NodeCategory::Placeholder => ("#888888", 1000),     // Medium gray
        };
        NodeStyle { color, size }
    }

    /// Legend text shown next to rendered graphs
    pub fn description(&self) -> &'static str {
        match self {
            NodeCategory::Function => "Function - operations like concat",
            NodeCategory::ConditionalRoot => "If - conditional statement",
            NodeCategory::ConditionSlot => "Condition - one branch of a conditional",
            NodeCategory::ThenSlot => "Then - branch result",
            NodeCategory::ElseSlot => "Else - result when no branch matches",
            NodeCategory::Literal => "Value - literal values",
            NodeCategory::ColumnReference => "Classifier - column reference",
            NodeCategory::SubExpression => "Expression - nested expressions",
            NodeCategory::Fallback => "Other - unrecognized elements",
            NodeCategory::Placeholder => "Placeholder - empty slot",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GraphNode {
    pub fn new(id: String, category: NodeCategory, label: impl Into<String>) -> Self {
        Self {
            id,
            category,
            label: label.into(),
            style: category.style(),
        }
    }
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}

impl ExpressionGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn root(&self) -> Option<&GraphNode> {
        self.node(&self.root_id)
    }

    /// Outgoing edges of a node, in emission order
    pub fn edges_from(&self, id: &str) -> Vec<&GraphEdge> {
        self.edges.iter().filter(|e| e.source == id).collect()
    }

    /// Children of a node paired with the connecting edge label
    pub fn children(&self, id: &str) -> Vec<(&GraphNode, &str)> {
        self.edges_from(id)
            .into_iter()
            .filter_map(|e| self.node(&e.target).map(|n| (n, e.label.as_str())))
            .collect()
    }

    pub fn nodes_with_category(&self, category: NodeCategory) -> Vec<&GraphNode> {
        self.nodes.iter().filter(|n| n.category == category).collect()
    }

    /// Number of inbound edges per node id
    pub fn in_degrees(&self) -> HashMap<&str, usize> {
        let mut degrees: HashMap<&str, usize> =
            self.nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
        for edge in &self.edges {
            *degrees.entry(edge.target.as_str()).or_insert(0) += 1;
        }
        degrees
    }

    /// True when the graph has exactly one node without parent (the root)
    /// and every other node has exactly one parent
    pub fn is_tree(&self) -> bool {
        let degrees = self.in_degrees();
        let roots: Vec<&str> = degrees
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(id, _)| *id)
            .collect();
        roots == [self.root_id.as_str()]
            && degrees.values().all(|d| *d <= 1)
            && self.edges.len() + 1 == self.nodes.len()
    }
}
