// SPDX-License-Identifier: MIT

//! Graphviz DOT export
//!
//! Fill colors come from the category style table; node width is scaled
//! from the style size.

use crate::graph::{ExpressionGraph, NodeCategory};

/// Style size that maps to a one-inch node
const SIZE_PER_INCH: f64 = 1000.0;

/// Convert an expression graph to a DOT document
pub fn to_dot(graph: &ExpressionGraph, rankdir: &str) -> String {
    let mut lines = Vec::new();

    lines.push("digraph ExpressionTree {".to_string());
    lines.push(format!("    rankdir={};", rankdir));
    lines.push("    nodesep=0.6;".to_string());
    lines.push("    ranksep=0.8;".to_string());
    lines.push(
        "    node [fontname=\"Helvetica\", fontsize=10, fontcolor=\"white\", style=\"filled\"];"
            .to_string(),
    );
    lines.push("    edge [fontname=\"Helvetica\", fontsize=9, color=\"#444444\"];".to_string());
    lines.push(String::new());

    for node in &graph.nodes {
        lines.push(format!(
            "    {} [label=\"{}\", shape={}, fillcolor=\"{}\", width={:.2}];",
            node.id,
            escape_label(&node.label),
            shape(node.category),
            node.style.color,
            f64::from(node.style.size) / SIZE_PER_INCH
        ));
    }

    lines.push(String::new());

    for edge in &graph.edges {
        if edge.label.is_empty() {
            lines.push(format!("    {} -> {};", edge.source, edge.target));
        } else {
            lines.push(format!(
                "    {} -> {} [label=\"{}\"];",
                edge.source,
                edge.target,
                escape_label(&edge.label)
            ));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn shape(category: NodeCategory) -> &'static str {
    match category {
        NodeCategory::ConditionalRoot | NodeCategory::ConditionSlot => "diamond",
        NodeCategory::Function => "box",
        NodeCategory::Placeholder => "point",
        _ => "ellipse",
    }
}

fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
