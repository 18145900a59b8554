// SPDX-License-Identifier: MIT

//! Mermaid flowchart export

use crate::graph::{ExpressionGraph, NodeCategory};

/// Convert an expression graph to a Mermaid `graph TD` diagram
pub fn to_mermaid(graph: &ExpressionGraph) -> String {
    let mut lines = vec!["graph TD".to_string()];

    for node in &graph.nodes {
        lines.push(format!(
            "    {}[\"{}\"]:::{}",
            node.id,
            escape_label(&node.label),
            node.category
        ));
    }

    for edge in &graph.edges {
        if edge.label.is_empty() {
            lines.push(format!("    {} --> {}", edge.source, edge.target));
        } else {
            lines.push(format!(
                "    {} -->|{}| {}",
                edge.source,
                escape_label(&edge.label),
                edge.target
            ));
        }
    }

    for category in NodeCategory::ALL {
        lines.push(format!(
            "    classDef {} fill:{},color:#fff",
            category,
            category.style().color
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;").replace('|', "#124;")
}
