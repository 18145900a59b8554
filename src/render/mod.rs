// SPDX-License-Identifier: MIT

//! Output surfaces for built graphs
//!
//! - `text` - indented tree of a compiled expression
//! - `dot` - Graphviz document
//! - `mermaid` - Mermaid flowchart
//! - JSON through serde

pub mod dot;
pub mod mermaid;
pub mod text;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ExprGraphError, Result};
use crate::graph::ExpressionGraph;

pub use dot::to_dot;
pub use mermaid::to_mermaid;
pub use text::render_text;

/// Serialization format for a built graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Dot,
    Mermaid,
}

impl FromStr for OutputFormat {
    type Err = ExprGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            "mermaid" => Ok(OutputFormat::Mermaid),
            other => Err(ExprGraphError::config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Serialize a graph in the requested format
pub fn render_graph(graph: &ExpressionGraph, format: OutputFormat, rankdir: &str) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
        OutputFormat::Dot => Ok(to_dot(graph, rankdir)),
        OutputFormat::Mermaid => Ok(to_mermaid(graph)),
    }
}
