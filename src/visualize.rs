// SPDX-License-Identifier: MIT

//! Visualization requests
//!
//! A request yields one immutable `Visualization` held by the caller.
//! Nothing is cached between requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExprGraphError, Result};
use crate::expr::{AstNode, ExpressionCompiler};
use crate::graph::{build_graph, build_heuristic_graph, ExpressionGraph};
use crate::render::render_text;

/// Which builder handles a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Compiled AST through `build_graph`
    Structured,
    /// Raw text through `build_heuristic_graph`
    #[default]
    Heuristic,
}

/// Result of one visualization request
#[derive(Debug, Clone, Serialize)]
pub struct Visualization {
    /// Readable form of the visualized expression
    pub expression: String,
    pub mode: Mode,
    pub graph: ExpressionGraph,
    /// Text tree, only available for compiled input
    pub text: Option<String>,
}

/// Compile `input` and visualize the resulting AST.
///
/// Compiler failures are returned as-is; no partial graph is produced.
pub fn visualize_structured(input: &str, compiler: &dyn ExpressionCompiler) -> Result<Visualization> {
    let ast = compiler.compile(input).map_err(|e| {
        log::error!("Expression compilation failed: {}", e);
        ExprGraphError::from(e)
    })?;
    Ok(visualize_ast(&ast))
}

/// Visualize an already compiled AST
pub fn visualize_ast(ast: &AstNode) -> Visualization {
    Visualization {
        expression: ast.readable_form(),
        mode: Mode::Structured,
        graph: build_graph(ast),
        text: Some(render_text(ast)),
    }
}

/// Visualize raw expression text without a compiler
pub fn visualize_heuristic(expression: &str) -> Visualization {
    Visualization {
        expression: expression.trim().to_string(),
        mode: Mode::Heuristic,
        graph: build_heuristic_graph(expression),
        text: None,
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Structured => write!(f, "structured"),
            Mode::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl FromStr for Mode {
    type Err = ExprGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "structured" | "ast" => Ok(Mode::Structured),
            "heuristic" | "text" => Ok(Mode::Heuristic),
            other => Err(ExprGraphError::config(format!("Unknown mode: {}", other))),
        }
    }
}
