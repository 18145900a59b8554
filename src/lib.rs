// SPDX-License-Identifier: MIT

//! Expression trees as inspectable graphs
//!
//! Two builders produce the same `ExpressionGraph` shape:
//! - `graph::build_graph` walks a compiled AST
//! - `graph::build_heuristic_graph` pattern-matches raw text
//!
//! `render` turns a graph into JSON, DOT or Mermaid, and an AST into an
//! indented text tree.

pub mod catalog;
pub mod config;
pub mod error;
pub mod expr;
pub mod graph;
pub mod render;
pub mod server;
pub mod visualize;
