// SPDX-License-Identifier: MIT

//! Expression graph construction
//!
//! Two independent builders produce the same `ExpressionGraph` model:
//! - `build_graph` walks a compiled AST (structured mode)
//! - `build_heuristic_graph` pattern-matches raw text (text mode)

mod builder;
mod context;
mod heuristic;
pub mod identity;
pub mod types;

pub use builder::build_graph;
pub use context::{truncate_label, ELLIPSIS, LABEL_KEEP_CHARS, LABEL_MAX_CHARS};
pub use heuristic::{build_heuristic_graph, SLOT_LABEL_CHARS};
pub use identity::{NodeIdentity, ROOT_ID};
pub use types::{ExpressionGraph, GraphEdge, GraphNode, NodeCategory, NodeStyle};
