// SPDX-License-Identifier: MIT

//! Removal of representation-only wrapper nodes
//!
//! Applied before every recursive descent so that neither the graph nor
//! the text view ever shows a `LiteralWrapper` or a non-empty `PassThrough`.

use super::ast::AstNode;

/// Strip wrappers from an optional slot. Absent stays absent.
pub fn unwrap(node: Option<&AstNode>) -> Option<&AstNode> {
    node.map(unwrap_node)
}

/// Strip wrappers from a present node.
///
/// Chains of wrappers collapse to the first meaningful node. An empty
/// `PassThrough` is returned as-is and shows up as a placeholder.
pub fn unwrap_node(node: &AstNode) -> &AstNode {
    let mut current = node;
    loop {
        match current {
            AstNode::PassThrough { inner: Some(inner) } => current = inner.as_ref(),
            AstNode::LiteralWrapper { inner } => current = inner.as_ref(),
            other => return other,
        }
    }
}
