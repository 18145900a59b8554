// SPDX-License-Identifier: MIT

//! Indented plain-text tree of a compiled expression
//!
//! Walks the unwrapped tree in exactly the order the structured graph
//! builder does: per branch the condition then the result, then the else
//! slot; function arguments in declaration order.

use crate::expr::{unwrap_node, AstNode};

const INDENT: &str = "  ";
const EMPTY_SLOT: &str = "(empty)";

/// Render the tree, one sub-expression per line
pub fn render_text(ast: &AstNode) -> String {
    let mut lines = Vec::new();
    render_into(ast, "", 0, &mut lines);
    lines.join("\n")
}

fn render_into(node: &AstNode, prefix: &str, depth: usize, lines: &mut Vec<String>) {
    let node = unwrap_node(node);
    let body = match node {
        AstNode::PassThrough { inner: None } => EMPTY_SLOT.to_string(),
        other => other.readable_form(),
    };
    lines.push(format!("{}{}{}", INDENT.repeat(depth), prefix, body));

    match node {
        AstNode::FunctionCall { arguments, .. } => {
            for (i, argument) in arguments.iter().enumerate() {
                render_into(argument, &format!("Arg {}: ", i + 1), depth + 1, lines);
            }
        }
        AstNode::Conditional {
            branches,
            else_result,
        } => {
            for (i, branch) in branches.iter().enumerate() {
                let index = i + 1;
                render_into(&branch.condition, &format!("When {}: ", index), depth + 1, lines);
                render_into(&branch.result, &format!("Then {}: ", index), depth + 1, lines);
            }
            if let Some(else_result) = else_result {
                render_into(else_result, "Else: ", depth + 1, lines);
            }
        }
        _ => {}
    }
}
