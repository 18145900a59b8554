// SPDX-License-Identifier: MIT

//! Structured graph construction from a compiled AST
//!
//! One recursive descent over the unwrapped tree. Every node except the
//! first receives exactly one inbound edge from the caller-supplied parent,
//! so the output is always a tree rooted at the `root` id.

use super::context::{truncate_label, BuildContext};
use super::types::{ExpressionGraph, NodeCategory};
use crate::expr::{unwrap, unwrap_node, AstNode, Branch};

const PLACEHOLDER_LABEL: &str = "(empty)";

/// Build the graph of a compiled expression
pub fn build_graph(ast: &AstNode) -> ExpressionGraph {
    let mut ctx = BuildContext::new();
    visit(&mut ctx, ast, None);
    let graph = ctx.finish();
    log::debug!(
        "Built structured graph: {} nodes, {} edges, root '{}'",
        graph.nodes.len(),
        graph.edges.len(),
        graph.root_id
    );
    graph
}

fn visit(ctx: &mut BuildContext, node: &AstNode, parent: Option<(&str, &str)>) -> String {
    let node = unwrap_node(node);
    match node {
        AstNode::FunctionCall { name, arguments } => {
            let id = ctx.add_node(NodeCategory::Function, name.as_str(), Some(name.as_str()), parent);
            for (i, argument) in arguments.iter().enumerate() {
                let edge_label = format!("Arg {}", i + 1);
                visit(ctx, argument, Some((id.as_str(), edge_label.as_str())));
            }
            id
        }
        AstNode::Conditional {
            branches,
            else_result,
        } => visit_conditional(ctx, branches, else_result.as_deref(), parent),
        AstNode::Reference { name } => {
            ctx.add_node(NodeCategory::ColumnReference, name.as_str(), Some(name.as_str()), parent)
        }
        AstNode::Literal { value } => {
            let label = value.to_string();
            ctx.add_node(NodeCategory::Literal, label.as_str(), Some(label.as_str()), parent)
        }
        AstNode::PassThrough { inner: None } => {
            ctx.add_node(NodeCategory::Placeholder, PLACEHOLDER_LABEL, None, parent)
        }
        other => {
            log::warn!(
                "Unrecognized node kind '{}', rendering as fallback",
                other.kind_name()
            );
            ctx.add_node(NodeCategory::Fallback, other.to_string(), None, parent)
        }
    }
}

fn visit_conditional(
    ctx: &mut BuildContext,
    branches: &[Branch],
    else_result: Option<&AstNode>,
    parent: Option<(&str, &str)>,
) -> String {
    let root = ctx.add_node(NodeCategory::ConditionalRoot, "If", None, parent);

    for (i, branch) in branches.iter().enumerate() {
        let index = (i + 1).to_string();
        let slot_edge = format!("Condition: {}", index);
        let slot = ctx.add_node(
            NodeCategory::ConditionSlot,
            format!("Cond {}", index),
            Some(index.as_str()),
            Some((root.as_str(), slot_edge.as_str())),
        );

        let condition = unwrap_node(&branch.condition);
        let result = unwrap_node(&branch.result);

        let when = ctx.add_node(
            NodeCategory::SubExpression,
            truncate_label(&condition.readable_form()),
            None,
            Some((slot.as_str(), "When")),
        );
        let then = ctx.add_node(
            NodeCategory::ThenSlot,
            truncate_label(&result.readable_form()),
            Some(index.as_str()),
            Some((slot.as_str(), "Then")),
        );

        visit(ctx, condition, Some((when.as_str(), "")));
        visit(ctx, result, Some((then.as_str(), "")));
    }

    if let Some(else_result) = unwrap(else_result) {
        let else_slot = ctx.add_node(
            NodeCategory::ElseSlot,
            truncate_label(&else_result.readable_form()),
            None,
            Some((root.as_str(), "Else")),
        );
        visit(ctx, else_result, Some((else_slot.as_str(), "")));
    }

    root
}
