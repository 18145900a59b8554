// SPDX-License-Identifier: MIT

//! Heuristic graph construction from raw expression text
//!
//! Used when no compiled AST is available. Recognizes:
//! - `if <cond> then <a> else <b> endif` (one level, first branch only)
//! - `concat(<arg>, <arg>, ...)`
//! - a bare column reference like `[age]`
//!
//! Anything else becomes a single fallback node. The output is an
//! approximation and is not expected to match the structured builder.

use once_cell::sync::Lazy;
use regex::Regex;

use super::context::{BuildContext, ELLIPSIS};
use super::types::{ExpressionGraph, NodeCategory};

static CONDITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\bif\s+(.*?)\s+then\b").expect("valid condition pattern"));
static THEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\bthen\s+(.*?)(?:\s+else|\s+endif)").expect("valid then pattern")
});
static ELSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\belse\s+(.*?)\s+endif").expect("valid else pattern"));
static CONCAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)concat\s*\(").expect("valid concat pattern"));

/// Characters of slot text kept before the ellipsis
pub const SLOT_LABEL_CHARS: usize = 15;

/// Comparison operators, longest first so `>=` wins over `>` at the same position
const COMPARISON_OPERATORS: [&str; 6] = [">=", "<=", "==", "!=", ">", "<"];

/// Build an approximate graph straight from expression text
pub fn build_heuristic_graph(expression: &str) -> ExpressionGraph {
    let text = expression.trim();
    let lower = text.to_lowercase();
    let mut ctx = BuildContext::new();

    if lower.contains("if") && lower.contains("then") {
        build_conditional(&mut ctx, text);
    } else if lower.contains("concat") {
        build_concat(&mut ctx, text);
    } else if text.contains('[') && text.contains(']') {
        ctx.add_node(NodeCategory::ColumnReference, text, None, None);
    } else {
        log::warn!("No recognizable structure in '{}', rendering as a single node", text);
        ctx.add_node(NodeCategory::Fallback, text, None, None);
    }

    let graph = ctx.finish();
    log::debug!(
        "Built heuristic graph: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
    graph
}

/// One-level conditional. Right operands are classified numeric, quoted or
/// unclassified; numeric and quoted both render as `Literal`, the rest as `Fallback`.
fn build_conditional(ctx: &mut BuildContext, text: &str) {
    let root = ctx.add_node(NodeCategory::ConditionalRoot, "If", None, None);

    if let Some(condition) = CONDITION_RE.captures(text).and_then(|c| c.get(1)) {
        let condition = condition.as_str();
        let cond = ctx.add_node(
            NodeCategory::ConditionSlot,
            truncate_slot(condition),
            None,
            Some((root.as_str(), "Condition")),
        );

        if let Some((left, op, right)) = split_comparison(condition) {
            let op_id = ctx.add_node(NodeCategory::Function, op, None, Some((cond.as_str(), "")));
            let left_category = if is_bracketed(left) {
                NodeCategory::ColumnReference
            } else {
                NodeCategory::Literal
            };
            ctx.add_node(left_category, left, None, Some((op_id.as_str(), "Arg 1")));

            let right_category = if is_numeric(right) || is_quoted(right) {
                NodeCategory::Literal
            } else {
                NodeCategory::Fallback
            };
            ctx.add_node(right_category, right, None, Some((op_id.as_str(), "Arg 2")));
        }
    }

    if let Some(then_text) = THEN_RE.captures(text).and_then(|c| c.get(1)) {
        ctx.add_node(
            NodeCategory::ThenSlot,
            truncate_slot(then_text.as_str()),
            None,
            Some((root.as_str(), "Then")),
        );
    }

    if let Some(else_text) = ELSE_RE.captures(text).and_then(|c| c.get(1)) {
        ctx.add_node(
            NodeCategory::ElseSlot,
            truncate_slot(else_text.as_str()),
            None,
            Some((root.as_str(), "Else")),
        );
    }
}

fn build_concat(ctx: &mut BuildContext, text: &str) {
    let root = ctx.add_node(NodeCategory::Function, "concat", Some("concat"), None);

    let Some(open) = CONCAT_RE.find(text) else {
        return;
    };
    let arguments = split_arguments(argument_text(&text[open.end()..]));

    for (i, argument) in arguments.iter().enumerate() {
        let category = if is_bracketed(argument) {
            NodeCategory::ColumnReference
        } else if is_quoted(argument) {
            NodeCategory::Literal
        } else {
            NodeCategory::Fallback
        };
        let edge_label = format!("Arg {}", i + 1);
        ctx.add_node(
            category,
            argument.as_str(),
            None,
            Some((root.as_str(), edge_label.as_str())),
        );
    }
}

/// Keep the first 15 characters of slot text, marking longer text with `...`
fn truncate_slot(text: &str) -> String {
    if text.chars().count() > SLOT_LABEL_CHARS {
        let kept: String = text.chars().take(SLOT_LABEL_CHARS).collect();
        format!("{}{}", kept, ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Split a condition at its first comparison operator outside quotes
fn split_comparison(condition: &str) -> Option<(&str, &str, &str)> {
    let mut quote: Option<char> = None;

    for (i, c) in condition.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None => {
                let rest = &condition[i..];
                if let Some(op) = COMPARISON_OPERATORS.iter().find(|op| rest.starts_with(**op)) {
                    let left = condition[..i].trim();
                    let right = rest[op.len()..].trim();
                    return Some((left, *op, right));
                }
            }
        }
    }
    None
}

/// Text between the opening parenthesis and its matching close.
/// Unbalanced input runs to the end of the text.
fn argument_text(after_open: &str) -> &str {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in after_open.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' if depth == 0 => return &after_open[..i],
                ')' => depth -= 1,
                _ => {}
            },
        }
    }
    after_open
}

/// Split on commas that are neither inside a quoted string nor nested parentheses
fn split_arguments(text: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                current.push(c);
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    current.push(c);
                }
                '(' => {
                    depth += 1;
                    current.push(c);
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    current.push(c);
                }
                ',' if depth == 0 => {
                    arguments.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }

    if !current.trim().is_empty() {
        arguments.push(current.trim().to_string());
    }
    arguments
}

fn is_bracketed(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']')
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2
        && ((text.starts_with('\'') && text.ends_with('\''))
            || (text.starts_with('"') && text.ends_with('"')))
}

fn is_numeric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit()) && text.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(graph: &ExpressionGraph, id: &str) -> Vec<(NodeCategory, String, String)> {
        graph
            .children(id)
            .iter()
            .map(|(n, l)| (n.category, n.label.clone(), l.to_string()))
            .collect()
    }

    #[test]
    fn test_conditional_with_comparison() {
        let graph = build_heuristic_graph("if [age] > 40 then 'Senior' else 'Junior' endif");
        assert!(graph.is_tree());
        assert_eq!(graph.root_id, "root");
        assert_eq!(graph.root().unwrap().category, NodeCategory::ConditionalRoot);

        let root_children = summary(&graph, "root");
        assert_eq!(
            root_children,
            vec![
                (NodeCategory::ConditionSlot, "[age] > 40".to_string(), "Condition".to_string()),
                (NodeCategory::ThenSlot, "'Senior'".to_string(), "Then".to_string()),
                (NodeCategory::ElseSlot, "'Junior'".to_string(), "Else".to_string()),
            ]
        );

        let cond = graph.nodes_with_category(NodeCategory::ConditionSlot)[0].id.clone();
        let op = graph.children(&cond)[0].0;
        assert_eq!(op.category, NodeCategory::Function);
        assert_eq!(op.label, ">");
        assert_eq!(
            summary(&graph, &op.id),
            vec![
                (NodeCategory::ColumnReference, "[age]".to_string(), "Arg 1".to_string()),
                (NodeCategory::Literal, "40".to_string(), "Arg 2".to_string()),
            ]
        );
    }

    #[test]
    fn test_conditional_keywords_are_case_insensitive() {
        let graph = build_heuristic_graph("IF [salary] >= 100000 THEN 'High' ELSE 'Standard' ENDIF");
        assert_eq!(graph.nodes_with_category(NodeCategory::ThenSlot).len(), 1);
        assert_eq!(graph.nodes_with_category(NodeCategory::ElseSlot).len(), 1);
        let op = &graph.nodes_with_category(NodeCategory::Function)[0];
        assert_eq!(op.label, ">=");
    }

    #[test]
    fn test_conditional_slot_labels_truncated() {
        let graph = build_heuristic_graph(
            "if contains([city], 'o') then length([city]) + 100 else 0 endif",
        );
        let cond = &graph.nodes_with_category(NodeCategory::ConditionSlot)[0];
        assert_eq!(cond.label, "contains([city]...");
        let then = &graph.nodes_with_category(NodeCategory::ThenSlot)[0];
        assert_eq!(then.label, "length([city]) ...");
        let else_slot = &graph.nodes_with_category(NodeCategory::ElseSlot)[0];
        assert_eq!(else_slot.label, "0");
        // no comparison operator, so no operator node
        assert!(graph.nodes_with_category(NodeCategory::Function).is_empty());
    }

    #[test]
    fn test_slot_text_keeps_fifteen_chars() {
        assert_eq!(truncate_slot("[age] > 40"), "[age] > 40");
        assert_eq!(truncate_slot("exactly 15 char"), "exactly 15 char");
        assert_eq!(truncate_slot("sixteen chars!!!"), "sixteen chars!!...");
        assert_eq!(truncate_slot("größer als fünfzehn"), "größer als fünf...");
    }

    #[test]
    fn test_conditional_unquoted_right_operand_is_unclassified() {
        let graph = build_heuristic_graph("if [a] == [b] then 1 endif");
        let fallbacks = graph.nodes_with_category(NodeCategory::Fallback);
        assert_eq!(fallbacks.len(), 1);
        assert_eq!(fallbacks[0].label, "[b]");
        assert!(graph.nodes_with_category(NodeCategory::ElseSlot).is_empty());
    }

    #[test]
    fn test_operator_inside_quotes_is_ignored() {
        assert_eq!(
            split_comparison("[label] == '<none>'"),
            Some(("[label]", "==", "'<none>'"))
        );
        assert_eq!(split_comparison("'a > b'"), None);
    }

    #[test]
    fn test_concat_arguments() {
        let graph = build_heuristic_graph("concat([name], ' from ', [city])");
        assert_eq!(graph.root_id, "root_concat");
        assert_eq!(graph.root().unwrap().label, "concat");
        assert_eq!(
            summary(&graph, &graph.root_id),
            vec![
                (NodeCategory::ColumnReference, "[name]".to_string(), "Arg 1".to_string()),
                (NodeCategory::Literal, "' from '".to_string(), "Arg 2".to_string()),
                (NodeCategory::ColumnReference, "[city]".to_string(), "Arg 3".to_string()),
            ]
        );
    }

    #[test]
    fn test_comma_inside_quotes_not_split() {
        assert_eq!(
            split_arguments("[a], ', ', [b]"),
            vec!["[a]".to_string(), "', '".to_string(), "[b]".to_string()]
        );
        let graph = build_heuristic_graph("concat([a], ', ', [b])");
        assert_eq!(graph.children(&graph.root_id).len(), 3);
    }

    #[test]
    fn test_quote_styles_tracked_separately() {
        assert_eq!(
            split_arguments(r#""it's, fine", [b]"#),
            vec![r#""it's, fine""#.to_string(), "[b]".to_string()]
        );
    }

    #[test]
    fn test_nested_call_arguments_kept_whole() {
        let graph =
            build_heuristic_graph("concat('Joined in ', year(to_date([joined_date])), ', Age: ', [age])");
        let children = summary(&graph, &graph.root_id);
        assert_eq!(children.len(), 4);
        assert_eq!(children[1].0, NodeCategory::Fallback);
        assert_eq!(children[1].1, "year(to_date([joined_date]))");
        assert_eq!(children[3].0, NodeCategory::ColumnReference);
    }

    #[test]
    fn test_concat_without_parenthesis() {
        let graph = build_heuristic_graph("concat");
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.root().unwrap().category, NodeCategory::Function);
    }

    #[test]
    fn test_bare_column_reference() {
        let graph = build_heuristic_graph("[salary] / 12");
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.root_id, "root");
        assert_eq!(graph.nodes[0].category, NodeCategory::ColumnReference);
        assert_eq!(graph.nodes[0].label, "[salary] / 12");
    }

    #[test]
    fn test_unrecognized_text_is_single_fallback() {
        let graph = build_heuristic_graph("42 + 1");
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.nodes[0].category, NodeCategory::Fallback);
        assert_eq!(graph.nodes[0].label, "42 + 1");
    }

    #[test]
    fn test_numeric_detection() {
        assert!(is_numeric("40"));
        assert!(is_numeric("0.5"));
        assert!(is_numeric("-3"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("'40'"));
    }
}
