// SPDX-License-Identifier: MIT

//! Abstract Syntax Tree produced by an expression compiler
//!
//! The tree is consumed read-only. Its `Display` implementation is the
//! readable form used for slot labels and the text view.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::unwrap::unwrap_node;

/// Function names rendered infix in the readable form when called with two arguments
const INFIX_OPERATORS: &[&str] = &[
    ">", "<", ">=", "<=", "==", "!=", "=", "+", "-", "*", "/", "%", "and", "or",
];

/// A compiled expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AstNode {
    /// Call of a named function (operators are calls too)
    FunctionCall {
        name: String,
        #[serde(default)]
        arguments: Vec<AstNode>,
    },
    /// Multi-branch conditional, first matching branch wins
    Conditional {
        branches: Vec<Branch>,
        #[serde(default)]
        else_result: Option<Box<AstNode>>,
    },
    /// Column reference, e.g. `[age]`
    Reference { name: String },
    /// Constant value
    Literal { value: LiteralValue },
    /// Container without meaning of its own, possibly empty
    PassThrough {
        #[serde(default)]
        inner: Option<Box<AstNode>>,
    },
    /// Representation-only box around a single value
    LiteralWrapper { inner: Box<AstNode> },
    /// Node kind this crate does not model
    Unknown {
        kind: String,
        #[serde(default)]
        text: Option<String>,
    },
}

/// One `(condition, result)` pair of a conditional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub condition: AstNode,
    pub result: AstNode,
}

/// Literal values in expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

/// The kind tag of a literal value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String,
    Boolean,
}

impl LiteralValue {
    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralValue::Boolean(_) => LiteralKind::Boolean,
            LiteralValue::Number(_) => LiteralKind::Number,
            LiteralValue::String(_) => LiteralKind::String,
        }
    }
}

impl Branch {
    pub fn new(condition: AstNode, result: AstNode) -> Self {
        Self { condition, result }
    }
}

impl AstNode {
    pub fn call(name: impl Into<String>, arguments: Vec<AstNode>) -> Self {
        AstNode::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    pub fn conditional(branches: Vec<Branch>, else_result: Option<AstNode>) -> Self {
        AstNode::Conditional {
            branches,
            else_result: else_result.map(Box::new),
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        AstNode::Reference { name: name.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        AstNode::Literal {
            value: LiteralValue::String(value.into()),
        }
    }

    pub fn number(value: f64) -> Self {
        AstNode::Literal {
            value: LiteralValue::Number(value),
        }
    }

    pub fn boolean(value: bool) -> Self {
        AstNode::Literal {
            value: LiteralValue::Boolean(value),
        }
    }

    pub fn pass_through(inner: Option<AstNode>) -> Self {
        AstNode::PassThrough {
            inner: inner.map(Box::new),
        }
    }

    pub fn literal_wrapper(inner: AstNode) -> Self {
        AstNode::LiteralWrapper {
            inner: Box::new(inner),
        }
    }

    /// Short name of the variant, for logs
    pub fn kind_name(&self) -> &str {
        match self {
            AstNode::FunctionCall { .. } => "function_call",
            AstNode::Conditional { .. } => "conditional",
            AstNode::Reference { .. } => "reference",
            AstNode::Literal { .. } => "literal",
            AstNode::PassThrough { .. } => "pass_through",
            AstNode::LiteralWrapper { .. } => "literal_wrapper",
            AstNode::Unknown { kind, .. } => kind.as_str(),
        }
    }

    /// Human-readable rendering of this sub-expression
    pub fn readable_form(&self) -> String {
        self.to_string()
    }

    fn is_infix_call(&self) -> bool {
        matches!(
            unwrap_node(self),
            AstNode::FunctionCall { name, arguments }
                if arguments.len() == 2 && INFIX_OPERATORS.contains(&name.as_str())
        )
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "'{}'", s),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::FunctionCall { name, arguments } => {
                if self.is_infix_call() {
                    let (left, right) = (&arguments[0], &arguments[1]);
                    write_operand(f, left)?;
                    write!(f, " {} ", name)?;
                    write_operand(f, right)
                } else {
                    write!(f, "{}(", name)?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")
                }
            }
            AstNode::Conditional {
                branches,
                else_result,
            } => {
                for (i, branch) in branches.iter().enumerate() {
                    let keyword = if i == 0 { "if" } else { " elseif" };
                    write!(f, "{} {} then {}", keyword, branch.condition, branch.result)?;
                }
                if let Some(else_result) = else_result {
                    write!(f, " else {}", else_result)?;
                }
                write!(f, " endif")
            }
            AstNode::Reference { name } => write!(f, "[{}]", name),
            AstNode::Literal { value } => write!(f, "{}", value),
            AstNode::PassThrough { inner } => match inner {
                Some(inner) => write!(f, "{}", inner),
                None => Ok(()),
            },
            AstNode::LiteralWrapper { inner } => write!(f, "{}", inner),
            AstNode::Unknown { kind, text } => match text {
                Some(text) => write!(f, "{}", text),
                None => write!(f, "<{}>", kind),
            },
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &AstNode) -> fmt::Result {
    if operand.is_infix_call() {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}
