// SPDX-License-Identifier: MIT

//! Compiler seam and AST document loading
//!
//! Grammar parsing lives outside this crate. `DocumentCompiler` accepts a
//! pre-compiled AST serialized as JSON or YAML, tagged by `type`.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::ast::AstNode;
use crate::error::{CompileError, ExprGraphError};

/// Node tags `AstNode` knows how to decode
const KNOWN_KINDS: &[&str] = &[
    "function_call",
    "conditional",
    "reference",
    "literal",
    "pass_through",
    "literal_wrapper",
    "unknown",
];

/// Turns expression input into an AST
pub trait ExpressionCompiler: Send + Sync {
    fn compile(&self, input: &str) -> Result<AstNode, CompileError>;
}

/// Compiler over serialized AST documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCompiler;

impl DocumentCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Load and compile an AST document from a JSON or YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<AstNode, ExprGraphError> {
        let content = fs::read_to_string(path)?;
        Ok(self.compile(&content)?)
    }

    /// Compile an already-decoded document value
    pub fn compile_value(&self, mut value: Value) -> Result<AstNode, CompileError> {
        rewrite_unknown_kinds(&mut value);
        let node: AstNode = serde_json::from_value(value)
            .map_err(|e| CompileError::InvalidDocument(e.to_string()))?;
        validate(&node)?;
        Ok(node)
    }
}

impl ExpressionCompiler for DocumentCompiler {
    fn compile(&self, input: &str) -> Result<AstNode, CompileError> {
        if input.trim().is_empty() {
            return Err(CompileError::EmptyExpression);
        }
        // YAML accepts JSON documents as well
        let value: Value = serde_yaml::from_str(input)
            .map_err(|e| CompileError::InvalidDocument(e.to_string()))?;
        self.compile_value(value)
    }
}

/// Replace objects carrying an unmodelled `type` tag by `unknown` nodes
fn rewrite_unknown_kinds(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            let unknown_kind = obj
                .get("type")
                .and_then(Value::as_str)
                .filter(|kind| !KNOWN_KINDS.contains(kind))
                .map(str::to_string);

            match unknown_kind {
                Some(kind) => {
                    log::debug!("Decoding unmodelled node kind '{}' as unknown", kind);
                    let text = obj
                        .get("text")
                        .or_else(|| obj.get("name"))
                        .and_then(Value::as_str)
                        .map(|s| Value::String(s.to_string()))
                        .unwrap_or(Value::Null);

                    let mut replacement = Map::new();
                    replacement.insert("type".to_string(), Value::String("unknown".to_string()));
                    replacement.insert("kind".to_string(), Value::String(kind));
                    replacement.insert("text".to_string(), text);
                    *obj = replacement;
                }
                None => {
                    for child in obj.values_mut() {
                        rewrite_unknown_kinds(child);
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_unknown_kinds(item);
            }
        }
        _ => {}
    }
}

fn validate(node: &AstNode) -> Result<(), CompileError> {
    match node {
        AstNode::FunctionCall { arguments, .. } => arguments.iter().try_for_each(validate),
        AstNode::Conditional {
            branches,
            else_result,
        } => {
            if branches.is_empty() {
                return Err(CompileError::EmptyConditional);
            }
            for branch in branches {
                validate(&branch.condition)?;
                validate(&branch.result)?;
            }
            match else_result {
                Some(else_result) => validate(else_result),
                None => Ok(()),
            }
        }
        AstNode::PassThrough { inner: Some(inner) } | AstNode::LiteralWrapper { inner } => {
            validate(inner)
        }
        AstNode::PassThrough { inner: None }
        | AstNode::Reference { .. }
        | AstNode::Literal { .. }
        | AstNode::Unknown { .. } => Ok(()),
    }
}
