// SPDX-License-Identifier: MIT

//! Typed error handling for exprgraph-rs
//!
//! Graph construction itself never fails on malformed content. The only
//! fatal path for a visualization request is a compiler failure upstream
//! of the builders, plus the usual I/O and decoding errors at the edges.

use thiserror::Error;

/// Top-level error type for exprgraph-rs
#[derive(Debug, Error)]
pub enum ExprGraphError {
    /// The expression compiler could not produce an AST
    #[error("Compilation failed: {0}")]
    Compilation(#[from] CompileError),

    /// Configuration errors (bad config file, invalid env override)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error wrapper for compatibility
    #[error("{0}")]
    Other(String),
}

/// Errors raised by an [`ExpressionCompiler`](crate::expr::ExpressionCompiler)
#[derive(Debug, Error)]
pub enum CompileError {
    /// Nothing to compile
    #[error("Expression is empty")]
    EmptyExpression,

    /// The input is not a well-formed AST document
    #[error("Invalid AST document: {0}")]
    InvalidDocument(String),

    /// A conditional was declared without any branch
    #[error("Conditional without branches")]
    EmptyConditional,
}

impl ExprGraphError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// True when the request failed before any graph could be built
    pub fn is_compilation(&self) -> bool {
        matches!(self, Self::Compilation(_))
    }
}

impl From<&str> for ExprGraphError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<String> for ExprGraphError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

pub type Result<T> = std::result::Result<T, ExprGraphError>;
