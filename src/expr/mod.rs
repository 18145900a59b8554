// SPDX-License-Identifier: MIT

//! Compiled expression model
//!
//! This module provides:
//! - `AstNode` - the tree handed over by an expression compiler
//! - `ExpressionCompiler` - the seam to that compiler
//! - `unwrap` - wrapper normalization applied before graph emission

mod ast;
mod compiler;
mod unwrap;

pub use ast::{AstNode, Branch, LiteralKind, LiteralValue};
pub use compiler::{DocumentCompiler, ExpressionCompiler};
pub use unwrap::{unwrap, unwrap_node};
