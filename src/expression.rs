//! Relational algebra expressions.
//!
//! This module provides:
//! - Tokenization of expression strings
//! - A recursive-descent parser producing operator trees
//! - Bottom-up evaluation against a name → relation registry

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Expression, JoinKind, Predicate, SetOperator};
pub use error::{ExpressionError, ExpressionResult};
pub use eval::{execute, Evaluator, Registry};
pub use lexer::Lexer;
pub use parser::{parse, Parser};
pub use token::Token;
