//! Error types for expression parsing and evaluation.

use crate::relation::RelationError;
use thiserror::Error;

/// Errors that can occur while parsing or evaluating an expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// The input matches none of the grammar forms
    #[error("Malformed expression '{input}': {reason}")]
    Malformed { input: String, reason: String },

    /// A leaf names a relation the registry does not know
    #[error("Unknown relation: {0}")]
    UnresolvedLeaf(String),

    /// An operator rejected its operands
    #[error(transparent)]
    Relation(#[from] RelationError),
}

/// Result type for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;
