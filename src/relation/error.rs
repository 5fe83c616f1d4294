//! Relation operator error types.

use thiserror::Error;

/// Errors reported by relation operators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelationError {
    #[error("Column '{column}' not found in relation {relation}")]
    MissingColumn { column: String, relation: String },

    #[error("Operator {0} not supported")]
    UnsupportedOperator(String),

    #[error("Relations {left} and {right} are not compatible for {operation}")]
    IncompatibleSchema {
        operation: &'static str,
        left: String,
        right: String,
    },

    #[error("Relation {relation} has no rows to infer a schema from for {operation}")]
    UndefinedSchema {
        operation: &'static str,
        relation: String,
    },
}

/// Result type for relation operators.
pub type RelationResult<T> = Result<T, RelationError>;
