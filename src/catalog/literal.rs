//! Table literals.
//!
//! ```text
//! create Course {
//! id, title
//! 1, Algebra
//! 2, Geometry
//! }
//! ```
//!
//! The first line inside the braces names the columns; every following
//! non-blank line is one row. Cells are trimmed and typed like selection
//! literals, so `18` is an integer and `3.5` a real.

use crate::relation::{Relation, Row, Value};
use thiserror::Error;

const CREATE_KEYWORD: &str = "create";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiteralError {
    #[error("Invalid create command: expected 'create <table_name> {{ ... }}'")]
    MissingName,

    #[error("Invalid create command: table body must be enclosed in braces")]
    MissingBraces,

    #[error("Table {0} has no column header")]
    MissingHeader(String),

    #[error("Row {line} of table {table} has {actual} values, expected {expected}")]
    Arity {
        table: String,
        line: usize,
        expected: usize,
        actual: usize,
    },
}

/// Parse a `create` command into a relation
pub fn parse_table_literal(text: &str) -> Result<Relation, LiteralError> {
    let name = table_name(text).ok_or(LiteralError::MissingName)?;

    let (open, close) = match (text.find('{'), text.rfind('}')) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => return Err(LiteralError::MissingBraces),
    };

    let mut lines = text[open + 1..close]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let columns: Vec<&str> = lines
        .next()
        .ok_or_else(|| LiteralError::MissingHeader(name.to_string()))?
        .split(',')
        .map(str::trim)
        .collect();

    let mut relation = Relation::new(name);
    for (i, line) in lines.enumerate() {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        if values.len() != columns.len() {
            return Err(LiteralError::Arity {
                table: name.to_string(),
                line: i + 1,
                expected: columns.len(),
                actual: values.len(),
            });
        }

        let row: Row = columns
            .iter()
            .zip(values)
            .map(|(column, value)| (*column, Value::parse_literal(value)))
            .collect();
        relation.push(row);
    }

    Ok(relation)
}

/// The word following `create`
fn table_name(text: &str) -> Option<&str> {
    let rest = text.trim_start().strip_prefix(CREATE_KEYWORD)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());

    (end > 0).then(|| &rest[..end])
}
