//! Selection (σ).

use super::error::{RelationError, RelationResult};
use super::value::Value;
use super::Relation;
use std::fmt;
use std::str::FromStr;

/// Comparison operators accepted by selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// Apply the comparison. Ordering operators are false for incomparable values.
    pub fn evaluate(&self, left: &Value, right: &Value) -> bool {
        match self {
            CompareOp::Eq => left == right,
            CompareOp::Ne => left != right,
            CompareOp::Lt => left < right,
            CompareOp::Le => left <= right,
            CompareOp::Gt => left > right,
            CompareOp::Ge => left >= right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

impl FromStr for CompareOp {
    type Err = RelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Ne),
            "<" => Ok(CompareOp::Lt),
            "<=" => Ok(CompareOp::Le),
            ">" => Ok(CompareOp::Gt),
            ">=" => Ok(CompareOp::Ge),
            other => Err(RelationError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Relation {
    /// Keep the rows where `row[column] op value` holds
    pub fn select(&self, column: &str, op: CompareOp, value: &Value) -> RelationResult<Relation> {
        let mut result = Relation::new(format!("{}_selected", self.name));

        for row in &self.rows {
            if op.evaluate(row.require(column, &self.name)?, value) {
                result.push(row.clone());
            }
        }

        log::debug!(
            "select {}{}{} on {}: {} of {} rows",
            column,
            op,
            value,
            self.name,
            result.len(),
            self.len()
        );
        Ok(result)
    }
}
