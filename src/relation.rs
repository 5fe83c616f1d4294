//! In-memory relations and the relational algebra operator set.
//!
//! This module provides:
//! - Scalar values and order-preserving rows
//! - Selection, projection and cartesian product
//! - Inner, left, right and full first-match joins
//! - Union, intersection and difference over compatible relations
//!
//! Every operator borrows its operands and returns a freshly allocated
//! relation.

pub mod display;
pub mod error;
pub mod join;
pub mod product;
pub mod project;
pub mod row;
pub mod select;
pub mod set_ops;
pub mod value;

pub use error::{RelationError, RelationResult};
pub use row::Row;
pub use select::CompareOp;
pub use value::Value;

use std::collections::BTreeSet;

/// A named, ordered collection of rows.
///
/// The schema is not enforced; operators that need one infer it from the
/// first row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relation {
    name: String,
    rows: Vec<Row>,
}

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a row equal to `row` is present
    pub fn contains(&self, row: &Row) -> bool {
        self.rows.iter().any(|r| r == row)
    }

    /// Column names of the first row, or `None` for an empty relation
    pub fn schema(&self) -> Option<BTreeSet<&str>> {
        self.rows.first().map(|row| row.columns().collect())
    }

    /// Column names of the first row in display order
    pub fn header(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.columns().collect())
            .unwrap_or_default()
    }
}
