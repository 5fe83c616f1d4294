use super::error::{RelationError, RelationResult};
use super::value::Value;
use indexmap::IndexMap;

/// A single row: column name to value, in insertion order.
///
/// Column order only matters for display. Two rows are equal when they hold
/// the same set of (column, value) pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Look up a column, failing with `MissingColumn` when it is absent
    pub fn require(&self, column: &str, relation: &str) -> RelationResult<&Value> {
        self.columns
            .get(column)
            .ok_or_else(|| RelationError::MissingColumn {
                column: column.to_string(),
                relation: relation.to_string(),
            })
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Insert or overwrite a column. An existing column keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.columns.insert(column.into(), value);
    }

    /// Dictionary-update merge: columns of `other` overwrite same-named columns
    pub fn update(&mut self, other: &Row) {
        for (column, value) in other.iter() {
            self.insert(column, value.clone());
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Build a row from `column => value` pairs
#[macro_export]
macro_rules! row {
    ($($column:expr => $value:expr),* $(,)?) => {
        $crate::relation::Row::from_iter([
            $(($column, $crate::relation::Value::from($value))),*
        ])
    };
}
