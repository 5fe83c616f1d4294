//! First-match join variants.
//!
//! Each left row is paired with at most one right row: the search over the
//! right relation stops at the first row whose join column equals the left
//! row's join column. Matched rows are merged with dictionary-update
//! semantics, so right-hand columns overwrite same-named left-hand columns.

use super::error::RelationResult;
use super::row::Row;
use super::value::Value;
use super::Relation;

impl Relation {
    /// First right-hand row whose `other_column` equals this row's `self_column`
    fn first_match<'a>(
        &self,
        row: &Row,
        other: &'a Relation,
        self_column: &str,
        other_column: &str,
    ) -> RelationResult<Option<&'a Row>> {
        for other_row in &other.rows {
            let left = row.require(self_column, &self.name)?;
            if left == other_row.require(other_column, &other.name)? {
                return Ok(Some(other_row));
            }
        }
        Ok(None)
    }

    /// Inner join (⋈). Left rows without a match are dropped.
    pub fn inner_join(
        &self,
        other: &Relation,
        self_column: &str,
        other_column: &str,
    ) -> RelationResult<Relation> {
        let mut result = Relation::new(format!("{}_join_{}", self.name, other.name));

        for row in &self.rows {
            if let Some(other_row) = self.first_match(row, other, self_column, other_column)? {
                let mut joined = row.clone();
                joined.update(other_row);
                result.push(joined);
            }
        }

        log::debug!(
            "join {}[{}={}]{}: {} rows",
            self.name,
            self_column,
            other_column,
            other.name,
            result.len()
        );
        Ok(result)
    }

    /// Left outer join (⟕).
    ///
    /// Unmatched left rows are padded with NULL for every column of the right
    /// relation's first row that they do not already carry. An empty right
    /// relation has no schema to pad with, so its left rows pass through as is.
    pub fn left_join(
        &self,
        other: &Relation,
        self_column: &str,
        other_column: &str,
    ) -> RelationResult<Relation> {
        let mut result = Relation::new(format!("{}_-join_{}", self.name, other.name));
        let padding = other.header();

        for row in &self.rows {
            let mut joined = row.clone();
            match self.first_match(row, other, self_column, other_column)? {
                Some(other_row) => joined.update(other_row),
                None => {
                    for column in &padding {
                        if !joined.contains(column) {
                            joined.insert(*column, Value::Null);
                        }
                    }
                }
            }
            result.push(joined);
        }

        Ok(result)
    }

    /// Right outer join (⟖), computed as the mirrored left join
    pub fn right_join(
        &self,
        other: &Relation,
        self_column: &str,
        other_column: &str,
    ) -> RelationResult<Relation> {
        let mut result = other.left_join(self, other_column, self_column)?;
        result.set_name(format!("{}_join-_{}", self.name, other.name));
        Ok(result)
    }

    /// Full outer join (⟗): the left join plus every right-join row not already present
    pub fn full_join(
        &self,
        other: &Relation,
        self_column: &str,
        other_column: &str,
    ) -> RelationResult<Relation> {
        let mut result = self.left_join(other, self_column, other_column)?;
        let right = self.right_join(other, self_column, other_column)?;

        for row in right.rows {
            if !result.contains(&row) {
                result.push(row);
            }
        }

        result.set_name(format!("{}_-join-_{}", self.name, other.name));
        Ok(result)
    }
}
