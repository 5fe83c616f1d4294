//! Cartesian product (×).

use super::error::RelationResult;
use super::Relation;

/// Suffix appended to a right-hand column whose name is already taken
pub const COLLISION_SUFFIX: &str = "_B";

impl Relation {
    /// Combine every row of `self` with every row of `other`.
    ///
    /// Columns of `self` come first. A column of `other` that collides with an
    /// existing one is stored under `<column>_B` instead of overwriting it.
    pub fn cartesian_product(&self, other: &Relation) -> RelationResult<Relation> {
        let mut result = Relation::new(format!("{}_x_{}", self.name, other.name));

        for row in &self.rows {
            for other_row in &other.rows {
                let mut combined = row.clone();
                for (column, value) in other_row.iter() {
                    if combined.contains(column) {
                        combined.insert(format!("{}{}", column, COLLISION_SUFFIX), value.clone());
                    } else {
                        combined.insert(column, value.clone());
                    }
                }
                result.push(combined);
            }
        }

        log::debug!(
            "product {} x {}: {} rows",
            self.name,
            other.name,
            result.len()
        );
        Ok(result)
    }
}
