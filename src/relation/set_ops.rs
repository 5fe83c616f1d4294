//! Set operations over union-compatible relations.
//!
//! Two relations are compatible when their first rows carry the same set of
//! column names, in any order. A relation without rows has no schema to
//! compare, so either operand being empty is an error.

use super::error::{RelationError, RelationResult};
use super::Relation;

impl Relation {
    fn check_compatible(&self, other: &Relation, operation: &'static str) -> RelationResult<()> {
        let undefined = |relation: &Relation| RelationError::UndefinedSchema {
            operation,
            relation: relation.name.clone(),
        };
        let left = self.schema().ok_or_else(|| undefined(self))?;
        let right = other.schema().ok_or_else(|| undefined(other))?;

        if left != right {
            return Err(RelationError::IncompatibleSchema {
                operation,
                left: self.name.clone(),
                right: other.name.clone(),
            });
        }
        Ok(())
    }

    /// Union (∪). Rows of `other` already present in the result are skipped;
    /// duplicates within `self` are kept.
    pub fn union(&self, other: &Relation) -> RelationResult<Relation> {
        self.check_compatible(other, "union")?;

        let mut result =
            Relation::with_rows(format!("{}_union_{}", self.name, other.name), self.rows.clone());
        for row in &other.rows {
            if !result.contains(row) {
                result.push(row.clone());
            }
        }

        Ok(result)
    }

    /// Intersection (∩): rows of `self` with an equal row in `other`
    pub fn intersection(&self, other: &Relation) -> RelationResult<Relation> {
        self.check_compatible(other, "intersection")?;

        let rows = self
            .rows
            .iter()
            .filter(|row| other.contains(row))
            .cloned()
            .collect();

        Ok(Relation::with_rows(
            format!("{}_intersection_{}", self.name, other.name),
            rows,
        ))
    }

    /// Difference (−): rows of `self` with no equal row in `other`
    pub fn difference(&self, other: &Relation) -> RelationResult<Relation> {
        self.check_compatible(other, "difference")?;

        let rows = self
            .rows
            .iter()
            .filter(|row| !other.contains(row))
            .cloned()
            .collect();

        Ok(Relation::with_rows(
            format!("{}_minus_{}", self.name, other.name),
            rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn student() -> Relation {
        Relation::with_rows(
            "Student",
            vec![
                row!["name" => "John", "age" => 18],
                row!["name" => "Jane", "age" => 19],
                row!["name" => "Bob", "age" => 20],
            ],
        )
    }

    fn student2() -> Relation {
        Relation::with_rows(
            "Student2",
            vec![
                row!["age" => 18, "name" => "John"],
                row!["age" => 21, "name" => "Jane"],
                row!["age" => 18, "name" => "John"],
            ],
        )
    }

    #[test]
    fn test_union_dedups_right_side_only() -> RelationResult<()> {
        let mut left = student();
        left.push(row!["name" => "Bob", "age" => 20]);

        let result = left.union(&student2())?;
        assert_eq!(result.name(), "Student_union_Student2");
        // 4 left rows (Bob twice), plus Jane/21 once
        assert_eq!(result.len(), 5);
        assert_eq!(result.rows()[4], row!["name" => "Jane", "age" => 21]);
        Ok(())
    }

    #[test]
    fn test_intersection() -> RelationResult<()> {
        let result = student().intersection(&student2())?;
        assert_eq!(result.name(), "Student_intersection_Student2");
        assert_eq!(result.rows(), &[row!["name" => "John", "age" => 18]]);
        Ok(())
    }

    #[test]
    fn test_difference() -> RelationResult<()> {
        let result = student().difference(&student2())?;
        assert_eq!(result.name(), "Student_minus_Student2");
        assert_eq!(
            result.rows(),
            &[row!["name" => "Jane", "age" => 19], row!["name" => "Bob", "age" => 20]]
        );
        Ok(())
    }

    #[test]
    fn test_incompatible_schemas() {
        let enrollment = Relation::with_rows(
            "Enrollment",
            vec![row!["name" => "John", "course" => "Math101"]],
        );

        for result in [
            student().union(&enrollment),
            student().intersection(&enrollment),
            student().difference(&enrollment),
        ] {
            assert!(matches!(
                result,
                Err(RelationError::IncompatibleSchema { left, right, .. })
                    if left == "Student" && right == "Enrollment"
            ));
        }
    }

    #[test]
    fn test_empty_operand_has_no_schema() {
        let empty = Relation::new("Empty");

        for result in [
            student().union(&empty),
            empty.union(&student()),
            student().intersection(&empty),
            empty.difference(&empty),
        ] {
            assert!(matches!(
                result,
                Err(RelationError::UndefinedSchema { relation, .. }) if relation == "Empty"
            ));
        }
    }
}
