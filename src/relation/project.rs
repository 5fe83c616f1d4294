//! Projection (π).

use super::error::RelationResult;
use super::row::Row;
use super::Relation;

impl Relation {
    /// Keep only `columns`, in the order given. Repeated columns collapse to one.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> RelationResult<Relation> {
        let mut result = Relation::new(format!("{}_projected", self.name));

        for row in &self.rows {
            let mut projected = Row::new();
            for column in columns {
                let column = column.as_ref();
                projected.insert(column, row.require(column, &self.name)?.clone());
            }
            result.push(projected);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::RelationError;
    use crate::row;

    fn enrollment() -> Relation {
        Relation::with_rows(
            "Enrollment",
            vec![
                row!["name" => "John", "course" => "Math101"],
                row!["name" => "Jane", "course" => "History202"],
            ],
        )
    }

    #[test]
    fn test_project_reorders_columns() -> RelationResult<()> {
        let result = enrollment().project(&["course", "name"])?;

        assert_eq!(result.name(), "Enrollment_projected");
        assert_eq!(result.header(), vec!["course", "name"]);
        assert_eq!(result.len(), 2);
        Ok(())
    }

    #[test]
    fn test_project_duplicate_columns_collapse() -> RelationResult<()> {
        let result = enrollment().project(&["name", "name"])?;
        assert_eq!(result.header(), vec!["name"]);
        assert_eq!(result.rows()[1], row!["name" => "Jane"]);
        Ok(())
    }

    #[test]
    fn test_project_is_idempotent() -> RelationResult<()> {
        let once = enrollment().project(&["name"])?;
        let twice = once.project(&["name"])?;
        assert_eq!(once.rows(), twice.rows());
        Ok(())
    }

    #[test]
    fn test_project_missing_column() {
        let err = enrollment().project(&["name", "age"]).unwrap_err();
        assert!(matches!(err, RelationError::MissingColumn { column, .. } if column == "age"));
    }

    #[test]
    fn test_project_empty_relation() -> RelationResult<()> {
        let result = Relation::new("Empty").project(&["anything"])?;
        assert!(result.is_empty());
        Ok(())
    }
}
