//! Expression evaluation against a relation registry.

use super::ast::{Expression, JoinKind, SetOperator};
use super::error::{ExpressionError, ExpressionResult};
use super::parser::Parser;
use crate::relation::Relation;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Read-only name → relation lookup consumed by the evaluator
pub trait Registry {
    fn lookup(&self, name: &str) -> Option<&Relation>;
}

impl<S: BuildHasher> Registry for HashMap<String, Relation, S> {
    fn lookup(&self, name: &str) -> Option<&Relation> {
        self.get(name)
    }
}

/// Evaluates expressions bottom-up against a registry.
///
/// Leaves borrow from the registry; only operator results are allocated.
pub struct Evaluator<'r, R: Registry + ?Sized> {
    registry: &'r R,
}

impl<'r, R: Registry + ?Sized> Evaluator<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self { registry }
    }

    /// Parse and evaluate an expression string
    pub fn execute(&self, input: &str) -> ExpressionResult<Relation> {
        let expression = Parser::new(input).parse()?;
        log::debug!("parsed {:?} as {}", input, expression);

        let result = self.evaluate(&expression)?;
        Ok(result.into_owned())
    }

    /// Evaluate an operator tree
    pub fn evaluate(&self, expression: &Expression) -> ExpressionResult<Cow<'r, Relation>> {
        let relation = match expression {
            Expression::Table(name) => {
                let registry: &'r R = self.registry;
                let relation = registry
                    .lookup(name)
                    .ok_or_else(|| ExpressionError::UnresolvedLeaf(name.clone()))?;
                log::debug!("resolved {} ({} rows)", name, relation.len());
                return Ok(Cow::Borrowed(relation));
            }

            Expression::Select { input, predicate } => self.evaluate(input)?.select(
                &predicate.column,
                predicate.op,
                &predicate.value,
            )?,

            Expression::Project { input, columns } => self.evaluate(input)?.project(columns.as_slice())?,

            Expression::Product { left, right } => {
                let (left, right) = (self.evaluate(left)?, self.evaluate(right)?);
                left.cartesian_product(&right)?
            }

            Expression::SetOperation { op, left, right } => {
                let (left, right) = (self.evaluate(left)?, self.evaluate(right)?);
                match op {
                    SetOperator::Union => left.union(&right)?,
                    SetOperator::Intersection => left.intersection(&right)?,
                    SetOperator::Difference => left.difference(&right)?,
                }
            }

            Expression::Join {
                kind,
                left,
                right,
                left_column,
                right_column,
            } => {
                let (left, right) = (self.evaluate(left)?, self.evaluate(right)?);
                match kind {
                    JoinKind::Inner => left.inner_join(&right, left_column, right_column)?,
                    JoinKind::Left => left.left_join(&right, left_column, right_column)?,
                    JoinKind::Right => left.right_join(&right, left_column, right_column)?,
                    JoinKind::Full => left.full_join(&right, left_column, right_column)?,
                }
            }
        };

        Ok(Cow::Owned(relation))
    }
}

/// Parse and evaluate `input` against `registry`
pub fn execute<R: Registry + ?Sized>(registry: &R, input: &str) -> ExpressionResult<Relation> {
    Evaluator::new(registry).execute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::{RelationError, Value};
    use crate::row;

    fn registry() -> HashMap<String, Relation> {
        let mut tables = HashMap::new();
        tables.insert(
            "A".to_string(),
            Relation::with_rows("A", vec![row!["name" => "John", "age" => 18]]),
        );
        tables.insert(
            "B".to_string(),
            Relation::with_rows("B", vec![row!["name" => "John", "course" => "Math101"]]),
        );
        tables.insert("Empty".to_string(), Relation::new("Empty"));
        tables
    }

    #[test]
    fn test_leaf_is_borrowed() -> ExpressionResult<()> {
        let tables = registry();
        let evaluator = Evaluator::new(&tables);

        let result = evaluator.evaluate(&Expression::table("A"))?;
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.name(), "A");
        Ok(())
    }

    #[test]
    fn test_execute_inner_join() -> ExpressionResult<()> {
        let result = execute(&registry(), "(A)join[name=name](B)")?;

        assert_eq!(result.name(), "A_join_B");
        assert_eq!(
            result.rows(),
            &[row!["name" => "John", "age" => 18, "course" => "Math101"]]
        );
        Ok(())
    }

    #[test]
    fn test_execute_nested() -> ExpressionResult<()> {
        let result = execute(&registry(), "((A)select[age=18])join[name=name]((B)project[name])")?;

        assert_eq!(result.name(), "A_selected_join_B_projected");
        assert_eq!(result.rows(), &[row!["name" => "John", "age" => 18]]);
        Ok(())
    }

    #[test]
    fn test_unresolved_leaf() {
        let err = execute(&registry(), "(A)x(Teacher)").unwrap_err();
        assert_eq!(err, ExpressionError::UnresolvedLeaf("Teacher".to_string()));
    }

    #[test]
    fn test_operator_errors_propagate() {
        let err = execute(&registry(), "(A)U(B)").unwrap_err();
        assert!(matches!(
            err,
            ExpressionError::Relation(RelationError::IncompatibleSchema { .. })
        ));

        let err = execute(&registry(), "((A)select[age>99])U(A)").unwrap_err();
        assert_eq!(
            err,
            ExpressionError::Relation(RelationError::UndefinedSchema {
                operation: "union",
                relation: "A_selected".to_string(),
            })
        );

        let err = execute(&registry(), "(A)select[gpa>3]").unwrap_err();
        assert!(matches!(
            err,
            ExpressionError::Relation(RelationError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_left_join_against_empty() -> ExpressionResult<()> {
        let result = execute(&registry(), "(A)-join[name=name](Empty)")?;
        assert_eq!(result.rows(), &[row!["name" => "John", "age" => 18]]);
        assert_eq!(result.rows()[0].get("course"), None::<&Value>);
        Ok(())
    }
}
