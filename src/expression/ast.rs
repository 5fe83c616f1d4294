//! Operator trees produced by the parser.

use crate::relation::{CompareOp, Value};
use std::fmt;

/// Join variants, named after their infix operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// `join`
    Inner,
    /// `-join`
    Left,
    /// `join-`
    Right,
    /// `-join-`
    Full,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "join",
            JoinKind::Left => "-join",
            JoinKind::Right => "join-",
            JoinKind::Full => "-join-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOperator {
    /// `U`
    Union,
    /// `&`
    Intersection,
    /// `-`
    Difference,
}

impl SetOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetOperator::Union => "U",
            SetOperator::Intersection => "&",
            SetOperator::Difference => "-",
        }
    }
}

/// `column op literal` argument of a selection
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A relation looked up by name
    Table(String),
    /// `(input)select[column op value]`
    Select {
        input: Box<Expression>,
        predicate: Predicate,
    },
    /// `(input)project[c1, c2, ...]`
    Project {
        input: Box<Expression>,
        columns: Vec<String>,
    },
    /// `(left)x(right)`
    Product {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `(left)U(right)`, `(left)&(right)`, `(left)-(right)`
    SetOperation {
        op: SetOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `(left)join[left_column=right_column](right)` and the outer variants
    Join {
        kind: JoinKind,
        left: Box<Expression>,
        right: Box<Expression>,
        left_column: String,
        right_column: String,
    },
}

impl Expression {
    pub fn table(name: impl Into<String>) -> Self {
        Expression::Table(name.into())
    }

    pub fn select(input: Expression, column: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Expression::Select {
            input: Box::new(input),
            predicate: Predicate {
                column: column.into(),
                op,
                value,
            },
        }
    }

    pub fn project<S: Into<String>>(input: Expression, columns: impl IntoIterator<Item = S>) -> Self {
        Expression::Project {
            input: Box::new(input),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn product(left: Expression, right: Expression) -> Self {
        Expression::Product {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn set_operation(op: SetOperator, left: Expression, right: Expression) -> Self {
        Expression::SetOperation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn join(
        kind: JoinKind,
        left: Expression,
        left_column: impl Into<String>,
        right_column: impl Into<String>,
        right: Expression,
    ) -> Self {
        Expression::Join {
            kind,
            left: Box::new(left),
            right: Box::new(right),
            left_column: left_column.into(),
            right_column: right_column.into(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Table(name) => write!(f, "{}", name),
            Expression::Select { input, predicate } => write!(
                f,
                "({})select[{}{}{}]",
                input, predicate.column, predicate.op, predicate.value
            ),
            Expression::Project { input, columns } => {
                write!(f, "({})project[{}]", input, columns.join(","))
            }
            Expression::Product { left, right } => write!(f, "({})x({})", left, right),
            Expression::SetOperation { op, left, right } => {
                write!(f, "({}){}({})", left, op.as_str(), right)
            }
            Expression::Join {
                kind,
                left,
                right,
                left_column,
                right_column,
            } => write!(
                f,
                "({}){}[{}={}]({})",
                left,
                kind.as_str(),
                left_column,
                right_column,
                right
            ),
        }
    }
}
