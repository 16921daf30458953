//! Entries stored in the statement model: conditions, joins and ordering.

use crate::error::{QbError, QbResult};
use crate::name::AliasableName;
use crate::value::Value;
use std::fmt;

/// Comparison operator of a condition entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalOperator {
    Equals,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Different,
    Like,
    In,
    Between,
}

impl EvalOperator {
    /// SQL token for the operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            EvalOperator::Equals => "=",
            EvalOperator::Greater => ">",
            EvalOperator::GreaterOrEqual => ">=",
            EvalOperator::Less => "<",
            EvalOperator::LessOrEqual => "<=",
            EvalOperator::Different => "<>",
            EvalOperator::Like => "LIKE",
            EvalOperator::In => "IN",
            EvalOperator::Between => "BETWEEN",
        }
    }

    /// Whether the operand count fits this operator.
    pub fn accepts_arity(&self, count: usize) -> bool {
        match self {
            EvalOperator::Between => count == 2,
            EvalOperator::In => count >= 1,
            _ => count == 1,
        }
    }

    fn expected_arity(&self) -> &'static str {
        match self {
            EvalOperator::Between => "exactly 2",
            EvalOperator::In => "at least 1",
            _ => "exactly 1",
        }
    }
}

impl fmt::Display for EvalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Joiner placed before every entry after the first in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connector {
    Comma,
    #[default]
    And,
    Or,
}

impl Connector {
    /// Text inserted between the previous fragment and this entry.
    pub fn as_separator(&self) -> &'static str {
        match self {
            Connector::Comma => ", ",
            Connector::And => " AND ",
            Connector::Or => " OR ",
        }
    }
}

/// One comparison or value assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionEntry {
    pub column: String,
    pub operator: EvalOperator,
    pub operands: Vec<Value>,
    pub connector: Connector,
}

impl ConditionEntry {
    pub fn new(
        column: impl Into<String>,
        operator: EvalOperator,
        operands: Vec<Value>,
        connector: Connector,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            operands,
            connector,
        }
    }

    /// A `column = value` assignment for INSERT/UPDATE.
    pub fn assignment(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, EvalOperator::Equals, vec![value], Connector::Comma)
    }

    /// Fail if the operand count does not match the operator's arity.
    pub fn check_arity(&self) -> QbResult<()> {
        if self.operator.accepts_arity(self.operands.len()) {
            Ok(())
        } else {
            Err(QbError::invariant(format!(
                "{} on column '{}' expects {} operand(s), got {}",
                self.operator,
                self.column,
                self.operator.expected_arity(),
                self.operands.len()
            )))
        }
    }
}

/// Join kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinKind::Inner => write!(f, "INNER JOIN"),
            JoinKind::Left => write!(f, "LEFT JOIN"),
            JoinKind::Right => write!(f, "RIGHT JOIN"),
        }
    }
}

/// `<kind> JOIN <table> ON <source>.<source_column> = <table>.<join_column>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinDescriptor {
    pub kind: JoinKind,
    pub table: AliasableName,
    pub source_column: String,
    pub join_column: String,
}

/// Sort direction. `Unspecified` leaves the choice to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Ascending,
    Descending,
    Unspecified,
}

/// ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    pub column: String,
    pub direction: OrderDirection,
}

impl OrderEntry {
    pub fn to_sql(&self) -> String {
        match self.direction {
            OrderDirection::Ascending => format!("{} ASC", self.column),
            OrderDirection::Descending => format!("{} DESC", self.column),
            OrderDirection::Unspecified => self.column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        let between = ConditionEntry::new(
            "age",
            EvalOperator::Between,
            vec![Value::Int(1)],
            Connector::And,
        );
        let err = between.check_arity().unwrap_err();
        assert!(err.is_invariant_violation());
        assert!(err.to_string().contains("exactly 2"));

        let empty_in = ConditionEntry::new("id", EvalOperator::In, vec![], Connector::And);
        assert!(empty_in.check_arity().is_err());

        let eq_two = ConditionEntry::new(
            "id",
            EvalOperator::Equals,
            vec![Value::Int(1), Value::Int(2)],
            Connector::And,
        );
        assert!(eq_two.check_arity().is_err());

        let in_three = ConditionEntry::new(
            "id",
            EvalOperator::In,
            vec![Value::Int(1), Value::Int(2), Value::Int(3)],
            Connector::Or,
        );
        assert!(in_three.check_arity().is_ok());
    }

    #[test]
    fn test_order_entry() {
        let e = |d| OrderEntry {
            column: "name".to_string(),
            direction: d,
        };
        assert_eq!(e(OrderDirection::Ascending).to_sql(), "name ASC");
        assert_eq!(e(OrderDirection::Descending).to_sql(), "name DESC");
        assert_eq!(e(OrderDirection::Unspecified).to_sql(), "name");
    }

    #[test]
    fn test_separators() {
        assert_eq!(Connector::Comma.as_separator(), ", ");
        assert_eq!(Connector::And.as_separator(), " AND ");
        assert_eq!(Connector::Or.as_separator(), " OR ");
    }
}
