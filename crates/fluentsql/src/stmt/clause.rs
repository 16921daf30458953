//! Rendering of single condition / assignment entries.

use crate::config::CompileOptions;
use crate::error::QbResult;
use crate::literal::escape_literal;
use crate::stmt::binder::ParamBinder;
use crate::stmt::entry::{ConditionEntry, EvalOperator};
use crate::value::Value;

/// Renders entries into SQL fragments, binding scalar operands through a
/// [`ParamBinder`].
pub(crate) struct ClauseCompiler<'a, 'b> {
    binder: &'b mut ParamBinder<'a>,
    options: &'a CompileOptions,
}

impl<'a, 'b> ClauseCompiler<'a, 'b> {
    pub(crate) fn new(binder: &'b mut ParamBinder<'a>, options: &'a CompileOptions) -> Self {
        Self { binder, options }
    }

    /// Render `entry` without any leading connector.
    pub(crate) fn compile(&mut self, entry: &ConditionEntry) -> QbResult<String> {
        entry.check_arity()?;

        let column = entry.column.as_str();
        let op = entry.operator;
        match op {
            EvalOperator::Between => {
                let from = self.operand(column, &entry.operands[0])?;
                let to = self.operand(column, &entry.operands[1])?;
                Ok(format!("{column} BETWEEN {from} AND {to}"))
            }
            EvalOperator::In => {
                let values = entry
                    .operands
                    .iter()
                    .map(|v| self.operand(column, v))
                    .collect::<QbResult<Vec<_>>>()?;
                Ok(format!("{column} IN ({})", values.join(",")))
            }
            _ => {
                let placeholder = self.binder.bind(column, entry.operands[0].clone());
                Ok(format!("{column} {} {placeholder}", op.as_sql()))
            }
        }
    }

    /// Render `entry` prefixed by its connector (`, `, ` AND `, ` OR `).
    pub(crate) fn compile_with_connector(&mut self, entry: &ConditionEntry) -> QbResult<String> {
        let fragment = self.compile(entry)?;
        Ok(format!("{}{}", entry.connector.as_separator(), fragment))
    }

    /// Render a whole list: first entry bare, the rest with their connectors.
    pub(crate) fn compile_list(&mut self, entries: &[ConditionEntry]) -> QbResult<String> {
        let mut sql = String::new();
        for (i, entry) in entries.iter().enumerate() {
            let fragment = if i == 0 {
                self.compile(entry)?
            } else {
                self.compile_with_connector(entry)?
            };
            sql.push_str(&fragment);
        }
        Ok(sql)
    }

    /// Inline or bind an operand of a multi-value operator / INSERT value.
    pub(crate) fn operand(&mut self, column: &str, value: &Value) -> QbResult<String> {
        if self.options.binds_everything() {
            Ok(self.binder.bind(column, value.clone()))
        } else {
            escape_literal(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BindingMode;
    use crate::stmt::entry::Connector;

    fn entry(column: &str, op: EvalOperator, values: Vec<Value>, c: Connector) -> ConditionEntry {
        ConditionEntry::new(column, op, values, c)
    }

    #[test]
    fn test_scalar_operators_are_bound() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        let mut cc = ClauseCompiler::new(&mut binder, &opts);

        let cases = [
            (EvalOperator::Equals, "a = :a_p0"),
            (EvalOperator::Greater, "a > :a_p1"),
            (EvalOperator::GreaterOrEqual, "a >= :a_p2"),
            (EvalOperator::Less, "a < :a_p3"),
            (EvalOperator::LessOrEqual, "a <= :a_p4"),
            (EvalOperator::Different, "a <> :a_p5"),
            (EvalOperator::Like, "a LIKE :a_p6"),
        ];
        for (op, expected) in cases {
            let sql = cc
                .compile(&entry("a", op, vec![Value::Int(1)], Connector::And))
                .unwrap();
            assert_eq!(sql, expected);
        }
        assert_eq!(binder.len(), 7);
    }

    #[test]
    fn test_between_inlines_escaped_literals() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        let mut cc = ClauseCompiler::new(&mut binder, &opts);
        let sql = cc
            .compile(&entry(
                "name",
                EvalOperator::Between,
                vec!["A'a".into(), "M".into()],
                Connector::And,
            ))
            .unwrap();
        assert_eq!(sql, "name BETWEEN 'A''a' AND 'M'");
        assert_eq!(binder.len(), 0);
    }

    #[test]
    fn test_in_keeps_input_order() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        let mut cc = ClauseCompiler::new(&mut binder, &opts);
        let sql = cc
            .compile(&entry(
                "id",
                EvalOperator::In,
                vec![Value::Int(3), Value::Int(1), Value::Int(2)],
                Connector::And,
            ))
            .unwrap();
        assert_eq!(sql, "id IN (3,1,2)");
    }

    #[test]
    fn test_bind_all_mode() {
        let opts = CompileOptions::new().with_binding(BindingMode::BindAll);
        let mut binder = ParamBinder::new(&opts);
        let mut cc = ClauseCompiler::new(&mut binder, &opts);
        let sql = cc
            .compile(&entry(
                "id",
                EvalOperator::In,
                vec![Value::Int(1), Value::Int(2)],
                Connector::And,
            ))
            .unwrap();
        assert_eq!(sql, "id IN (:id_p0,:id_p1)");

        let sql = cc
            .compile(&entry(
                "age",
                EvalOperator::Between,
                vec![Value::Int(18), Value::Int(65)],
                Connector::And,
            ))
            .unwrap();
        assert_eq!(sql, "age BETWEEN :age_p0 AND :age_p1");
        assert_eq!(binder.len(), 4);
    }

    #[test]
    fn test_connectors() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        let mut cc = ClauseCompiler::new(&mut binder, &opts);

        let list = vec![
            entry("a", EvalOperator::Equals, vec![Value::Int(1)], Connector::Or),
            entry("b", EvalOperator::Equals, vec![Value::Int(2)], Connector::Or),
            entry("c", EvalOperator::Equals, vec![Value::Int(3)], Connector::And),
        ];
        let sql = cc.compile_list(&list).unwrap();
        assert_eq!(sql, "a = :a_p0 OR b = :b_p0 AND c = :c_p0");

        let sql = cc
            .compile_with_connector(&entry(
                "d",
                EvalOperator::Equals,
                vec![Value::Int(4)],
                Connector::Comma,
            ))
            .unwrap();
        assert_eq!(sql, ", d = :d_p0");
    }

    #[test]
    fn test_arity_violation_fails_fast() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        let mut cc = ClauseCompiler::new(&mut binder, &opts);
        let err = cc
            .compile(&entry(
                "age",
                EvalOperator::Between,
                vec![Value::Int(1)],
                Connector::And,
            ))
            .unwrap_err();
        assert!(err.is_invariant_violation());
        assert_eq!(binder.len(), 0);
    }
}
