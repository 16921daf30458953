//! Fluent configuration surface over [`StatementModel`].

use crate::config::{BindingMode, CompileOptions};
use crate::error::QbResult;
use crate::name::AliasableName;
use crate::stmt::assemble::assemble;
use crate::stmt::compiled::CompiledStatement;
use crate::stmt::entry::{
    ConditionEntry, Connector, EvalOperator, JoinDescriptor, JoinKind, OrderDirection, OrderEntry,
};
use crate::stmt::model::{StatementKind, StatementModel};
use crate::value::Value;

/// Statement builder. Every configuration call consumes and returns the builder.
///
/// Misuse that cannot be reported from a chained call (mismatched INSERT counts,
/// mixing statement kinds) is recorded and returned by [`StatementBuilder::compile`].
#[derive(Clone, Debug)]
pub struct StatementBuilder {
    model: StatementModel,
    options: CompileOptions,
}

impl StatementBuilder {
    /// Create a builder against a table.
    pub fn new(table: &str) -> Self {
        Self {
            model: StatementModel::new(AliasableName::new(table)),
            options: CompileOptions::default(),
        }
    }

    /// Create a builder against an aliased table.
    pub fn with_alias(table: &str, alias: &str) -> Self {
        Self {
            model: StatementModel::new(AliasableName::aliased(table, alias)),
            options: CompileOptions::default(),
        }
    }

    /// Replace the source table.
    pub fn from(mut self, table: &str, alias: &str) -> Self {
        self.model.table = AliasableName::aliased(table, alias);
        self
    }

    /// Read-only access to the accumulated model.
    pub fn model(&self) -> &StatementModel {
        &self.model
    }

    // ==================== Options ====================

    /// Replace all compile options.
    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the binding mode only.
    pub fn binding(mut self, binding: BindingMode) -> Self {
        self.options.binding = binding;
        self
    }

    // ==================== SELECT ====================

    /// Append one selected column.
    pub fn select(mut self, column: &str) -> Self {
        self.model.set_kind(StatementKind::Select);
        self.model.select_columns.push(AliasableName::new(column));
        self
    }

    /// Append one selected column rendered as `column AS alias`.
    pub fn select_as(mut self, column: &str, alias: &str) -> Self {
        self.model.set_kind(StatementKind::Select);
        self.model
            .select_columns
            .push(AliasableName::aliased(column, alias));
        self
    }

    /// Append several selected columns.
    pub fn select_cols(mut self, columns: &[&str]) -> Self {
        self.model.set_kind(StatementKind::Select);
        self.model
            .select_columns
            .extend(columns.iter().map(|c| AliasableName::new(*c)));
        self
    }

    // ==================== INSERT ====================

    /// Insert one row given parallel column and value lists.
    ///
    /// A length mismatch is reported by `compile` as a configuration error.
    pub fn insert(mut self, columns: &[&str], values: Vec<Value>) -> Self {
        self.model.set_kind(StatementKind::Insert);
        if columns.len() != values.len() {
            self.model.record_error(format!(
                "INSERT got {} column(s) but {} value(s)",
                columns.len(),
                values.len()
            ));
            return self;
        }
        self.model.assignments.extend(
            columns
                .iter()
                .zip(values)
                .map(|(c, v)| ConditionEntry::assignment(*c, v)),
        );
        self
    }

    /// Insert one row given `(column, value)` pairs.
    pub fn insert_pairs<C, V, I>(mut self, pairs: I) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (C, V)>,
    {
        self.model.set_kind(StatementKind::Insert);
        self.model.assignments.extend(
            pairs
                .into_iter()
                .map(|(c, v)| ConditionEntry::assignment(c, v.into())),
        );
        self
    }

    // ==================== UPDATE ====================

    /// Add one `SET column = value` assignment.
    pub fn update(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.model.set_kind(StatementKind::Update);
        self.model
            .assignments
            .push(ConditionEntry::assignment(column, value.into()));
        self
    }

    /// Add several assignments.
    pub fn update_pairs<C, V, I>(mut self, pairs: I) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (C, V)>,
    {
        self.model.set_kind(StatementKind::Update);
        self.model.assignments.extend(
            pairs
                .into_iter()
                .map(|(c, v)| ConditionEntry::assignment(c, v.into())),
        );
        self
    }

    // ==================== DELETE ====================

    /// Mark the statement as DELETE. Conditions are still required.
    pub fn delete(mut self) -> Self {
        self.model.set_kind(StatementKind::Delete);
        self
    }

    /// DELETE rows where `column = value`.
    pub fn delete_where(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.model.set_kind(StatementKind::Delete);
        self.push_condition(column, EvalOperator::Equals, vec![value.into()], Connector::And)
    }

    /// DELETE every row of the table. Conditions added later still apply.
    pub fn delete_all(mut self) -> Self {
        self.model.set_kind(StatementKind::Delete);
        self.model.delete_all = true;
        self
    }

    // ==================== JOIN ====================

    /// Add a join equating `source_column` of the main table with `join_column`
    /// of `table`.
    pub fn join(
        mut self,
        kind: JoinKind,
        table: impl Into<AliasableName>,
        source_column: &str,
        join_column: &str,
    ) -> Self {
        self.model.joins.push(JoinDescriptor {
            kind,
            table: table.into(),
            source_column: source_column.to_string(),
            join_column: join_column.to_string(),
        });
        self
    }

    /// Add INNER JOIN.
    pub fn inner_join(self, table: &str, source_column: &str, join_column: &str) -> Self {
        self.join(JoinKind::Inner, table, source_column, join_column)
    }

    /// Add INNER JOIN against an aliased table.
    pub fn inner_join_as(
        self,
        table: &str,
        alias: &str,
        source_column: &str,
        join_column: &str,
    ) -> Self {
        self.join(
            JoinKind::Inner,
            AliasableName::aliased(table, alias),
            source_column,
            join_column,
        )
    }

    /// Add LEFT JOIN.
    pub fn left_join(self, table: &str, source_column: &str, join_column: &str) -> Self {
        self.join(JoinKind::Left, table, source_column, join_column)
    }

    /// Add LEFT JOIN against an aliased table.
    pub fn left_join_as(
        self,
        table: &str,
        alias: &str,
        source_column: &str,
        join_column: &str,
    ) -> Self {
        self.join(
            JoinKind::Left,
            AliasableName::aliased(table, alias),
            source_column,
            join_column,
        )
    }

    /// Add RIGHT JOIN.
    pub fn right_join(self, table: &str, source_column: &str, join_column: &str) -> Self {
        self.join(JoinKind::Right, table, source_column, join_column)
    }

    /// Add RIGHT JOIN against an aliased table.
    pub fn right_join_as(
        self,
        table: &str,
        alias: &str,
        source_column: &str,
        join_column: &str,
    ) -> Self {
        self.join(
            JoinKind::Right,
            AliasableName::aliased(table, alias),
            source_column,
            join_column,
        )
    }

    // ==================== WHERE ====================

    /// Add WHERE: column <op> value, joined with AND.
    pub fn where_op(self, column: &str, op: EvalOperator, value: impl Into<Value>) -> Self {
        self.push_condition(column, op, vec![value.into()], Connector::And)
    }

    /// Add WHERE: column <op> value, joined with OR.
    pub fn or_where_op(self, column: &str, op: EvalOperator, value: impl Into<Value>) -> Self {
        self.push_condition(column, op, vec![value.into()], Connector::Or)
    }

    /// Add a fully specified condition entry.
    ///
    /// Operand arity is checked when compiling.
    pub fn where_entry(mut self, entry: ConditionEntry) -> Self {
        self.model.conditions.push(entry);
        self
    }

    /// Add WHERE: column = value
    pub fn where_eq(self, column: &str, value: impl Into<Value>) -> Self {
        self.where_op(column, EvalOperator::Equals, value)
    }

    /// Add OR column = value
    pub fn or_where_eq(self, column: &str, value: impl Into<Value>) -> Self {
        self.or_where_op(column, EvalOperator::Equals, value)
    }

    /// Add WHERE: column <> value
    pub fn where_ne(self, column: &str, value: impl Into<Value>) -> Self {
        self.where_op(column, EvalOperator::Different, value)
    }

    /// Add WHERE: column > value
    pub fn where_gt(self, column: &str, value: impl Into<Value>) -> Self {
        self.where_op(column, EvalOperator::Greater, value)
    }

    /// Add WHERE: column >= value
    pub fn where_gte(self, column: &str, value: impl Into<Value>) -> Self {
        self.where_op(column, EvalOperator::GreaterOrEqual, value)
    }

    /// Add WHERE: column < value
    pub fn where_lt(self, column: &str, value: impl Into<Value>) -> Self {
        self.where_op(column, EvalOperator::Less, value)
    }

    /// Add WHERE: column <= value
    pub fn where_lte(self, column: &str, value: impl Into<Value>) -> Self {
        self.where_op(column, EvalOperator::LessOrEqual, value)
    }

    /// Add WHERE: column LIKE pattern
    pub fn where_like(self, column: &str, pattern: impl Into<Value>) -> Self {
        self.where_op(column, EvalOperator::Like, pattern)
    }

    /// Add WHERE: column IN (values...)
    ///
    /// An empty list fails at compile time.
    pub fn where_in<V: Into<Value>>(self, column: &str, values: Vec<V>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.push_condition(column, EvalOperator::In, values, Connector::And)
    }

    /// Add OR column IN (values...)
    pub fn or_where_in<V: Into<Value>>(self, column: &str, values: Vec<V>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.push_condition(column, EvalOperator::In, values, Connector::Or)
    }

    /// Add WHERE: column BETWEEN start AND end
    pub fn where_between(
        self,
        column: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        self.push_condition(
            column,
            EvalOperator::Between,
            vec![start.into(), end.into()],
            Connector::And,
        )
    }

    /// Add OR column BETWEEN start AND end
    pub fn or_where_between(
        self,
        column: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        self.push_condition(
            column,
            EvalOperator::Between,
            vec![start.into(), end.into()],
            Connector::Or,
        )
    }

    fn push_condition(
        mut self,
        column: &str,
        op: EvalOperator,
        operands: Vec<Value>,
        connector: Connector,
    ) -> Self {
        self.model
            .conditions
            .push(ConditionEntry::new(column, op, operands, connector));
        self
    }

    // ==================== ORDER BY / GROUP BY ====================

    /// Add ORDER BY with an explicit direction.
    pub fn order_by(mut self, column: &str, direction: OrderDirection) -> Self {
        self.model.order_by.push(OrderEntry {
            column: column.to_string(),
            direction,
        });
        self
    }

    /// Add ORDER BY column ASC
    pub fn order_by_asc(self, column: &str) -> Self {
        self.order_by(column, OrderDirection::Ascending)
    }

    /// Add ORDER BY column DESC
    pub fn order_by_desc(self, column: &str) -> Self {
        self.order_by(column, OrderDirection::Descending)
    }

    /// Add one GROUP BY column.
    pub fn group_by(mut self, column: &str) -> Self {
        self.model.group_by.push(column.to_string());
        self
    }

    /// Add several GROUP BY columns.
    pub fn group_by_cols(mut self, columns: &[&str]) -> Self {
        self.model
            .group_by
            .extend(columns.iter().map(|c| c.to_string()));
        self
    }

    // ==================== Build ====================

    /// Render the statement text and its parameter bindings.
    ///
    /// The builder is not modified; compiling twice yields the same result.
    pub fn compile(&self) -> QbResult<CompiledStatement> {
        assemble(&self.model, &self.options)
    }

    /// Compile and return only the SQL text (for debugging).
    pub fn to_sql(&self) -> QbResult<String> {
        Ok(self.compile()?.into_parts().0)
    }
}
