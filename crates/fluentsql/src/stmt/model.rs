//! The mutable statement description accumulated by the builder.

use crate::name::AliasableName;
use crate::stmt::entry::{ConditionEntry, JoinDescriptor, OrderEntry};
use std::fmt;

/// Statement kind, fixed by the first configuration family used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Select => write!(f, "SELECT"),
            StatementKind::Insert => write!(f, "INSERT"),
            StatementKind::Update => write!(f, "UPDATE"),
            StatementKind::Delete => write!(f, "DELETE"),
        }
    }
}

/// Everything a compile call needs. Lists are append-only.
#[derive(Debug, Clone)]
pub struct StatementModel {
    pub kind: Option<StatementKind>,
    pub table: AliasableName,
    pub select_columns: Vec<AliasableName>,
    pub conditions: Vec<ConditionEntry>,
    pub assignments: Vec<ConditionEntry>,
    pub joins: Vec<JoinDescriptor>,
    pub group_by: Vec<String>,
    pub order_by: Vec<OrderEntry>,
    /// Set by an explicit `delete_all()`; lets DELETE compile without conditions.
    pub delete_all: bool,
    /// First configuration misuse, reported by `compile`.
    pub build_error: Option<String>,
}

impl StatementModel {
    pub fn new(table: AliasableName) -> Self {
        Self {
            kind: None,
            table,
            select_columns: Vec::new(),
            conditions: Vec::new(),
            assignments: Vec::new(),
            joins: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            delete_all: false,
            build_error: None,
        }
    }

    /// Fix the statement kind. A different kind than the one already chosen is
    /// recorded as a configuration error and the original kind is kept.
    pub(crate) fn set_kind(&mut self, kind: StatementKind) {
        match self.kind {
            None => self.kind = Some(kind),
            Some(current) if current == kind => {}
            Some(current) => self.record_error(format!(
                "cannot configure {kind} on a builder already configured for {current}"
            )),
        }
    }

    /// Keep the first error only.
    pub(crate) fn record_error(&mut self, message: impl Into<String>) {
        if self.build_error.is_none() {
            self.build_error = Some(message.into());
        }
    }
}
