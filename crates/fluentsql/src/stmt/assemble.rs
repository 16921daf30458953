//! Per-kind section ordering and final text assembly.

use crate::config::CompileOptions;
use crate::error::{QbError, QbResult};
use crate::stmt::binder::ParamBinder;
use crate::stmt::clause::ClauseCompiler;
use crate::stmt::compiled::CompiledStatement;
use crate::stmt::model::{StatementKind, StatementModel};

/// Compile a statement model. Pure apart from the binder's per-call counters.
pub(crate) fn assemble(
    model: &StatementModel,
    options: &CompileOptions,
) -> QbResult<CompiledStatement> {
    let result = assemble_inner(model, options);
    match &result {
        Ok(compiled) => tracing::debug!(
            target: "fluentsql.sql",
            kind = ?model.kind,
            param_count = compiled.params().len(),
            sql = %options.truncate_for_log(compiled.sql()),
        ),
        Err(err) => tracing::debug!(
            target: "fluentsql.sql",
            kind = ?model.kind,
            error = %err,
            "compile failed"
        ),
    }
    result
}

fn assemble_inner(model: &StatementModel, options: &CompileOptions) -> QbResult<CompiledStatement> {
    if let Some(err) = &model.build_error {
        return Err(QbError::Configuration(err.clone()));
    }
    options.validate()?;
    if !model.table.is_valid() {
        return Err(QbError::configuration("table name cannot be empty"));
    }
    let kind = model
        .kind
        .ok_or_else(|| QbError::configuration("no statement kind configured"))?;
    check_column_names(model)?;
    check_sections(model, kind)?;

    let mut binder = ParamBinder::new(options);
    let mut sql = {
        let mut cc = ClauseCompiler::new(&mut binder, options);
        match kind {
            StatementKind::Select => build_select(model, &mut cc)?,
            StatementKind::Insert => build_insert(model, &mut cc)?,
            StatementKind::Update => build_update(model, &mut cc)?,
            StatementKind::Delete => build_delete(model, &mut cc)?,
        }
    };

    sql.push(';');

    Ok(CompiledStatement::new(sql, binder.into_bindings()))
}

fn check_column_names(model: &StatementModel) -> QbResult<()> {
    let blank = |c: &str| c.trim().is_empty();
    if model.conditions.iter().any(|c| blank(&c.column)) {
        return Err(QbError::configuration("condition column name cannot be empty"));
    }
    if model.assignments.iter().any(|a| blank(&a.column)) {
        return Err(QbError::configuration("assigned column name cannot be empty"));
    }
    if model
        .joins
        .iter()
        .any(|j| !j.table.is_valid() || blank(&j.source_column) || blank(&j.join_column))
    {
        return Err(QbError::configuration("join table and columns cannot be empty"));
    }
    Ok(())
}

/// Sections a kind does not render must stay empty.
fn check_sections(model: &StatementModel, kind: StatementKind) -> QbResult<()> {
    let mut present = Vec::new();
    if kind == StatementKind::Insert && !model.conditions.is_empty() {
        present.push("WHERE");
    }
    if kind != StatementKind::Select {
        if !model.joins.is_empty() {
            present.push("JOIN");
        }
        if !model.group_by.is_empty() {
            present.push("GROUP BY");
        }
        if !model.order_by.is_empty() {
            present.push("ORDER BY");
        }
    }
    if present.is_empty() {
        Ok(())
    } else {
        Err(QbError::configuration(format!(
            "{kind} does not support {}",
            present.join(", ")
        )))
    }
}

fn build_select(model: &StatementModel, cc: &mut ClauseCompiler<'_, '_>) -> QbResult<String> {
    if model.select_columns.is_empty() {
        return Err(QbError::configuration(
            "SELECT requires at least one selected column",
        ));
    }
    if let Some(bad) = model.select_columns.iter().find(|c| !c.is_valid()) {
        return Err(QbError::configuration(format!(
            "selected column name cannot be empty (alias: {:?})",
            bad.alias()
        )));
    }

    let columns = model
        .select_columns
        .iter()
        .map(|c| c.declaration())
        .collect::<Vec<_>>()
        .join(",");
    let mut sql = format!("SELECT {} FROM {}", columns, model.table.declaration());

    for join in &model.joins {
        sql.push_str(&format!(
            " {} {} ON {}.{} = {}.{}",
            join.kind,
            join.table.declaration(),
            model.table.reference(),
            join.source_column,
            join.table.reference(),
            join.join_column
        ));
    }

    push_where(&mut sql, model, cc)?;

    if !model.group_by.is_empty() {
        sql.push_str(" GROUP BY ");
        sql.push_str(&model.group_by.join(", "));
    }

    if !model.order_by.is_empty() {
        sql.push_str(" ORDER BY ");
        sql.push_str(
            &model
                .order_by
                .iter()
                .map(|o| o.to_sql())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    Ok(sql)
}

fn build_insert(model: &StatementModel, cc: &mut ClauseCompiler<'_, '_>) -> QbResult<String> {
    if model.assignments.is_empty() {
        return Err(QbError::configuration("INSERT requires at least one value"));
    }

    let columns = model
        .assignments
        .iter()
        .map(|a| a.column.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let mut values = Vec::with_capacity(model.assignments.len());
    for a in &model.assignments {
        a.check_arity()?;
        values.push(cc.operand(&a.column, &a.operands[0])?);
    }

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        model.table.name(),
        columns,
        values.join(",")
    ))
}

fn build_update(model: &StatementModel, cc: &mut ClauseCompiler<'_, '_>) -> QbResult<String> {
    if model.assignments.is_empty() {
        return Err(QbError::configuration(
            "UPDATE requires at least one SET value",
        ));
    }

    let mut sql = format!("UPDATE {} SET ", model.table.name());
    sql.push_str(&cc.compile_list(&model.assignments)?);
    push_where(&mut sql, model, cc)?;
    Ok(sql)
}

fn build_delete(model: &StatementModel, cc: &mut ClauseCompiler<'_, '_>) -> QbResult<String> {
    if model.conditions.is_empty() && !model.delete_all {
        return Err(QbError::configuration(
            "DELETE without conditions is refused; use delete_all() to remove every row",
        ));
    }

    let mut sql = format!("DELETE FROM {}", model.table.name());
    push_where(&mut sql, model, cc)?;
    Ok(sql)
}

fn push_where(
    sql: &mut String,
    model: &StatementModel,
    cc: &mut ClauseCompiler<'_, '_>,
) -> QbResult<()> {
    if model.conditions.is_empty() {
        return Ok(());
    }
    sql.push_str(" WHERE ");
    sql.push_str(&cc.compile_list(&model.conditions)?);
    Ok(())
}
