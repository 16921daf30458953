//! The immutable result of a compile call.

use crate::client::GenericClient;
use crate::error::{QbError, QbResult};
use crate::stmt::binder::Binding;
use crate::value::Value;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// Statement text plus its named parameter bindings, in bind order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStatement {
    sql: String,
    params: Vec<Binding>,
}

impl CompiledStatement {
    pub(crate) fn new(sql: String, params: Vec<Binding>) -> Self {
        Self { sql, params }
    }

    /// Statement text with named placeholders, terminated by `;`.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound parameters in the order they were allocated.
    pub fn params(&self) -> &[Binding] {
        &self.params
    }

    /// Look up the value bound to `placeholder`.
    pub fn param(&self, placeholder: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|b| b.placeholder == placeholder)
            .map(|b| &b.value)
    }

    /// `(placeholder, value)` pairs, convenient for executors with named parameters.
    pub fn named_params(&self) -> Vec<(&str, &Value)> {
        self.params
            .iter()
            .map(|b| (b.placeholder.as_str(), &b.value))
            .collect()
    }

    pub fn into_parts(self) -> (String, Vec<Binding>) {
        (self.sql, self.params)
    }

    /// Rewrite named placeholders into PostgreSQL positional form (`$1, $2, ...`).
    ///
    /// Placeholders are numbered in order of appearance; text inside single-quoted
    /// literals is left untouched. Every binding must appear exactly once.
    pub fn to_positional(&self) -> QbResult<(String, Vec<&Value>)> {
        // Longest first so `:a_p10` wins over `:a_p1`.
        let mut by_len: Vec<usize> = (0..self.params.len()).collect();
        by_len.sort_by_key(|&i| std::cmp::Reverse(self.params[i].placeholder.len()));

        let mut out = String::with_capacity(self.sql.len());
        let mut values = Vec::with_capacity(self.params.len());
        let mut used = vec![false; self.params.len()];
        let mut in_literal = false;
        let mut rest = self.sql.as_str();

        while let Some(c) = rest.chars().next() {
            if c == '\'' {
                in_literal = !in_literal;
            } else if !in_literal {
                let hit = by_len
                    .iter()
                    .copied()
                    .find(|&i| rest.starts_with(self.params[i].placeholder.as_str()));
                if let Some(i) = hit {
                    if used[i] {
                        return Err(QbError::invariant(format!(
                            "placeholder {} appears more than once",
                            self.params[i].placeholder
                        )));
                    }
                    used[i] = true;
                    values.push(&self.params[i].value);
                    out.push_str(&format!("${}", values.len()));
                    rest = &rest[self.params[i].placeholder.len()..];
                    continue;
                }
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }

        if let Some(i) = used.iter().position(|u| !u) {
            return Err(QbError::invariant(format!(
                "placeholder {} is bound but missing from the statement text",
                self.params[i].placeholder
            )));
        }
        Ok((out, values))
    }

    // ==================== Execution ====================

    /// Run the statement and return all rows.
    pub async fn query(&self, conn: &impl GenericClient) -> QbResult<Vec<Row>> {
        let (sql, values) = self.to_positional()?;
        let params = as_sql_params(&values);
        let rows = conn.query(&sql, &params).await?;
        tracing::debug!(target: "fluentsql.exec", rows = rows.len(), "query finished");
        Ok(rows)
    }

    /// Run the statement and return the first row, or [`QbError::NotFound`].
    pub async fn query_one(&self, conn: &impl GenericClient) -> QbResult<Row> {
        let (sql, values) = self.to_positional()?;
        let params = as_sql_params(&values);
        conn.query_one(&sql, &params).await
    }

    /// Run the statement and return the first row, if any.
    pub async fn query_opt(&self, conn: &impl GenericClient) -> QbResult<Option<Row>> {
        let (sql, values) = self.to_positional()?;
        let params = as_sql_params(&values);
        conn.query_opt(&sql, &params).await
    }

    /// Run the statement and return the affected row count.
    pub async fn execute(&self, conn: &impl GenericClient) -> QbResult<u64> {
        let (sql, values) = self.to_positional()?;
        let params = as_sql_params(&values);
        let affected = conn.execute(&sql, &params).await?;
        tracing::debug!(target: "fluentsql.exec", affected, "execute finished");
        Ok(affected)
    }
}

fn as_sql_params<'a>(values: &[&'a Value]) -> Vec<&'a (dyn ToSql + Sync)> {
    values.iter().map(|v| *v as &(dyn ToSql + Sync)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(placeholder: &str, value: Value) -> Binding {
        Binding {
            placeholder: placeholder.to_string(),
            value,
        }
    }

    #[test]
    fn test_to_positional_in_appearance_order() {
        let compiled = CompiledStatement::new(
            "UPDATE t SET a = :a_p0 WHERE b = :b_p0 AND a = :a_p1;".to_string(),
            vec![
                binding(":a_p0", Value::Int(1)),
                binding(":b_p0", Value::Int(2)),
                binding(":a_p1", Value::Int(3)),
            ],
        );
        let (sql, values) = compiled.to_positional().unwrap();
        assert_eq!(sql, "UPDATE t SET a = $1 WHERE b = $2 AND a = $3;");
        assert_eq!(values, vec![&Value::Int(1), &Value::Int(2), &Value::Int(3)]);
    }

    #[test]
    fn test_to_positional_prefers_longest_placeholder() {
        let mut params: Vec<Binding> = (0..11)
            .map(|i| binding(&format!(":a_p{i}"), Value::Int(i)))
            .collect();
        params.swap(1, 10);
        let sql = params
            .iter()
            .map(|b| format!("a = {}", b.placeholder))
            .collect::<Vec<_>>()
            .join(" OR ");
        let compiled = CompiledStatement::new(format!("SELECT x FROM t WHERE {sql};"), params);

        let (sql, values) = compiled.to_positional().unwrap();
        assert!(sql.starts_with("SELECT x FROM t WHERE a = $1 OR a = $2 OR a = $3"));
        assert_eq!(values[1], &Value::Int(10));
        assert_eq!(values.len(), 11);
    }

    #[test]
    fn test_to_positional_skips_literals_and_casts() {
        let compiled = CompiledStatement::new(
            "SELECT x::text FROM t WHERE y IN (':a_p0','it''s') AND a = :a_p0;".to_string(),
            vec![binding(":a_p0", Value::Int(7))],
        );
        let (sql, values) = compiled.to_positional().unwrap();
        assert_eq!(
            sql,
            "SELECT x::text FROM t WHERE y IN (':a_p0','it''s') AND a = $1;"
        );
        assert_eq!(values, vec![&Value::Int(7)]);
    }

    #[test]
    fn test_to_positional_missing_placeholder() {
        let compiled = CompiledStatement::new(
            "SELECT x FROM t;".to_string(),
            vec![binding(":a_p0", Value::Int(7))],
        );
        let err = compiled.to_positional().unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_param_lookup() {
        let compiled = CompiledStatement::new(
            "SELECT x FROM t WHERE age = :age_p0;".to_string(),
            vec![binding(":age_p0", Value::Int(30))],
        );
        assert_eq!(compiled.param(":age_p0"), Some(&Value::Int(30)));
        assert_eq!(compiled.param(":age_p1"), None);
        assert_eq!(compiled.named_params(), vec![(":age_p0", &Value::Int(30))]);
    }
}
