//! Named placeholder allocation.

use crate::config::CompileOptions;
use crate::value::Value;
use std::collections::HashMap;

/// A bound value and the placeholder it was assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub placeholder: String,
    pub value: Value,
}

/// Allocates collision-free placeholders for one compile call.
///
/// Placeholders are `<prefix><column><suffix><n>`, e.g. `:age_p0`, where `n` counts
/// earlier binds of the same normalized column name.
#[derive(Debug)]
pub(crate) struct ParamBinder<'a> {
    options: &'a CompileOptions,
    counters: HashMap<String, usize>,
    bindings: Vec<Binding>,
}

impl<'a> ParamBinder<'a> {
    pub(crate) fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            counters: HashMap::new(),
            bindings: Vec::new(),
        }
    }

    /// Record `value` and return the placeholder to put in the statement text.
    pub(crate) fn bind(&mut self, column: &str, value: Value) -> String {
        let base = normalize(column);
        let counter = self.counters.entry(base.clone()).or_insert(0);
        let placeholder = format!(
            "{}{}{}{}",
            self.options.placeholder_prefix, base, self.options.param_suffix, counter
        );
        *counter += 1;

        tracing::trace!(target: "fluentsql.bind", placeholder = %placeholder, value_type = value.type_name());
        self.bindings.push(Binding {
            placeholder: placeholder.clone(),
            value,
        });
        placeholder
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    pub(crate) fn into_bindings(self) -> Vec<Binding> {
        self.bindings
    }
}

/// Keep `[A-Za-z0-9_]`, drop everything else.
fn normalize(column: &str) -> String {
    let base: String = column
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if base.is_empty() {
        "param".to_string()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_basic() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        assert_eq!(binder.bind("age", Value::Int(30)), ":age_p0");
        assert_eq!(binder.len(), 1);
    }

    #[test]
    fn test_repeated_column_gets_distinct_placeholders() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        assert_eq!(binder.bind("age", Value::Int(1)), ":age_p0");
        assert_eq!(binder.bind("name", Value::from("x")), ":name_p0");
        assert_eq!(binder.bind("age", Value::Int(2)), ":age_p1");

        let bindings = binder.into_bindings();
        let names: Vec<_> = bindings.iter().map(|b| b.placeholder.as_str()).collect();
        assert_eq!(names, vec![":age_p0", ":name_p0", ":age_p1"]);
        assert_eq!(bindings[2].value, Value::Int(2));
    }

    #[test]
    fn test_normalization_collisions() {
        let opts = CompileOptions::new();
        let mut binder = ParamBinder::new(&opts);
        assert_eq!(binder.bind("u.age", Value::Int(1)), ":uage_p0");
        assert_eq!(binder.bind("uage", Value::Int(2)), ":uage_p1");
        assert_eq!(binder.bind("COUNT(*)", Value::Int(3)), ":COUNT_p0");
        assert_eq!(binder.bind("*", Value::Int(4)), ":param_p0");
    }

    #[test]
    fn test_custom_prefix_and_suffix() {
        let opts = CompileOptions::new()
            .with_placeholder_prefix('@')
            .with_param_suffix("_col");
        let mut binder = ParamBinder::new(&opts);
        assert_eq!(binder.bind("created_at", Value::Null), "@created_at_col0");
    }
}
