//! Table and column names that may carry an alias.

use std::fmt;

/// A name/alias pair used for tables and selected columns.
///
/// - Reference form ([`AliasableName::reference`]): the alias when set, else the name.
///   Used wherever the object is referred to, such as join `ON` clauses.
/// - Declaration form ([`AliasableName::declaration`]): `name AS alias`, or just the
///   name. Used in the select list and in `FROM`/`JOIN` targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasableName {
    name: String,
    alias: Option<String>,
}

impl AliasableName {
    /// Create a name without alias.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Create a name with an alias. An empty alias is treated as absent.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        Self {
            name: name.into(),
            alias: (!alias.is_empty()).then_some(alias),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The alias if present, else the base name.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// `name AS alias` when aliased, else the base name.
    pub fn declaration(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} AS {}", self.name, alias),
            None => self.name.clone(),
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl fmt::Display for AliasableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reference())
    }
}

impl From<&str> for AliasableName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AliasableName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<(&str, &str)> for AliasableName {
    fn from((name, alias): (&str, &str)) -> Self {
        Self::aliased(name, alias)
    }
}
