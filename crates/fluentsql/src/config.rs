//! Compile-time options for statement rendering.

use crate::error::{QbError, QbResult};

/// How operands of multi-value operators and INSERT values reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingMode {
    /// IN lists, BETWEEN bounds and INSERT values are embedded as escaped literals.
    /// Scalar comparisons and UPDATE assignments are always bound.
    #[default]
    Inline,
    /// Every operand is bound as a named parameter.
    BindAll,
}

/// Options applied when a builder compiles its statement.
///
/// ```
/// use fluentsql::{BindingMode, CompileOptions};
///
/// let opts = CompileOptions::new()
///     .with_binding(BindingMode::BindAll)
///     .with_placeholder_prefix('@');
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Literal-vs-bound policy. Default is [`BindingMode::Inline`].
    pub binding: BindingMode,
    /// Character that opens every placeholder. Default is `:`.
    pub placeholder_prefix: char,
    /// Text placed between the normalized column name and the occurrence counter.
    /// Default is `_p`. Must be non-empty identifier characters ending in a non-digit.
    pub param_suffix: String,
    /// Truncate SQL in debug logs (in chars). `None` means no truncation.
    pub max_logged_sql: Option<usize>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            binding: BindingMode::Inline,
            placeholder_prefix: ':',
            param_suffix: "_p".to_string(),
            max_logged_sql: Some(200),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the binding mode.
    pub fn with_binding(mut self, binding: BindingMode) -> Self {
        self.binding = binding;
        self
    }

    /// Set the placeholder prefix character.
    pub fn with_placeholder_prefix(mut self, prefix: char) -> Self {
        self.placeholder_prefix = prefix;
        self
    }

    /// Set the suffix appended to placeholder names before the counter.
    pub fn with_param_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.param_suffix = suffix.into();
        self
    }

    /// Set maximum SQL length written to debug logs.
    pub fn with_max_logged_sql(mut self, len: usize) -> Self {
        self.max_logged_sql = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql = None;
        self
    }

    /// Check that every placeholder these options produce is unambiguous.
    ///
    /// The counter is the trailing digit run of a placeholder, so the suffix has to
    /// end in a non-digit. The prefix must not be mistaken for part of an identifier
    /// or a literal.
    pub fn validate(&self) -> QbResult<()> {
        let suffix = &self.param_suffix;
        if suffix.is_empty() {
            return Err(QbError::configuration("param_suffix cannot be empty"));
        }
        if !suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(QbError::configuration(format!(
                "param_suffix {suffix:?} may only contain [A-Za-z0-9_]"
            )));
        }
        if suffix.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(QbError::configuration(format!(
                "param_suffix {suffix:?} cannot end in a digit"
            )));
        }

        let prefix = self.placeholder_prefix;
        if prefix.is_alphanumeric()
            || prefix.is_whitespace()
            || prefix == '_'
            || prefix == '\''
        {
            return Err(QbError::configuration(format!(
                "placeholder_prefix {prefix:?} is not a valid placeholder marker"
            )));
        }
        Ok(())
    }

    /// Whether multi-value operands and INSERT values must be bound.
    pub fn binds_everything(&self) -> bool {
        self.binding == BindingMode::BindAll
    }

    pub(crate) fn truncate_for_log<'a>(&self, sql: &'a str) -> std::borrow::Cow<'a, str> {
        match self.max_logged_sql {
            Some(max) if sql.chars().count() > max => {
                let cut: String = sql.chars().take(max).collect();
                std::borrow::Cow::Owned(format!("{cut}..."))
            }
            _ => std::borrow::Cow::Borrowed(sql),
        }
    }
}
