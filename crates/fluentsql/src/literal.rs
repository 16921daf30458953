//! SQL literal escaping.
//!
//! Only used for operands the compiler inlines (IN lists, BETWEEN bounds and INSERT
//! values under [`BindingMode::Inline`](crate::config::BindingMode)). Text-like values
//! are wrapped in single quotes with embedded quotes doubled; numbers and booleans use
//! their canonical textual form.

use crate::error::{QbError, QbResult};
use crate::value::Value;

/// Render a value as an escaped SQL literal.
///
/// Fails when the value cannot be represented inside a string literal at all
/// (text containing a NUL character).
pub fn escape_literal(value: &Value) -> QbResult<String> {
    let literal = match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Int(v) => v.to_string(),
        Value::Float(v) if v.is_nan() => "'NaN'".to_string(),
        Value::Float(v) if v.is_infinite() => {
            if v.is_sign_positive() {
                "'Infinity'".to_string()
            } else {
                "'-Infinity'".to_string()
            }
        }
        Value::Float(v) => v.to_string(),
        Value::Text(s) => quote(s)?,
        Value::Date(d) => quote(&d.format("%Y-%m-%d").to_string())?,
        Value::Timestamp(ts) => quote(&ts.to_rfc3339())?,
        Value::Uuid(u) => quote(&u.to_string())?,
        Value::Json(j) => quote(&j.to_string())?,
    };
    Ok(literal)
}

/// Wrap a string in single quotes, doubling any embedded quote.
pub fn quote(s: &str) -> QbResult<String> {
    if s.contains('\0') {
        return Err(QbError::invariant(
            "string literal cannot contain NUL character",
        ));
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    Ok(out)
}

/// Parse a single-quoted SQL string literal back into its content.
///
/// Inverse of [`quote`]: `unescape_literal(&quote(s)?)? == s`.
pub fn unescape_literal(literal: &str) -> QbResult<String> {
    let inner = literal
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or_else(|| QbError::InvalidLiteral(format!("not a quoted literal: {literal}")))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // Escaped quote: ''
            if chars.next() != Some('\'') {
                return Err(QbError::InvalidLiteral(format!(
                    "unescaped quote inside literal: {literal}"
                )));
            }
        }
        out.push(c);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_scalars() {
        assert_eq!(escape_literal(&Value::Int(5)).unwrap(), "5");
        assert_eq!(escape_literal(&Value::Int(-12)).unwrap(), "-12");
        assert_eq!(escape_literal(&Value::Float(2.5)).unwrap(), "2.5");
        assert_eq!(escape_literal(&Value::Bool(true)).unwrap(), "TRUE");
        assert_eq!(escape_literal(&Value::Null).unwrap(), "NULL");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(escape_literal(&Value::Float(f64::NAN)).unwrap(), "'NaN'");
        assert_eq!(
            escape_literal(&Value::Float(f64::NEG_INFINITY)).unwrap(),
            "'-Infinity'"
        );
    }

    #[test]
    fn test_text_is_quoted_and_escaped() {
        assert_eq!(escape_literal(&"Ann".into()).unwrap(), "'Ann'");
        assert_eq!(escape_literal(&"O'Reilly".into()).unwrap(), "'O''Reilly'");
        assert_eq!(
            escape_literal(&"x'); DROP TABLE users; --".into()).unwrap(),
            "'x''); DROP TABLE users; --'"
        );
    }

    #[test]
    fn test_temporal_and_json() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(escape_literal(&d.into()).unwrap(), "'2024-03-09'");

        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(
            escape_literal(&ts.into()).unwrap(),
            "'2024-03-09T12:00:00+00:00'"
        );

        let j = serde_json::json!({"name": "it's"});
        assert_eq!(escape_literal(&j.into()).unwrap(), r#"'{"name":"it''s"}'"#);
    }

    #[test]
    fn test_nul_rejected() {
        let err = escape_literal(&"a\0b".into()).unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_unescape_roundtrip() {
        for s in ["", "plain", "O'Reilly", "''", "'leading", "trailing'", "a''b'c"] {
            let quoted = quote(s).unwrap();
            assert_eq!(unescape_literal(&quoted).unwrap(), s);
        }
    }

    #[test]
    fn test_unescape_rejects_malformed() {
        assert!(unescape_literal("abc").is_err());
        assert!(unescape_literal("'").is_err());
        assert!(unescape_literal("'a'b'").is_err());
    }
}
