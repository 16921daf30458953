//! Convenient imports for typical `fluentsql` usage.
//!
//! ```
//! use fluentsql::prelude::*;
//!
//! let compiled: CompiledStatement = table("users").select("id").compile()?;
//! assert!(compiled.params().is_empty());
//! # Ok::<(), QbError>(())
//! ```

pub use crate::{
    BindingMode, CompileOptions, CompiledStatement, GenericClient, OrderDirection, QbError,
    QbResult, StatementBuilder, Value, table, table_as,
};
