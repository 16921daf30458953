//! # fluentsql
//!
//! A fluent SELECT/INSERT/UPDATE/DELETE builder that compiles to SQL text with
//! named placeholders plus the matching parameter bindings.
//!
//! ## Features
//!
//! - **Deterministic output**: fixed clause order per statement kind, one `;` terminator
//! - **Named placeholders**: `:column_p0`, `:column_p1`, ... unique within a statement
//! - **Escaped literals**: IN/BETWEEN/INSERT operands are quoted and escaped, or bound
//!   with [`BindingMode::BindAll`]
//! - **Safe defaults**: DELETE requires WHERE (or an explicit `delete_all()`), UPDATE
//!   requires SET
//! - **Bring your own executor**: run compiled statements through any [`GenericClient`]
//!
//! ## Statement builder
//!
//! ```
//! use fluentsql::stmt;
//!
//! let compiled = stmt::table("users")
//!     .select_cols(&["id", "name"])
//!     .where_eq("age", 30)
//!     .compile()?;
//!
//! assert_eq!(compiled.sql(), "SELECT id,name FROM users WHERE age = :age_p0;");
//!
//! // Against PostgreSQL (named placeholders are rewritten to $1, $2, ...)
//! # async fn run(
//! #     client: &tokio_postgres::Client,
//! #     compiled: fluentsql::CompiledStatement,
//! # ) -> fluentsql::QbResult<()> {
//! let rows = compiled.query(client).await?;
//! # let _ = rows;
//! # Ok(())
//! # }
//! # Ok::<(), fluentsql::QbError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod literal;
pub mod name;
pub mod prelude;
pub mod stmt;
pub mod value;

pub use client::GenericClient;
pub use config::{BindingMode, CompileOptions};
pub use error::{QbError, QbResult};
pub use literal::{escape_literal, unescape_literal};
pub use name::AliasableName;
pub use stmt::{
    Binding, CompiledStatement, ConditionEntry, Connector, EvalOperator, JoinDescriptor, JoinKind,
    OrderDirection, OrderEntry, StatementBuilder, StatementKind, StatementModel, table, table_as,
};
pub use value::Value;
