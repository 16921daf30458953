//! Statement builder and compilation pipeline.
//!
//! A [`StatementBuilder`] accumulates a [`StatementModel`]; `compile()` walks the
//! model in a fixed section order per statement kind and returns a
//! [`CompiledStatement`] holding SQL with named placeholders plus the bound values.
//!
//! # Usage
//!
//! ```
//! use fluentsql::stmt;
//!
//! let compiled = stmt::table("users")
//!     .select_cols(&["id", "name"])
//!     .where_eq("age", 30)
//!     .compile()?;
//! assert_eq!(compiled.sql(), "SELECT id,name FROM users WHERE age = :age_p0;");
//!
//! let compiled = stmt::table("users")
//!     .insert(&["name", "age"], vec!["Ann".into(), 5.into()])
//!     .compile()?;
//! assert_eq!(compiled.sql(), "INSERT INTO users (name,age) VALUES ('Ann',5);");
//!
//! # async fn run(client: &tokio_postgres::Client, user_id: i64) -> fluentsql::QbResult<()> {
//! // UPDATE users SET status = :status_p0 WHERE id = :id_p0;
//! stmt::table("users")
//!     .update("status", "inactive")
//!     .where_eq("id", user_id)
//!     .compile()?
//!     .execute(client)
//!     .await?;
//! # Ok(())
//! # }
//!
//! let compiled = stmt::table("users").delete().where_eq("id", 7).compile()?;
//! assert_eq!(compiled.sql(), "DELETE FROM users WHERE id = :id_p0;");
//! # Ok::<(), fluentsql::QbError>(())
//! ```

mod assemble;
mod binder;
mod builder;
mod clause;
mod compiled;
mod entry;
mod model;

pub use binder::Binding;
pub use builder::StatementBuilder;
pub use compiled::CompiledStatement;
pub use entry::{
    ConditionEntry, Connector, EvalOperator, JoinDescriptor, JoinKind, OrderDirection, OrderEntry,
};
pub use model::{StatementKind, StatementModel};

/// Create a statement builder for the given table.
///
/// # Example
/// ```
/// let sql = fluentsql::stmt::table("users").select("id").to_sql()?;
/// assert_eq!(sql, "SELECT id FROM users;");
/// # Ok::<(), fluentsql::QbError>(())
/// ```
pub fn table(name: &str) -> StatementBuilder {
    StatementBuilder::new(name)
}

/// Create a statement builder for an aliased table.
///
/// # Example
/// ```
/// let sql = fluentsql::stmt::table_as("users", "u").select("u.id").to_sql()?;
/// assert_eq!(sql, "SELECT u.id FROM users AS u;");
/// # Ok::<(), fluentsql::QbError>(())
/// ```
pub fn table_as(name: &str, alias: &str) -> StatementBuilder {
    StatementBuilder::with_alias(name, alias)
}
