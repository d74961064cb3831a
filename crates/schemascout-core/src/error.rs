//! Error types for connection and introspection.
//!
//! `UnknownEngine` and `Connect` are always fatal to a run. `Query` is fatal
//! when raised while enumerating schemas, tables or views, and recoverable
//! when raised for a single table's columns or a single view's definition;
//! the collector makes that call at the catch site, converting recoverable
//! failures into counters and log entries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntrospectError {
    #[error("unrecognized engine type '{0}'")]
    UnknownEngine(String),

    #[error("connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("introspection query failed: {0}")]
    Query(#[source] sqlx::Error),
}
