//! PostgreSQL gateway for campus-chat.
//!
//! This crate owns the single database connection: it builds the connection
//! URL from configuration, renders the schedule schema as prompt text, and
//! executes the one read query each question produces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod gateway;
mod schema_description;

pub use connection::{DatabaseConfig, establish_connection};
pub use gateway::ScheduleDb;
pub use schema_description::{ColumnInfo, TableSchema};

use campus_chat_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = std::result::Result<T, DatabaseError>;
