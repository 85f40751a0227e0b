//! The schedule database gateway.

use crate::schema_description::{list_tables, reflect_table_schema, render_descriptor};
use crate::DatabaseResult;
use campus_chat_error::{CampusChatResult, DatabaseError, DatabaseErrorKind};
use campus_chat_interface::ScheduleGateway;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use serde_json::Value as JsonValue;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Gateway over the one process-wide schedule database connection.
///
/// The connection is wrapped in a mutex because diesel requires `&mut` access;
/// there is no contention, the pipeline processes one question at a time.
#[derive(Clone)]
pub struct ScheduleDb {
    connection: Arc<Mutex<PgConnection>>,
}

impl ScheduleDb {
    /// Wrap an established connection.
    pub fn new(connection: PgConnection) -> Self {
        Self {
            connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[instrument(name = "gateway.describe_schema", skip(self))]
    fn describe_schema_internal(&self) -> DatabaseResult<String> {
        let mut conn = self.lock_connection()?;

        let tables = list_tables(&mut conn)?;
        let mut schemas = Vec::with_capacity(tables.len());
        for table in &tables {
            schemas.push(reflect_table_schema(&mut conn, table)?);
        }

        debug!(tables = schemas.len(), "Reflected schedule schema");
        Ok(render_descriptor(&schemas))
    }

    #[instrument(name = "gateway.execute", skip(self, sql))]
    fn execute_internal(&self, sql: &str) -> DatabaseResult<String> {
        let statement = single_statement(sql)?;
        let mut conn = self.lock_connection()?;

        debug!(query = %statement, "Executing read query");

        // Postgres renders each row as JSON so arbitrary SELECT shapes come
        // back through one statically-typed column.
        let json_query = format!("SELECT row_to_json(t) as json FROM ({}) t", statement);

        #[derive(QueryableByName)]
        struct JsonRow {
            #[diesel(sql_type = diesel::sql_types::Json)]
            json: JsonValue,
        }

        let rows: Vec<JsonRow> = diesel::sql_query(&json_query).load(&mut *conn)?;

        let values: Vec<JsonValue> = rows.into_iter().map(|row| row.json).collect();
        debug!(count = values.len(), "Retrieved rows");

        Ok(serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string()))
    }

    fn lock_connection(&self) -> DatabaseResult<std::sync::MutexGuard<'_, PgConnection>> {
        self.connection
            .lock()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))
    }
}

impl ScheduleGateway for ScheduleDb {
    fn describe_schema(&self) -> CampusChatResult<String> {
        self.describe_schema_internal().map_err(Into::into)
    }

    fn execute(&self, sql: &str) -> CampusChatResult<String> {
        self.execute_internal(sql).map_err(Into::into)
    }
}

/// Enforce the one-statement-per-question contract.
///
/// A single trailing semicolon is tolerated (models often emit one); anything
/// that still contains a separator after stripping it is rejected. Semicolons
/// inside string literals and quoted identifiers are not separators.
fn single_statement(sql: &str) -> DatabaseResult<&str> {
    let trimmed = sql.trim().trim_end_matches(';').trim_end();

    if trimmed.is_empty() {
        return Err(DatabaseError::new(DatabaseErrorKind::InvalidQuery(
            "empty query text".to_string(),
        )));
    }

    if contains_separator(trimmed) {
        return Err(DatabaseError::new(DatabaseErrorKind::InvalidQuery(
            "multiple SQL statements are not allowed".to_string(),
        )));
    }

    Ok(trimmed)
}

/// True if the text holds a `;` outside single-quoted literals and
/// double-quoted identifiers. Doubled quotes inside a quoted region toggle
/// twice, which lands back in the correct state.
fn contains_separator(sql: &str) -> bool {
    let mut in_literal = false;
    let mut in_identifier = false;

    for ch in sql.chars() {
        match ch {
            '\'' if !in_identifier => in_literal = !in_literal,
            '"' if !in_literal => in_identifier = !in_identifier,
            ';' if !in_literal && !in_identifier => return true,
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_statement_strips_trailing_semicolon() {
        let sql = "SELECT * FROM rooms_schedule;";
        assert_eq!(single_statement(sql).unwrap(), "SELECT * FROM rooms_schedule");
    }

    #[test]
    fn test_single_statement_rejects_multiple() {
        let sql = "SELECT 1; DROP TABLE rooms_schedule";
        assert!(single_statement(sql).is_err());
    }

    #[test]
    fn test_single_statement_rejects_empty() {
        assert!(single_statement("  ;  ").is_err());
    }

    #[test]
    fn test_single_statement_allows_semicolon_in_literal() {
        let sql = "SELECT room_no FROM rooms_schedule WHERE note = 'a;b'";
        assert_eq!(single_statement(sql).unwrap(), sql);
    }

    #[test]
    fn test_single_statement_allows_semicolon_in_quoted_identifier() {
        let sql = r#"SELECT "odd;name" FROM rooms_schedule"#;
        assert_eq!(single_statement(sql).unwrap(), sql);
    }

    #[test]
    fn test_single_statement_rejects_separator_after_literal() {
        assert!(single_statement("SELECT 'a;b'; DROP TABLE rooms_schedule").is_err());
    }
}
