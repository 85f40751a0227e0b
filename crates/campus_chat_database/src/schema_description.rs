//! Schema reflection for prompt construction.
//!
//! Queries `information_schema` to render the public tables as a textual
//! descriptor the query model can follow. The descriptor is computed once per
//! process and embedded in every query-synthesis prompt.

use crate::DatabaseResult;
use campus_chat_error::{DatabaseError, DatabaseErrorKind};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use tracing::instrument;

/// Represents a database column's structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, QueryableByName)]
pub struct ColumnInfo {
    /// Column name
    #[diesel(sql_type = Text)]
    pub name: String,
    /// PostgreSQL data type
    #[diesel(sql_type = Text)]
    pub data_type: String,
    /// Whether the column is nullable
    #[diesel(sql_type = Text)]
    pub is_nullable: String,
}

/// Represents a table's schema structure
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Table name
    pub table_name: String,
    /// Columns in the table
    pub columns: Vec<ColumnInfo>,
}

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    table_name: String,
}

/// List the public tables of the schedule database.
#[instrument(name = "schema.list_tables", skip(conn))]
pub(crate) fn list_tables(conn: &mut PgConnection) -> DatabaseResult<Vec<String>> {
    let query = r#"
        SELECT table_name
        FROM information_schema.tables
        WHERE table_schema = 'public'
          AND table_type = 'BASE TABLE'
        ORDER BY table_name
    "#;

    let rows: Vec<TableName> = diesel::sql_query(query).load(conn)?;

    Ok(rows.into_iter().map(|r| r.table_name).collect())
}

/// Query information_schema to get column information for a table.
#[instrument(name = "schema.reflect_table", skip(conn), fields(table = %table_name))]
pub(crate) fn reflect_table_schema(
    conn: &mut PgConnection,
    table_name: &str,
) -> DatabaseResult<TableSchema> {
    let query = r#"
        SELECT
            column_name as name,
            data_type,
            is_nullable
        FROM information_schema.columns
        WHERE table_schema = 'public'
          AND table_name = $1
        ORDER BY ordinal_position
    "#;

    let columns: Vec<ColumnInfo> = diesel::sql_query(query)
        .bind::<Text, _>(table_name)
        .load(conn)
        .map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Query(format!(
                "Failed to query schema for table '{}': {}",
                table_name, e
            )))
        })?;

    if columns.is_empty() {
        return Err(DatabaseError::new(DatabaseErrorKind::TableNotFound(
            table_name.to_string(),
        )));
    }

    Ok(TableSchema {
        table_name: table_name.to_string(),
        columns,
    })
}

/// Render table schemas as CREATE TABLE text for prompt embedding.
pub(crate) fn render_descriptor(schemas: &[TableSchema]) -> String {
    let mut out = String::new();

    for schema in schemas {
        out.push_str(&format!("CREATE TABLE {} (\n", schema.table_name));
        let column_defs: Vec<String> = schema
            .columns
            .iter()
            .map(|col| {
                let mut def = format!("    {} {}", col.name, col.data_type.to_uppercase());
                if col.is_nullable != "YES" {
                    def.push_str(" NOT NULL");
                }
                def
            })
            .collect();
        out.push_str(&column_defs.join(",\n"));
        out.push_str("\n);\n\n");
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_descriptor() {
        let schemas = vec![TableSchema {
            table_name: "rooms_schedule".to_string(),
            columns: vec![
                ColumnInfo {
                    name: "room_no".to_string(),
                    data_type: "text".to_string(),
                    is_nullable: "NO".to_string(),
                },
                ColumnInfo {
                    name: "subject_name".to_string(),
                    data_type: "text".to_string(),
                    is_nullable: "YES".to_string(),
                },
            ],
        }];

        let descriptor = render_descriptor(&schemas);
        assert!(descriptor.contains("CREATE TABLE rooms_schedule"));
        assert!(descriptor.contains("room_no TEXT NOT NULL"));
        assert!(descriptor.contains("subject_name TEXT"));
        assert!(!descriptor.contains("subject_name TEXT NOT NULL"));
    }
}
