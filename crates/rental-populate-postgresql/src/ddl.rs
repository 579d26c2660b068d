//! PostgreSQL statement generation for the rental tables.

use rental_populate::schema::{ColumnType, TableDefinition, ID_COLUMN};

/// PostgreSQL DDL/DML generator.
pub struct PostgreSQLDdl;

/// Quote an identifier, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn qualified(namespace: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(namespace), quote_ident(table))
}

impl PostgreSQLDdl {
    pub fn to_ddl(&self, namespace: &str, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::VarChar(length) => format!("VARCHAR({length})"),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::Timestamp => "TIMESTAMP".to_string(),
            ColumnType::Reference(parent) => format!(
                "BIGINT REFERENCES {}({})",
                qualified(namespace, parent),
                quote_ident(ID_COLUMN)
            ),
        }
    }

    pub fn create_schema(&self, namespace: &str) -> String {
        format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(namespace))
    }

    pub fn create_table(&self, namespace: &str, table: &TableDefinition) -> String {
        let mut column_defs = vec![format!("  {} BIGSERIAL PRIMARY KEY", quote_ident(ID_COLUMN))];
        column_defs.extend(table.columns.iter().map(|c| {
            format!(
                "  {} {}",
                quote_ident(c.name),
                self.to_ddl(namespace, &c.column_type)
            )
        }));

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            qualified(namespace, table.name),
            column_defs.join(",\n")
        )
    }

    pub fn insert_returning_id(&self, namespace: &str, table: &TableDefinition) -> String {
        let columns: Vec<String> = table.columns.iter().map(|c| quote_ident(c.name)).collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            qualified(namespace, table.name),
            columns.join(", "),
            placeholders.join(", "),
            quote_ident(ID_COLUMN)
        )
    }
}
