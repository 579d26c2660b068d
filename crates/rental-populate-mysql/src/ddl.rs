//! MySQL statement generation for the rental tables.

use rental_populate::schema::{ColumnType, TableDefinition, ID_COLUMN};

/// MySQL DDL/DML generator.
pub struct MySQLDdl;

/// Quote an identifier with backticks, doubling embedded backticks.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn qualified(namespace: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(namespace), quote_ident(table))
}

impl MySQLDdl {
    pub fn to_ddl(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::VarChar(length) => format!("VARCHAR({length})"),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Integer => "INT".to_string(),
            ColumnType::Timestamp => "TIMESTAMP NULL".to_string(),
            ColumnType::Reference(_) => "BIGINT".to_string(),
        }
    }

    pub fn create_database(&self, namespace: &str) -> String {
        format!("CREATE DATABASE IF NOT EXISTS {}", quote_ident(namespace))
    }

    pub fn use_database(&self, namespace: &str) -> String {
        format!("USE {}", quote_ident(namespace))
    }

    /// Pin the session to UTC so `TIMESTAMP` columns store generated
    /// values unshifted.
    pub fn utc_session(&self) -> String {
        "SET time_zone = '+00:00'".to_string()
    }

    pub fn create_table(&self, namespace: &str, table: &TableDefinition) -> String {
        let mut column_defs = vec![format!(
            "  {} BIGINT AUTO_INCREMENT PRIMARY KEY",
            quote_ident(ID_COLUMN)
        )];
        column_defs.extend(
            table
                .columns
                .iter()
                .map(|c| format!("  {} {}", quote_ident(c.name), self.to_ddl(&c.column_type))),
        );
        column_defs.extend(table.references().map(|(column, parent)| {
            format!(
                "  FOREIGN KEY ({}) REFERENCES {}({})",
                quote_ident(column),
                qualified(namespace, parent),
                quote_ident(ID_COLUMN)
            )
        }));

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n) ENGINE=InnoDB",
            qualified(namespace, table.name),
            column_defs.join(",\n")
        )
    }

    pub fn insert(&self, namespace: &str, table: &TableDefinition) -> String {
        let columns: Vec<String> = table.columns.iter().map(|c| quote_ident(c.name)).collect();
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            qualified(namespace, table.name),
            columns.join(", "),
            placeholders.join(", ")
        )
    }
}
