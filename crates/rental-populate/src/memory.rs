//! In-memory [`SeedSink`] used for dry runs and tests.
//!
//! Mirrors the relational behaviour the pipeline relies on: tables must be
//! provisioned before use, identifiers are assigned per table starting at 1,
//! foreign keys must name an existing parent row, and rows inserted after
//! `begin` only become visible on `commit`.

use crate::error::PopulateError;
use crate::schema::{SeedValue, TableDefinition};
use crate::sink::SeedSink;
use std::collections::{BTreeMap, BTreeSet};

/// A committed row.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRow {
    pub id: i64,
    pub values: BTreeMap<String, SeedValue>,
}

impl StoredRow {
    pub fn get(&self, column: &str) -> Option<&SeedValue> {
        self.values.get(column)
    }
}

#[derive(Debug, Default)]
struct MemoryTable {
    columns: Vec<String>,
    references: Vec<(String, String)>,
    next_id: i64,
    rows: Vec<StoredRow>,
}

#[derive(Debug, Default)]
pub struct MemorySink {
    namespaces: BTreeSet<String>,
    tables: BTreeMap<String, MemoryTable>,
    in_transaction: bool,
    pending: Vec<(String, StoredRow)>,
    commits: u64,
}

fn qualified(namespace: &str, table: &str) -> String {
    format!("{namespace}.{table}")
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }

    pub fn has_table(&self, namespace: &str, table: &str) -> bool {
        self.tables.contains_key(&qualified(namespace, table))
    }

    /// Committed rows of `namespace.table`, in insertion order.
    pub fn rows(&self, namespace: &str, table: &str) -> &[StoredRow] {
        self.tables
            .get(&qualified(namespace, table))
            .map(|t| t.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn row_count(&self, namespace: &str, table: &str) -> usize {
        self.rows(namespace, table).len()
    }

    /// Rows inserted since the last `begin` and not yet committed.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of successful commits.
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    fn parent_exists(&self, parent_key: &str, id: i64) -> bool {
        let committed = self
            .tables
            .get(parent_key)
            .is_some_and(|t| t.rows.iter().any(|r| r.id == id));
        committed
            || self
                .pending
                .iter()
                .any(|(key, row)| key == parent_key && row.id == id)
    }
}

#[async_trait::async_trait]
impl SeedSink for MemorySink {
    async fn ensure_namespace(&mut self, namespace: &str) -> Result<(), PopulateError> {
        self.namespaces.insert(namespace.to_string());
        Ok(())
    }

    async fn ensure_table(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
    ) -> Result<(), PopulateError> {
        if !self.has_namespace(namespace) {
            return Err(PopulateError::Backend(format!(
                "namespace '{namespace}' does not exist"
            )));
        }
        for (_, parent) in table.references() {
            if !self.has_table(namespace, parent) {
                return Err(PopulateError::MissingTable(qualified(namespace, parent)));
            }
        }

        self.tables
            .entry(qualified(namespace, table.name))
            .or_insert_with(|| MemoryTable {
                columns: table.column_names().iter().map(|c| c.to_string()).collect(),
                references: table
                    .references()
                    .map(|(col, parent)| (col.to_string(), qualified(namespace, parent)))
                    .collect(),
                next_id: 1,
                rows: Vec::new(),
            });
        Ok(())
    }

    async fn begin(&mut self) -> Result<(), PopulateError> {
        self.in_transaction = true;
        Ok(())
    }

    async fn insert_returning_id(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
        values: &[SeedValue],
    ) -> Result<i64, PopulateError> {
        let key = qualified(namespace, table.name);
        let (columns, references) = match self.tables.get(&key) {
            Some(t) => (t.columns.clone(), t.references.clone()),
            None => return Err(PopulateError::MissingTable(key)),
        };

        if columns.len() != values.len() {
            return Err(PopulateError::Backend(format!(
                "{key} expects {} values, got {}",
                columns.len(),
                values.len()
            )));
        }

        let row_values: BTreeMap<String, SeedValue> =
            columns.into_iter().zip(values.iter().cloned()).collect();

        for (column, parent_key) in &references {
            let parent_id = row_values.get(column).and_then(SeedValue::as_i64);
            match parent_id {
                Some(id) if self.parent_exists(parent_key, id) => {}
                _ => {
                    return Err(PopulateError::ConstraintViolation(format!(
                        "{key}.{column} = {parent_id:?} has no matching row in {parent_key}"
                    )))
                }
            }
        }

        let memory_table = self
            .tables
            .get_mut(&key)
            .ok_or_else(|| PopulateError::MissingTable(key.clone()))?;
        let id = memory_table.next_id;
        memory_table.next_id += 1;

        let row = StoredRow {
            id,
            values: row_values,
        };
        if self.in_transaction {
            self.pending.push((key, row));
        } else {
            memory_table.rows.push(row);
        }
        Ok(id)
    }

    async fn commit(&mut self) -> Result<(), PopulateError> {
        for (key, row) in self.pending.drain(..) {
            if let Some(table) = self.tables.get_mut(&key) {
                table.rows.push(row);
            }
        }
        self.in_transaction = false;
        self.commits += 1;
        Ok(())
    }
}
