//! Storage capability interface implemented by every backend.

use crate::error::PopulateError;
use crate::schema::{SeedValue, TableDefinition};

/// Minimal set of storage operations the population pipeline needs.
///
/// The orchestrator and entity inserts are generic over this trait, so
/// each database only has to provide a thin adapter:
///
/// ```ignore
/// let mut populator = Populator::new(PostgreSQLSink::connect(&conn).await?, "raw", 42);
/// populator.populate(PopulatePlan::default()).await?;
/// ```
///
/// Every operation is awaited to completion before the next one is
/// issued; implementations may assume a single writer.
#[async_trait::async_trait]
pub trait SeedSink: Send {
    /// Create the namespace (schema or database) if it does not exist.
    async fn ensure_namespace(&mut self, namespace: &str) -> Result<(), PopulateError>;

    /// Create `table` under `namespace` if it does not exist. Existing
    /// tables are left untouched.
    async fn ensure_table(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
    ) -> Result<(), PopulateError>;

    /// Open the transactional unit that the next [`SeedSink::commit`] closes.
    async fn begin(&mut self) -> Result<(), PopulateError>;

    /// Insert one row and return its storage-assigned identifier.
    ///
    /// `values` are positional and follow `table.columns` order.
    async fn insert_returning_id(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
        values: &[SeedValue],
    ) -> Result<i64, PopulateError>;

    /// Make everything inserted since [`SeedSink::begin`] durable and visible.
    async fn commit(&mut self) -> Result<(), PopulateError>;

    /// Release the underlying connection.
    async fn close(&mut self) -> Result<(), PopulateError> {
        Ok(())
    }
}
