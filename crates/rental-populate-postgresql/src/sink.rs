//! PostgreSQL implementation of [`SeedSink`].

use crate::ddl::PostgreSQLDdl;
use crate::error::classify;
use rental_populate::{PopulateError, SeedSink, SeedValue, TableDefinition};
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Config, NoTls};
use tracing::debug;

/// Writes rows into PostgreSQL through a single client connection.
pub struct PostgreSQLSink {
    client: Client,
    ddl: PostgreSQLDdl,
}

impl PostgreSQLSink {
    /// Connect using `config` and verify the connection is usable.
    pub async fn connect(config: &Config) -> Result<Self, PopulateError> {
        let (client, connection) = config.connect(NoTls).await.map_err(classify)?;

        // Spawn the connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await.map_err(classify)?;

        Ok(Self::with_client(client))
    }

    /// Wrap an already-connected client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            ddl: PostgreSQLDdl,
        }
    }

    async fn execute_ddl(&self, sql: &str) -> Result<(), PopulateError> {
        debug!("DDL: {}", sql);
        self.client.batch_execute(sql).await.map_err(classify)
    }
}

/// Convert a SeedValue to a boxed ToSql trait object.
fn seed_value_to_boxed(value: &SeedValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SeedValue::Bool(b) => Box::new(*b),
        SeedValue::Int32(i) => Box::new(*i),
        SeedValue::Int64(i) => Box::new(*i),
        SeedValue::Text(s) => Box::new(s.clone()),
        SeedValue::Timestamp(ts) => Box::new(*ts),
    }
}

#[async_trait::async_trait]
impl SeedSink for PostgreSQLSink {
    async fn ensure_namespace(&mut self, namespace: &str) -> Result<(), PopulateError> {
        let sql = self.ddl.create_schema(namespace);
        self.execute_ddl(&sql).await
    }

    async fn ensure_table(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
    ) -> Result<(), PopulateError> {
        let sql = self.ddl.create_table(namespace, table);
        self.execute_ddl(&sql).await
    }

    async fn begin(&mut self) -> Result<(), PopulateError> {
        self.client.batch_execute("BEGIN").await.map_err(classify)
    }

    async fn insert_returning_id(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
        values: &[SeedValue],
    ) -> Result<i64, PopulateError> {
        let sql = self.ddl.insert_returning_id(namespace, table);

        let params: Vec<Box<dyn ToSql + Sync + Send>> =
            values.iter().map(seed_value_to_boxed).collect();
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let row = self
            .client
            .query_one(&sql, &param_refs)
            .await
            .map_err(classify)?;
        row.try_get::<_, i64>(0).map_err(classify)
    }

    async fn commit(&mut self) -> Result<(), PopulateError> {
        self.client.batch_execute("COMMIT").await.map_err(classify)
    }
}
