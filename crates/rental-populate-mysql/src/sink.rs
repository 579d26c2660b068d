//! MySQL implementation of [`SeedSink`].

use crate::ddl::MySQLDdl;
use crate::error::classify;
use chrono::{Datelike, NaiveDateTime, Timelike};
use mysql_async::prelude::*;
use mysql_async::{Conn, Opts, Params, Value};
use rental_populate::{PopulateError, SeedSink, SeedValue, TableDefinition};
use tracing::debug;

/// Writes rows into MySQL through a single connection.
pub struct MySQLSink {
    conn: Option<Conn>,
    ddl: MySQLDdl,
}

impl MySQLSink {
    /// Connect to the server described by `opts` and switch the session
    /// to UTC.
    pub async fn connect(opts: Opts) -> Result<Self, PopulateError> {
        let conn = Conn::new(opts).await.map_err(classify)?;
        let mut sink = Self::with_conn(conn);
        let utc = sink.ddl.utc_session();
        sink.query(&utc).await?;
        Ok(sink)
    }

    /// Wrap an already-open connection.
    pub fn with_conn(conn: Conn) -> Self {
        Self {
            conn: Some(conn),
            ddl: MySQLDdl,
        }
    }

    fn conn(&mut self) -> Result<&mut Conn, PopulateError> {
        self.conn
            .as_mut()
            .ok_or_else(|| PopulateError::Connection("connection already closed".to_string()))
    }

    async fn query(&mut self, sql: &str) -> Result<(), PopulateError> {
        debug!("SQL: {}", sql);
        self.conn()?.query_drop(sql).await.map_err(classify)
    }
}

fn timestamp_to_value(ts: &NaiveDateTime) -> Value {
    Value::Date(
        ts.year() as u16,
        ts.month() as u8,
        ts.day() as u8,
        ts.hour() as u8,
        ts.minute() as u8,
        ts.second() as u8,
        ts.nanosecond() / 1_000,
    )
}

/// Convert a SeedValue to a positional MySQL parameter.
fn seed_value_to_param(value: &SeedValue) -> Value {
    match value {
        SeedValue::Bool(b) => Value::Int(i64::from(*b)),
        SeedValue::Int32(i) => Value::Int(i64::from(*i)),
        SeedValue::Int64(i) => Value::Int(*i),
        SeedValue::Text(s) => Value::Bytes(s.as_bytes().to_vec()),
        SeedValue::Timestamp(ts) => timestamp_to_value(ts),
    }
}

#[async_trait::async_trait]
impl SeedSink for MySQLSink {
    async fn ensure_namespace(&mut self, namespace: &str) -> Result<(), PopulateError> {
        let create = self.ddl.create_database(namespace);
        self.query(&create).await?;
        let use_db = self.ddl.use_database(namespace);
        self.query(&use_db).await
    }

    async fn ensure_table(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
    ) -> Result<(), PopulateError> {
        let sql = self.ddl.create_table(namespace, table);
        self.query(&sql).await
    }

    async fn begin(&mut self) -> Result<(), PopulateError> {
        self.query("START TRANSACTION").await
    }

    async fn insert_returning_id(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
        values: &[SeedValue],
    ) -> Result<i64, PopulateError> {
        let sql = self.ddl.insert(namespace, table);
        let params: Vec<Value> = values.iter().map(seed_value_to_param).collect();

        let conn = self.conn()?;
        conn.exec_drop(&sql, Params::Positional(params))
            .await
            .map_err(classify)?;

        let id = conn.last_insert_id().ok_or_else(|| {
            PopulateError::Backend(format!("no identifier returned for insert into {}", table.name))
        })?;
        i64::try_from(id).map_err(|_| {
            PopulateError::Backend(format!("identifier {id} out of range for {}", table.name))
        })
    }

    async fn commit(&mut self) -> Result<(), PopulateError> {
        self.query("COMMIT").await
    }

    async fn close(&mut self) -> Result<(), PopulateError> {
        if let Some(conn) = self.conn.take() {
            conn.disconnect().await.map_err(classify)?;
        }
        Ok(())
    }
}
