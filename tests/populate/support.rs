//! Shared helpers for population tests.

use chrono::NaiveDateTime;
use rental_populate::{MemorySink, PopulateError, SeedSink, SeedValue, StoredRow, TableDefinition};

pub const NAMESPACE: &str = "raw";

pub fn text<'a>(row: &'a StoredRow, column: &str) -> &'a str {
    row.get(column)
        .and_then(SeedValue::as_str)
        .unwrap_or_else(|| panic!("column {column} is not text in {row:?}"))
}

pub fn int(row: &StoredRow, column: &str) -> i64 {
    row.get(column)
        .and_then(SeedValue::as_i64)
        .unwrap_or_else(|| panic!("column {column} is not an integer in {row:?}"))
}

pub fn timestamp(row: &StoredRow, column: &str) -> NaiveDateTime {
    row.get(column)
        .and_then(SeedValue::as_timestamp)
        .unwrap_or_else(|| panic!("column {column} is not a timestamp in {row:?}"))
}

/// True when `price` looks like `$<50-300>.<00-99>`.
pub fn is_valid_price(price: &str) -> bool {
    let Some(amount) = price.strip_prefix('$') else {
        return false;
    };
    let Some((dollars, cents)) = amount.split_once('.') else {
        return false;
    };
    let dollars_ok = dollars
        .parse::<u32>()
        .is_ok_and(|d| (50..=300).contains(&d) && !dollars.starts_with('0'));
    let cents_ok = cents.len() == 2 && cents.chars().all(|c| c.is_ascii_digit());
    dollars_ok && cents_ok
}

/// Which sink operation should fail.
#[derive(Debug, Clone, Copy)]
pub enum FailurePoint {
    /// `ensure_namespace` is rejected for lack of privileges.
    Namespace,
    /// The `nth` (1-based) insert into `table` loses its connection.
    Insert { table: &'static str, nth: usize },
}

/// A `MemorySink` that fails at a chosen point.
pub struct FailingSink {
    pub inner: MemorySink,
    pub closed: bool,
    failure: FailurePoint,
    inserts: usize,
}

impl FailingSink {
    pub fn new(failure: FailurePoint) -> Self {
        Self {
            inner: MemorySink::new(),
            closed: false,
            failure,
            inserts: 0,
        }
    }
}

#[async_trait::async_trait]
impl SeedSink for FailingSink {
    async fn ensure_namespace(&mut self, namespace: &str) -> Result<(), PopulateError> {
        if let FailurePoint::Namespace = self.failure {
            return Err(PopulateError::Permission(format!(
                "permission denied to create schema {namespace}"
            )));
        }
        self.inner.ensure_namespace(namespace).await
    }

    async fn ensure_table(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
    ) -> Result<(), PopulateError> {
        self.inner.ensure_table(namespace, table).await
    }

    async fn begin(&mut self) -> Result<(), PopulateError> {
        self.inner.begin().await
    }

    async fn insert_returning_id(
        &mut self,
        namespace: &str,
        table: &TableDefinition,
        values: &[SeedValue],
    ) -> Result<i64, PopulateError> {
        if let FailurePoint::Insert { table: target, nth } = self.failure {
            if table.name == target {
                self.inserts += 1;
                if self.inserts == nth {
                    return Err(PopulateError::Connection("server closed the connection".into()));
                }
            }
        }
        self.inner.insert_returning_id(namespace, table, values).await
    }

    async fn commit(&mut self) -> Result<(), PopulateError> {
        self.inner.commit().await
    }

    async fn close(&mut self) -> Result<(), PopulateError> {
        self.closed = true;
        self.inner.close().await
    }
}

#[test]
fn test_price_pattern() {
    assert!(is_valid_price("$50.00"));
    assert!(is_valid_price("$300.99"));
    assert!(is_valid_price("$123.05"));
    assert!(!is_valid_price("$49.99"));
    assert!(!is_valid_price("$301.00"));
    assert!(!is_valid_price("$100.5"));
    assert!(!is_valid_price("100.50"));
}
