//! Population integration tests.
//!
//! The in-memory tests drive the full host → listing → review pipeline
//! through `MemorySink` and check the row-count, referential, temporal and
//! formatting properties of every generated row. The live tests run the
//! same pipeline against real servers and are ignored unless one is
//! available (`POSTGRESQL_TEST_URL`, `MYSQL_TEST_URL`).

mod failures;
mod invariants;
mod mysql_live;
mod support;
