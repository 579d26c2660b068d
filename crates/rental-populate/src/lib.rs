//! Backend-agnostic population pipeline for rental-seed.
//!
//! This crate owns everything that does not depend on a particular
//! database: the table layout, the [`SeedSink`] capability trait each
//! backend implements, the error taxonomy, the entity inserts and the
//! [`Populator`] that sequences them.
//!
//! ```text
//! Populator ──provision──▶ SeedSink::ensure_namespace / ensure_table
//!     │
//!     ├─ hosts phase ──────▶ insert_host    ─┐
//!     ├─ listings phase ───▶ insert_listing ─┼─▶ SeedSink::insert_returning_id
//!     └─ reviews phase ────▶ insert_review  ─┘      (commit after each phase)
//! ```

pub mod args;
pub mod entity;
pub mod error;
pub mod memory;
pub mod populator;
pub mod schema;
pub mod sink;

pub use args::CommonPopulateArgs;
pub use entity::{insert_host, insert_listing, insert_review, PersistedListing, ToRow};
pub use error::PopulateError;
pub use memory::{MemorySink, StoredRow};
pub use populator::{PopulateMetrics, PopulatePlan, Populator};
pub use schema::{ColumnDefinition, ColumnType, SeedValue, TableDefinition, TABLES};
pub use sink::SeedSink;
