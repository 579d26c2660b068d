//! PostgreSQL backend for rental-seed.
//!
//! Tables are created under a configurable schema (`raw` by default) in the
//! database named by the connection, and every phase of a run is wrapped in
//! an explicit `BEGIN`/`COMMIT`.

pub mod args;
pub mod ddl;
pub mod error;
pub mod sink;

pub use args::PostgreSQLPopulateArgs;
pub use ddl::PostgreSQLDdl;
pub use sink::PostgreSQLSink;
