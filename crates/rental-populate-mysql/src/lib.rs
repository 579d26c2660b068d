//! MySQL backend for rental-seed.
//!
//! The configured database plays the role of the namespace: it is created
//! if absent and selected with `USE` before the tables are provisioned.
//! Tables use InnoDB so foreign keys are enforced, and every phase of a run
//! is wrapped in `START TRANSACTION`/`COMMIT`.

pub mod args;
pub mod ddl;
pub mod error;
pub mod sink;

pub use args::MySQLPopulateArgs;
pub use ddl::MySQLDdl;
pub use sink::MySQLSink;
