//! Error taxonomy shared by every population backend.

use rental_generator::GeneratorError;
use thiserror::Error;

/// Errors that abort a population run.
///
/// Backends classify their driver errors into these variants so callers
/// can react the same way regardless of the database in use.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Transport or authentication failure talking to storage.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The credential lacks the DDL/DML rights required.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// A foreign key or uniqueness constraint rejected a row.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A sampling bound handed to the generator was malformed.
    #[error("{0}")]
    InvalidRange(#[from] GeneratorError),

    /// An insert targeted a table that was never provisioned.
    #[error("Table '{0}' does not exist")]
    MissingTable(String),

    /// Any other storage failure.
    #[error("Backend error: {0}")]
    Backend(String),
}
