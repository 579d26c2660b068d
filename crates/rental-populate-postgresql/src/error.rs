//! Classification of PostgreSQL driver errors.

use rental_populate::PopulateError;
use tokio_postgres::error::SqlState;

/// Map a `tokio_postgres::Error` onto the populate error taxonomy.
pub fn classify(err: tokio_postgres::Error) -> PopulateError {
    let message = err.to_string();

    if let Some(state) = err.code() {
        return classify_sql_state(state, message);
    }

    let is_io = std::error::Error::source(&err)
        .is_some_and(|source| source.downcast_ref::<std::io::Error>().is_some());
    if err.is_closed() || is_io {
        PopulateError::Connection(message)
    } else {
        PopulateError::Backend(message)
    }
}

fn classify_sql_state(state: &SqlState, message: String) -> PopulateError {
    if *state == SqlState::INSUFFICIENT_PRIVILEGE {
        PopulateError::Permission(message)
    } else if *state == SqlState::FOREIGN_KEY_VIOLATION || *state == SqlState::UNIQUE_VIOLATION {
        PopulateError::ConstraintViolation(message)
    } else if *state == SqlState::INVALID_PASSWORD
        || *state == SqlState::INVALID_AUTHORIZATION_SPECIFICATION
        || *state == SqlState::CONNECTION_FAILURE
        || *state == SqlState::ADMIN_SHUTDOWN
    {
        PopulateError::Connection(message)
    } else {
        PopulateError::Backend(message)
    }
}
