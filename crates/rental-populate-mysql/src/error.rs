//! Classification of MySQL driver errors.

use rental_populate::PopulateError;

/// Server error codes for missing privileges.
const PERMISSION_CODES: &[u16] = &[
    1044, // ER_DBACCESS_DENIED_ERROR
    1142, // ER_TABLEACCESS_DENIED_ERROR
    1227, // ER_SPECIFIC_ACCESS_DENIED_ERROR
];

/// Server error codes raised by key constraints.
const CONSTRAINT_CODES: &[u16] = &[
    1062, // ER_DUP_ENTRY
    1216, // ER_NO_REFERENCED_ROW
    1217, // ER_ROW_IS_REFERENCED
    1451, // ER_ROW_IS_REFERENCED_2
    1452, // ER_NO_REFERENCED_ROW_2
];

/// ER_ACCESS_DENIED_ERROR: bad credentials at connect time.
const AUTH_FAILED_CODE: u16 = 1045;

/// Map a `mysql_async::Error` onto the populate error taxonomy.
pub fn classify(err: mysql_async::Error) -> PopulateError {
    let message = err.to_string();
    match err {
        mysql_async::Error::Server(server) => classify_server_code(server.code, message),
        mysql_async::Error::Io(_) | mysql_async::Error::Driver(_) | mysql_async::Error::Url(_) => {
            PopulateError::Connection(message)
        }
        _ => PopulateError::Backend(message),
    }
}

fn classify_server_code(code: u16, message: String) -> PopulateError {
    if PERMISSION_CODES.contains(&code) {
        PopulateError::Permission(message)
    } else if CONSTRAINT_CODES.contains(&code) {
        PopulateError::ConstraintViolation(message)
    } else if code == AUTH_FAILED_CODE {
        PopulateError::Connection(message)
    } else {
        PopulateError::Backend(message)
    }
}
