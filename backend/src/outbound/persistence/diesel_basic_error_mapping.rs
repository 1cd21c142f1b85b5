//! Diesel and pool error mapping shared by every repository.
//!
//! Each port error has `connection` and `query` constructors. Callers pass
//! those constructors in, so one mapping serves every port.

use tracing::debug;

use super::pool::PoolError;

/// Map a pool error through the port's connection constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.into_message())
}

/// Map a Diesel error to a query or connection error.
///
/// Only a closed connection is a connection error; everything else,
/// `NotFound` included, is a query error.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::OrderRepositoryError;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let err = map_basic_pool_error(PoolError::checkout("timed out"), |message| {
            OrderRepositoryError::connection(message)
        });
        assert_eq!(err, OrderRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        let err = map_basic_diesel_error(
            diesel::result::Error::NotFound,
            OrderRepositoryError::query,
            OrderRepositoryError::connection,
        );
        assert_eq!(err, OrderRepositoryError::query("record not found"));
    }
}
