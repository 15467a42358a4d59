use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    // Row decoding failures (unknown enum text, bad column type, ...)
    #[error("Conversion Error: {0}")]
    ConversionError(String),

    // Any errors related to a bad behavior of the DB but not related to the user input
    #[error("Database Error: {0}")]
    DatabaseError(String),

    // A SQL constraint rejected the write (CHECK, foreign key, NOT NULL, unique)
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::IntegrityViolation(db_err.to_string()),
                _ => Self::DatabaseError(db_err.to_string()),
            },
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

impl From<std::io::Error> for DbError {
    fn from(e: std::io::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

/// Construct a database error from a string.
#[macro_export]
macro_rules! db_error {
    ($msg:literal) => {
        $crate::DbError::DatabaseError(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::DbError::DatabaseError($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::DbError::DatabaseError(::core::format_args!($fmt, $($arg)*).to_string())
    };
}

/// Return early with a database error.
#[macro_export]
macro_rules! db_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::db_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::db_error!($fmt, $($arg)*))
    };
}
