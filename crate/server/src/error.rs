use medbase_server_database::DbError;
use thiserror::Error;

// Each error type must have a corresponding HTTP status code (see `routes/mod.rs`)
#[derive(Error, Debug, Clone)]
pub enum MedbaseError {
    // When a user requests an item which does not exist
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    // Missing or malformed credentials, or a failed authentication
    #[error("Access denied: {0}")]
    Unauthorized(String),

    // A bearer token that did not pass verification
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // A bearer token that is valid in every respect except its expiry
    #[error("Token expired")]
    ExpiredToken,

    // The identity provider requires the user to set a new password
    #[error("Password change required: {0}")]
    PasswordChangeRequired(String),

    // Business rule: the hospital is at (or over) capacity
    #[error("The hospital reached its maximum capacity")]
    CapacityExceeded,

    // Business rule: the patient is already in the target hospital
    #[error("The patient is already assigned to this hospital")]
    AlreadyAssigned,

    // Business rule: `oncological` and `cancer_type` disagree
    #[error("Invalid data: {0}")]
    InconsistentOncologyData(String),

    // Missing or invalid arguments in the request
    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    // A constraint rejected the write and no finer classification applies
    #[error("Database integrity error: {0}")]
    DatabaseIntegrity(String),

    // Any errors related to a bad behavior of the DB but not related to the user input
    #[error("Database Error: {0}")]
    DatabaseError(String),

    // Any errors related to a bad behavior of the server but not related to the user input
    #[error("Unexpected server error: {0}")]
    ServerError(String),
}

impl From<DbError> for MedbaseError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::IntegrityViolation(s) => Self::DatabaseIntegrity(s),
            DbError::ConversionError(s) | DbError::DatabaseError(s) => Self::DatabaseError(s),
        }
    }
}

impl From<serde_json::Error> for MedbaseError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidRequest(e.to_string())
    }
}

impl From<std::io::Error> for MedbaseError {
    fn from(e: std::io::Error) -> Self {
        Self::ServerError(e.to_string())
    }
}

impl From<url::ParseError> for MedbaseError {
    fn from(e: url::ParseError) -> Self {
        Self::ServerError(e.to_string())
    }
}

impl From<tracing::dispatcher::SetGlobalDefaultError> for MedbaseError {
    fn from(e: tracing::dispatcher::SetGlobalDefaultError) -> Self {
        Self::ServerError(e.to_string())
    }
}

/// Return early with an error if a condition is not satisfied.
///
/// This macro is equivalent to `if !$cond { return Err(From::from($err)); }`.
#[macro_export]
macro_rules! medbase_ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($crate::medbase_error!($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return ::core::result::Result::Err($crate::medbase_error!($fmt, $($arg)*));
        }
    };
}

/// Construct a server error from a string.
#[macro_export]
macro_rules! medbase_error {
    ($msg:literal) => {
        $crate::error::MedbaseError::ServerError(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::error::MedbaseError::ServerError($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::MedbaseError::ServerError(::core::format_args!($fmt, $($arg)*).to_string())
    };
}

/// Return early with an error.
#[macro_export]
macro_rules! medbase_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::medbase_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::medbase_error!($fmt, $($arg)*))
    };
}

#[allow(clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::MedbaseError;

    #[test]
    fn test_medbase_error_interpolation() {
        let var = 42;
        let err = medbase_error!("interpolate {var}");
        assert_eq!("Unexpected server error: interpolate 42", err.to_string());

        let err = bail();
        err.expect_err("Unexpected server error: interpolate 43");

        let err = ensure();
        err.expect_err("Unexpected server error: interpolate 44");
    }

    fn bail() -> Result<(), MedbaseError> {
        let var = 43;
        if true {
            medbase_bail!("interpolate {var}");
        }
        Ok(())
    }

    fn ensure() -> Result<(), MedbaseError> {
        let var = 44;
        medbase_ensure!(false, "interpolate {var}");
        Ok(())
    }
}
