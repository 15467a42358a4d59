use crate::error::MedbaseError;

pub type MResult<R> = Result<R, MedbaseError>;

/// A helper trait for `MResult` that provides additional methods for error handling.
pub trait MResultHelper<T> {
    /// Sets the context for the error.
    ///
    /// # Errors
    ///
    /// Returns a `MResult` with the specified context if the original result is an error.
    fn context(self, context: &str) -> MResult<T>;

    /// Sets the context for the error using a closure.
    ///
    /// # Errors
    ///
    /// Returns a `MResult` with the context returned by the closure if the original result is an error.
    fn with_context<O>(self, op: O) -> MResult<T>
    where
        O: FnOnce() -> String;
}

impl<T, E> MResultHelper<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn context(self, context: &str) -> MResult<T> {
        self.map_err(|e| MedbaseError::ServerError(format!("{context}: {e}")))
    }

    fn with_context<O>(self, op: O) -> MResult<T>
    where
        O: FnOnce() -> String,
    {
        self.map_err(|e| MedbaseError::ServerError(format!("{}: {e}", op())))
    }
}

impl<T> MResultHelper<T> for Option<T> {
    fn context(self, context: &str) -> MResult<T> {
        self.ok_or_else(|| MedbaseError::ServerError(context.to_owned()))
    }

    fn with_context<O>(self, op: O) -> MResult<T>
    where
        O: FnOnce() -> String,
    {
        self.ok_or_else(|| MedbaseError::ServerError(op()))
    }
}
