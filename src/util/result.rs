use std::error::Error;

use log::error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the value of an [`Ok`], or logs the error and panics with its message. Used to turn
    /// a violated precondition reported by a `try_` method into a panic at the caller's location.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(err) => {
                error!("{err}");
                panic!("{err}")
            }
        }
    }
}
