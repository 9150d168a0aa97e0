use std::error::Error;
use std::fmt;

/// Error returned by [`Channel::try_put`](crate::Channel::try_put).
pub enum TryPutError<T> {
    /// The buffer is full and no reader is waiting. The rejected value is
    /// handed back to the caller.
    Full(T),
}

impl<T> TryPutError<T> {
    /// Consumes the error, returning the value that could not be delivered.
    pub fn into_inner(self) -> T {
        match self {
            TryPutError::Full(value) => value,
        }
    }
}

impl<T> fmt::Debug for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => write!(f, "Full(..)"),
        }
    }
}

impl<T> fmt::Display for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => write!(f, "putting into a full channel"),
        }
    }
}

impl<T> Error for TryPutError<T> {}

/// Error returned by [`Channel::try_get`](crate::Channel::try_get) and
/// [`try_channel_select`](crate::try_channel_select).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryGetError {
    /// Nothing buffered and no writer waiting.
    Empty,
}

impl fmt::Display for TryGetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryGetError::Empty => write!(f, "getting from an empty channel"),
        }
    }
}

impl Error for TryGetError {}
