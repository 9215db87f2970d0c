use std::error;
use std::fmt;
use std::result;

/// Errors reported by map and set operations.
///
/// Every failure is local to the operation that reported it and leaves the
/// container unchanged, so callers can branch on the result and continue using
/// the container.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An insertion found its key already present. The previously stored value
    /// is retained.
    DuplicateKey,
    /// A removal did not find its key.
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key already exists"),
            Error::KeyNotFound => write!(f, "key does not exist"),
        }
    }
}

impl error::Error for Error {}

/// The result of a map or set operation.
pub type Result<T> = result::Result<T, Error>;
