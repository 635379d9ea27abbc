//! Crate error kinds.
//!
//! Only [Error::ExecutionFailure] is recovered inside the search loop (the
//! failing chromosome is assigned worst-case fitness for every goal); every
//! other kind terminates the run and is propagated to the caller untouched.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A component was wired into an algorithm that does not honour it.
    UnsupportedOperation(&'static str),
    /// A required option is missing, out of range, or names an unknown kind.
    InvalidConfiguration(String),
    /// A fitness function cannot serve the request with the data available.
    NotYetImplemented(&'static str),
    /// The execution host reported a failed run.
    ExecutionFailure(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedOperation(message) => {
                write!(f, "unsupported operation: {}", message)
            }
            Error::InvalidConfiguration(message) => {
                write!(f, "invalid configuration: {}", message)
            }
            Error::NotYetImplemented(message) => write!(f, "not yet implemented: {}", message),
            Error::ExecutionFailure(message) => write!(f, "execution failure: {}", message),
        }
    }
}

impl std::error::Error for Error {}
