use hyper::StatusCode;
use std::fmt::{self, Debug, Display};
use std::io;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct DisplayError(Error);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<Error>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}

/// Failure escaping a handler. `status` is consulted exactly once, when the
/// dispatcher renders the response; an untagged error renders as 500 with
/// the error text as the body.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct FatalError {
    pub status: Option<StatusCode>,
    #[source]
    pub source: Error,
}

impl From<io::Error> for FatalError {
    fn from(source: io::Error) -> Self {
        FatalError {
            status: None,
            source: source.into(),
        }
    }
}

impl From<Error> for FatalError {
    fn from(source: Error) -> Self {
        FatalError {
            status: None,
            source,
        }
    }
}
