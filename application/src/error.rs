//! [`Error`]-related definitions.

use std::io;

use derive_more::{Display, Error as StdError, From};
use discovery::{command::change_sort, infra::catalog};

/// Error of running the application.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Catalog`] failed to provide its listings.
    ///
    /// [`Catalog`]: discovery::infra::Catalog
    #[display("catalog is unavailable: {_0}")]
    Catalog(catalog::Error),

    /// Gesture script is malformed.
    #[display("gesture script is malformed: {_0}")]
    Script(serde_json::Error),

    /// Requested sort key isn't granted.
    #[display("sort is rejected: {_0}")]
    Sort(change_sort::ExecutionError),

    /// Reading input or writing output failed.
    #[display("I/O failed: {_0}")]
    Io(io::Error),
}
