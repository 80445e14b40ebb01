//! [`Storage`]-related implementations.

#[cfg(feature = "json-file")]
pub mod json_file;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "json-file")]
pub use self::json_file::JsonFile;

/// Local key-value storage persisting between runs.
pub use common::Handler as Storage;

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "json-file")]
    /// [`JsonFile`] error.
    JsonFile(json_file::Error),
}
