//! [`Directory`]-related implementations.

#[cfg(feature = "dummy-json")]
pub mod dummy_json;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "dummy-json")]
pub use self::dummy_json::DummyJson;

/// Read-only directory of recipes and user accounts.
pub use common::Handler as Directory;

/// [`Directory`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "dummy-json")]
    /// [`DummyJson`] error.
    DummyJson(dummy_json::Error),
}
