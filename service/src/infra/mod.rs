//! Infrastructure layer.

pub mod directory;
pub mod storage;

#[cfg(test)]
pub(crate) mod mock;

pub use self::{directory::Directory, storage::Storage};
#[cfg(feature = "dummy-json")]
pub use self::directory::{dummy_json, DummyJson};
#[cfg(feature = "json-file")]
pub use self::storage::{json_file, JsonFile};
