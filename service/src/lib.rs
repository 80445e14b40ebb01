//! Service contains the business logic of the recipe book.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(doc)]
use infra::{Directory, Storage};

pub use self::{command::Command, query::Query};

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Dir, St> {
    /// [`Directory`] of this [`Service`].
    directory: Dir,

    /// [`Storage`] of this [`Service`].
    storage: St,
}

impl<Dir, St> Service<Dir, St> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(directory: Dir, storage: St) -> Self {
        Self { directory, storage }
    }

    /// Returns [`Directory`] of this [`Service`].
    #[must_use]
    pub fn directory(&self) -> &Dir {
        &self.directory
    }

    /// Returns [`Storage`] of this [`Service`].
    #[must_use]
    pub fn storage(&self) -> &St {
        &self.storage
    }
}
