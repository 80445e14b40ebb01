//! [`Session`] definitions.

use derive_more::Display;
use strum::{AsRefStr, EnumIter};

#[cfg(doc)]
use crate::domain::User;
use crate::domain::user;

/// Session of a logged in [`User`].
///
/// Restored from the session flag persisted by the storage, so the presence
/// of a [`Session`] is what "being logged in" means.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    /// [`user::FirstName`] of the [`User`] this [`Session`] belongs to.
    pub first_name: user::FirstName,
}

impl Session {
    /// Returns the greeting of the [`User`] this [`Session`] belongs to.
    #[must_use]
    pub fn greeting(&self) -> Greeting<'_> {
        Greeting(&self.first_name)
    }
}

/// Greeting of a [`Session`] owner.
#[derive(Clone, Copy, Debug, Display)]
#[display("Hi, {_0}!")]
pub struct Greeting<'s>(&'s user::FirstName);

/// Key of a value a [`Session`] persists.
#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum Key {
    /// Flag holding the [`user::FirstName`] of the logged in [`User`].
    FirstName,

    /// Access token of a [`Session`].
    ///
    /// Reserved and never populated, but cleared together with the flag.
    Token,
}
