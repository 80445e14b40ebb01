//! [`User`] definitions.

pub mod session;

use derive_more::{AsRef, Display, From, FromStr, Into};
use secrecy::{zeroize::Zeroize, CloneableSecret, SecretBox};
use serde::Deserialize;

pub use self::session::Session;

/// Account registered in the user directory.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Username`] of this [`User`].
    pub username: Username,

    /// [`FirstName`] of this [`User`].
    pub first_name: FirstName,
}

/// ID of a [`User`].
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, From, Hash, Into, PartialEq,
)]
pub struct Id(u32);

/// Name a [`User`] logs in with.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Username(String);

impl Username {
    /// Creates a new [`Username`] out of the given `name` with surrounding
    /// whitespace removed.
    ///
    /// Returns [`None`] if nothing remains after trimming.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        (!name.is_empty()).then(|| Self(name.to_owned()))
    }
}

impl FromStr for Username {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Username`")
    }
}

/// First name of a [`User`], greeting them once logged in.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, FromStr, PartialEq,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct FirstName(String);

/// Password of a [`User`].
///
/// Whitespace is significant and never trimmed.
#[derive(AsRef, Clone, Debug, Eq, PartialEq)]
#[as_ref(str)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`] if the given `password` is not empty.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        (!password.is_empty()).then_some(Self(password))
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Credentials a [`User`] proves their identity with.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// [`Username`] of the [`User`].
    pub username: Username,

    /// [`Password`] of the [`User`].
    pub password: SecretBox<Password>,
}

/// Outcome of verifying [`Credentials`].
#[derive(Clone, Debug, PartialEq)]
pub enum Verification {
    /// [`Credentials`] belong to the [`User`].
    Verified(User),

    /// No [`User`] has the provided [`Username`].
    UnknownUser,

    /// [`Password`] doesn't match the one of the [`User`].
    WrongPassword,
}

#[cfg(test)]
mod spec {
    use super::{Password, Username};

    #[test]
    fn trims_username() {
        assert_eq!(Username::new("  emilys ").unwrap().to_string(), "emilys");
        assert!(Username::new("   ").is_none());
        assert!(Username::new("").is_none());
    }

    #[test]
    fn keeps_password_whitespace() {
        assert_eq!(Password::new(" pass ").unwrap().as_ref(), " pass ");
        assert!(Password::new("").is_none());
    }
}
