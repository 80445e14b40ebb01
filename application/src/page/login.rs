//! Login page.

use derive_more::Display;
use secrecy::SecretBox;
use service::{
    command::create_user_session::ExecutionError,
    domain::user::{Credentials, Password, Username},
};

use crate::{define_error, AsError, Error};

/// Status shown while the login is being performed.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Status {
    /// Credentials are being verified.
    #[display("Authenticating, please wait...")]
    Authenticating,

    /// Credentials are verified and the catalog is about to open.
    #[display("Login successful! Redirecting...")]
    Succeeded,
}

/// Validates the provided input of the login form.
///
/// The `username` is trimmed, while the `password` is taken as is.
///
/// # Errors
///
/// If any of the fields is empty.
pub fn credentials(username: &str, password: &str) -> Result<Credentials, Error> {
    let (Some(username), Some(password)) =
        (Username::new(username), Password::new(password))
    else {
        return Err(LoginError::EmptyCredentials.into());
    };
    Ok(Credentials {
        username,
        password: SecretBox::new(Box::new(password)),
    })
}

impl AsError for ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Directory(e) => e.try_as_error(),
            Self::Storage(e) => e.try_as_error(),
            Self::UserNotExists(_) => Some(LoginError::UsernameNotFound.into()),
            Self::WrongPassword => Some(LoginError::IncorrectPassword.into()),
        }
    }
}

define_error! {
    enum LoginError {
        #[code = "EMPTY_CREDENTIALS"]
        #[message = "Username and password cannot be empty."]
        EmptyCredentials,

        #[code = "USERNAME_NOT_FOUND"]
        #[message = "Username not found."]
        UsernameNotFound,

        #[code = "INCORRECT_PASSWORD"]
        #[message = "Incorrect password. Please try again."]
        IncorrectPassword,
    }
}
