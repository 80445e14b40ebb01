//! [`Command`] for creating a [`Session`].

use common::operations::{Insert, Verify};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::User;
use crate::{
    domain::user::{self, session, Session, Verification},
    infra::{directory, storage, Directory, Storage},
    Service,
};

use super::Command;

/// [`Command`] for creating a [`Session`] by [`User`] credentials.
///
/// The created [`Session`] is persisted, so it survives until the
/// [`DeleteUserSession`] [`Command`] tears it down.
///
/// [`DeleteUserSession`]: super::DeleteUserSession
#[derive(Clone, Debug, From)]
pub struct CreateUserSession {
    /// [`user::Credentials`] of the [`User`] logging in.
    pub credentials: user::Credentials,
}

impl<Dir, St> Command<CreateUserSession> for Service<Dir, St>
where
    Dir: Directory<
        Verify<user::Credentials>,
        Ok = Verification,
        Err = Traced<directory::Error>,
    >,
    St: Storage<
        Insert<(session::Key, String)>,
        Ok = (),
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateUserSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateUserSession { credentials } = cmd;
        let username = credentials.username.clone();

        let user = match self
            .directory()
            .execute(Verify(credentials))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
        {
            Verification::Verified(user) => user,
            Verification::UnknownUser => {
                return Err(tracerr::new!(E::UserNotExists(username)));
            }
            Verification::WrongPassword => {
                return Err(tracerr::new!(E::WrongPassword));
            }
        };

        self.storage()
            .execute(Insert((
                session::Key::FirstName,
                user.first_name.to_string(),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!("`User(id: {})` logged in", user.id);

        Ok(Session {
            first_name: user.first_name,
        })
    }
}

/// Error of [`CreateUserSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Directory`] error.
    #[display("`Directory` operation failed: {_0}")]
    Directory(directory::Error),

    /// [`Storage`] error.
    #[display("`Storage` operation failed: {_0}")]
    Storage(storage::Error),

    /// [`User`] with the provided [`user::Username`] does not exist.
    #[display("`User(username: {_0})` does not exist")]
    #[from(ignore)]
    UserNotExists(#[error(not(source))] user::Username),

    /// Provided [`user::Password`] doesn't match the [`User`] one.
    #[display("Wrong `User` password")]
    WrongPassword,
}
