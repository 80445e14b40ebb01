//! [`Command`] for deleting a [`Session`].

use common::operations::Delete;
use strum::IntoEnumIterator as _;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::user::Session;
use crate::{
    domain::user::session,
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for deleting the persisted [`Session`], logging its owner out.
///
/// Clears every [`session::Key`], including the never populated ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteUserSession;

impl<Dir, St> Command<DeleteUserSession> for Service<Dir, St>
where
    St: Storage<Delete<session::Key>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(
        &self,
        _: DeleteUserSession,
    ) -> Result<Self::Ok, Self::Err> {
        for key in session::Key::iter() {
            self.storage()
                .execute(Delete(key))
                .await
                .map_err(tracerr::wrap!())?;
        }

        log::info!("`Session` deleted");

        Ok(())
    }
}

/// Error of [`DeleteUserSession`] [`Command`] execution.
pub type ExecutionError = Traced<storage::Error>;
