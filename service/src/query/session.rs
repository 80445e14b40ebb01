//! [`Query`] collection related to a [`Session`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::user::{session, Session},
    infra::{storage, Storage},
    Service,
};

use super::Query;

/// Queries the [`Session`] persisted by a previous login, if any.
#[derive(Clone, Copy, Debug, Default)]
pub struct Current;

impl<Dir, St> Query<Current> for Service<Dir, St>
where
    St: Storage<
        Select<By<Option<String>, session::Key>>,
        Ok = Option<String>,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Option<Session>;
    type Err = Traced<storage::Error>;

    async fn execute(&self, _: Current) -> Result<Self::Ok, Self::Err> {
        let first_name = self
            .storage()
            .execute(Select(By::new(session::Key::FirstName)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(first_name.filter(|n| !n.is_empty()).map(|n| Session {
            first_name: n.into(),
        }))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::user::session::Key,
        infra::mock::{MemoryStorage, MockDirectory},
        Query as _, Service,
    };

    use super::Current;

    #[tokio::test]
    async fn restores_persisted_session() {
        let service =
            Service::new(MockDirectory::default(), MemoryStorage::default());
        drop(
            service
                .storage()
                .values
                .borrow_mut()
                .insert(Key::FirstName, "Emily".to_owned()),
        );

        let session = service.execute(Current).await.unwrap().unwrap();

        assert_eq!(AsRef::<str>::as_ref(&session.first_name), "Emily");
    }

    #[tokio::test]
    async fn finds_nothing_when_logged_out() {
        let service =
            Service::new(MockDirectory::default(), MemoryStorage::default());

        assert_eq!(service.execute(Current).await.unwrap(), None);
    }
}
