//! [`Query`] definition.

pub mod recipe;
pub mod recipes;
pub mod session;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{directory, Directory},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Directory`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct DirectoryQuery<T>(T);

impl<W, B> DirectoryQuery<By<W, B>> {
    /// Creates a new [`DirectoryQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Dir, St, W, B> Query<DirectoryQuery<By<W, B>>> for Service<Dir, St>
where
    Dir: Directory<Select<By<W, B>>, Ok = W, Err = Traced<directory::Error>>,
{
    type Ok = W;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        DirectoryQuery(by): DirectoryQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.directory()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{recipe, Recipe},
        infra::mock::{MemoryStorage, MockDirectory},
        read::recipe::list,
        Query as _, Service,
    };

    use super::{recipe::ById, recipes};

    fn collection(count: u32) -> Vec<Recipe> {
        (1..=count)
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "name": format!("Recipe #{id}"),
                }))
                .unwrap()
            })
            .collect()
    }

    fn service(count: u32) -> Service<MockDirectory, MemoryStorage> {
        Service::new(
            MockDirectory {
                recipes: collection(count),
                ..MockDirectory::default()
            },
            MemoryStorage::default(),
        )
    }

    #[tokio::test]
    async fn selects_featured_previews() {
        let previews = service(8)
            .execute(recipes::Featured::by(list::Featured { limit: 5 }))
            .await
            .unwrap();

        assert_eq!(previews.len(), 5);
        assert_eq!(AsRef::<str>::as_ref(&previews[0].name), "Recipe #1");
    }

    #[tokio::test]
    async fn selects_whole_collection() {
        let all = service(23)
            .execute(recipes::All::by(list::All))
            .await
            .unwrap();

        assert_eq!(all.len(), 23);
    }

    #[tokio::test]
    async fn selects_recipe_by_id() {
        let service = service(3);

        let found = service
            .execute(ById::by(recipe::Id::from(2)))
            .await
            .unwrap();
        assert_eq!(found.map(|r| r.id), Some(2.into()));

        let missing = service
            .execute(ById::by(recipe::Id::from(42)))
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn propagates_directory_failure() {
        let service = Service::new(
            MockDirectory {
                offline: true,
                ..MockDirectory::default()
            },
            MemoryStorage::default(),
        );

        assert!(service.execute(recipes::All::by(list::All)).await.is_err());
    }
}
