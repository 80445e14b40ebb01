//! In-memory [`Directory`] and [`Storage`] doubles.

use std::{cell::RefCell, collections::HashMap};

use common::operations::{By, Delete, Insert, Select, Verify};
use reqwest::StatusCode;
use secrecy::ExposeSecret as _;
use tracerr::Traced;

use crate::{
    domain::{
        recipe,
        user::{self, session, Verification},
        Recipe, User,
    },
    infra::{directory, dummy_json, storage, Directory, Storage},
    read::{self, recipe::list},
};

/// [`Directory`] serving fixed recipes and accounts, or failing every
/// request when offline.
#[derive(Debug, Default)]
pub(crate) struct MockDirectory {
    /// Served recipes.
    pub(crate) recipes: Vec<Recipe>,

    /// Served accounts with their passwords.
    pub(crate) accounts: Vec<(User, String)>,

    /// Indicator whether every request fails.
    pub(crate) offline: bool,
}

impl MockDirectory {
    /// Fails if this [`MockDirectory`] is offline.
    fn reach(&self) -> Result<(), Traced<directory::Error>> {
        if self.offline {
            return Err(tracerr::new!(directory::Error::from(
                dummy_json::Error::UnexpectedStatus(
                    StatusCode::SERVICE_UNAVAILABLE,
                ),
            )));
        }
        Ok(())
    }
}

impl Directory<Select<By<Vec<read::Preview>, list::Featured>>>
    for MockDirectory
{
    type Ok = Vec<read::Preview>;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::Preview>, list::Featured>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.reach()?;
        Ok(self
            .recipes
            .iter()
            .take(by.into_inner().limit)
            .map(|r| read::Preview {
                id: r.id,
                name: r.name.clone(),
                image: r.image.clone(),
            })
            .collect())
    }
}

impl Directory<Select<By<Vec<Recipe>, list::All>>> for MockDirectory {
    type Ok = Vec<Recipe>;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Recipe>, list::All>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.reach()?;
        Ok(self.recipes.clone())
    }
}

impl Directory<Select<By<Option<Recipe>, recipe::Id>>> for MockDirectory {
    type Ok = Option<Recipe>;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Recipe>, recipe::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.reach()?;
        let id = by.into_inner();
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }
}

impl Directory<Verify<user::Credentials>> for MockDirectory {
    type Ok = Verification;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        Verify(credentials): Verify<user::Credentials>,
    ) -> Result<Self::Ok, Self::Err> {
        self.reach()?;
        let Some((user, password)) = self
            .accounts
            .iter()
            .find(|(u, _)| u.username == credentials.username)
        else {
            return Ok(Verification::UnknownUser);
        };
        Ok(
            if password.as_str()
                == credentials.password.expose_secret().as_ref()
            {
                Verification::Verified(user.clone())
            } else {
                Verification::WrongPassword
            },
        )
    }
}

/// [`Storage`] keeping values in memory.
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    /// Stored values.
    pub(crate) values: RefCell<HashMap<session::Key, String>>,
}

impl Storage<Select<By<Option<String>, session::Key>>> for MemoryStorage {
    type Ok = Option<String>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<String>, session::Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.values.borrow().get(by.inner()).cloned())
    }
}

impl Storage<Insert<(session::Key, String)>> for MemoryStorage {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert((key, value)): Insert<(session::Key, String)>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.values.borrow_mut().insert(key, value));
        Ok(())
    }
}

impl Storage<Delete<session::Key>> for MemoryStorage {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(key): Delete<session::Key>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.values.borrow_mut().remove(&key));
        Ok(())
    }
}
