//! [DummyJSON] [`Directory`] implementation.
//!
//! [DummyJSON]: https://dummyjson.com

use common::operations::{By, Select, Verify};
use derive_more::{Display, Error as StdError, From};
use reqwest::{StatusCode, Url};
use secrecy::ExposeSecret as _;
use serde::{de::DeserializeOwned, Deserialize};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        recipe,
        user::{self, Verification},
        Recipe, User,
    },
    infra::{directory, Directory},
    read::{self, recipe::list},
};

/// [`DummyJson`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the [DummyJSON] API.
    ///
    /// [DummyJSON]: https://dummyjson.com
    pub base_url: String,
}

/// [DummyJSON] [`Directory`] client.
///
/// [DummyJSON]: https://dummyjson.com
#[derive(Clone, Debug)]
pub struct DummyJson {
    /// HTTP client performing requests.
    client: reqwest::Client,

    /// Base URL every request path is appended to.
    base_url: Url,
}

impl DummyJson {
    /// Creates a new [`DummyJson`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the configured base URL is invalid or the HTTP client fails to
    /// initialize.
    pub fn new(conf: &Config) -> Result<Self, Traced<directory::Error>> {
        let base_url = Url::parse(&conf.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| Error::InvalidBaseUrl(conf.base_url.clone()))
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        Ok(Self { client, base_url })
    }

    /// Returns [`Url`] of the provided path `segments` under the base URL.
    fn url<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            _ = path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetches a JSON value from the provided [`Url`].
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, Traced<Error>> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(tracerr::new!(Error::UnexpectedStatus(status)));
        }

        response
            .json::<T>()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

/// Response wrapping a list of recipes.
#[derive(Debug, Deserialize)]
struct Recipes<T> {
    /// Listed recipes.
    #[serde(default = "Vec::new")]
    recipes: Vec<T>,
}

/// Response wrapping a list of user accounts.
#[derive(Debug, Deserialize)]
struct Users {
    /// Listed user accounts.
    #[serde(default)]
    users: Vec<Account>,
}

/// User account as exposed by [DummyJSON].
///
/// [DummyJSON]: https://dummyjson.com
#[derive(Debug, Deserialize)]
struct Account {
    /// [`User`] owning this [`Account`].
    #[serde(flatten)]
    user: User,

    /// Plain text password of this [`Account`].
    password: String,
}

impl Directory<Select<By<Vec<read::Preview>, list::Featured>>> for DummyJson {
    type Ok = Vec<read::Preview>;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::Preview>, list::Featured>>,
    ) -> Result<Self::Ok, Self::Err> {
        let list::Featured { limit } = by.into_inner();

        let mut url = self.url(["recipes"]);
        _ = url
            .query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("select", "name,image,id");

        self.fetch::<Recipes<read::Preview>>(url)
            .await
            .map(|r| r.recipes)
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Directory<Select<By<Vec<Recipe>, list::All>>> for DummyJson {
    type Ok = Vec<Recipe>;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Recipe>, list::All>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut url = self.url(["recipes"]);
        _ = url.query_pairs_mut().append_pair("limit", "0");

        self.fetch::<Recipes<Recipe>>(url)
            .await
            .map(|r| r.recipes)
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Directory<Select<By<Option<Recipe>, recipe::Id>>> for DummyJson {
    type Ok = Option<Recipe>;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Recipe>, recipe::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner().to_string();

        match self.fetch::<Recipe>(self.url(["recipes", id.as_str()])).await {
            Ok(recipe) => Ok(Some(recipe)),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
        .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Directory<Verify<user::Credentials>> for DummyJson {
    type Ok = Verification;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        Verify(credentials): Verify<user::Credentials>,
    ) -> Result<Self::Ok, Self::Err> {
        let user::Credentials { username, password } = credentials;

        let mut url = self.url(["users", "filter"]);
        _ = url
            .query_pairs_mut()
            .append_pair("key", "username")
            .append_pair("value", username.as_ref());

        let Users { users } = self
            .fetch::<Users>(url)
            .await
            .map_err(tracerr::map_from_and_wrap!())?;

        let Some(account) =
            users.into_iter().find(|a| a.user.username == username)
        else {
            return Ok(Verification::UnknownUser);
        };

        Ok(if account.password == password.expose_secret().as_ref() {
            Verification::Verified(account.user)
        } else {
            Verification::WrongPassword
        })
    }
}

/// [`DummyJson`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Configured base URL cannot be used.
    #[display("Invalid base URL `{_0}`")]
    #[from(ignore)]
    InvalidBaseUrl(#[error(not(source))] String),

    /// HTTP request failed to complete.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),

    /// HTTP response has a non-success status.
    #[display("Unexpected HTTP status: {_0}")]
    #[from(ignore)]
    UnexpectedStatus(#[error(not(source))] StatusCode),
}

impl Error {
    /// Indicates whether the requested resource doesn't exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnexpectedStatus(StatusCode::NOT_FOUND))
    }
}
