//! [`Context`]-related definitions.

use service::{
    domain::user::Session,
    infra::{DummyJson, JsonFile},
    query::{self, Query as _},
};

use crate::{define_error, AsError as _, Config, Error, Service};

/// Application context.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// [`Config`] of the application.
    config: Config,
}

impl Context {
    /// Creates a new [`Context`] out of the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the recipe directory client fails to initialize.
    pub fn new(config: Config) -> Result<Self, Error> {
        let directory = DummyJson::new(&config.directory.clone().into())
            .map_err(|e| e.into_error())?;
        let storage = JsonFile::new(config.storage.path.clone());
        Ok(Self {
            service: Service::new(directory, storage),
            config,
        })
    }

    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns [`Config`] of this [`Context`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current [`Session`], if any.
    ///
    /// # Errors
    ///
    /// If the persisted session cannot be read.
    pub async fn current_session(&self) -> Result<Option<Session>, Error> {
        self.service
            .execute(query::session::Current)
            .await
            .map_err(|e| e.into_error())
    }

    /// Returns the current [`Session`].
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - nobody is logged in;
    /// - the persisted session cannot be read.
    pub async fn require_session(&self) -> Result<Session, Error> {
        self.current_session()
            .await?
            .ok_or_else(|| AuthError::LoginRequired.into())
    }
}

define_error! {
    enum AuthError {
        #[code = "LOGIN_REQUIRED"]
        #[message = "Please log in first: `recipe-book login -u <username> -p <password>`."]
        LoginRequired,
    }
}
