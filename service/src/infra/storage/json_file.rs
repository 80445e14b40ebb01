//! JSON file [`Storage`] implementation.

use std::{collections::BTreeMap, io, path::PathBuf};

use common::operations::{By, Delete, Insert, Select};
use derive_more::{Display, Error as StdError, From};
use tokio::fs;
use tracerr::Traced;

use crate::{
    domain::user::session,
    infra::{storage, Storage},
};

/// Values persisted by a [`JsonFile`], keyed by their names.
type Values = BTreeMap<String, String>;

/// [`Storage`] persisting values as a single JSON object in a file.
#[derive(Clone, Debug)]
pub struct JsonFile {
    /// Path to the file holding the values.
    path: PathBuf,
}

impl JsonFile {
    /// Creates a new [`JsonFile`] storage backed by the file at the provided
    /// `path`.
    ///
    /// The file is created on the first write, together with its missing
    /// parent directories.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads all the [`Values`] from the file.
    ///
    /// A missing or empty file holds no [`Values`].
    async fn read(&self) -> Result<Values, Traced<Error>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Values::new())
            }
            Err(e) => return Err(tracerr::new!(Error::Io(e))),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Values::new());
        }
        serde_json::from_slice(&bytes).map_err(tracerr::from_and_wrap!(=> Error))
    }

    /// Writes all the [`Values`] to the file, replacing its contents.
    async fn write(&self, values: &Values) -> Result<(), Traced<Error>> {
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(dir)
                .await
                .map_err(tracerr::from_and_wrap!(=> Error))?;
        }
        let bytes = serde_json::to_vec_pretty(values)
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        fs::write(&self.path, bytes)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl Storage<Select<By<Option<String>, session::Key>>> for JsonFile {
    type Ok = Option<String>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<String>, session::Key>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut values =
            self.read().await.map_err(tracerr::map_from_and_wrap!())?;
        Ok(values.remove(by.into_inner().as_ref()))
    }
}

impl Storage<Insert<(session::Key, String)>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert((key, value)): Insert<(session::Key, String)>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut values =
            self.read().await.map_err(tracerr::map_from_and_wrap!())?;
        drop(values.insert(key.as_ref().to_owned(), value));
        self.write(&values)
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Storage<Delete<session::Key>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(key): Delete<session::Key>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut values =
            self.read().await.map_err(tracerr::map_from_and_wrap!())?;
        if values.remove(key.as_ref()).is_none() {
            return Ok(());
        }
        self.write(&values)
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

/// [`JsonFile`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to access the file.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// File contents are not a JSON object of strings.
    #[display("Malformed JSON: {_0}")]
    Json(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use std::{env, process};

    use common::{
        operations::{By, Delete, Insert, Select},
        Handler as _,
    };

    use crate::domain::user::session::Key;

    use super::JsonFile;

    fn storage(name: &str) -> JsonFile {
        let dir = env::temp_dir()
            .join(format!("recipe-book-{}-{name}", process::id()));
        _ = std::fs::remove_dir_all(&dir);
        JsonFile::new(dir.join("nested").join("storage.json"))
    }

    #[tokio::test]
    async fn reads_nothing_from_missing_file() {
        let storage = storage("missing");

        let value = storage
            .execute(Select(By::<Option<String>, _>::new(Key::FirstName)))
            .await
            .unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn persists_values() {
        let storage = storage("persists");

        storage
            .execute(Insert((Key::FirstName, "Emily".to_owned())))
            .await
            .unwrap();

        let reopened = JsonFile::new(storage.path.clone());
        let value = reopened
            .execute(Select(By::<Option<String>, _>::new(Key::FirstName)))
            .await
            .unwrap();
        assert_eq!(value.as_deref(), Some("Emily"));

        let contents = std::fs::read_to_string(&storage.path).unwrap();
        assert!(contents.contains(r#""firstName": "Emily""#));
    }

    #[tokio::test]
    async fn deletes_values() {
        let storage = storage("deletes");

        storage
            .execute(Insert((Key::FirstName, "Emily".to_owned())))
            .await
            .unwrap();
        storage.execute(Delete(Key::FirstName)).await.unwrap();
        storage.execute(Delete(Key::Token)).await.unwrap();

        let value = storage
            .execute(Select(By::<Option<String>, _>::new(Key::FirstName)))
            .await
            .unwrap();
        assert_eq!(value, None);
    }
}
