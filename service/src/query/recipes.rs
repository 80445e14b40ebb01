//! [`Query`] collection related to multiple [`Recipe`]s.

use common::operations::By;

use crate::{domain::Recipe, read};
#[cfg(doc)]
use crate::Query;

use super::DirectoryQuery;

/// Queries [`read::Preview`]s of a few featured [`Recipe`]s.
pub type Featured =
    DirectoryQuery<By<Vec<read::Preview>, read::recipe::list::Featured>>;

/// Queries the whole [`Recipe`] collection.
pub type All = DirectoryQuery<By<Vec<Recipe>, read::recipe::list::All>>;
