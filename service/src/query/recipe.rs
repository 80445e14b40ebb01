//! [`Query`] collection related to a single [`Recipe`].

use common::operations::By;

use crate::domain::{recipe, Recipe};
#[cfg(doc)]
use crate::Query;

use super::DirectoryQuery;

/// Queries a [`Recipe`] by its [`recipe::Id`].
pub type ById = DirectoryQuery<By<Option<Recipe>, recipe::Id>>;
