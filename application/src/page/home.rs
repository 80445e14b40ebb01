//! Home page.

use derive_more::Display;
use service::{
    domain::recipe,
    query,
    read::{self, recipe::list},
};
use tracing as log;

use crate::Error;

/// Message replacing the featured strip when it cannot be loaded.
pub const UNAVAILABLE: &str = "Could not load recipes.";

/// [`Home`] page configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of featured recipes to preview.
    pub featured: usize,

    /// Number of times the featured strip repeats.
    pub repeat: usize,
}

/// Home page, previewing a few featured recipes.
#[derive(Clone, Copy, Debug)]
pub struct Home {
    /// Configuration of this [`Home`] page.
    config: Config,
}

impl Home {
    /// Creates a new [`Home`] page with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the query loading the featured recipes.
    #[must_use]
    pub fn load(&self) -> query::recipes::Featured {
        query::recipes::Featured::by(list::Featured {
            limit: self.config.featured,
        })
    }

    /// Applies the result of the [`Home::load()`] query.
    #[must_use]
    pub fn finish_load(
        &self,
        result: Result<Vec<read::Preview>, Error>,
    ) -> Featured {
        match result {
            Ok(previews) => Featured::Strip(Strip {
                previews,
                repeat: self.config.repeat,
            }),
            Err(e) => {
                log::error!(
                    "failed to load featured recipes: {e}\n{}",
                    e.trace(),
                );
                Featured::Unavailable
            }
        }
    }
}

/// Featured section of the [`Home`] page.
#[derive(Clone, Debug, PartialEq)]
pub enum Featured {
    /// Featured recipes are loaded.
    Strip(Strip),

    /// Featured recipes failed to load.
    Unavailable,
}

/// Looping strip of the featured [`read::Preview`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Strip {
    /// Featured [`read::Preview`]s in their original order.
    pub previews: Vec<read::Preview>,

    /// Number of times the [`read::Preview`]s repeat.
    pub repeat: usize,
}

impl Strip {
    /// Iterates over the [`read::Preview`]s as they appear in the strip,
    /// repeated to loop seamlessly.
    pub fn marquee(&self) -> impl Iterator<Item = &read::Preview> + '_ {
        (0..self.repeat).flat_map(|_| self.previews.iter())
    }
}

/// Link to the catalog anchored at a recipe.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display("recipes#{_0}")]
pub struct Link(pub recipe::Id);

impl From<&read::Preview> for Link {
    fn from(preview: &read::Preview) -> Self {
        Self(preview.id)
    }
}
