//! Detail view of a single recipe.

use service::{
    domain::{recipe, Recipe},
    query, read,
};
use tracing as log;

use crate::{define_error, Error};

use super::{catalog::DetailView, Generation, Ticket};

/// Modal overlay showing the full details of a recipe.
#[derive(Debug)]
pub struct Modal {
    /// Availability of this [`Modal`].
    detail_view: DetailView,

    /// Fetches started by this [`Modal`].
    generation: Generation,

    /// Current [`State`] of this [`Modal`].
    state: State,
}

/// State of a [`Modal`].
#[derive(Clone, Debug, Default)]
pub enum State {
    /// [`Modal`] is not shown.
    #[default]
    Closed,

    /// Recipe is being fetched.
    Loading(recipe::Id),

    /// Recipe is fetched and shown.
    Shown(Box<read::Detail>),

    /// Recipe failed to be fetched.
    Failed(Error),
}

impl Modal {
    /// Creates a new closed [`Modal`].
    #[must_use]
    pub fn new(detail_view: DetailView) -> Self {
        Self {
            detail_view,
            generation: Generation::default(),
            state: State::Closed,
        }
    }

    /// Returns the current [`State`] of this [`Modal`].
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Opens this [`Modal`] for the recipe with the provided [`recipe::Id`],
    /// returning the query to execute and the [`Ticket`] to resolve it with.
    ///
    /// Supersedes any recipe still being fetched.
    ///
    /// # Errors
    ///
    /// With [`DetailError::Unavailable`] if the detail view is disabled.
    pub fn open(
        &mut self,
        id: recipe::Id,
    ) -> Result<(query::recipe::ById, Ticket), Error> {
        if self.detail_view == DetailView::Disabled {
            return Err(DetailError::Unavailable.into());
        }
        self.state = State::Loading(id);
        Ok((query::recipe::ById::by(id), self.generation.next()))
    }

    /// Applies the result of the query started by [`Modal::open()`].
    ///
    /// Returns `false` if the result is dropped, because the provided
    /// [`Ticket`] is superseded by a newer [`Modal::open()`] or the [`Modal`]
    /// was closed meanwhile.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<Option<Recipe>, Error>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("dropping superseded recipe details");
            return false;
        }

        self.state = match result {
            Ok(Some(recipe)) => State::Shown(Box::new(recipe.into())),
            Ok(None) => State::Failed(DetailError::RecipeNotFound.into()),
            Err(e) => {
                log::error!("failed to load recipe: {e}\n{}", e.trace());
                State::Failed(e)
            }
        };
        true
    }

    /// Closes this [`Modal`], dropping the result of any recipe still being
    /// fetched.
    pub fn close(&mut self) {
        self.generation.invalidate();
        self.state = State::Closed;
    }
}

define_error! {
    enum DetailError {
        #[code = "RECIPE_NOT_FOUND"]
        #[message = "Recipe not found"]
        RecipeNotFound,

        #[code = "DETAIL_VIEW_DISABLED"]
        #[message = "Recipe details are not available."]
        Unavailable,
    }
}
