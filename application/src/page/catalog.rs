//! Catalog page.

use common::pagination::Cursor;
use service::{
    domain::{user::Session, Recipe},
    query,
    read::{
        self,
        recipe::list::{self, CuisineSelection, Cuisines, Filter, Found},
    },
};
use tracing as log;

use crate::Error;

use super::{Generation, Ticket};

/// Message replacing the catalog when the recipes cannot be loaded.
pub const UNAVAILABLE: &str =
    "Failed to load recipes. Try reloading the page.";

/// [`Catalog`] page configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of [`read::Card`]s rendered at once.
    pub page_size: usize,

    /// Availability of the detail view on rendered [`read::Card`]s.
    pub detail_view: DetailView,
}

/// Availability of the detail view on the [`Catalog`] cards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DetailView {
    /// Cards open the full recipe details.
    Enabled,

    /// Cards show no way to open the full recipe details.
    Disabled,
}

/// Catalog page, browsing the whole recipe collection.
///
/// Requires a [`Session`] to be created.
#[derive(Debug)]
pub struct Catalog {
    /// [`Session`] of the browsing user.
    session: Session,

    /// Configuration of this [`Catalog`].
    config: Config,

    /// [`Filter`] narrowing the recipe collection.
    filter: Filter,

    /// Fetches of the recipe collection started by this [`Catalog`].
    generation: Generation,

    /// Current [`State`] of this [`Catalog`].
    state: State,
}

/// State of a [`Catalog`].
#[derive(Debug)]
enum State {
    /// Recipe collection is being fetched.
    Loading,

    /// Recipe collection is fetched.
    Ready(Ready),

    /// Recipe collection failed to be fetched.
    Failed,
}

/// Fetched recipe collection with the part of it currently rendered.
#[derive(Debug)]
struct Ready {
    /// Whole recipe collection in the fetched order.
    recipes: Vec<Recipe>,

    /// [`Cuisines`] of the recipe collection.
    cuisines: Cuisines,

    /// Indices of the recipes passing the [`Filter`].
    filtered: Vec<usize>,

    /// [`Cursor`] over the filtered recipes counting the rendered ones.
    cursor: Cursor,
}

impl Ready {
    /// Re-derives the filtered recipes, resetting the [`Cursor`].
    fn refilter(&mut self, filter: &Filter) {
        self.filtered = self
            .recipes
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(r))
            .map(|(i, _)| i)
            .collect();
        self.cursor.reset();
    }

    /// Renders the next page of the filtered recipes.
    fn render(&mut self, reset: bool, config: Config) -> Render {
        let total = self.filtered.len();
        let page = self.cursor.advance(config.page_size, total);
        let cards = page
            .of(&self.filtered)
            .iter()
            .filter_map(|i| self.recipes.get(*i))
            .map(read::Card::from)
            .collect();
        Render {
            reset,
            cards,
            found: Found(total),
            show_more: page.has_more,
            detail_view: config.detail_view,
        }
    }
}

/// Batch of [`read::Card`]s to render.
#[derive(Clone, Debug, PartialEq)]
pub struct Render {
    /// Indicator whether the previously rendered [`read::Card`]s are cleared.
    pub reset: bool,

    /// [`read::Card`]s appended to the rendered ones.
    pub cards: Vec<read::Card>,

    /// Number of recipes passing the [`Filter`].
    pub found: Found,

    /// Indicator whether more [`read::Card`]s can be rendered.
    pub show_more: bool,

    /// Availability of the detail view on the [`read::Card`]s.
    pub detail_view: DetailView,
}

/// Outcome of a [`Catalog`] load.
#[derive(Clone, Debug, PartialEq)]
pub enum Loaded {
    /// Recipe collection is loaded and its first page is rendered.
    Ready {
        /// [`Cuisines`] to select from.
        cuisines: Cuisines,

        /// First page of the recipe collection.
        render: Render,
    },

    /// Recipe collection failed to load.
    Failed,
}

impl Catalog {
    /// Creates a new [`Catalog`] for the provided [`Session`].
    #[must_use]
    pub fn new(session: Session, config: Config) -> Self {
        Self {
            session,
            config,
            filter: Filter::default(),
            generation: Generation::default(),
            state: State::Loading,
        }
    }

    /// Returns the [`Session`] this [`Catalog`] is browsed in.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current [`Filter`] of this [`Catalog`].
    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns the [`Cuisines`] of the loaded recipe collection, if any.
    #[must_use]
    pub fn cuisines(&self) -> Option<&Cuisines> {
        match &self.state {
            State::Ready(ready) => Some(&ready.cuisines),
            State::Loading | State::Failed => None,
        }
    }

    /// Indicates whether the recipe collection is being loaded.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, State::Loading)
    }

    /// Starts loading the recipe collection, returning the query to execute
    /// and the [`Ticket`] to finish it with.
    pub fn begin_load(&mut self) -> (query::recipes::All, Ticket) {
        self.state = State::Loading;
        (
            query::recipes::All::by(list::All),
            self.generation.next(),
        )
    }

    /// Applies the result of the query started by [`Catalog::begin_load()`].
    ///
    /// Returns [`None`] if the provided [`Ticket`] is superseded by a newer
    /// load.
    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Recipe>, Error>,
    ) -> Option<Loaded> {
        if !self.generation.is_current(ticket) {
            log::debug!("dropping superseded recipes load");
            return None;
        }

        let recipes = match result {
            Ok(recipes) => recipes,
            Err(e) => {
                log::error!("failed to load recipes: {e}\n{}", e.trace());
                self.state = State::Failed;
                return Some(Loaded::Failed);
            }
        };

        let mut ready = Ready {
            cuisines: Cuisines::of(&recipes),
            recipes,
            filtered: Vec::new(),
            cursor: Cursor::new(),
        };
        ready.refilter(&self.filter);
        let render = ready.render(true, self.config);
        let cuisines = ready.cuisines.clone();
        self.state = State::Ready(ready);

        Some(Loaded::Ready { cuisines, render })
    }

    /// Sets the search text, re-deriving the filtered recipes.
    ///
    /// Surrounding whitespace of the `query` is ignored.
    ///
    /// Returns [`None`] if the recipe collection is not loaded yet.
    pub fn set_query(&mut self, query: &str) -> Option<Render> {
        query.trim().clone_into(&mut self.filter.query);
        self.refilter()
    }

    /// Selects the cuisine, re-deriving the filtered recipes.
    ///
    /// Returns [`None`] if the recipe collection is not loaded yet.
    pub fn set_cuisine(&mut self, cuisine: CuisineSelection) -> Option<Render> {
        self.filter.cuisine = cuisine;
        self.refilter()
    }

    /// Renders the next page of the filtered recipes, keeping the rendered
    /// ones.
    ///
    /// Returns [`None`] if the recipe collection is not loaded yet.
    pub fn show_more(&mut self) -> Option<Render> {
        match &mut self.state {
            State::Ready(ready) => Some(ready.render(false, self.config)),
            State::Loading | State::Failed => None,
        }
    }

    /// Re-derives the filtered recipes and renders their first page.
    fn refilter(&mut self) -> Option<Render> {
        match &mut self.state {
            State::Ready(ready) => {
                ready.refilter(&self.filter);
                Some(ready.render(true, self.config))
            }
            State::Loading | State::Failed => None,
        }
    }
}
