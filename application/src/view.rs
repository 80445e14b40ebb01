//! Terminal views of the pages.

use std::fmt;

use itertools::Itertools as _;
use service::read::{
    self,
    recipe::list::{self, CuisineSelection},
};

use crate::page::{
    catalog::{self, DetailView},
    detail, home,
};

/// Message shown while a recipe is being fetched.
pub const LOADING_RECIPE: &str = "Loading recipe...";

/// Message shown when a recipe has no tags.
pub const NO_TAGS: &str = "No tags";

/// View of [`read::Stars`].
#[derive(Clone, Copy, Debug)]
pub struct Stars<'a>(pub &'a read::Stars);

impl fmt::Display for Stars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let read::Stars {
            full, half, empty, ..
        } = *self.0;
        for _ in 0..full {
            f.write_str("★")?;
        }
        if half {
            f.write_str("⯪")?;
        }
        for _ in 0..empty {
            f.write_str("☆")?;
        }
        write!(f, " {} ({})", self.0.number(), self.0.label())
    }
}

/// View of a [`read::Card`].
#[derive(Clone, Copy, Debug)]
pub struct Card<'a> {
    /// Viewed [`read::Card`].
    pub card: &'a read::Card,

    /// Availability of the detail view.
    pub detail_view: DetailView,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.card;
        writeln!(f, "#{} {}", c.id, c.name)?;
        writeln!(f, "  [{}] [{}]", c.cuisine, c.difficulty)?;
        writeln!(f, "  {}", Stars(&c.stars))?;
        writeln!(
            f,
            "  {} min | serves {}",
            c.total_time_minutes, c.servings,
        )?;
        writeln!(f, "  {}", c.ingredients)?;
        write!(f, "  {}", c.image)?;
        match self.detail_view {
            DetailView::Enabled => {
                write!(f, "\n  View Full Recipe: `view {}`", c.id)
            }
            DetailView::Disabled => Ok(()),
        }
    }
}

/// View of a [`catalog::Render`] batch.
#[derive(Clone, Copy, Debug)]
pub struct Render<'a>(pub &'a catalog::Render);

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        if r.reset {
            writeln!(f, "{}", r.found)?;
        }
        for card in &r.cards {
            writeln!(
                f,
                "\n{}",
                Card {
                    card,
                    detail_view: r.detail_view,
                },
            )?;
        }
        if r.show_more {
            write!(f, "\nShow more: `more`")
        } else {
            Ok(())
        }
    }
}

/// View of the [`list::Cuisines`] selection.
#[derive(Clone, Copy, Debug)]
pub struct Cuisines<'a> {
    /// Selectable [`list::Cuisines`].
    pub cuisines: &'a list::Cuisines,

    /// Currently selected [`CuisineSelection`].
    pub selected: &'a CuisineSelection,
}

impl fmt::Display for Cuisines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |selected: bool| if selected { '*' } else { ' ' };
        write!(
            f,
            "{} {} ({})",
            mark(*self.selected == CuisineSelection::All),
            list::Cuisines::ALL_LABEL,
            CuisineSelection::ALL,
        )?;
        for cuisine in self.cuisines.iter() {
            let selected = matches!(
                self.selected,
                CuisineSelection::Only(c) if c == cuisine,
            );
            write!(f, "\n{} {cuisine}", mark(selected))?;
        }
        Ok(())
    }
}

/// View of the featured [`home::Featured`] section.
#[derive(Clone, Copy, Debug)]
pub struct Featured<'a>(pub &'a home::Featured);

impl fmt::Display for Featured<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            home::Featured::Strip(strip) => write!(
                f,
                "{}",
                strip.marquee().format_with("\n", |p, out| {
                    out(&format_args!(
                        "{} <{}> -> {}",
                        p.name,
                        p.image(),
                        home::Link::from(p),
                    ))
                }),
            ),
            home::Featured::Unavailable => f.write_str(home::UNAVAILABLE),
        }
    }
}

/// View of the [`detail::Modal`] state.
#[derive(Clone, Copy, Debug)]
pub struct Modal<'a>(pub &'a detail::State);

impl fmt::Display for Modal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            detail::State::Closed => Ok(()),
            detail::State::Loading(_) => f.write_str(LOADING_RECIPE),
            detail::State::Shown(d) => write!(f, "{}", Detail(d)),
            detail::State::Failed(e) => {
                write!(f, "Error loading recipe: {e}")
            }
        }
    }
}

/// View of a [`read::Detail`].
#[derive(Clone, Copy, Debug)]
pub struct Detail<'a>(pub &'a read::Detail);

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;
        writeln!(f, "{}", d.name)?;
        writeln!(f, "{}", d.image)?;
        writeln!(
            f,
            "Prep: {} min | Cook: {} min | Servings: {}",
            d.prep_time_minutes, d.cook_time_minutes, d.servings,
        )?;
        writeln!(
            f,
            "Difficulty: {} | Cuisine: {}",
            d.difficulty, d.cuisine,
        )?;
        writeln!(f, "Calories: {} cal/serving", d.calories)?;
        writeln!(f, "{} | {} reviews", Stars(&d.stars), d.reviews)?;
        if d.tags.is_empty() {
            writeln!(f, "Tags: {NO_TAGS}")?;
        } else {
            writeln!(f, "Tags: {}", d.tags.iter().format(", "))?;
        }
        writeln!(f, "\nIngredients:")?;
        for ingredient in &d.ingredients {
            writeln!(f, "  - {ingredient}")?;
        }
        write!(f, "\nInstructions:")?;
        for (n, step) in d.instructions.iter().enumerate() {
            write!(f, "\n  {}. {step}", n + 1)?;
        }
        Ok(())
    }
}
