//! [`Recipe`]-related read definitions.

use serde::Deserialize;

use crate::domain::{recipe, Recipe};

/// Image shown in place of a missing [`Recipe`] image.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=Recipe";

/// Text shown in place of a missing [`Recipe`] value.
pub const PLACEHOLDER_TEXT: &str = "-";

/// Review count shown for a [`Recipe`] the directory reports none for.
pub const DEFAULT_REVIEW_COUNT: u32 = 2;

/// Number of ingredients listed on a [`Card`].
pub const CARD_INGREDIENTS: usize = 6;

/// Short preview of a [`Recipe`], as selected for the featured strip.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Preview {
    /// ID of the previewed [`Recipe`].
    pub id: recipe::Id,

    /// Name of the previewed [`Recipe`].
    pub name: recipe::Name,

    /// Image URL of the previewed [`Recipe`].
    #[serde(default)]
    pub image: Option<String>,
}

impl Preview {
    /// Returns the image URL of this [`Preview`], falling back to the
    /// [`PLACEHOLDER_IMAGE`].
    #[must_use]
    pub fn image(&self) -> &str {
        self.image
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Star visualization of a [`recipe::Rating`] on a fixed five-unit scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stars {
    /// Number of fully filled units.
    pub full: u8,

    /// Indicator whether a half filled unit follows the full ones.
    pub half: bool,

    /// Number of empty units completing the scale.
    pub empty: u8,

    /// Visualized rating value.
    pub rating: f64,
}

impl Stars {
    /// Returns the rating value formatted with one decimal place.
    #[must_use]
    pub fn number(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Returns the rating label in the `<rating> / 5` form.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.1} / {}", self.rating, recipe::Rating::MAX)
    }
}

impl From<recipe::Rating> for Stars {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped into `0..=5`"
    )]
    fn from(rating: recipe::Rating) -> Self {
        let rating = rating.value();
        let full = rating.floor();
        let half = rating - full >= 0.5;
        let full = full as u8;
        Self {
            full,
            half,
            empty: recipe::Rating::MAX - full - u8::from(half),
            rating,
        }
    }
}

/// Catalog card summarizing a [`Recipe`].
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// ID of the summarized [`Recipe`].
    pub id: recipe::Id,

    /// Image URL.
    pub image: String,

    /// Cuisine badge.
    pub cuisine: String,

    /// Difficulty badge.
    pub difficulty: String,

    /// Name of the [`Recipe`].
    pub name: String,

    /// Rating [`Stars`].
    pub stars: Stars,

    /// Preparation and cooking time in minutes.
    pub total_time_minutes: u32,

    /// Number of servings.
    pub servings: String,

    /// First [`CARD_INGREDIENTS`] ingredients, comma separated.
    pub ingredients: String,
}

impl From<&Recipe> for Card {
    fn from(recipe: &Recipe) -> Self {
        let ingredients = recipe
            .ingredients
            .iter()
            .take(CARD_INGREDIENTS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: recipe.id,
            image: recipe.image().unwrap_or(PLACEHOLDER_IMAGE).to_owned(),
            cuisine: or_placeholder(recipe.cuisine.as_ref()),
            difficulty: or_placeholder(recipe.difficulty.as_ref()),
            name: recipe.name.to_string(),
            stars: recipe.rating.into(),
            total_time_minutes: recipe.total_time_minutes(),
            servings: or_placeholder(recipe.servings.as_ref()),
            ingredients: if ingredients.is_empty() {
                PLACEHOLDER_TEXT.to_owned()
            } else {
                ingredients
            },
        }
    }
}

/// Full [`Recipe`] details.
#[derive(Clone, Debug, PartialEq)]
pub struct Detail {
    /// ID of the detailed [`Recipe`].
    pub id: recipe::Id,

    /// Hero image URL.
    pub image: String,

    /// Name of the [`Recipe`].
    pub name: String,

    /// Preparation time in minutes.
    pub prep_time_minutes: u32,

    /// Cooking time in minutes.
    pub cook_time_minutes: u32,

    /// Number of servings.
    pub servings: String,

    /// Difficulty label.
    pub difficulty: String,

    /// Cuisine name.
    pub cuisine: String,

    /// Calories per serving.
    pub calories: String,

    /// Rating [`Stars`].
    pub stars: Stars,

    /// Number of reviews.
    pub reviews: u32,

    /// Tags, possibly empty.
    pub tags: Vec<String>,

    /// All the ingredients.
    pub ingredients: Vec<String>,

    /// Ordered instructions.
    pub instructions: Vec<String>,
}

impl From<Recipe> for Detail {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            image: recipe.image().unwrap_or(PLACEHOLDER_IMAGE).to_owned(),
            servings: or_placeholder(recipe.servings.as_ref()),
            difficulty: or_placeholder(recipe.difficulty.as_ref()),
            cuisine: or_placeholder(recipe.cuisine.as_ref()),
            calories: or_placeholder(
                recipe.calories_per_serving.filter(|c| *c > 0).as_ref(),
            ),
            stars: recipe.rating.into(),
            reviews: recipe
                .review_count
                .filter(|c| *c > 0)
                .unwrap_or(DEFAULT_REVIEW_COUNT),
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            name: recipe.name.to_string(),
            tags: recipe.tags,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

/// Formats the provided `value`, falling back to the [`PLACEHOLDER_TEXT`].
fn or_placeholder(value: Option<&impl ToString>) -> String {
    value
        .map(ToString::to_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_TEXT.to_owned())
}

pub mod list {
    //! [`Recipe`] list definitions.

    use std::{collections::BTreeSet, convert::Infallible, str::FromStr};

    use derive_more::{Deref, Display};

    use crate::domain::{recipe, Recipe};

    /// Selector of the whole [`Recipe`] collection.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct All;

    /// Selector of a small sample of [`Recipe`] previews.
    #[derive(Clone, Copy, Debug)]
    pub struct Featured {
        /// Number of previews to select.
        pub limit: usize,
    }

    /// Filter narrowing a [`Recipe`] list.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// Text to search for.
        pub query: String,

        /// [`recipe::Cuisine`] to keep.
        pub cuisine: CuisineSelection,
    }

    impl Filter {
        /// Indicates whether the provided [`Recipe`] passes this [`Filter`].
        #[must_use]
        pub fn matches(&self, recipe: &Recipe) -> bool {
            self.cuisine.matches(recipe) && self.matches_query(recipe)
        }

        /// Indicates whether the provided [`Recipe`] mentions the query of
        /// this [`Filter`] in its name, cuisine, tags or ingredients.
        ///
        /// An empty query matches everything.
        fn matches_query(&self, recipe: &Recipe) -> bool {
            if self.query.is_empty() {
                return true;
            }

            let fields: [&str; 4] = [
                recipe.name.as_ref(),
                recipe.cuisine.as_ref().map_or("", |c| c.as_ref()),
                &recipe.tags.join(" "),
                &recipe.ingredients.join(" "),
            ];
            let haystack = fields.map(str::to_lowercase).join(" | ");

            haystack.contains(&self.query.to_lowercase())
        }
    }

    /// Selection of a cuisine filter.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub enum CuisineSelection {
        /// Every cuisine passes.
        #[default]
        All,

        /// Only the exact [`recipe::Cuisine`] passes.
        Only(recipe::Cuisine),
    }

    impl CuisineSelection {
        /// Value selecting [`CuisineSelection::All`].
        pub const ALL: &'static str = "ALL";

        /// Indicates whether the provided [`Recipe`] passes this
        /// [`CuisineSelection`].
        #[must_use]
        pub fn matches(&self, recipe: &Recipe) -> bool {
            match self {
                Self::All => true,
                Self::Only(cuisine) => recipe.cuisine.as_ref() == Some(cuisine),
            }
        }
    }

    impl FromStr for CuisineSelection {
        type Err = Infallible;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(if s.is_empty() || s == Self::ALL {
                Self::All
            } else {
                Self::Only(s.into())
            })
        }
    }

    /// Distinct, alphabetically sorted, non-empty cuisines of a [`Recipe`]
    /// collection.
    #[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
    pub struct Cuisines(Vec<recipe::Cuisine>);

    impl Cuisines {
        /// Label of the option selecting every cuisine.
        pub const ALL_LABEL: &'static str = "All cuisines";

        /// Collects [`Cuisines`] of the provided [`Recipe`]s.
        #[must_use]
        pub fn of<'r>(recipes: impl IntoIterator<Item = &'r Recipe>) -> Self {
            Self(
                recipes
                    .into_iter()
                    .filter_map(|r| r.cuisine.clone())
                    .filter(|c| !c.is_empty())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect(),
            )
        }
    }

    /// Counter of [`Recipe`]s found by a [`Filter`].
    #[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
    #[display(
        "{_0} recipe{} found",
        if *_0 == 1 { "" } else { "s" }
    )]
    pub struct Found(pub usize);
}

#[cfg(test)]
mod spec {
    use crate::domain::{recipe, Recipe};

    use super::{
        list::{CuisineSelection, Cuisines, Filter, Found},
        Card, Detail, Stars, PLACEHOLDER_IMAGE,
    };

    fn recipe(id: u32, name: &str, cuisine: Option<&str>) -> Recipe {
        Recipe {
            id: id.into(),
            name: name.into(),
            image: None,
            images: vec![],
            cuisine: cuisine.map(Into::into),
            tags: vec![],
            ingredients: vec![],
            instructions: vec![],
            prep_time_minutes: 0,
            cook_time_minutes: 0,
            servings: None,
            difficulty: None,
            rating: recipe::Rating::default(),
            calories_per_serving: None,
            review_count: None,
        }
    }

    #[test]
    fn visualizes_rating() {
        let stars = Stars::from(recipe::Rating::from(3.7));

        assert_eq!(stars.full, 3);
        assert!(stars.half);
        assert_eq!(stars.empty, 1);
        assert_eq!(stars.number(), "3.7");
        assert_eq!(stars.label(), "3.7 / 5");
    }

    #[test]
    fn visualizes_rating_bounds() {
        let stars = Stars::from(recipe::Rating::from(4.4));
        assert_eq!((stars.full, stars.half, stars.empty), (4, false, 1));

        let stars = Stars::from(recipe::Rating::from(5.0));
        assert_eq!((stars.full, stars.half, stars.empty), (5, false, 0));

        let stars = Stars::from(recipe::Rating::default());
        assert_eq!((stars.full, stars.half, stars.empty), (0, false, 5));
        assert_eq!(stars.label(), "0.0 / 5");
    }

    #[test]
    fn builds_card_with_placeholders() {
        let card = Card::from(&recipe(1, "Toast", None));

        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.cuisine, "-");
        assert_eq!(card.difficulty, "-");
        assert_eq!(card.servings, "-");
        assert_eq!(card.ingredients, "-");
    }

    #[test]
    fn lists_first_six_ingredients() {
        let mut r = recipe(1, "Salad", Some("Greek"));
        r.ingredients = ["a", "b", "c", "d", "e", "f", "g"]
            .map(Into::into)
            .to_vec();
        r.prep_time_minutes = 10;
        r.cook_time_minutes = 5;
        r.servings = Some(2);

        let card = Card::from(&r);

        assert_eq!(card.ingredients, "a, b, c, d, e, f");
        assert_eq!(card.total_time_minutes, 15);
        assert_eq!(card.servings, "2");
        assert_eq!(card.cuisine, "Greek");
    }

    #[test]
    fn defaults_review_count() {
        let detail = Detail::from(recipe(1, "Toast", None));
        assert_eq!(detail.reviews, 2);
        assert_eq!(detail.calories, "-");

        let mut r = recipe(1, "Toast", None);
        r.review_count = Some(40);
        r.calories_per_serving = Some(250);
        let detail = Detail::from(r);
        assert_eq!(detail.reviews, 40);
        assert_eq!(detail.calories, "250");
    }

    #[test]
    fn filters_by_exact_cuisine() {
        let filter = Filter {
            query: String::new(),
            cuisine: "Italian".parse().unwrap(),
        };

        assert!(filter.matches(&recipe(1, "Pizza", Some("Italian"))));
        assert!(!filter.matches(&recipe(2, "Pasta", Some("italian"))));
        assert!(!filter.matches(&recipe(3, "Bread", None)));
    }

    #[test]
    fn parses_cuisine_selection() {
        assert_eq!("ALL".parse(), Ok(CuisineSelection::All));
        assert_eq!("".parse(), Ok(CuisineSelection::All));
        assert_eq!(
            "Thai".parse(),
            Ok(CuisineSelection::Only("Thai".into())),
        );
    }

    #[test]
    fn searches_case_insensitively() {
        let mut r = recipe(1, "Chicken Curry", Some("Indian"));
        r.tags = vec!["Spicy".into(), "Dinner".into()];
        r.ingredients = vec!["Coconut Milk".into(), "Garam Masala".into()];

        for query in ["curry", "INDIAN", "spicy", "coconut milk", "masala"] {
            let filter = Filter {
                query: query.into(),
                cuisine: CuisineSelection::All,
            };
            assert!(filter.matches(&r), "`{query}` must match");
        }

        let filter = Filter {
            query: "sushi".into(),
            cuisine: CuisineSelection::All,
        };
        assert!(!filter.matches(&r));
    }

    #[test]
    fn combines_predicates() {
        let filter = Filter {
            query: "rice".into(),
            cuisine: "Asian".parse().unwrap(),
        };

        assert!(filter.matches(&recipe(1, "Fried Rice", Some("Asian"))));
        assert!(!filter.matches(&recipe(2, "Fried Rice", Some("Mexican"))));
        assert!(!filter.matches(&recipe(3, "Noodles", Some("Asian"))));
    }

    #[test]
    fn collects_sorted_distinct_cuisines() {
        let recipes = [
            recipe(1, "A", Some("Thai")),
            recipe(2, "B", Some("Italian")),
            recipe(3, "C", None),
            recipe(4, "D", Some("")),
            recipe(5, "E", Some("Thai")),
            recipe(6, "F", Some("American")),
        ];

        let cuisines = Cuisines::of(&recipes);

        assert_eq!(
            cuisines.iter().map(ToString::to_string).collect::<Vec<_>>(),
            ["American", "Italian", "Thai"],
        );
    }

    #[test]
    fn counts_found() {
        assert_eq!(Found(0).to_string(), "0 recipes found");
        assert_eq!(Found(1).to_string(), "1 recipe found");
        assert_eq!(Found(23).to_string(), "23 recipes found");
    }
}
