//! [`Recipe`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::Deserialize;

/// Recipe published by the recipe directory.
///
/// Optional fields the directory omits are filled with defaults instead of
/// failing the decoding.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// ID of this [`Recipe`].
    pub id: Id,

    /// [`Name`] of this [`Recipe`].
    pub name: Name,

    /// URL of the main image of this [`Recipe`].
    #[serde(default)]
    pub image: Option<String>,

    /// URLs of additional images of this [`Recipe`].
    #[serde(default)]
    pub images: Vec<String>,

    /// [`Cuisine`] of this [`Recipe`].
    #[serde(default)]
    pub cuisine: Option<Cuisine>,

    /// Tags of this [`Recipe`].
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ingredients of this [`Recipe`].
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Ordered instructions of this [`Recipe`].
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time_minutes: u32,

    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time_minutes: u32,

    /// Number of servings.
    #[serde(default)]
    pub servings: Option<u32>,

    /// [`Difficulty`] of this [`Recipe`].
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    /// [`Rating`] of this [`Recipe`].
    #[serde(default)]
    pub rating: Rating,

    /// Calories per serving.
    #[serde(default)]
    pub calories_per_serving: Option<u32>,

    /// Number of reviews this [`Recipe`] has received.
    #[serde(default)]
    pub review_count: Option<u32>,
}

impl Recipe {
    /// Returns the URL of the image representing this [`Recipe`], if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        let non_empty = |url: &&str| !url.is_empty();
        self.image.as_deref().filter(non_empty).or_else(|| {
            self.images.first().map(String::as_str).filter(non_empty)
        })
    }

    /// Returns the total time in minutes needed to cook this [`Recipe`].
    #[must_use]
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}

/// ID of a [`Recipe`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u32);

/// Name of a [`Recipe`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Name(String);

/// Cuisine a [`Recipe`] belongs to.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Cuisine(String);

impl Cuisine {
    /// Indicates whether this [`Cuisine`] has no name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Difficulty label of a [`Recipe`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Difficulty(String);

/// Rating of a [`Recipe`] on a scale from `0` to [`Rating::MAX`].
#[derive(Clone, Copy, Debug, Default, Deserialize, From, Into, PartialEq)]
pub struct Rating(f64);

impl Rating {
    /// Maximum value of a [`Rating`].
    pub const MAX: u8 = 5;

    /// Returns the numeric value of this [`Rating`], clamped into the
    /// `0..=MAX` scale.
    #[must_use]
    pub fn value(self) -> f64 {
        if self.0.is_nan() {
            return 0.0;
        }
        self.0.clamp(0.0, f64::from(Self::MAX))
    }
}

#[cfg(test)]
mod spec {
    use super::{Cuisine, Rating, Recipe};

    #[test]
    fn decodes_with_missing_optional_fields() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 7, "name": "Plain Toast", "ingredients": ["Bread"]}"#,
        )
        .unwrap();

        assert_eq!(recipe.id, 7.into());
        assert_eq!(AsRef::<str>::as_ref(&recipe.name), "Plain Toast");
        assert_eq!(recipe.cuisine, None);
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.rating, Rating::default());
        assert_eq!(recipe.image(), None);
    }

    #[test]
    fn decodes_full_recipe() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Classic Margherita Pizza",
                "ingredients": ["Pizza dough", "Tomato sauce"],
                "instructions": ["Preheat the oven.", "Bake."],
                "prepTimeMinutes": 20,
                "cookTimeMinutes": 15,
                "servings": 4,
                "difficulty": "Easy",
                "cuisine": "Italian",
                "caloriesPerServing": 300,
                "tags": ["Pizza", "Italian"],
                "userId": 166,
                "image": "https://cdn.dummyjson.com/recipe-images/1.webp",
                "rating": 4.6,
                "reviewCount": 98,
                "mealType": ["Dinner"]
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.cuisine, Some(Cuisine::from("Italian")));
        assert_eq!(recipe.total_time_minutes(), 35);
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.review_count, Some(98));
        assert_eq!(
            recipe.image(),
            Some("https://cdn.dummyjson.com/recipe-images/1.webp"),
        );
    }

    #[test]
    fn falls_back_to_first_image() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 2, "name": "Soup", "images": ["a.png", "b.png"]}"#,
        )
        .unwrap();

        assert_eq!(recipe.image(), Some("a.png"));
    }

    #[test]
    fn clamps_rating() {
        assert!((Rating::from(7.5).value() - 5.0).abs() < f64::EPSILON);
        assert!(Rating::from(-1.0).value().abs() < f64::EPSILON);
        assert!(Rating::from(f64::NAN).value().abs() < f64::EPSILON);
    }
}
