//! Read entities definitions.

pub mod recipe;

pub use self::recipe::{Card, Detail, Preview, Stars};
