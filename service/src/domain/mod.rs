//! Domain definitions.

pub mod recipe;
pub mod user;

pub use self::{recipe::Recipe, user::User};
