//! Recipe catalog access.
//!
//! A [`RecipeSource`] produces the raw recipe list; the
//! [`RecipeRepository`] memoizes it through the shared cache and
//! offers category helpers over a snapshot.

mod repository;
mod source;

pub use repository::RecipeRepository;
pub use source::{HttpRecipeSource, RecipeSource, StaticRecipeSource};
