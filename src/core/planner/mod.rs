//! Randomized planning: weekly meal plans and dish combinations.

pub mod meal_plan;
pub mod what_to_eat;

pub use meal_plan::{generate_meal_plan, MealService};
pub use what_to_eat::{recommend_dishes, RecommendationService};
