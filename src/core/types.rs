//! Core data types for the HowToCook recipe service.
//!
//! This module defines the catalog records as they arrive from the
//! upstream JSON feed, plus the trimmed-down views and plan/list
//! structures returned by the query operations.

use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    /// Parsed numeric amount, when the catalog could extract one
    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    /// Original human-readable amount ("适量", "2 个", ...)
    pub text_quantity: String,

    #[serde(default = "empty_notes")]
    pub notes: Option<String>,
}

fn empty_notes() -> Option<String> {
    Some(String::new())
}

/// A numbered preparation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step: u32,
    pub description: String,
}

/// Full catalog recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(default)]
    pub source_path: String,

    #[serde(default)]
    pub image_path: Option<String>,

    pub category: String,

    /// 1 (trivial) to 5 (hard)
    pub difficulty: u8,

    #[serde(default)]
    pub tags: Vec<String>,

    pub servings: u32,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub steps: Vec<Step>,

    #[serde(default)]
    pub prep_time_minutes: Option<u32>,

    #[serde(default)]
    pub cook_time_minutes: Option<u32>,

    #[serde(default)]
    pub total_time_minutes: Option<u32>,

    #[serde(default)]
    pub additional_notes: Vec<String>,
}

impl Recipe {
    /// Total time, or prep + cook when only the parts are known
    pub fn effective_time_minutes(&self) -> Option<u32> {
        match (
            self.total_time_minutes,
            self.prep_time_minutes,
            self.cook_time_minutes,
        ) {
            (Some(total), _, _) => Some(total),
            (None, None, None) => None,
            (None, prep, cook) => Some(prep.unwrap_or(0).saturating_add(cook.unwrap_or(0))),
        }
    }

    /// Case-insensitive substring test over ingredient names
    pub fn has_ingredient_containing(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(&needle))
    }
}

/// Ingredient view used by simplified recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleIngredient {
    pub name: String,
    pub text_quantity: String,
}

/// Recipe with basic info and ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleRecipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<SimpleIngredient>,
}

impl From<&Recipe> for SimpleRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|ingredient| SimpleIngredient {
                    name: ingredient.name.clone(),
                    text_quantity: ingredient.text_quantity.clone(),
                })
                .collect(),
        }
    }
}

/// Name and description only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameOnlyRecipe {
    pub name: String,
    pub description: String,
}

impl From<&Recipe> for NameOnlyRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
        }
    }
}

/// Result of the "what to eat" recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRecommendation {
    pub people_count: u32,
    pub meat_dish_count: usize,
    pub vegetable_dish_count: usize,
    pub dishes: Vec<SimpleRecipe>,
    pub message: String,
}

/// One day of a meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub breakfast: Vec<SimpleRecipe>,
    pub lunch: Vec<SimpleRecipe>,
    pub dinner: Vec<SimpleRecipe>,
}

impl DayPlan {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            breakfast: Vec::new(),
            lunch: Vec::new(),
            dinner: Vec::new(),
        }
    }

    /// Every dish of the day, breakfast first
    pub fn dishes(&self) -> impl Iterator<Item = &SimpleRecipe> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
    }
}

/// Weekly meal plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlan {
    pub weekdays: Vec<DayPlan>,

    /// Reserved; weekend days are not planned
    #[serde(default)]
    pub weekend: Vec<DayPlan>,
}

/// Aggregated shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,

    /// Sum of contributions, `None` once units disagree
    pub total_quantity: Option<f64>,
    pub unit: Option<String>,

    pub recipe_count: usize,
    pub recipes: Vec<String>,

    /// Every contributing amount as written in its recipe
    pub text_quantities: Vec<String>,
}

/// Shopping list grouped by where things are bought
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingPlanCategories {
    pub fresh: Vec<String>,
    pub pantry: Vec<String>,
    pub spices: Vec<String>,
    pub others: Vec<String>,
}

/// Full shopping list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroceryList {
    pub ingredients: Vec<GroceryItem>,
    pub shopping_plan: ShoppingPlanCategories,
}
