//! Recipe query operations.
//!
//! Every public operation on [`RecipeService`] fetches the cached
//! catalog, answers from that snapshot and returns pretty-printed
//! JSON. Failures surface as [`RecipeError`] values whose display text
//! is the message shown to the caller.

pub mod nutrition;
pub mod seasonal;
pub mod shopping;
pub mod substitutes;

use crate::core::catalog::RecipeRepository;
use crate::core::config::Config;
use crate::core::error::{RecipeError, Result};
use crate::core::monitoring::PerformanceMonitor;
use crate::core::planner::MealService;
use crate::core::types::{GroceryItem, NameOnlyRecipe, Recipe, ShoppingPlanCategories, SimpleRecipe};
use seasonal::Season;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct IngredientMatch {
    #[serde(flatten)]
    recipe: SimpleRecipe,
    matched_ingredients: Vec<String>,
    match_count: usize,
}

#[derive(Serialize)]
struct IngredientSearch<'a> {
    search_ingredients: &'a [String],
    total_found: usize,
    recipes: Vec<IngredientMatch>,
}

#[derive(Serialize)]
struct DifficultyFilter {
    difficulty_level: u8,
    total_count: usize,
    recipes: Vec<SimpleRecipe>,
}

#[derive(Serialize)]
struct TimedRecipe {
    #[serde(flatten)]
    recipe: SimpleRecipe,
    total_time_minutes: u32,
}

#[derive(Serialize)]
struct TimeSearch {
    max_time_minutes: u32,
    total_found: usize,
    recipes: Vec<TimedRecipe>,
}

#[derive(Serialize)]
struct ShoppingList {
    people_count: u32,
    selected_recipes: Vec<String>,
    missing_recipes: Vec<String>,
    total_ingredients: usize,
    ingredients: Vec<GroceryItem>,
    shopping_plan: ShoppingPlanCategories,
}

#[derive(Serialize)]
struct CuisineSearch<'a> {
    cuisine: &'a str,
    total_found: usize,
    recipes: Vec<SimpleRecipe>,
}

#[derive(Serialize)]
struct Substitutes<'a> {
    original_ingredient: &'a str,
    matched_ingredient: &'static str,
    substitutes: &'static [&'static str],
    note: &'static str,
}

#[derive(Serialize)]
struct TaggedRecipe {
    #[serde(flatten)]
    recipe: SimpleRecipe,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct TagSearch<'a> {
    tags: &'a [String],
    match_all: bool,
    total_found: usize,
    recipes: Vec<TaggedRecipe>,
}

#[derive(Serialize)]
struct SeasonalRecommendations {
    season: &'static str,
    seasonal_ingredients: &'static [&'static str],
    total_found: usize,
    recipes: Vec<SimpleRecipe>,
}

/// Find a recipe by exact name, else by case-insensitive substring
pub fn find_recipe<'a>(recipes: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    recipes.iter().find(|r| r.name == name).or_else(|| {
        let needle = name.to_lowercase();
        recipes
            .iter()
            .find(|r| r.name.to_lowercase().contains(&needle))
    })
}

fn lowercase_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Catalog queries, shopping lists and nutrition estimates
pub struct RecipeService {
    repository: Arc<RecipeRepository>,
    monitor: Arc<PerformanceMonitor>,
    config: Arc<Config>,
}

impl RecipeService {
    pub fn new(
        repository: Arc<RecipeRepository>,
        monitor: Arc<PerformanceMonitor>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            repository,
            monitor,
            config,
        }
    }

    async fn catalog(&self) -> Result<Arc<Vec<Recipe>>> {
        let recipes = self.repository.fetch_all_recipes().await;
        if recipes.is_empty() {
            return Err(RecipeError::CatalogUnavailable);
        }
        Ok(recipes)
    }

    /// Sorted unique categories of the catalog
    pub async fn get_all_categories(&self) -> Result<Vec<String>> {
        self.monitor
            .track("get_all_categories", async {
                let recipes = self.catalog().await?;
                Ok(RecipeRepository::all_categories(&recipes))
            })
            .await
    }

    pub async fn get_all_recipes(&self) -> Result<String> {
        self.monitor
            .track("get_all_recipes", async {
                let recipes = self.catalog().await?;
                let listing: Vec<NameOnlyRecipe> =
                    recipes.iter().map(NameOnlyRecipe::from).collect();
                to_json(&listing)
            })
            .await
    }

    pub async fn get_recipes_by_category(&self, category: &str) -> Result<String> {
        self.monitor
            .track("get_recipes_by_category", async {
                let recipes = self.catalog().await?;
                let matches: Vec<SimpleRecipe> =
                    RecipeRepository::recipes_by_category(&recipes, category)
                        .into_iter()
                        .map(SimpleRecipe::from)
                        .collect();
                if matches.is_empty() {
                    return Err(RecipeError::CategoryEmpty(category.to_string()));
                }
                to_json(&matches)
            })
            .await
    }

    pub async fn get_recipe_details(&self, name: &str) -> Result<String> {
        self.monitor
            .track("get_recipe_details", async {
                let recipes = self.catalog().await?;
                let recipe = find_recipe(&recipes, name)
                    .ok_or_else(|| RecipeError::RecipeNotFound(name.to_string()))?;
                to_json(recipe)
            })
            .await
    }

    /// Recipes using any of the ingredients, best matches first
    pub async fn search_recipes_by_ingredients(&self, ingredients: &[String]) -> Result<String> {
        self.monitor
            .track("search_recipes_by_ingredients", async {
                let recipes = self.catalog().await?;
                let terms = lowercase_terms(ingredients);

                let mut matches: Vec<IngredientMatch> = recipes
                    .iter()
                    .filter_map(|recipe| {
                        let matched: Vec<String> = recipe
                            .ingredients
                            .iter()
                            .filter(|i| {
                                let name = i.name.to_lowercase();
                                terms.iter().any(|t| name.contains(t.as_str()))
                            })
                            .map(|i| i.name.clone())
                            .collect();
                        (!matched.is_empty()).then(|| IngredientMatch {
                            recipe: SimpleRecipe::from(recipe),
                            match_count: matched.len(),
                            matched_ingredients: matched,
                        })
                    })
                    .collect();
                matches.sort_by(|a, b| b.match_count.cmp(&a.match_count));

                to_json(&IngredientSearch {
                    search_ingredients: ingredients,
                    total_found: matches.len(),
                    recipes: matches,
                })
            })
            .await
    }

    pub async fn filter_recipes_by_difficulty(&self, difficulty: u8) -> Result<String> {
        self.monitor
            .track("filter_recipes_by_difficulty", async {
                if !(1..=5).contains(&difficulty) {
                    return Err(RecipeError::InvalidDifficulty(difficulty));
                }
                let recipes = self.catalog().await?;
                let matches: Vec<SimpleRecipe> = recipes
                    .iter()
                    .filter(|r| r.difficulty == difficulty)
                    .map(SimpleRecipe::from)
                    .collect();

                to_json(&DifficultyFilter {
                    difficulty_level: difficulty,
                    total_count: matches.len(),
                    recipes: matches,
                })
            })
            .await
    }

    /// Recipes finished within `max_minutes`, quickest first
    pub async fn search_recipes_by_time(&self, max_minutes: u32) -> Result<String> {
        self.monitor
            .track("search_recipes_by_time", async {
                if max_minutes == 0 {
                    return Err(RecipeError::InvalidTime);
                }
                let recipes = self.catalog().await?;

                let mut matches: Vec<TimedRecipe> = recipes
                    .iter()
                    .filter_map(|recipe| {
                        recipe
                            .effective_time_minutes()
                            .filter(|minutes| *minutes <= max_minutes)
                            .map(|minutes| TimedRecipe {
                                recipe: SimpleRecipe::from(recipe),
                                total_time_minutes: minutes,
                            })
                    })
                    .collect();
                matches.sort_by_key(|m| m.total_time_minutes);

                to_json(&TimeSearch {
                    max_time_minutes: max_minutes,
                    total_found: matches.len(),
                    recipes: matches,
                })
            })
            .await
    }

    /// Combined, categorized ingredient list for the named recipes
    pub async fn generate_shopping_list(
        &self,
        recipe_names: &[String],
        people_count: u32,
    ) -> Result<String> {
        self.monitor
            .track("generate_shopping_list", async {
                MealService::validate_people_count(&self.config, people_count)?;
                let recipes = self.catalog().await?;

                let mut selected: Vec<&Recipe> = Vec::new();
                let mut missing: Vec<String> = Vec::new();
                for name in recipe_names {
                    match find_recipe(&recipes, name) {
                        Some(recipe) if !selected.iter().any(|s| s.id == recipe.id) => {
                            selected.push(recipe)
                        }
                        Some(_) => {}
                        None => missing.push(name.clone()),
                    }
                }
                if selected.is_empty() {
                    return Err(RecipeError::RecipeNotFound(recipe_names.join("、")));
                }

                let list = shopping::build_grocery_list(&selected, people_count);
                to_json(&ShoppingList {
                    people_count,
                    selected_recipes: selected.iter().map(|r| r.name.clone()).collect(),
                    missing_recipes: missing,
                    total_ingredients: list.ingredients.len(),
                    ingredients: list.ingredients,
                    shopping_plan: list.shopping_plan,
                })
            })
            .await
    }

    pub async fn search_recipes_by_cuisine(&self, cuisine: &str) -> Result<String> {
        self.monitor
            .track("search_recipes_by_cuisine", async {
                let recipes = self.catalog().await?;
                let needle = cuisine.trim().to_lowercase();

                let matches: Vec<SimpleRecipe> = if needle.is_empty() {
                    Vec::new()
                } else {
                    recipes
                        .iter()
                        .filter(|r| {
                            r.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                                || r.name.to_lowercase().contains(&needle)
                                || r.description.to_lowercase().contains(&needle)
                                || r.category.to_lowercase().contains(&needle)
                        })
                        .map(SimpleRecipe::from)
                        .collect()
                };

                to_json(&CuisineSearch {
                    cuisine,
                    total_found: matches.len(),
                    recipes: matches,
                })
            })
            .await
    }

    pub async fn get_ingredient_substitutes(&self, ingredient: &str) -> Result<String> {
        self.monitor
            .track("get_ingredient_substitutes", async {
                let (matched, subs) = substitutes::find_substitutes(ingredient)
                    .ok_or_else(|| RecipeError::NoSubstitutes(ingredient.to_string()))?;

                to_json(&Substitutes {
                    original_ingredient: ingredient,
                    matched_ingredient: matched,
                    substitutes: subs,
                    note: "替代食材可能会影响菜品的风味和口感，请根据实际情况调整用量",
                })
            })
            .await
    }

    /// Recipes carrying any (or, with `match_all`, every) tag
    pub async fn search_recipes_by_tags(&self, tags: &[String], match_all: bool) -> Result<String> {
        self.monitor
            .track("search_recipes_by_tags", async {
                let recipes = self.catalog().await?;
                let wanted = lowercase_terms(tags);

                let matches: Vec<TaggedRecipe> = if wanted.is_empty() {
                    Vec::new()
                } else {
                    recipes
                        .iter()
                        .filter(|recipe| {
                            let own: Vec<String> =
                                recipe.tags.iter().map(|t| t.to_lowercase()).collect();
                            let has = |tag: &String| own.contains(tag);
                            if match_all {
                                wanted.iter().all(has)
                            } else {
                                wanted.iter().any(has)
                            }
                        })
                        .map(|recipe| TaggedRecipe {
                            recipe: SimpleRecipe::from(recipe),
                            tags: recipe.tags.clone(),
                        })
                        .collect()
                };

                to_json(&TagSearch {
                    tags,
                    match_all,
                    total_found: matches.len(),
                    recipes: matches,
                })
            })
            .await
    }

    /// Recipes built on produce of the given season
    pub async fn get_seasonal_recommendations(&self, season: &str) -> Result<String> {
        self.monitor
            .track("get_seasonal_recommendations", async {
                let season = Season::parse(season)?;
                let recipes = self.catalog().await?;
                let produce = season.ingredients();

                let matching: Vec<&Recipe> = recipes
                    .iter()
                    .filter(|r| produce.iter().any(|p| r.has_ingredient_containing(p)))
                    .collect();

                to_json(&SeasonalRecommendations {
                    season: season.label(),
                    seasonal_ingredients: produce,
                    total_found: matching.len(),
                    recipes: matching
                        .into_iter()
                        .take(self.config.recommendation.max_seasonal_results)
                        .map(SimpleRecipe::from)
                        .collect(),
                })
            })
            .await
    }

    pub async fn analyze_recipe_nutrition(&self, name: &str) -> Result<String> {
        self.monitor
            .track("analyze_recipe_nutrition", async {
                let recipes = self.catalog().await?;
                let recipe = find_recipe(&recipes, name)
                    .ok_or_else(|| RecipeError::RecipeNotFound(name.to_string()))?;
                to_json(&nutrition::analyze(recipe))
            })
            .await
    }
}
