//! Weekly meal plan generation.
//!
//! Recipes hit by an allergy or avoid item are dropped first, the
//! rest are pooled by category, and every day draws from those pools
//! without replacement, so no dish repeats within one plan.

use crate::core::catalog::RecipeRepository;
use crate::core::config::{Config, MealPlanConfig};
use crate::core::error::{RecipeError, Result};
use crate::core::monitoring::PerformanceMonitor;
use crate::core::types::{DayPlan, MealPlan, Recipe, SimpleRecipe};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

pub const WEEKDAY_LABELS: [&str; 5] = ["周一", "周二", "周三", "周四", "周五"];

pub const BREAKFAST_CATEGORY: &str = "早餐";
pub const LUNCH_CATEGORIES: [&str; 5] = ["主食", "水产", "荤菜", "素菜", "甜品"];
pub const DINNER_CATEGORIES: [&str; 6] = ["主食", "水产", "荤菜", "素菜", "甜品", "汤羹"];

type CategoryPools<'a> = HashMap<String, Vec<&'a Recipe>>;

/// Breakfast dishes per day: one, plus one per five extra diners
pub fn breakfast_count(people_count: u32) -> usize {
    ((people_count as usize + 4) / 5).max(1)
}

/// Lunch and dinner dishes per meal, never fewer than two
pub fn meal_count(people_count: u32) -> usize {
    ((people_count as usize + 2) / 3).max(2)
}

/// Drop recipes with any ingredient containing an allergy or avoid item
pub fn filter_by_restrictions<'a>(
    recipes: &'a [Recipe],
    allergies: &[String],
    avoid_items: &[String],
) -> Vec<&'a Recipe> {
    let banned: Vec<String> = allergies
        .iter()
        .chain(avoid_items.iter())
        .filter(|item| !item.is_empty())
        .map(|item| item.to_lowercase())
        .collect();

    recipes
        .iter()
        .filter(|recipe| {
            !recipe.ingredients.iter().any(|ingredient| {
                let name = ingredient.name.to_lowercase();
                banned.iter().any(|item| name.contains(item.as_str()))
            })
        })
        .collect()
}

/// Pool recipes by category, keeping only the planning categories
pub fn group_by_category<'a>(recipes: Vec<&'a Recipe>, categories: &[String]) -> CategoryPools<'a> {
    let mut pools: CategoryPools<'a> = HashMap::new();
    for recipe in recipes {
        if categories.iter().any(|c| *c == recipe.category) {
            pools.entry(recipe.category.clone()).or_default().push(recipe);
        }
    }
    pools
}

fn take_random<'a, R: Rng + ?Sized>(pool: &mut Vec<&'a Recipe>, rng: &mut R) -> Option<&'a Recipe> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

/// Try candidate categories in random order, taking from the first non-empty pool
fn draw_from_categories<'a, R: Rng + ?Sized>(
    pools: &mut CategoryPools<'a>,
    candidates: &[&str],
    rng: &mut R,
) -> Option<&'a Recipe> {
    let mut order = candidates.to_vec();
    order.shuffle(rng);

    order
        .into_iter()
        .find_map(|category| pools.get_mut(category).and_then(|pool| take_random(pool, rng)))
}

fn fill_meal<'a, R: Rng + ?Sized>(
    slots: usize,
    pools: &mut CategoryPools<'a>,
    candidates: &[&str],
    rng: &mut R,
) -> Vec<SimpleRecipe> {
    (0..slots)
        .filter_map(|_| draw_from_categories(pools, candidates, rng))
        .map(SimpleRecipe::from)
        .collect()
}

/// Build a weekday plan from an already fetched catalog
pub fn generate_meal_plan<R: Rng + ?Sized>(
    recipes: &[Recipe],
    people_count: u32,
    allergies: &[String],
    avoid_items: &[String],
    categories: &[String],
    settings: &MealPlanConfig,
    rng: &mut R,
) -> MealPlan {
    let allowed = filter_by_restrictions(recipes, allergies, avoid_items);
    let mut pools = group_by_category(allowed, categories);

    let breakfast_slots = breakfast_count(people_count);
    let meal_slots = meal_count(people_count);

    let weekdays = WEEKDAY_LABELS
        .iter()
        .take(settings.weekdays)
        .map(|label| {
            let mut day = DayPlan::new(*label);

            if let Some(pool) = pools.get_mut(BREAKFAST_CATEGORY) {
                day.breakfast = (0..breakfast_slots)
                    .map_while(|_| take_random(pool, rng))
                    .map(SimpleRecipe::from)
                    .collect();
            }

            day.lunch = fill_meal(meal_slots, &mut pools, &LUNCH_CATEGORIES, rng);
            day.dinner = fill_meal(meal_slots, &mut pools, &DINNER_CATEGORIES, rng);
            day
        })
        .collect();

    MealPlan {
        weekdays,
        weekend: Vec::new(),
    }
}

/// Weekly meal planning over the cached catalog
pub struct MealService {
    repository: Arc<RecipeRepository>,
    monitor: Arc<PerformanceMonitor>,
    config: Arc<Config>,
}

impl MealService {
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

    pub(crate) fn validate_people_count(config: &Config, people_count: u32) -> Result<()> {
        let min = config.recommendation.min_people;
        let max = config.recommendation.max_people;
        if people_count < min || people_count > max {
            return Err(RecipeError::InvalidPeopleCount { min, max });
        }
        Ok(())
    }

    /// Typed weekly plan
    pub async fn plan_week(
        &self,
        people_count: u32,
        allergies: &[String],
        avoid_items: &[String],
    ) -> Result<MealPlan> {
        Self::validate_people_count(&self.config, people_count)?;

        let recipes = self.repository.fetch_all_recipes().await;
        if recipes.is_empty() {
            return Err(RecipeError::CatalogUnavailable);
        }

        Ok(generate_meal_plan(
            &recipes,
            people_count,
            allergies,
            avoid_items,
            &self.config.recommendation.default_categories,
            &self.config.meal_plan,
            &mut rand::thread_rng(),
        ))
    }

    /// Weekly plan as pretty JSON
    pub async fn recommend_meals(
        &self,
        people_count: u32,
        allergies: &[String],
        avoid_items: &[String],
    ) -> Result<String> {
        self.monitor
            .track("recommend_meals", async {
                let plan = self.plan_week(people_count, allergies, avoid_items).await?;
                Ok(serde_json::to_string_pretty(&plan)?)
            })
            .await
    }
}
