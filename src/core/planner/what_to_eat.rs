//! "What to eat" dish combinations.

use super::meal_plan::MealService;
use crate::core::catalog::RecipeRepository;
use crate::core::config::{Config, RecommendationConfig};
use crate::core::error::{RecipeError, Result};
use crate::core::monitoring::PerformanceMonitor;
use crate::core::types::{DishRecommendation, Recipe, SimpleRecipe};
use rand::Rng;
use std::sync::Arc;

const MEAT_CATEGORIES: [&str; 2] = ["荤菜", "水产"];
const AQUATIC_CATEGORY: &str = "水产";
const NON_VEGETABLE_CATEGORIES: [&str; 4] = ["荤菜", "水产", "早餐", "主食"];

/// (meat dishes, vegetable dishes) for a party size
pub fn dish_counts(people_count: u32) -> (usize, usize) {
    let n = people_count as usize + 1;
    let vegetables = n / 2;
    let meat = n / 2 + n % 2;
    (meat, vegetables)
}

fn take_random<'a, R: Rng + ?Sized>(pool: &mut Vec<&'a Recipe>, rng: &mut R) -> Option<&'a Recipe> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

/// Pick a balanced set of meat and vegetable dishes
///
/// Large parties get one aquatic dish up front. Meat dishes are then
/// chosen one per meat type in priority order, topped up at random;
/// vegetables are drawn at random. No dish is chosen twice.
pub fn recommend_dishes<R: Rng + ?Sized>(
    recipes: &[Recipe],
    people_count: u32,
    settings: &RecommendationConfig,
    rng: &mut R,
) -> DishRecommendation {
    let (meat_count, vegetable_count) = dish_counts(people_count);

    let mut meat_pool: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| MEAT_CATEGORIES.contains(&r.category.as_str()))
        .collect();
    let mut vegetable_pool: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| !NON_VEGETABLE_CATEGORIES.contains(&r.category.as_str()))
        .collect();

    let mut aquatic: Option<&Recipe> = None;
    if people_count > settings.fish_threshold_people {
        let mut fish: Vec<&Recipe> = recipes
            .iter()
            .filter(|r| r.category == AQUATIC_CATEGORY)
            .collect();
        if let Some(dish) = take_random(&mut fish, rng) {
            meat_pool.retain(|r| r.id != dish.id);
            aquatic = Some(dish);
        }
    }

    let meat_quota = meat_count - usize::from(aquatic.is_some());
    let mut meats: Vec<&Recipe> = Vec::with_capacity(meat_quota);

    for meat_type in &settings.meat_types_priority {
        if meats.len() >= meat_quota {
            break;
        }
        let mut options: Vec<&Recipe> = meat_pool
            .iter()
            .copied()
            .filter(|r| r.has_ingredient_containing(meat_type))
            .collect();
        if let Some(selected) = take_random(&mut options, rng) {
            meat_pool.retain(|r| r.id != selected.id);
            meats.push(selected);
        }
    }

    while meats.len() < meat_quota {
        match take_random(&mut meat_pool, rng) {
            Some(dish) => meats.push(dish),
            None => break,
        }
    }

    let mut vegetables: Vec<&Recipe> = Vec::with_capacity(vegetable_count);
    while vegetables.len() < vegetable_count {
        match take_random(&mut vegetable_pool, rng) {
            Some(dish) => vegetables.push(dish),
            None => break,
        }
    }

    let meat_dish_count = meats.len() + usize::from(aquatic.is_some());
    let vegetable_dish_count = vegetables.len();

    let dishes = aquatic
        .into_iter()
        .chain(meats)
        .chain(vegetables)
        .map(SimpleRecipe::from)
        .collect();

    DishRecommendation {
        people_count,
        meat_dish_count,
        vegetable_dish_count,
        dishes,
        message: format!(
            "为{people_count}人推荐的菜品，包含{meat_dish_count}个荤菜和{vegetable_dish_count}个素菜。"
        ),
    }
}

/// Dish recommendations over the cached catalog
pub struct RecommendationService {
    repository: Arc<RecipeRepository>,
    monitor: Arc<PerformanceMonitor>,
    config: Arc<Config>,
}

impl RecommendationService {
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

    pub async fn recommend(&self, people_count: u32) -> Result<DishRecommendation> {
        MealService::validate_people_count(&self.config, people_count)?;

        let recipes = self.repository.fetch_all_recipes().await;
        if recipes.is_empty() {
            return Err(RecipeError::CatalogUnavailable);
        }

        Ok(recommend_dishes(
            &recipes,
            people_count,
            &self.config.recommendation,
            &mut rand::thread_rng(),
        ))
    }

    /// Recommendation as pretty JSON
    pub async fn what_to_eat(&self, people_count: u32) -> Result<String> {
        self.monitor
            .track("what_to_eat", async {
                let recommendation = self.recommend(people_count).await?;
                Ok(serde_json::to_string_pretty(&recommendation)?)
            })
            .await
    }
}
