//! Read-only resource documents: categories, statistics and health.

use crate::core::catalog::RecipeRepository;
use crate::core::error::Result;
use crate::core::monitoring::HealthChecker;
use crate::core::types::Recipe;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

pub const CATEGORIES_URI: &str = "howtocook://categories";
pub const STATS_URI: &str = "howtocook://stats";
pub const HEALTH_URI: &str = "howtocook://health";

const UNCATEGORIZED: &str = "未分类";

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_recipes: usize,
    pub categories: BTreeMap<String, usize>,
    pub difficulty_distribution: BTreeMap<u8, usize>,
    pub description: &'static str,
}

impl CatalogStats {
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut categories = BTreeMap::new();
        let mut difficulty_distribution = BTreeMap::new();

        for recipe in recipes {
            let category = if recipe.category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                recipe.category.clone()
            };
            *categories.entry(category).or_insert(0) += 1;
            *difficulty_distribution.entry(recipe.difficulty).or_insert(0) += 1;
        }

        Self {
            total_recipes: recipes.len(),
            categories,
            difficulty_distribution,
            description: "菜谱数据统计信息",
        }
    }
}

fn unavailable() -> serde_json::Value {
    json!({ "error": "无法获取菜谱数据" })
}

/// Sorted category list
pub async fn categories_resource(repository: &RecipeRepository) -> Result<String> {
    let recipes = repository.fetch_all_recipes().await;
    let document = if recipes.is_empty() {
        unavailable()
    } else {
        let categories = RecipeRepository::all_categories(&recipes);
        json!({
            "categories": categories,
            "total_count": categories.len(),
            "description": "所有可用的菜谱分类",
        })
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Recipe counts per category and per difficulty
pub async fn stats_resource(repository: &RecipeRepository) -> Result<String> {
    let recipes = repository.fetch_all_recipes().await;
    if recipes.is_empty() {
        return Ok(serde_json::to_string_pretty(&unavailable())?);
    }
    Ok(serde_json::to_string_pretty(&CatalogStats::from_recipes(
        &recipes,
    ))?)
}

pub async fn health_resource(checker: &HealthChecker) -> Result<String> {
    let report = checker.full_health_check().await;
    Ok(serde_json::to_string_pretty(&report)?)
}
