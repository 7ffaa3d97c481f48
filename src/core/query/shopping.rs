//! Shopping list aggregation and categorization.

use crate::core::types::{GroceryItem, GroceryList, Recipe, ShoppingPlanCategories};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static SPICE_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "盐", "糖", "酱油", "醋", "料酒", "香料", "胡椒", "孜然", "辣椒", "花椒", "姜", "蒜", "葱",
        "调味",
    ]
});

static FRESH_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "肉", "鱼", "虾", "蛋", "奶", "菜", "菠菜", "白菜", "青菜", "豆腐", "生菜", "水产", "豆芽",
        "西红柿", "番茄", "水果", "香菇", "木耳", "蘑菇",
    ]
});

static PANTRY_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "米", "面", "粉", "油", "酒", "醋", "糖", "盐", "酱", "豆", "干", "罐头", "方便面", "面条",
        "米饭", "意大利面", "燕麦",
    ]
});

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Where an ingredient is bought
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingCategory {
    Spices,
    Fresh,
    Pantry,
    Others,
}

impl ShoppingCategory {
    /// Keyword lookup; spices win over fresh, fresh over pantry
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();

        if contains_any(&name, &SPICE_KEYWORDS) {
            Self::Spices
        } else if contains_any(&name, &FRESH_KEYWORDS) {
            Self::Fresh
        } else if contains_any(&name, &PANTRY_KEYWORDS) {
            Self::Pantry
        } else {
            Self::Others
        }
    }
}

/// Quantity multiplier for cooking a recipe for `people_count`
pub fn scale_factor(recipe: &Recipe, people_count: u32) -> f64 {
    if recipe.servings == 0 {
        1.0
    } else {
        f64::from(people_count) / f64::from(recipe.servings)
    }
}

/// Merge the ingredients of every recipe into one list
///
/// Items are keyed by lower-cased name and kept in first-seen order.
/// Quantities are summed only while every contribution has a
/// quantity in the same unit.
pub fn aggregate_ingredients(recipes: &[&Recipe], people_count: u32) -> Vec<GroceryItem> {
    let mut items: Vec<GroceryItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        let factor = scale_factor(recipe, people_count);

        for ingredient in &recipe.ingredients {
            let key = ingredient.name.to_lowercase();
            let quantity = ingredient.quantity.map(|q| q * factor);

            match index.get(&key) {
                Some(&position) => {
                    let item = &mut items[position];
                    let summable = matches!(
                        (&item.unit, &ingredient.unit),
                        (Some(a), Some(b)) if a == b
                    );
                    item.total_quantity = match (item.total_quantity, quantity) {
                        (Some(total), Some(q)) if summable => Some(total + q),
                        _ => None,
                    };
                    if item.total_quantity.is_none() {
                        item.unit = None;
                    }
                    item.recipe_count += 1;
                    if !item.recipes.contains(&recipe.name) {
                        item.recipes.push(recipe.name.clone());
                    }
                    item.text_quantities.push(ingredient.text_quantity.clone());
                }
                None => {
                    index.insert(key, items.len());
                    items.push(GroceryItem {
                        name: ingredient.name.clone(),
                        total_quantity: quantity,
                        unit: ingredient.unit.clone(),
                        recipe_count: 1,
                        recipes: vec![recipe.name.clone()],
                        text_quantities: vec![ingredient.text_quantity.clone()],
                    });
                }
            }
        }
    }

    items
}

pub fn categorize_ingredients(items: &[GroceryItem]) -> ShoppingPlanCategories {
    let mut plan = ShoppingPlanCategories::default();
    for item in items {
        let bucket = match ShoppingCategory::classify(&item.name) {
            ShoppingCategory::Spices => &mut plan.spices,
            ShoppingCategory::Fresh => &mut plan.fresh,
            ShoppingCategory::Pantry => &mut plan.pantry,
            ShoppingCategory::Others => &mut plan.others,
        };
        bucket.push(item.name.clone());
    }
    plan
}

pub fn build_grocery_list(recipes: &[&Recipe], people_count: u32) -> GroceryList {
    let ingredients = aggregate_ingredients(recipes, people_count);
    let shopping_plan = categorize_ingredients(&ingredients);
    GroceryList {
        ingredients,
        shopping_plan,
    }
}
