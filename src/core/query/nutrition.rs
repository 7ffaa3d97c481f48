//! Rough nutrition estimates from a per-100 g keyword table.

use crate::core::types::{Ingredient, Recipe};
use serde::Serialize;
use std::ops::{AddAssign, Div};

/// Assumed weight of one countable item (egg, potato, ...)
const GRAMS_PER_PIECE: f64 = 50.0;

/// Energy and macronutrients; calories in kcal, the rest in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl Nutrition {
    const fn per_100g(calories: f64, protein: f64, fat: f64, carbohydrates: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbohydrates,
        }
    }

    fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbohydrates: self.carbohydrates * factor,
        }
    }

    /// Rounded to one decimal place for display
    pub fn rounded(self) -> Self {
        let round = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            calories: round(self.calories),
            protein: round(self.protein),
            fat: round(self.fat),
            carbohydrates: round(self.carbohydrates),
        }
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, other: Self) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.fat += other.fat;
        self.carbohydrates += other.carbohydrates;
    }
}

impl Div<f64> for Nutrition {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        self.scaled(1.0 / divisor)
    }
}

// First match wins, so compound names sit before their parts
const NUTRITION_TABLE: &[(&str, Nutrition)] = &[
    ("花生油", Nutrition::per_100g(899.0, 0.0, 99.9, 0.0)),
    ("猪油", Nutrition::per_100g(897.0, 0.0, 99.6, 0.2)),
    ("牛油", Nutrition::per_100g(898.0, 0.0, 99.7, 0.0)),
    ("酱油", Nutrition::per_100g(63.0, 5.6, 0.1, 10.1)),
    ("生抽", Nutrition::per_100g(63.0, 5.6, 0.1, 10.1)),
    ("蚝油", Nutrition::per_100g(114.0, 1.5, 0.3, 26.0)),
    ("鸡蛋", Nutrition::per_100g(144.0, 13.3, 8.8, 2.8)),
    ("鸡胸", Nutrition::per_100g(133.0, 24.6, 1.9, 2.5)),
    ("鸡", Nutrition::per_100g(167.0, 19.3, 9.4, 1.3)),
    ("五花肉", Nutrition::per_100g(568.0, 7.7, 59.0, 0.0)),
    ("猪", Nutrition::per_100g(331.0, 13.2, 30.1, 2.4)),
    ("牛奶", Nutrition::per_100g(54.0, 3.0, 3.2, 3.4)),
    ("牛", Nutrition::per_100g(125.0, 19.9, 4.2, 2.0)),
    ("羊", Nutrition::per_100g(203.0, 19.0, 14.1, 0.0)),
    ("鸭", Nutrition::per_100g(240.0, 15.5, 19.7, 0.2)),
    ("虾", Nutrition::per_100g(93.0, 18.6, 0.8, 2.8)),
    ("鱼", Nutrition::per_100g(113.0, 17.6, 4.1, 0.5)),
    ("豆腐", Nutrition::per_100g(82.0, 8.1, 3.7, 4.2)),
    ("大米", Nutrition::per_100g(346.0, 7.4, 0.8, 77.9)),
    ("米饭", Nutrition::per_100g(116.0, 2.6, 0.3, 25.9)),
    ("面粉", Nutrition::per_100g(366.0, 11.2, 1.5, 73.6)),
    ("面条", Nutrition::per_100g(286.0, 8.3, 0.7, 61.9)),
    ("土豆", Nutrition::per_100g(77.0, 2.0, 0.2, 17.2)),
    ("番茄", Nutrition::per_100g(19.0, 0.9, 0.2, 4.0)),
    ("西红柿", Nutrition::per_100g(19.0, 0.9, 0.2, 4.0)),
    ("黄瓜", Nutrition::per_100g(15.0, 0.8, 0.2, 2.9)),
    ("白菜", Nutrition::per_100g(17.0, 1.5, 0.1, 3.2)),
    ("青菜", Nutrition::per_100g(15.0, 1.5, 0.3, 2.7)),
    ("茄子", Nutrition::per_100g(21.0, 1.1, 0.2, 4.9)),
    ("胡萝卜", Nutrition::per_100g(37.0, 1.0, 0.2, 8.8)),
    ("花生", Nutrition::per_100g(574.0, 24.8, 44.3, 21.7)),
    ("糖", Nutrition::per_100g(400.0, 0.0, 0.0, 99.9)),
    ("油", Nutrition::per_100g(899.0, 0.0, 99.9, 0.0)),
];

fn lookup(name: &str) -> Option<Nutrition> {
    NUTRITION_TABLE
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, per_100g)| *per_100g)
}

/// Weight in grams for weight, volume (water density) and piece units
pub fn grams(ingredient: &Ingredient) -> Option<f64> {
    let quantity = ingredient.quantity?;
    let unit = ingredient.unit.as_deref()?.trim().to_lowercase();
    let factor = match unit.as_str() {
        "g" | "克" | "ml" | "毫升" => 1.0,
        "kg" | "千克" | "公斤" | "l" | "升" => 1000.0,
        "个" | "只" | "颗" => GRAMS_PER_PIECE,
        _ => return None,
    };
    Some(quantity * factor)
}

#[derive(Debug, Clone, Serialize)]
pub struct IngredientNutrition {
    pub name: String,
    pub grams: f64,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionAnalysis {
    pub recipe_name: String,
    pub servings: u32,
    pub total_nutrition: Nutrition,
    pub per_serving: Nutrition,
    pub ingredient_breakdown: Vec<IngredientNutrition>,
    pub unanalyzed_ingredients: Vec<String>,
    pub note: String,
}

/// Estimate a recipe's nutrition; ingredients without a known
/// weight or table entry are listed as unanalyzed
pub fn analyze(recipe: &Recipe) -> NutritionAnalysis {
    let mut total = Nutrition::default();
    let mut breakdown = Vec::new();
    let mut unanalyzed = Vec::new();

    for ingredient in &recipe.ingredients {
        match (grams(ingredient), lookup(&ingredient.name)) {
            (Some(weight), Some(per_100g)) => {
                let nutrition = per_100g.scaled(weight / 100.0);
                total += nutrition;
                breakdown.push(IngredientNutrition {
                    name: ingredient.name.clone(),
                    grams: weight,
                    nutrition: nutrition.rounded(),
                });
            }
            _ => unanalyzed.push(ingredient.name.clone()),
        }
    }

    let servings = recipe.servings.max(1);

    NutritionAnalysis {
        recipe_name: recipe.name.clone(),
        servings: recipe.servings,
        total_nutrition: total.rounded(),
        per_serving: (total / f64::from(servings)).rounded(),
        ingredient_breakdown: breakdown,
        unanalyzed_ingredients: unanalyzed,
        note: "营养数据为基于常见食材的估算值，仅供参考".to_string(),
    }
}
