//! Prompt templates for meal planning and recipe recommendation.

use std::fmt::Write;

pub const MEAL_PLANNING_PROMPT: &str = "meal_planning_assistant";
pub const RECIPE_RECOMMENDATION_PROMPT: &str = "recipe_recommendation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetLevel {
    /// Unknown values fall back to `Medium`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "经济实惠，注重性价比",
            Self::Medium => "适中预算，营养均衡",
            Self::High => "不限预算，追求品质",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Unknown values fall back to `Beginner`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Beginner => "新手友好，步骤简单",
            Self::Intermediate => "有一定基础，可以尝试中等难度",
            Self::Advanced => "经验丰富，可以挑战复杂菜品",
        }
    }
}

pub fn meal_planning_prompt(
    people_count: u32,
    dietary_restrictions: &[String],
    cuisine_preferences: &[String],
    budget_level: &str,
) -> String {
    let mut prompt = String::from("你是一位专业的营养师和厨师，请为以下需求制定膳食计划：\n\n");

    // Writing into a String cannot fail
    let _ = writeln!(prompt, "用餐人数：{people_count}人");
    if !dietary_restrictions.is_empty() {
        let _ = writeln!(prompt, "饮食限制：{}", dietary_restrictions.join(", "));
    }
    if !cuisine_preferences.is_empty() {
        let _ = writeln!(prompt, "菜系偏好：{}", cuisine_preferences.join(", "));
    }
    let _ = writeln!(
        prompt,
        "预算水平：{}",
        BudgetLevel::parse(budget_level).description()
    );

    prompt.push_str(
        "\n请考虑以下因素：\n\
         1. 营养均衡：确保蛋白质、维生素、纤维等营养素的合理搭配\n\
         2. 口味多样：避免连续几天重复相似的菜品\n\
         3. 季节性：优先选择当季食材\n\
         4. 制作难度：合理安排简单和复杂菜品的比例\n\
         5. 食材利用：尽量减少食材浪费，提高利用率\n\
         \n请使用 HowToCook MCP 服务的工具来获取菜谱信息并制定计划。",
    );
    prompt
}

pub fn recipe_recommendation_prompt(
    occasion: &str,
    cooking_time: Option<u32>,
    skill_level: &str,
) -> String {
    let mut prompt = String::from("请为以下场合推荐合适的菜谱：\n\n");

    let _ = writeln!(prompt, "用餐场合：{occasion}");
    if let Some(minutes) = cooking_time.filter(|m| *m > 0) {
        let _ = writeln!(prompt, "可用时间：{minutes}分钟");
    }
    let _ = writeln!(
        prompt,
        "技能水平：{}",
        SkillLevel::parse(skill_level).description()
    );

    prompt.push_str(
        "\n推荐要求：\n\
         1. 符合用餐场合的特点和氛围\n\
         2. 考虑制作时间和技能要求\n\
         3. 提供详细的制作步骤和注意事项\n\
         4. 如果可能，推荐搭配的菜品或饮品\n\
         \n请使用 HowToCook MCP 服务来查找和推荐菜谱。",
    );
    prompt
}
