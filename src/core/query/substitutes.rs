//! Ingredient substitution table.

use std::cmp::Reverse;

// Order is significant: among equally long partial matches the
// earlier entry wins.
const SUBSTITUTES: &[(&str, &[&str])] = &[
    ("生抽", &["酱油", "老抽（少量，加水稀释）", "蚝油（加水稀释）", "鱼露"]),
    ("老抽", &["生抽加少许红糖", "酱油加焦糖色"]),
    ("酱油", &["生抽", "蚝油", "鱼露", "盐加少许糖"]),
    ("蚝油", &["生抽加少许糖", "海鲜酱", "鱼露"]),
    ("料酒", &["黄酒", "米酒", "白葡萄酒", "清酒"]),
    ("黄酒", &["料酒", "米酒", "绍兴酒"]),
    ("醋", &["柠檬汁", "白葡萄酒醋", "苹果醋"]),
    ("香醋", &["陈醋", "米醋加少许糖"]),
    ("白糖", &["冰糖", "红糖", "蜂蜜", "枫糖浆"]),
    ("冰糖", &["白糖", "红糖"]),
    ("淀粉", &["玉米淀粉", "土豆淀粉", "面粉（用量加倍）", "藕粉"]),
    ("玉米淀粉", &["土豆淀粉", "红薯淀粉", "木薯淀粉"]),
    ("黄油", &["植物油", "椰子油", "猪油"]),
    ("牛奶", &["豆浆", "椰奶", "燕麦奶"]),
    ("鸡蛋", &["香蕉泥（烘焙）", "亚麻籽粉加水", "嫩豆腐"]),
    ("葱", &["洋葱", "韭菜", "蒜苗"]),
    ("姜", &["姜粉", "南姜", "少量胡椒"]),
    ("蒜", &["蒜粉", "蒜苗", "洋葱"]),
    ("花椒", &["花椒粉", "藤椒", "黑胡椒"]),
    ("豆瓣酱", &["辣椒酱", "黄豆酱加辣椒"]),
    ("猪肉", &["鸡肉", "牛肉", "豆腐（素食）"]),
    ("鸡肉", &["火鸡肉", "猪里脊", "豆腐（素食）"]),
    ("牛肉", &["羊肉", "猪肉", "香菇（素食）"]),
    ("鸡精", &["味精", "蘑菇粉", "少许糖和盐"]),
    ("香菜", &["芹菜叶", "欧芹", "葱花"]),
];

/// Look up substitutes: exact name first, then a substring match
/// in either direction. Returns the matched table key alongside.
pub fn find_substitutes(ingredient: &str) -> Option<(&'static str, &'static [&'static str])> {
    let query = ingredient.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(&(key, values)) = SUBSTITUTES.iter().find(|(key, _)| *key == query) {
        return Some((key, values));
    }

    // Longest key wins so 玉米淀粉 is preferred over 淀粉
    SUBSTITUTES
        .iter()
        .filter(|(key, _)| query.contains(*key) || key.contains(query))
        .min_by_key(|(key, _)| Reverse(key.chars().count()))
        .map(|&(key, values)| (key, values))
}
