// Integration tests for recipe queries, shopping lists and resources

use crate::common::{create_test_services, parse_json, sample_recipes, services_with_recipes};
use howtocook::core::error::RecipeError;
use howtocook::core::resources::{CATEGORIES_URI, HEALTH_URI, STATS_URI};

fn strings(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_get_all_recipes_lists_names() {
    let services = create_test_services();
    let listing = parse_json(&services.recipes.get_all_recipes().await.unwrap());

    let listing = listing.as_array().unwrap();
    assert_eq!(listing.len(), 31);
    assert!(listing[0].get("name").is_some());
    assert!(listing[0].get("description").is_some());
    assert!(listing[0].get("ingredients").is_none());
}

#[tokio::test]
async fn test_get_recipes_by_category() {
    let services = create_test_services();

    let aquatic = parse_json(&services.recipes.get_recipes_by_category("水产").await.unwrap());
    assert_eq!(aquatic.as_array().unwrap().len(), 3);

    let err = services.recipes.get_recipes_by_category("火星菜").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "未找到分类为 '火星菜' 的菜谱");
}

#[tokio::test]
async fn test_get_recipe_details() {
    let services = create_test_services();

    let recipe = parse_json(&services.recipes.get_recipe_details("宫保鸡丁").await.unwrap());
    assert_eq!(recipe["name"], "宫保鸡丁");
    assert_eq!(recipe["ingredients"].as_array().unwrap().len(), 3);
    assert_eq!(recipe["steps"][0]["step"], 1);

    // Partial names fall back to substring matching
    let partial = parse_json(&services.recipes.get_recipe_details("鸡丁").await.unwrap());
    assert_eq!(partial["name"], "宫保鸡丁");

    let err = services.recipes.get_recipe_details("不存在的菜").await.unwrap_err();
    assert!(err.to_string().contains("未找到名为"));
}

#[tokio::test]
async fn test_search_recipes_by_ingredients() {
    let services = create_test_services();
    let query = vec!["鸡蛋".to_string(), "面粉".to_string()];

    let result = parse_json(
        &services
            .recipes
            .search_recipes_by_ingredients(&query)
            .await
            .unwrap(),
    );

    assert_eq!(result["total_found"], 8);
    assert_eq!(result["recipes"][0]["name"], "鸡蛋饼");
    assert_eq!(result["recipes"][0]["match_count"], 2);

    let counts: Vec<u64> = result["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["match_count"].as_u64().unwrap())
        .collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_filter_recipes_by_difficulty() {
    let services = create_test_services();
    let expected = sample_recipes().iter().filter(|r| r.difficulty == 1).count();

    let result = parse_json(&services.recipes.filter_recipes_by_difficulty(1).await.unwrap());
    assert_eq!(result["difficulty_level"], 1);
    assert_eq!(result["total_count"], expected);

    for bad in [0, 6] {
        let err = services.recipes.filter_recipes_by_difficulty(bad).await.unwrap_err();
        assert!(matches!(err, RecipeError::InvalidDifficulty(_)));
        assert!(err.to_string().contains("难度等级必须在1-5之间"));
    }
}

#[tokio::test]
async fn test_search_recipes_by_time() {
    let services = create_test_services();

    let result = parse_json(&services.recipes.search_recipes_by_time(15).await.unwrap());
    let times: Vec<u64> = result["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["total_time_minutes"].as_u64().unwrap())
        .collect();

    assert!(!times.is_empty());
    assert_eq!(result["total_found"], times.len());
    assert!(times.iter().all(|t| *t <= 15));
    assert!(times.windows(2).all(|w| w[0] <= w[1]));

    let err = services.recipes.search_recipes_by_time(0).await.unwrap_err();
    assert!(matches!(err, RecipeError::InvalidTime));
}

#[tokio::test]
async fn test_generate_shopping_list() {
    let services = create_test_services();
    let names = vec![
        "红烧肉".to_string(),
        "回锅肉".to_string(),
        "佛跳墙".to_string(),
    ];

    let list = parse_json(&services.recipes.generate_shopping_list(&names, 4).await.unwrap());

    assert_eq!(list["people_count"], 4);
    assert_eq!(strings(&list["selected_recipes"]), vec!["红烧肉", "回锅肉"]);
    assert_eq!(strings(&list["missing_recipes"]), vec!["佛跳墙"]);
    assert_eq!(list["total_ingredients"], 6);

    // Both recipes serve two, so amounts double for four people
    let pork_belly = list["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == "五花肉")
        .unwrap();
    assert_eq!(pork_belly["total_quantity"], 1000.0);

    let plan = &list["shopping_plan"];
    assert!(strings(&plan["fresh"]).contains(&"五花肉".to_string()));
    assert!(strings(&plan["fresh"]).contains(&"猪肉".to_string()));
    assert!(strings(&plan["spices"]).contains(&"冰糖".to_string()));
    assert!(strings(&plan["pantry"]).contains(&"豆瓣酱".to_string()));
}

#[tokio::test]
async fn test_shopping_list_merges_shared_ingredients() {
    let services = create_test_services();
    let names = vec!["红烧肉".to_string(), "葱油拌面".to_string()];

    let list = parse_json(&services.recipes.generate_shopping_list(&names, 2).await.unwrap());
    let soy = list["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == "生抽")
        .unwrap();

    assert_eq!(soy["recipe_count"], 2);
    assert_eq!(soy["total_quantity"], 45.0);
    assert_eq!(soy["unit"], "ml");
    assert_eq!(strings(&soy["text_quantities"]), vec!["15 ml", "15 ml"]);
}

#[tokio::test]
async fn test_shopping_list_without_known_recipes() {
    let services = create_test_services();
    let err = services
        .recipes
        .generate_shopping_list(&["佛跳墙".to_string()], 2)
        .await
        .unwrap_err();
    assert!(matches!(err, RecipeError::RecipeNotFound(_)));
}

#[tokio::test]
async fn test_search_recipes_by_cuisine() {
    let services = create_test_services();
    let result = parse_json(&services.recipes.search_recipes_by_cuisine("川菜").await.unwrap());
    assert_eq!(result["cuisine"], "川菜");
    assert_eq!(result["total_found"], 3);
}

#[tokio::test]
async fn test_get_ingredient_substitutes() {
    let services = create_test_services();

    let result = parse_json(&services.recipes.get_ingredient_substitutes("生抽").await.unwrap());
    assert_eq!(result["original_ingredient"], "生抽");
    assert!(!result["substitutes"].as_array().unwrap().is_empty());

    let err = services
        .recipes
        .get_ingredient_substitutes("龙涎香")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("暂未找到"));
}

#[tokio::test]
async fn test_search_recipes_by_tags() {
    let services = create_test_services();
    let tags = vec!["快手菜".to_string(), "素食".to_string()];

    let all = parse_json(&services.recipes.search_recipes_by_tags(&tags, true).await.unwrap());
    assert_eq!(all["total_found"], 2);
    assert_eq!(all["match_all"], true);

    let any = parse_json(&services.recipes.search_recipes_by_tags(&tags, false).await.unwrap());
    assert_eq!(any["total_found"], 10);
}

#[tokio::test]
async fn test_get_seasonal_recommendations() {
    let services = create_test_services();

    let summer = parse_json(
        &services
            .recipes
            .get_seasonal_recommendations("summer")
            .await
            .unwrap(),
    );
    assert_eq!(summer["season"], "夏季");
    assert_eq!(summer["total_found"], 6);

    let current = parse_json(
        &services
            .recipes
            .get_seasonal_recommendations("current")
            .await
            .unwrap(),
    );
    assert!(current.get("season").is_some());
    assert!(current.get("total_found").is_some());

    let err = services
        .recipes
        .get_seasonal_recommendations("monsoon")
        .await
        .unwrap_err();
    assert!(matches!(err, RecipeError::InvalidSeason(_)));
}

#[tokio::test]
async fn test_analyze_recipe_nutrition() {
    let services = create_test_services();

    let result = parse_json(&services.recipes.analyze_recipe_nutrition("番茄炒蛋").await.unwrap());
    assert_eq!(result["recipe_name"], "番茄炒蛋");
    assert_eq!(result["total_nutrition"]["calories"], 182.0);
    assert_eq!(strings(&result["unanalyzed_ingredients"]), vec!["盐"]);

    let err = services
        .recipes
        .analyze_recipe_nutrition("佛跳墙")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_operations_fail_on_empty_catalog() {
    let services = services_with_recipes(Vec::new());

    let err = services.recipes.get_all_recipes().await.unwrap_err();
    assert!(matches!(err, RecipeError::CatalogUnavailable));
    let err = services.recipes.get_recipe_details("红烧肉").await.unwrap_err();
    assert!(matches!(err, RecipeError::CatalogUnavailable));
}

#[tokio::test]
async fn test_resources() {
    let services = create_test_services();

    let categories = parse_json(&services.read_resource(CATEGORIES_URI).await.unwrap().unwrap());
    assert_eq!(categories["total_count"], 7);

    let stats = parse_json(&services.read_resource(STATS_URI).await.unwrap().unwrap());
    assert_eq!(stats["total_recipes"], 31);
    assert_eq!(stats["categories"]["荤菜"], 7);
    assert_eq!(stats["description"], "菜谱数据统计信息");

    let health = parse_json(&services.read_resource(HEALTH_URI).await.unwrap().unwrap());
    assert_eq!(health["overall_status"], "healthy");
    assert_eq!(health["data_source"]["recipe_count"], 31);
}

#[tokio::test]
async fn test_operations_are_monitored() {
    let services = create_test_services();
    services.recipes.get_recipe_details("红烧肉").await.unwrap();
    let _ = services.recipes.get_recipe_details("佛跳墙").await;

    let stats = services.monitor.stats("get_recipe_details").await;
    assert_eq!(stats.count, 2);
    assert_eq!(stats.success_rate, 50.0);
    assert_eq!(stats.recent_errors.len(), 1);
}
