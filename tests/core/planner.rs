// Integration tests for meal plans and dish recommendations

use crate::common::{create_test_services, parse_json, sample_recipes, services_with_recipes};
use howtocook::core::error::RecipeError;
use std::collections::HashSet;

#[tokio::test]
async fn test_recommend_meals_shape() {
    let services = create_test_services();

    let plan = parse_json(&services.meals.recommend_meals(4, &[], &[]).await.unwrap());

    let weekdays = plan["weekdays"].as_array().unwrap();
    assert_eq!(weekdays.len(), 5);
    assert_eq!(weekdays[0]["day"], "周一");
    assert_eq!(weekdays[4]["day"], "周五");
    assert!(plan["weekend"].as_array().unwrap().is_empty());

    for day in weekdays {
        // 4 people: one breakfast item, two dishes per meal
        assert_eq!(day["breakfast"].as_array().unwrap().len(), 1);
        assert_eq!(day["lunch"].as_array().unwrap().len(), 2);
        assert_eq!(day["dinner"].as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_recommend_meals_never_repeats_a_dish() {
    let services = create_test_services();

    for _ in 0..10 {
        let plan = services.meals.plan_week(7, &[], &[]).await.unwrap();
        let mut seen = HashSet::new();
        for day in &plan.weekdays {
            for dish in day.dishes() {
                assert!(seen.insert(dish.id.clone()), "dish {} repeated", dish.id);
            }
        }
    }
}

#[tokio::test]
async fn test_recommend_meals_respects_restrictions() {
    let services = create_test_services();
    let allergies = vec!["鸡蛋".to_string()];
    let avoid = vec!["牛奶".to_string()];

    let recipes = sample_recipes();
    let banned: HashSet<String> = recipes
        .iter()
        .filter(|r| r.has_ingredient_containing("鸡蛋") || r.has_ingredient_containing("牛奶"))
        .map(|r| r.id.clone())
        .collect();
    assert!(!banned.is_empty());

    for _ in 0..10 {
        let plan = services
            .meals
            .plan_week(3, &allergies, &avoid)
            .await
            .unwrap();
        for day in &plan.weekdays {
            assert!(day.dishes().all(|dish| !banned.contains(&dish.id)));
        }
    }
}

#[tokio::test]
async fn test_recommend_meals_rejects_bad_people_count() {
    let services = create_test_services();

    for people in [0, 11] {
        let err = services.meals.recommend_meals(people, &[], &[]).await.unwrap_err();
        assert!(err.is_bad_request());
        assert_eq!(err.to_string(), "用餐人数必须在1-10之间");
    }
}

#[tokio::test]
async fn test_recommend_meals_empty_catalog() {
    let services = services_with_recipes(Vec::new());
    let err = services.meals.recommend_meals(2, &[], &[]).await.unwrap_err();
    assert!(matches!(err, RecipeError::CatalogUnavailable));
}

#[tokio::test]
async fn test_what_to_eat_counts() {
    let services = create_test_services();

    for people in 1..=10u32 {
        let rec = parse_json(&services.recommendations.what_to_eat(people).await.unwrap());
        let dishes = rec["dishes"].as_array().unwrap();
        let meat = rec["meat_dish_count"].as_u64().unwrap() as usize;
        let veg = rec["vegetable_dish_count"].as_u64().unwrap() as usize;

        assert_eq!(rec["people_count"], people);
        assert_eq!(dishes.len(), meat + veg);
        assert_eq!(veg, (people as usize + 1) / 2);
        assert_eq!(
            rec["message"],
            format!("为{people}人推荐的菜品，包含{meat}个荤菜和{veg}个素菜。")
        );

        let ids: HashSet<&str> = dishes.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids.len(), dishes.len());
    }
}

#[tokio::test]
async fn test_what_to_eat_large_party_includes_aquatic_dish() {
    let services = create_test_services();
    let aquatic: HashSet<String> = sample_recipes()
        .into_iter()
        .filter(|r| r.category == "水产")
        .map(|r| r.id)
        .collect();

    let rec = services.recommendations.recommend(10).await.unwrap();
    assert!(aquatic.contains(&rec.dishes[0].id));
    assert_eq!(rec.meat_dish_count, 6);
}

#[tokio::test]
async fn test_what_to_eat_rejects_bad_people_count() {
    let services = create_test_services();
    let err = services.recommendations.what_to_eat(0).await.unwrap_err();
    assert!(matches!(err, RecipeError::InvalidPeopleCount { min: 1, max: 10 }));

    let stats = services.monitor.stats("what_to_eat").await;
    assert_eq!(stats.count, 1);
    assert_eq!(stats.success_rate, 0.0);
}
