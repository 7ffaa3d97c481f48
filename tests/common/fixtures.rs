// Sample recipe catalog shared by integration tests

use howtocook::core::types::Recipe;
use serde_json::{json, Value};

/// (name, quantity, unit, text_quantity)
type IngredientSpec<'a> = (&'a str, Option<f64>, Option<&'a str>, &'a str);

fn ingredients(specs: &[IngredientSpec]) -> Value {
    Value::Array(
        specs
            .iter()
            .map(|(name, quantity, unit, text)| {
                json!({
                    "name": name,
                    "quantity": quantity,
                    "unit": unit,
                    "text_quantity": text,
                })
            })
            .collect(),
    )
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: &str,
    name: &str,
    category: &str,
    difficulty: u8,
    servings: u32,
    tags: &[&str],
    total_time: Option<u32>,
    specs: &[IngredientSpec],
) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name}的做法"),
        "source_path": format!("dishes/{id}.md"),
        "category": category,
        "difficulty": difficulty,
        "tags": tags,
        "servings": servings,
        "ingredients": ingredients(specs),
        "steps": [
            {"step": 1, "description": "准备食材"},
            {"step": 2, "description": "烹饪出锅"}
        ],
        "total_time_minutes": total_time,
    })
}

/// Raw catalog as served by the upstream JSON endpoint
pub fn sample_catalog() -> Value {
    let g = Some("g");
    let ge = Some("个");
    let ml = Some("ml");
    Value::Array(vec![
        // 早餐
        recipe("doujiang", "豆浆油条", "早餐", 2, 2, &["早餐", "传统"], Some(30),
            &[("黄豆", Some(100.0), g, "100 g"), ("面粉", Some(200.0), g, "200 g")]),
        recipe("jidanbing", "鸡蛋饼", "早餐", 1, 1, &["早餐", "快手菜"], Some(15),
            &[("鸡蛋", Some(2.0), ge, "2 个"), ("面粉", Some(100.0), g, "100 g")]),
        recipe("xiaomizhou", "小米粥", "早餐", 1, 2, &["早餐", "清淡"], Some(40),
            &[("小米", Some(100.0), g, "100 g")]),
        recipe("jianjiao", "煎饺", "早餐", 2, 2, &["早餐"], Some(25),
            &[("面粉", Some(200.0), g, "200 g"), ("猪肉馅", Some(150.0), g, "150 g")]),
        recipe("yanmai", "燕麦牛奶", "早餐", 1, 1, &["早餐", "快手菜"], Some(5),
            &[("燕麦", Some(50.0), g, "50 g"), ("牛奶", Some(250.0), ml, "250 ml")]),
        recipe("chayedan", "茶叶蛋", "早餐", 1, 4, &["早餐", "传统"], None,
            &[("鸡蛋", Some(6.0), ge, "6 个"), ("茶叶", None, None, "适量")]),
        // 主食
        recipe("danchaofan", "蛋炒饭", "主食", 1, 1, &["快手菜", "家常菜"], Some(15),
            &[("米饭", Some(300.0), g, "300 g"), ("鸡蛋", Some(2.0), ge, "2 个"), ("葱", None, None, "适量")]),
        recipe("xihongshimian", "西红柿鸡蛋面", "主食", 1, 1, &["家常菜"], Some(20),
            &[("面条", Some(150.0), g, "150 g"), ("西红柿", Some(1.0), ge, "1 个"), ("鸡蛋", Some(1.0), ge, "1 个")]),
        recipe("yangzhouchaofan", "扬州炒饭", "主食", 2, 2, &["粤菜"], Some(25),
            &[("米饭", Some(400.0), g, "400 g"), ("虾仁", Some(100.0), g, "100 g"), ("火腿", Some(50.0), g, "50 g")]),
        recipe("congyoubanmian", "葱油拌面", "主食", 2, 1, &["上海菜", "快手菜"], Some(20),
            &[("面条", Some(150.0), g, "150 g"), ("葱", Some(50.0), g, "50 g"), ("生抽", Some(15.0), ml, "15 ml")]),
        // 荤菜
        recipe("hongshaorou", "红烧肉", "荤菜", 3, 2, &["家常菜", "下饭"], Some(90),
            &[("五花肉", Some(500.0), g, "500 g"), ("冰糖", Some(30.0), g, "30 g"), ("生抽", Some(15.0), ml, "15 ml")]),
        recipe("gongbaojiding", "宫保鸡丁", "荤菜", 3, 2, &["川菜", "下饭"], Some(30),
            &[("鸡肉", Some(300.0), g, "300 g"), ("花生", Some(50.0), g, "50 g"), ("干辣椒", None, None, "适量")]),
        recipe("tudoudunniurou", "土豆炖牛肉", "荤菜", 3, 3, &["家常菜"], Some(120),
            &[("牛肉", Some(500.0), g, "500 g"), ("土豆", Some(2.0), ge, "2 个")]),
        recipe("congbaoyangrou", "葱爆羊肉", "荤菜", 3, 2, &["鲁菜"], Some(20),
            &[("羊肉", Some(300.0), g, "300 g"), ("大葱", Some(1.0), Some("根"), "1 根")]),
        recipe("pijiuya", "啤酒鸭", "荤菜", 4, 4, &["江西菜"], Some(80),
            &[("鸭肉", Some(800.0), g, "800 g"), ("啤酒", Some(500.0), ml, "500 ml")]),
        recipe("huiguorou", "回锅肉", "荤菜", 3, 2, &["川菜", "下饭"], Some(40),
            &[("猪肉", Some(300.0), g, "300 g"), ("青椒", Some(2.0), ge, "2 个"), ("豆瓣酱", Some(20.0), g, "20 g")]),
        recipe("kelejichi", "可乐鸡翅", "荤菜", 2, 2, &["家常菜"], Some(35),
            &[("鸡翅", Some(8.0), ge, "8 个"), ("可乐", Some(330.0), ml, "330 ml")]),
        // 水产
        recipe("qingzhengluyu", "清蒸鲈鱼", "水产", 3, 2, &["粤菜", "清淡"], Some(30),
            &[("鲈鱼", Some(1.0), Some("条"), "1 条"), ("姜", None, None, "适量"), ("蒸鱼豉油", None, None, "适量")]),
        recipe("youmendaxia", "油焖大虾", "水产", 3, 2, &["鲁菜"], Some(25),
            &[("大虾", Some(500.0), g, "500 g"), ("番茄酱", Some(30.0), g, "30 g")]),
        recipe("hongshaoyukuai", "红烧鱼块", "水产", 3, 3, &["家常菜"], Some(45),
            &[("鱼肉", Some(500.0), g, "500 g"), ("生抽", Some(20.0), ml, "20 ml")]),
        // 素菜
        recipe("paihuanggua", "拍黄瓜", "素菜", 1, 2, &["凉菜", "快手菜", "素食"], Some(10),
            &[("黄瓜", Some(2.0), Some("根"), "2 根"), ("蒜", Some(3.0), Some("瓣"), "3 瓣"), ("醋", Some(15.0), ml, "15 ml")]),
        recipe("fanqiechaodan", "番茄炒蛋", "素菜", 1, 2, &["家常菜", "快手菜"], Some(15),
            &[("番茄", Some(200.0), g, "200 g"), ("鸡蛋", Some(2.0), ge, "2 个"), ("盐", None, None, "适量")]),
        recipe("mapodoufu", "麻婆豆腐", "素菜", 2, 2, &["川菜", "下饭"], Some(25),
            &[("豆腐", Some(400.0), g, "400 g"), ("豆瓣酱", Some(20.0), g, "20 g"), ("花椒", None, None, "适量")]),
        recipe("qingchaobocai", "清炒菠菜", "素菜", 1, 2, &["素食", "清淡"], Some(10),
            &[("菠菜", Some(300.0), g, "300 g"), ("蒜", Some(2.0), Some("瓣"), "2 瓣")]),
        recipe("disanxian", "地三鲜", "素菜", 2, 3, &["东北菜", "素食"], Some(35),
            &[("茄子", Some(1.0), ge, "1 个"), ("土豆", Some(1.0), ge, "1 个"), ("青椒", Some(1.0), ge, "1 个")]),
        recipe("culiubaicai", "醋溜白菜", "素菜", 1, 2, &["素食", "快手菜"], None,
            &[("白菜", Some(500.0), g, "500 g"), ("醋", Some(20.0), ml, "20 ml")]),
        // 甜品
        recipe("hongdousha", "红豆沙", "甜品", 2, 4, &["甜品"], Some(120),
            &[("红豆", Some(200.0), g, "200 g"), ("冰糖", Some(50.0), g, "50 g")]),
        recipe("mangguoximilu", "芒果西米露", "甜品", 2, 2, &["甜品", "港式"], Some(40),
            &[("芒果", Some(2.0), ge, "2 个"), ("西米", Some(80.0), g, "80 g"), ("牛奶", Some(200.0), ml, "200 ml")]),
        // 汤羹
        recipe("zicaidanhuatang", "紫菜蛋花汤", "汤羹", 1, 2, &["快手菜", "清淡"], Some(10),
            &[("紫菜", Some(10.0), g, "10 g"), ("鸡蛋", Some(1.0), ge, "1 个")]),
        recipe("dongguapaigutang", "冬瓜排骨汤", "汤羹", 2, 3, &["家常菜"], Some(90),
            &[("冬瓜", Some(500.0), g, "500 g"), ("排骨", Some(500.0), g, "500 g")]),
        recipe("yuminongtang", "玉米浓汤", "汤羹", 2, 2, &["西式"], Some(30),
            &[("玉米", Some(1.0), Some("根"), "1 根"), ("牛奶", Some(250.0), ml, "250 ml")]),
    ])
}

pub fn sample_recipes() -> Vec<Recipe> {
    serde_json::from_value(sample_catalog()).expect("sample catalog should deserialize")
}

/// Catalog body for mocked HTTP sources
pub fn sample_catalog_json() -> String {
    sample_catalog().to_string()
}
