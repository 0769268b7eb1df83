//! 集成測試

use chrono::{DateTime, TimeZone, Utc};
use foodcost_calc::FoodCostCalculator;
use foodcost_core::*;
use foodcost_store::{CascadeReport, CostSettings, DataStore};
use rust_decimal::Decimal;
use uuid::Uuid;

fn recorded_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

fn add_price_point(
    store: &mut DataStore,
    ingredient_id: Uuid,
    notes: &str,
    quantity: i64,
    cost: Decimal,
    (year, month, day): (i32, u32, u32),
) {
    let point = IngredientPricePoint::new(
        ingredient_id,
        notes.to_string(),
        Decimal::from(quantity),
        cost,
    )
    .unwrap()
    .with_date_recorded(recorded_on(year, month, day));
    store.catalog.add_price_point(point).unwrap();
}

/// 範例資料：巧克力慕斯的四種原料與其採購記錄
///
/// 巧克力的三筆單位成本為 0.022 / 0.025 / 0.019，
/// 最近的一筆（2023-06-20）剛好也最便宜。
fn sample_store() -> (DataStore, Uuid, Uuid, Uuid, Uuid) {
    let mut store = DataStore::new();

    let chocolate = MasterIngredient::new("70% 黑巧克力".to_string(), "g".to_string())
        .with_category("巧克力".to_string());
    let eggs = MasterIngredient::new("新鮮雞蛋（中）".to_string(), "pz".to_string())
        .with_category("蛋類".to_string());
    let sugar = MasterIngredient::new("細砂糖".to_string(), "g".to_string())
        .with_category("糖類".to_string());
    let cream = MasterIngredient::new("動物性鮮奶油 35%".to_string(), "ml".to_string())
        .with_category("乳製品".to_string());

    let (chocolate_id, eggs_id, sugar_id, cream_id) = (chocolate.id, eggs.id, sugar.id, cream.id);

    for ingredient in [chocolate, eggs, sugar, cream] {
        store.catalog.add_ingredient(ingredient).unwrap();
    }

    // 巧克力：1kg 22 元、200g 5 元、500g 9.5 元
    add_price_point(
        &mut store,
        chocolate_id,
        "供應商A - 1kg 磚塊",
        1000,
        Decimal::from(22),
        (2023, 1, 15),
    );
    add_price_point(
        &mut store,
        chocolate_id,
        "超市 - 200g 排裝",
        200,
        Decimal::from(5),
        (2023, 3, 10),
    );
    add_price_point(
        &mut store,
        chocolate_id,
        "網購特價 - 500g",
        500,
        Decimal::new(95, 1),
        (2023, 6, 20),
    );

    // 雞蛋：6 入 1.8 元、10 入 2.8 元
    add_price_point(
        &mut store,
        eggs_id,
        "當地農場 - 6 入",
        6,
        Decimal::new(18, 1),
        (2023, 1, 1),
    );
    add_price_point(
        &mut store,
        eggs_id,
        "超市 - 10 入",
        10,
        Decimal::new(28, 1),
        (2023, 5, 5),
    );

    // 細砂糖：5kg 6.5 元、1kg 1.5 元
    add_price_point(
        &mut store,
        sugar_id,
        "批發商 - 5kg 袋裝",
        5000,
        Decimal::new(65, 1),
        (2022, 12, 1),
    );
    add_price_point(
        &mut store,
        sugar_id,
        "超市 - 1kg 包裝",
        1000,
        Decimal::new(15, 1),
        (2023, 4, 12),
    );

    // 鮮奶油：1L 3 元
    add_price_point(
        &mut store,
        cream_id,
        "乳品廠 - 1L 瓶裝",
        1000,
        Decimal::from(3),
        (2023, 7, 1),
    );

    (store, chocolate_id, eggs_id, sugar_id, cream_id)
}

fn mousse_recipe(chocolate_id: Uuid, eggs_id: Uuid, sugar_id: Uuid, cream_id: Uuid) -> Recipe {
    Recipe::new(
        "簡易巧克力慕斯".to_string(),
        "1. 融化巧克力…\n2. 打發鮮奶油…\n3. 輕柔拌合。".to_string(),
        6,
    )
    .with_ingredient(RecipeIngredient::new(chocolate_id, Decimal::from(200)))
    .with_ingredient(RecipeIngredient::new(eggs_id, Decimal::from(4)))
    .with_ingredient(RecipeIngredient::new(sugar_id, Decimal::from(80)))
    .with_ingredient(RecipeIngredient::new(cream_id, Decimal::from(250)))
}

#[test]
fn test_mousse_costing_across_strategies() {
    // 場景：同一份慕斯食譜，三種策略算出三種總成本

    // 1. 建立範例資料
    let (store, chocolate_id, eggs_id, sugar_id, cream_id) = sample_store();
    let recipe = mousse_recipe(chocolate_id, eggs_id, sugar_id, cream_id);

    // 2. 以目錄快照建立計算器
    let calculator =
        FoodCostCalculator::new(store.catalog.ingredients(), store.catalog.price_points());

    // 3. 最低價：200×0.019 + 4×0.28 + 80×0.0013 + 250×0.003 = 5.774
    let cheapest = calculator.calculate(&recipe, CostStrategy::Cheapest);
    assert_eq!(cheapest.total_cost, Decimal::new(5774, 3));
    assert_eq!(cheapest.cost_per_portion.round_dp(4), Decimal::new(9623, 4));
    assert!(!cheapest.has_warnings());

    // 4. 最近價：砂糖改用 0.0015，其他不變 = 5.79
    let latest = calculator.calculate(&recipe, CostStrategy::Latest);
    assert_eq!(latest.total_cost, Decimal::new(579, 2));

    // 5. 平均價：200×0.022 + 4×0.29 + 80×0.0014 + 250×0.003 = 6.422
    let average = calculator.calculate(&recipe, CostStrategy::Average);
    assert_eq!(average.total_cost, Decimal::new(6422, 3));

    // 6. 純函數：重算結果與第一次完全相同
    assert_eq!(
        calculator.calculate(&recipe, CostStrategy::Cheapest),
        cheapest
    );
}

#[test]
fn test_display_unit_editing_feeds_costing() {
    // 場景：使用者以 0.2 kg 輸入巧克力用量，標準數量換算為 200 g 後參與計算

    let (store, chocolate_id, eggs_id, sugar_id, cream_id) = sample_store();

    let mut recipe = mousse_recipe(chocolate_id, eggs_id, sugar_id, cream_id);
    recipe.ingredients[0] =
        RecipeIngredient::from_display(chocolate_id, Decimal::new(2, 1), "kg".to_string(), "g");
    assert_eq!(recipe.ingredients[0].quantity, Decimal::from(200));

    let calculator =
        FoodCostCalculator::new(store.catalog.ingredients(), store.catalog.price_points());
    let cost = calculator.calculate(&recipe, CostStrategy::Cheapest);
    assert_eq!(cost.total_cost, Decimal::new(5774, 3));

    // 換算失敗（跨類別單位）→ 標準數量為零 → 以「用量無效」警告被攔下
    recipe.ingredients[0].set_display(Some(Decimal::from(200)), Some("ml".to_string()), "g");
    let degraded = calculator.calculate(&recipe, CostStrategy::Cheapest);
    assert_eq!(degraded.warnings.len(), 1);
    assert!(degraded.warnings[0].contains("用量無效"));
    assert_eq!(degraded.total_cost, Decimal::new(1974, 3)); // 5.774 - 3.8
}

#[test]
fn test_missing_price_data_produces_single_warning() {
    // 場景：馬斯卡彭尚未登錄任何採購價格

    let (mut store, chocolate_id, eggs_id, sugar_id, cream_id) = sample_store();

    let mascarpone = MasterIngredient::new("馬斯卡彭".to_string(), "g".to_string());
    let mascarpone_id = mascarpone.id;
    store.catalog.add_ingredient(mascarpone).unwrap();

    let mut recipe = mousse_recipe(chocolate_id, eggs_id, sugar_id, cream_id);
    recipe.add_ingredient(RecipeIngredient::new(mascarpone_id, Decimal::from(250)));

    let calculator =
        FoodCostCalculator::new(store.catalog.ingredients(), store.catalog.price_points());
    let cost = calculator.calculate(&recipe, CostStrategy::Cheapest);

    // 總成本不受該行影響，警告恰好一則並點名原料
    assert_eq!(cost.total_cost, Decimal::new(5774, 3));
    assert_eq!(cost.warnings.len(), 1);
    assert!(cost.warnings[0].contains("馬斯卡彭"));
}

#[test]
fn test_line_costs_name_their_sources() {
    let (store, chocolate_id, eggs_id, sugar_id, cream_id) = sample_store();
    let recipe = mousse_recipe(chocolate_id, eggs_id, sugar_id, cream_id);

    let calculator =
        FoodCostCalculator::new(store.catalog.ingredients(), store.catalog.price_points());

    let lines = calculator.line_costs(&recipe, CostStrategy::Cheapest);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].line_cost, Decimal::new(38, 1));
    assert_eq!(
        lines[0].resolved.as_ref().unwrap().source_label,
        "最低記錄價格（網購特價 - 500g）"
    );

    // 平均策略：來源是合成值，不指向任何一筆記錄
    let averaged = calculator.line_costs(&recipe, CostStrategy::Average);
    let resolved = averaged[0].resolved.as_ref().unwrap();
    assert_eq!(resolved.price_point_id, None);
    assert_eq!(resolved.source_label, "記錄價格的平均值");
}

#[test]
fn test_persisted_settings_drive_calculation() {
    // 場景：設定端持久化的策略字串經由 CostSettings 傳入計算

    let (store, chocolate_id, eggs_id, sugar_id, cream_id) = sample_store();
    let recipe = mousse_recipe(chocolate_id, eggs_id, sugar_id, cream_id);

    let settings: CostSettings = serde_json::from_str("{\"strategy\":\"latest\"}").unwrap();
    assert_eq!(settings.strategy, CostStrategy::Latest);

    let calculator =
        FoodCostCalculator::new(store.catalog.ingredients(), store.catalog.price_points());
    let cost = calculator.calculate(&recipe, settings.strategy);
    assert_eq!(cost.total_cost, Decimal::new(579, 2));
}

#[test]
fn test_master_ingredient_deletion_cascade() {
    // 場景：刪除巧克力主檔後，價格記錄與食譜引用行全部消失；
    //       只含巧克力的食譜整份移除，混合食譜剩下其他原料行

    let (mut store, chocolate_id, eggs_id, sugar_id, cream_id) = sample_store();

    let mousse = mousse_recipe(chocolate_id, eggs_id, sugar_id, cream_id);
    let mousse_id = mousse.id;
    store.recipes.upsert(mousse);

    let ganache = Recipe::new("甘納許".to_string(), String::new(), 1)
        .with_ingredient(RecipeIngredient::new(chocolate_id, Decimal::from(300)));
    store.recipes.upsert(ganache);

    let report = store.remove_master_ingredient(chocolate_id).unwrap();
    assert_eq!(
        report,
        CascadeReport {
            removed_price_points: 3,
            stripped_lines: 2,
            removed_recipes: 1,
        }
    );

    // 慕斯還在，但只剩三行；之後的計算不再看得到巧克力
    let mousse = store.recipes.find(mousse_id).unwrap();
    assert_eq!(mousse.ingredients.len(), 3);

    let calculator =
        FoodCostCalculator::new(store.catalog.ingredients(), store.catalog.price_points());
    let cost = calculator.calculate(mousse, CostStrategy::Cheapest);
    assert_eq!(cost.total_cost, Decimal::new(1974, 3));
    assert!(!cost.has_warnings());
}
