//! 巧克力慕斯成本計算示例

use chrono::{TimeZone, Utc};
use foodcost::{
    CostStrategy, DataStore, FoodCostCalculator, IngredientPricePoint, MasterIngredient, Recipe,
    RecipeIngredient,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 巧克力慕斯成本計算示例 ===\n");

    let mut store = DataStore::new();

    // 原料主檔
    let chocolate = MasterIngredient::new("70% 黑巧克力".to_string(), "g".to_string())
        .with_category("巧克力".to_string());
    let cream = MasterIngredient::new("動物性鮮奶油 35%".to_string(), "ml".to_string())
        .with_category("乳製品".to_string());
    let (chocolate_id, cream_id) = (chocolate.id, cream.id);
    store.catalog.add_ingredient(chocolate)?;
    store.catalog.add_ingredient(cream)?;

    // 採購價格記錄
    store.catalog.add_price_point(
        IngredientPricePoint::new(
            chocolate_id,
            "供應商A - 1kg 磚塊".to_string(),
            Decimal::from(1000),
            Decimal::from(22),
        )?
        .with_date_recorded(Utc.with_ymd_and_hms(2023, 1, 15, 10, 0, 0).unwrap()),
    )?;
    store.catalog.add_price_point(
        IngredientPricePoint::new(
            chocolate_id,
            "網購特價 - 500g".to_string(),
            Decimal::from(500),
            Decimal::new(95, 1),
        )?
        .with_date_recorded(Utc.with_ymd_and_hms(2023, 6, 20, 10, 0, 0).unwrap()),
    )?;
    store.catalog.add_price_point(
        IngredientPricePoint::new(
            cream_id,
            "乳品廠 - 1L 瓶裝".to_string(),
            Decimal::from(1000),
            Decimal::from(3),
        )?
        .with_date_recorded(Utc.with_ymd_and_hms(2023, 7, 1, 10, 0, 0).unwrap()),
    )?;

    // 食譜：以顯示單位 0.2 kg 輸入巧克力，標準數量自動換算為 200 g
    let recipe = Recipe::new(
        "簡易巧克力慕斯".to_string(),
        "1. 融化巧克力…\n2. 打發鮮奶油…\n3. 輕柔拌合。".to_string(),
        6,
    )
    .with_ingredient(RecipeIngredient::from_display(
        chocolate_id,
        Decimal::new(2, 1),
        "kg".to_string(),
        "g",
    ))
    .with_ingredient(RecipeIngredient::new(cream_id, Decimal::from(250)));
    store.recipes.upsert(recipe.clone());

    println!("食譜：{}（{} 份）\n", recipe.name, recipe.portions);

    let calculator =
        FoodCostCalculator::new(store.catalog.ingredients(), store.catalog.price_points());

    for strategy in [
        CostStrategy::Cheapest,
        CostStrategy::Latest,
        CostStrategy::Average,
    ] {
        let cost = calculator.calculate(&recipe, strategy);
        println!("策略「{}」", strategy.label());
        println!("  總成本: {:.2} 元", cost.total_cost);
        println!("  每份成本: {:.2} 元", cost.cost_per_portion);

        for line in calculator.line_costs(&recipe, strategy) {
            let source = match &line.resolved {
                Some(resolved) => resolved.source_label.clone(),
                None => "無法定價".to_string(),
            };
            println!(
                "    - {} {} {}：{:.2} 元（{}）",
                line.ingredient_name,
                line.quantity_in_base_units,
                line.base_unit,
                line.line_cost,
                source
            );
        }

        for warning in &cost.warnings {
            println!("  警告: {}", warning);
        }
        println!();
    }

    Ok(())
}
