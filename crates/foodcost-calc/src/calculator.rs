//! 食譜成本計算器

use std::collections::HashMap;

use foodcost_core::{CostStrategy, IngredientPricePoint, MasterIngredient, Recipe};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::resolution::{PriceResolver, ResolvedPrice};
use crate::FoodCost;

/// 單一原料行的成本明細（顯示用）
#[derive(Debug, Clone)]
pub struct LineCost {
    /// 原料行ID
    pub line_id: Uuid,

    /// 原料ID
    pub master_ingredient_id: Uuid,

    /// 原料名稱
    pub ingredient_name: String,

    /// 標準數量（基準單位）
    pub quantity_in_base_units: Decimal,

    /// 基準單位縮寫
    pub base_unit: String,

    /// 解析出的價格（沒有價格記錄時為 None）
    pub resolved: Option<ResolvedPrice>,

    /// 此行成本（無法定價時為零）
    pub line_cost: Decimal,
}

/// 食譜成本計算器
///
/// 以唯讀快照建立索引；每次呼叫都是對輸入的純函數計算，
/// 不做 I/O、不改動輸入、不留任何狀態。
pub struct FoodCostCalculator<'a> {
    /// 原料主檔索引
    ingredients: HashMap<Uuid, &'a MasterIngredient>,

    /// 每原料的價格記錄（保留存儲順序）
    price_points: HashMap<Uuid, Vec<&'a IngredientPricePoint>>,
}

impl<'a> FoodCostCalculator<'a> {
    /// 以原料主檔與價格記錄快照創建計算器
    pub fn new(
        ingredients: &'a [MasterIngredient],
        price_points: &'a [IngredientPricePoint],
    ) -> Self {
        let ingredient_index = ingredients.iter().map(|mi| (mi.id, mi)).collect();

        let mut price_index: HashMap<Uuid, Vec<&'a IngredientPricePoint>> = HashMap::new();
        for point in price_points {
            price_index
                .entry(point.master_ingredient_id)
                .or_insert_with(Vec::new)
                .push(point);
        }

        Self {
            ingredients: ingredient_index,
            price_points: price_index,
        }
    }

    /// 計算食譜成本
    ///
    /// 策略以參數明確傳入，輸出完全由引數決定。
    /// 單一原料行的資料問題（原料不存在、用量無效、沒有價格記錄）
    /// 一律降級為警告並跳過該行，永不中斷整體計算；
    /// 警告順序與成本加總順序都是原料行順序。
    pub fn calculate(&self, recipe: &Recipe, strategy: CostStrategy) -> FoodCost {
        tracing::debug!(
            "開始計算食譜成本: {}（{} 行原料，策略 {}）",
            recipe.name,
            recipe.ingredients.len(),
            strategy
        );

        let mut cost = FoodCost::empty();

        for line in &recipe.ingredients {
            // 解析原料主檔
            let master = match self.ingredients.get(&line.master_ingredient_id) {
                Some(master) => *master,
                None => {
                    cost.add_warning(format!(
                        "找不到原料定義 ID: {}（原料行 ID: {}），此行不計入成本",
                        line.master_ingredient_id, line.id
                    ));
                    continue;
                }
            };

            // 檢查標準數量（單位換算失敗的行在此以零值被攔下）
            if line.quantity <= Decimal::ZERO {
                cost.add_warning(format!(
                    "{} 的用量無效（{}），此行不計入成本",
                    master.name, line.quantity
                ));
                continue;
            }

            // 收集該原料的價格記錄
            let points = match self.price_points.get(&master.id) {
                Some(points) if !points.is_empty() => points,
                _ => {
                    cost.add_warning(format!(
                        "{} 沒有任何價格記錄，此行不計入成本",
                        master.name
                    ));
                    continue;
                }
            };

            // 解析有效單位成本；解析不出結果時同樣降級為警告
            let resolved = match PriceResolver::resolve(points, strategy) {
                Some(resolved) => resolved,
                None => {
                    cost.add_warning(format!(
                        "無法以策略 {} 解析 {} 的價格，此行不計入成本",
                        strategy, master.name
                    ));
                    continue;
                }
            };

            cost.total_cost += line.quantity * resolved.cost_per_base_unit;
        }

        cost.cost_per_portion = if recipe.portions > 0 {
            cost.total_cost / Decimal::from(recipe.portions)
        } else {
            Decimal::ZERO
        };

        tracing::debug!(
            "食譜 {} 計算完成：總成本 {}，每份 {}，警告 {} 則",
            recipe.name,
            cost.total_cost,
            cost.cost_per_portion,
            cost.warnings.len()
        );

        cost
    }

    /// 逐行成本明細（顯示用）
    ///
    /// 只包含原料主檔可解析且用量有效的行；沒有價格記錄的行
    /// `resolved` 為 None、成本為零。成本權威仍是 [`calculate`](Self::calculate)。
    pub fn line_costs(&self, recipe: &Recipe, strategy: CostStrategy) -> Vec<LineCost> {
        let mut lines = Vec::new();

        for line in &recipe.ingredients {
            let master = match self.ingredients.get(&line.master_ingredient_id) {
                Some(master) => *master,
                None => continue,
            };
            if line.quantity <= Decimal::ZERO {
                continue;
            }

            let resolved = self
                .price_points
                .get(&master.id)
                .and_then(|points| PriceResolver::resolve(points, strategy));

            let line_cost = match &resolved {
                Some(resolved) => line.quantity * resolved.cost_per_base_unit,
                None => Decimal::ZERO,
            };

            lines.push(LineCost {
                line_id: line.id,
                master_ingredient_id: master.id,
                ingredient_name: master.name.clone(),
                quantity_in_base_units: line.quantity,
                base_unit: master.base_unit.clone(),
                resolved,
                line_cost,
            });
        }

        lines
    }
}
