//! 價格解析
//!
//! 依成本計算策略，從一個原料的所有價格記錄中解析出有效的每基準單位成本。

use foodcost_core::{CostStrategy, IngredientPricePoint};
use rust_decimal::Decimal;
use uuid::Uuid;

/// 解析出的有效價格
///
/// `average` 策略產生的是合成值，不對應任何一筆實際採購，
/// 因此 `price_point_id` 為 None，標籤描述為記錄價格的平均值，
/// 顯示端不得將其當作可編輯或可刪除的記錄。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrice {
    /// 有效每基準單位成本
    pub cost_per_base_unit: Decimal,

    /// 價格來源的人類可讀標籤
    pub source_label: String,

    /// 被選中的價格記錄ID（合成值為 None）
    pub price_point_id: Option<Uuid>,
}

/// 價格解析器
pub struct PriceResolver;

impl PriceResolver {
    /// 解析有效單位成本
    ///
    /// 空集合回傳 None。呼叫端應先以「沒有價格記錄」警告排除空集合，
    /// None 僅作為防禦性的後備路徑。
    pub fn resolve(
        points: &[&IngredientPricePoint],
        strategy: CostStrategy,
    ) -> Option<ResolvedPrice> {
        if points.is_empty() {
            return None;
        }

        match strategy {
            CostStrategy::Cheapest => Self::cheapest(points),
            CostStrategy::Latest => Self::latest(points),
            CostStrategy::Average => Self::average(points),
        }
    }

    /// 最低記錄價格（同值取先遇到者，維持掃描順序的決定性）
    fn cheapest(points: &[&IngredientPricePoint]) -> Option<ResolvedPrice> {
        let chosen = points.iter().copied().reduce(|cheapest, current| {
            if current.cost_per_base_unit < cheapest.cost_per_base_unit {
                current
            } else {
                cheapest
            }
        })?;

        Some(ResolvedPrice {
            cost_per_base_unit: chosen.cost_per_base_unit,
            source_label: format!("最低記錄價格（{}）", chosen.supplier_notes),
            price_point_id: Some(chosen.id),
        })
    }

    /// 最近記錄價格（同時間取先遇到者）
    fn latest(points: &[&IngredientPricePoint]) -> Option<ResolvedPrice> {
        let chosen = points.iter().copied().reduce(|latest, current| {
            if current.date_recorded > latest.date_recorded {
                current
            } else {
                latest
            }
        })?;

        Some(ResolvedPrice {
            cost_per_base_unit: chosen.cost_per_base_unit,
            source_label: format!(
                "最近記錄價格（{}）",
                chosen.date_recorded.format("%Y-%m-%d")
            ),
            price_point_id: Some(chosen.id),
        })
    }

    /// 記錄價格的平均值（合成值）
    fn average(points: &[&IngredientPricePoint]) -> Option<ResolvedPrice> {
        let sum: Decimal = points.iter().map(|p| p.cost_per_base_unit).sum();
        let mean = sum / Decimal::from(points.len() as u64);

        Some(ResolvedPrice {
            cost_per_base_unit: mean,
            source_label: "記錄價格的平均值".to_string(),
            price_point_id: None,
        })
    }
}
