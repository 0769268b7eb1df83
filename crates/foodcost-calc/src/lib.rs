//! # Food Cost Calculation Engine
//!
//! 食譜成本計算引擎

pub mod calculator;
pub mod resolution;

// Re-export 主要類型
pub use calculator::{FoodCostCalculator, LineCost};
pub use resolution::{PriceResolver, ResolvedPrice};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 食譜成本計算結果
///
/// 每次計算產生新值，不持久化、不快取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCost {
    /// 總成本
    pub total_cost: Decimal,

    /// 每份成本（份數為零時為零）
    pub cost_per_portion: Decimal,

    /// 警告訊息（依原料行順序；無問題時為空）
    pub warnings: Vec<String>,
}

impl FoodCost {
    /// 創建零成本的空結果
    pub fn empty() -> Self {
        Self {
            total_cost: Decimal::ZERO,
            cost_per_portion: Decimal::ZERO,
            warnings: Vec::new(),
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// 是否有警告
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
