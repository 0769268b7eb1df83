//! 成本計算策略

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::FoodCostError;

/// 成本計算策略
///
/// 從同一原料的多筆價格記錄中挑選有效單位成本的策略。
/// 由設定端以小寫識別字串持久化，計算時以參數明確傳入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostStrategy {
    /// 最低記錄價格
    Cheapest,
    /// 最近記錄價格
    Latest,
    /// 記錄價格的平均值
    Average,
}

impl CostStrategy {
    /// 設定介面顯示用標籤
    pub fn label(&self) -> &'static str {
        match self {
            CostStrategy::Cheapest => "最低記錄價格",
            CostStrategy::Latest => "最近記錄價格",
            CostStrategy::Average => "記錄價格的平均值",
        }
    }

    /// 持久化用識別字串
    pub fn as_str(&self) -> &'static str {
        match self {
            CostStrategy::Cheapest => "cheapest",
            CostStrategy::Latest => "latest",
            CostStrategy::Average => "average",
        }
    }
}

impl Default for CostStrategy {
    fn default() -> Self {
        CostStrategy::Cheapest
    }
}

impl fmt::Display for CostStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostStrategy {
    type Err = FoodCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cheapest" => Ok(CostStrategy::Cheapest),
            "latest" => Ok(CostStrategy::Latest),
            "average" => Ok(CostStrategy::Average),
            other => Err(FoodCostError::UnknownStrategy(other.to_string())),
        }
    }
}
