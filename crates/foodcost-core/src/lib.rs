//! # Food Cost Core
//!
//! 核心資料模型與類型定義

pub mod ingredient;
pub mod recipe;
pub mod strategy;
pub mod units;

// Re-export 主要類型
pub use ingredient::{IngredientPricePoint, MasterIngredient};
pub use recipe::{Recipe, RecipeIngredient};
pub use strategy::CostStrategy;
pub use units::{UnitCategory, UnitDefinition};

/// 成本引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum FoodCostError {
    #[error("找不到計量單位: {0}")]
    UnknownUnit(String),

    #[error("單位類別不相容: {from} 無法換算為 {to}")]
    IncompatibleUnits { from: String, to: String },

    #[error("找不到原料定義: {0}")]
    IngredientNotFound(uuid::Uuid),

    #[error("找不到價格記錄: {0}")]
    PricePointNotFound(uuid::Uuid),

    #[error("找不到食譜: {0}")]
    RecipeNotFound(uuid::Uuid),

    #[error("採購數量必須大於零: {0}")]
    InvalidPurchaseQuantity(rust_decimal::Decimal),

    #[error("採購成本必須大於零: {0}")]
    InvalidPurchaseCost(rust_decimal::Decimal),

    #[error("無效的成本計算策略: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, FoodCostError>;
