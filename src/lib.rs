//! # Food Cost
//!
//! 甜點工作室的食譜成本引擎：以原料採購價格記錄與單位換算，
//! 計算食譜的總成本與每份成本，並以警告回報資料品質問題。

pub use foodcost_calc::{FoodCost, FoodCostCalculator, LineCost, PriceResolver, ResolvedPrice};
pub use foodcost_core::{
    units, CostStrategy, FoodCostError, IngredientPricePoint, MasterIngredient, Recipe,
    RecipeIngredient, Result, UnitCategory, UnitDefinition,
};
pub use foodcost_store::{CascadeReport, CostSettings, DataStore, IngredientCatalog, RecipeBook};
