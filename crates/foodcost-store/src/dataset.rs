//! 資料集彙整與級聯刪除

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodcost_core::Result;

use crate::catalog::IngredientCatalog;
use crate::recipes::RecipeBook;
use crate::settings::CostSettings;

/// 級聯刪除報告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeReport {
    /// 清除的價格記錄數
    pub removed_price_points: usize,

    /// 清除的食譜原料行數
    pub stripped_lines: usize,

    /// 因被清空而移除的食譜數
    pub removed_recipes: usize,
}

/// 單機資料集
///
/// 彙整原料目錄、食譜集合與使用者設定；跨集合的一致性規則
/// （刪除原料的級聯）在此實施。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataStore {
    /// 原料目錄
    pub catalog: IngredientCatalog,

    /// 食譜集合
    pub recipes: RecipeBook,

    /// 使用者設定
    pub settings: CostSettings,
}

impl DataStore {
    /// 創建空資料集
    pub fn new() -> Self {
        Self::default()
    }

    /// 刪除原料主檔並執行級聯
    ///
    /// 其價格記錄全數清除、引用它的食譜原料行全數清除、
    /// 被清空的食譜一併移除。
    pub fn remove_master_ingredient(&mut self, id: Uuid) -> Result<CascadeReport> {
        let removed_price_points = self.catalog.remove_ingredient(id)?;
        let (stripped_lines, removed_recipes) = self.recipes.purge_ingredient(id);

        Ok(CascadeReport {
            removed_price_points,
            stripped_lines,
            removed_recipes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodcost_core::{
        FoodCostError, IngredientPricePoint, MasterIngredient, Recipe, RecipeIngredient,
    };
    use rust_decimal::Decimal;

    #[test]
    fn test_cascade_on_ingredient_removal() {
        let mut store = DataStore::new();

        let eggs = MasterIngredient::new("新鮮雞蛋".to_string(), "pz".to_string());
        let eggs_id = eggs.id;
        store.catalog.add_ingredient(eggs).unwrap();

        store
            .catalog
            .add_price_point(
                IngredientPricePoint::new(
                    eggs_id,
                    "當地農場 - 6 入".to_string(),
                    Decimal::from(6),
                    Decimal::new(18, 1),
                )
                .unwrap(),
            )
            .unwrap();

        let recipe = Recipe::new("蛋白霜".to_string(), String::new(), 4)
            .with_ingredient(RecipeIngredient::new(eggs_id, Decimal::from(4)));
        store.recipes.upsert(recipe);

        let report = store.remove_master_ingredient(eggs_id).unwrap();

        assert_eq!(
            report,
            CascadeReport {
                removed_price_points: 1,
                stripped_lines: 1,
                removed_recipes: 1,
            }
        );
        assert!(store.catalog.ingredients().is_empty());
        assert!(store.catalog.price_points().is_empty());
        assert!(store.recipes.recipes().is_empty());
    }

    #[test]
    fn test_cascade_requires_existing_ingredient() {
        let mut store = DataStore::new();
        assert!(matches!(
            store.remove_master_ingredient(Uuid::new_v4()).unwrap_err(),
            FoodCostError::IngredientNotFound(_)
        ));
    }
}
