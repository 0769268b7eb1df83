//! 原料目錄

use foodcost_core::{units, FoodCostError, IngredientPricePoint, MasterIngredient, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 原料目錄
///
/// 持有原料主檔與採購價格記錄的單機快照。價格記錄維持插入順序，
/// 價格解析的「同值取先遇到者」規則依賴這個順序。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientCatalog {
    ingredients: Vec<MasterIngredient>,
    price_points: Vec<IngredientPricePoint>,
}

impl IngredientCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 原料主檔清單
    pub fn ingredients(&self) -> &[MasterIngredient] {
        &self.ingredients
    }

    /// 全部價格記錄
    pub fn price_points(&self) -> &[IngredientPricePoint] {
        &self.price_points
    }

    /// 依ID查詢原料
    pub fn find_ingredient(&self, id: Uuid) -> Option<&MasterIngredient> {
        self.ingredients.iter().find(|mi| mi.id == id)
    }

    /// 新增原料；基準單位必須存在於單位目錄
    pub fn add_ingredient(&mut self, ingredient: MasterIngredient) -> Result<()> {
        if units::lookup_unit(&ingredient.base_unit).is_none() {
            return Err(FoodCostError::UnknownUnit(ingredient.base_unit.clone()));
        }
        self.ingredients.push(ingredient);
        Ok(())
    }

    /// 更新原料主檔
    pub fn update_ingredient(&mut self, ingredient: MasterIngredient) -> Result<()> {
        if units::lookup_unit(&ingredient.base_unit).is_none() {
            return Err(FoodCostError::UnknownUnit(ingredient.base_unit.clone()));
        }
        match self
            .ingredients
            .iter_mut()
            .find(|mi| mi.id == ingredient.id)
        {
            Some(existing) => {
                *existing = ingredient;
                Ok(())
            }
            None => Err(FoodCostError::IngredientNotFound(ingredient.id)),
        }
    }

    /// 移除原料並清除其所有價格記錄，回傳清除的記錄數
    ///
    /// 食譜端的級聯（清除引用行）由資料集層負責。
    pub fn remove_ingredient(&mut self, id: Uuid) -> Result<usize> {
        if self.find_ingredient(id).is_none() {
            return Err(FoodCostError::IngredientNotFound(id));
        }
        self.ingredients.retain(|mi| mi.id != id);

        let before = self.price_points.len();
        self.price_points.retain(|pp| pp.master_ingredient_id != id);
        Ok(before - self.price_points.len())
    }

    /// 指定原料的價格記錄（存儲順序）
    pub fn price_points_for(&self, ingredient_id: Uuid) -> Vec<&IngredientPricePoint> {
        self.price_points
            .iter()
            .filter(|pp| pp.master_ingredient_id == ingredient_id)
            .collect()
    }

    /// 新增價格記錄；所屬原料必須存在
    pub fn add_price_point(&mut self, point: IngredientPricePoint) -> Result<()> {
        if self.find_ingredient(point.master_ingredient_id).is_none() {
            return Err(FoodCostError::IngredientNotFound(
                point.master_ingredient_id,
            ));
        }
        self.price_points.push(point);
        Ok(())
    }

    /// 更新價格記錄的採購數量與成本（單位成本隨之重新導出）
    pub fn update_price_point(&mut self, id: Uuid, quantity: Decimal, cost: Decimal) -> Result<()> {
        match self.price_points.iter_mut().find(|pp| pp.id == id) {
            Some(point) => point.update_purchase(quantity, cost),
            None => Err(FoodCostError::PricePointNotFound(id)),
        }
    }

    /// 移除價格記錄
    pub fn remove_price_point(&mut self, id: Uuid) -> Result<()> {
        let before = self.price_points.len();
        self.price_points.retain(|pp| pp.id != id);
        if self.price_points.len() == before {
            return Err(FoodCostError::PricePointNotFound(id));
        }
        Ok(())
    }

    /// 複製價格記錄（新ID、刷新記錄時間），回傳新記錄的ID
    pub fn duplicate_price_point(&mut self, id: Uuid) -> Result<Uuid> {
        let original = self
            .price_points
            .iter()
            .find(|pp| pp.id == id)
            .ok_or(FoodCostError::PricePointNotFound(id))?;

        let copy = original.duplicate();
        let copy_id = copy.id;
        self.price_points.push(copy);
        Ok(copy_id)
    }
}
