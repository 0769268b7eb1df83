//! 原料主檔與採購價格模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{FoodCostError, Result};

/// 原料主檔
///
/// `base_unit` 是此原料在食譜與價格記錄中使用的基準單位縮寫，
/// 必須對應單位目錄中的已知單位（由原料目錄在寫入時檢查）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterIngredient {
    /// 原料ID
    pub id: Uuid,

    /// 名稱
    pub name: String,

    /// 基準單位縮寫（g / ml / pz）
    pub base_unit: String,

    /// 分類（選填）
    pub category: Option<String>,
}

impl MasterIngredient {
    /// 創建新的原料主檔
    pub fn new(name: String, base_unit: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            base_unit,
            category: None,
        }
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }
}

/// 採購價格記錄
///
/// `cost_per_base_unit` 於建立與更新時由成本除以數量導出並存儲，
/// 計算端直接讀取，不做延遲重算。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientPricePoint {
    /// 價格記錄ID
    pub id: Uuid,

    /// 所屬原料ID
    pub master_ingredient_id: Uuid,

    /// 供應商／採購備註
    pub supplier_notes: String,

    /// 採購數量（以所屬原料的基準單位計，必須大於零）
    pub purchase_quantity_in_base_units: Decimal,

    /// 採購成本（必須大於零）
    pub purchase_cost: Decimal,

    /// 每基準單位成本（= 採購成本 / 採購數量）
    pub cost_per_base_unit: Decimal,

    /// 記錄時間
    pub date_recorded: DateTime<Utc>,
}

impl IngredientPricePoint {
    /// 創建新的價格記錄，並導出每基準單位成本
    pub fn new(
        master_ingredient_id: Uuid,
        supplier_notes: String,
        purchase_quantity_in_base_units: Decimal,
        purchase_cost: Decimal,
    ) -> Result<Self> {
        if purchase_quantity_in_base_units <= Decimal::ZERO {
            return Err(FoodCostError::InvalidPurchaseQuantity(
                purchase_quantity_in_base_units,
            ));
        }
        if purchase_cost <= Decimal::ZERO {
            return Err(FoodCostError::InvalidPurchaseCost(purchase_cost));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            master_ingredient_id,
            supplier_notes,
            purchase_quantity_in_base_units,
            purchase_cost,
            cost_per_base_unit: purchase_cost / purchase_quantity_in_base_units,
            date_recorded: Utc::now(),
        })
    }

    /// 建構器模式：設置記錄時間
    pub fn with_date_recorded(mut self, date_recorded: DateTime<Utc>) -> Self {
        self.date_recorded = date_recorded;
        self
    }

    /// 更新採購數量與成本，並重新導出每基準單位成本
    pub fn update_purchase(
        &mut self,
        purchase_quantity_in_base_units: Decimal,
        purchase_cost: Decimal,
    ) -> Result<()> {
        if purchase_quantity_in_base_units <= Decimal::ZERO {
            return Err(FoodCostError::InvalidPurchaseQuantity(
                purchase_quantity_in_base_units,
            ));
        }
        if purchase_cost <= Decimal::ZERO {
            return Err(FoodCostError::InvalidPurchaseCost(purchase_cost));
        }

        self.purchase_quantity_in_base_units = purchase_quantity_in_base_units;
        self.purchase_cost = purchase_cost;
        self.cost_per_base_unit = purchase_cost / purchase_quantity_in_base_units;
        Ok(())
    }

    /// 複製記錄：產生新ID、刷新記錄時間，備註加上副本標記
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            supplier_notes: format!("{}（副本）", self.supplier_notes),
            date_recorded: Utc::now(),
            ..self.clone()
        }
    }
}
