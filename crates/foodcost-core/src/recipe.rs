//! 食譜模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units;

/// 食譜中的原料行
///
/// `quantity` 是唯一參與成本計算的欄位，永遠以所引用原料的基準單位表示。
/// 顯示數量或顯示單位變動時，必須經由單位換算重新導出 `quantity`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// 行ID（食譜範圍內唯一）
    pub id: Uuid,

    /// 引用的原料ID
    pub master_ingredient_id: Uuid,

    /// 標準數量（以原料基準單位計）
    pub quantity: Decimal,

    /// 輸入時使用的數量（選填）
    pub display_quantity: Option<Decimal>,

    /// 輸入時使用的單位縮寫（選填）
    pub display_unit: Option<String>,

    /// 敘述性單位標籤（選填，僅供顯示，例如「一小撮」）
    pub narrative_unit_label: Option<String>,
}

impl RecipeIngredient {
    /// 以標準數量創建原料行
    pub fn new(master_ingredient_id: Uuid, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            master_ingredient_id,
            quantity,
            display_quantity: None,
            display_unit: None,
            narrative_unit_label: None,
        }
    }

    /// 以顯示數量與單位創建原料行，標準數量經由單位換算導出
    pub fn from_display(
        master_ingredient_id: Uuid,
        display_quantity: Decimal,
        display_unit: String,
        base_unit: &str,
    ) -> Self {
        let quantity =
            units::convert_to_base(Some(display_quantity), Some(display_unit.as_str()), base_unit);
        Self {
            id: Uuid::new_v4(),
            master_ingredient_id,
            quantity,
            display_quantity: Some(display_quantity),
            display_unit: Some(display_unit),
            narrative_unit_label: None,
        }
    }

    /// 建構器模式：設置敘述性單位標籤
    pub fn with_narrative_unit_label(mut self, label: String) -> Self {
        self.narrative_unit_label = Some(label);
        self
    }

    /// 更新顯示數量與單位，並重新導出標準數量
    ///
    /// 換算失敗時標準數量為零，由成本計算端的「用量無效」檢查承接。
    pub fn set_display(
        &mut self,
        display_quantity: Option<Decimal>,
        display_unit: Option<String>,
        base_unit: &str,
    ) {
        self.quantity =
            units::convert_to_base(display_quantity, display_unit.as_deref(), base_unit);
        self.display_quantity = display_quantity;
        self.display_unit = display_unit;
    }
}

/// 食譜
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 食譜ID
    pub id: Uuid,

    /// 名稱
    pub name: String,

    /// 作法與備註
    pub description: String,

    /// 原料行（順序即顯示順序，也是成本加總與警告的順序）
    pub ingredients: Vec<RecipeIngredient>,

    /// 份數
    pub portions: u32,

    /// 圖片連結（選填）
    pub image_url: Option<String>,
}

impl Recipe {
    /// 創建新的食譜
    pub fn new(name: String, description: String, portions: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            ingredients: Vec::new(),
            portions,
            image_url: None,
        }
    }

    /// 建構器模式：設置圖片連結
    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = Some(image_url);
        self
    }

    /// 建構器模式：添加原料行
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// 添加原料行
    pub fn add_ingredient(&mut self, ingredient: RecipeIngredient) {
        self.ingredients.push(ingredient);
    }

    /// 移除原料行，回傳是否有移除
    pub fn remove_ingredient(&mut self, id: Uuid) -> bool {
        let before = self.ingredients.len();
        self.ingredients.retain(|line| line.id != id);
        self.ingredients.len() != before
    }

    /// 是否至少有一個原料行（完整性由編輯端把關，此處僅提供查詢）
    pub fn is_complete(&self) -> bool {
        !self.ingredients.is_empty()
    }
}
