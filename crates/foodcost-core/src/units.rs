//! 計量單位目錄與換算
//!
//! 單位分為三個互不相容的類別（重量、容量、件數），各類別有一個絕對基準單位
//! （克、毫升、顆）。換算一律先乘到類別絕對基準單位，再除以目標基準單位的係數。

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::OnceLock;

use crate::{FoodCostError, Result};

/// 單位類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// 重量
    Weight,
    /// 容量
    Volume,
    /// 件數
    Pieces,
}

impl UnitCategory {
    /// 此類別的絕對基準單位縮寫
    pub fn absolute_base_unit(&self) -> &'static str {
        match self {
            UnitCategory::Weight => "g",
            UnitCategory::Volume => "ml",
            UnitCategory::Pieces => "pz",
        }
    }
}

/// 單位定義
#[derive(Debug, Clone, Serialize)]
pub struct UnitDefinition {
    /// 顯示名稱
    pub name: &'static str,

    /// 縮寫（穩定主鍵）
    pub abbreviation: &'static str,

    /// 單位類別
    pub category: UnitCategory,

    /// 換算為類別絕對基準單位的係數
    pub conversion_factor_to_base: Decimal,
}

static SUPPORTED_UNITS: OnceLock<Vec<UnitDefinition>> = OnceLock::new();

/// 支援的單位清單（固定順序，依類別分組）
pub fn supported_units() -> &'static [UnitDefinition] {
    SUPPORTED_UNITS
        .get_or_init(|| {
            vec![
                // 重量（絕對基準：g）
                UnitDefinition {
                    name: "克",
                    abbreviation: "g",
                    category: UnitCategory::Weight,
                    conversion_factor_to_base: Decimal::ONE,
                },
                UnitDefinition {
                    name: "公斤",
                    abbreviation: "kg",
                    category: UnitCategory::Weight,
                    conversion_factor_to_base: Decimal::from(1000),
                },
                UnitDefinition {
                    name: "毫克",
                    abbreviation: "mg",
                    category: UnitCategory::Weight,
                    conversion_factor_to_base: Decimal::new(1, 3),
                },
                // 容量（絕對基準：ml）
                UnitDefinition {
                    name: "毫升",
                    abbreviation: "ml",
                    category: UnitCategory::Volume,
                    conversion_factor_to_base: Decimal::ONE,
                },
                UnitDefinition {
                    name: "公升",
                    abbreviation: "l",
                    category: UnitCategory::Volume,
                    conversion_factor_to_base: Decimal::from(1000),
                },
                // 件數（絕對基準：pz）
                UnitDefinition {
                    name: "顆",
                    abbreviation: "pz",
                    category: UnitCategory::Pieces,
                    conversion_factor_to_base: Decimal::ONE,
                },
            ]
        })
        .as_slice()
}

/// 依縮寫查詢單位定義
pub fn lookup_unit(abbreviation: &str) -> Option<&'static UnitDefinition> {
    supported_units()
        .iter()
        .find(|u| u.abbreviation == abbreviation)
}

/// 查詢縮寫所屬的單位類別
pub fn unit_category(abbreviation: &str) -> Option<UnitCategory> {
    lookup_unit(abbreviation).map(|u| u.category)
}

/// 與指定基準單位同類別的單位清單（依目錄順序）
///
/// 用於原料或食譜編輯時產生可選單位。
pub fn compatible_units(base_unit_abbreviation: &str) -> Vec<&'static UnitDefinition> {
    match unit_category(base_unit_abbreviation) {
        Some(category) => supported_units()
            .iter()
            .filter(|u| u.category == category)
            .collect(),
        None => Vec::new(),
    }
}

/// 將數量換算為基準單位（嚴格版本）
///
/// 目標基準單位可以不是類別的絕對基準單位（例如假設以 kg 計價的原料）。
pub fn try_convert_to_base(
    quantity: Decimal,
    from_unit: &str,
    to_base_unit: &str,
) -> Result<Decimal> {
    let from =
        lookup_unit(from_unit).ok_or_else(|| FoodCostError::UnknownUnit(from_unit.to_string()))?;
    let to = lookup_unit(to_base_unit)
        .ok_or_else(|| FoodCostError::UnknownUnit(to_base_unit.to_string()))?;

    if from.category != to.category {
        return Err(FoodCostError::IncompatibleUnits {
            from: from.abbreviation.to_string(),
            to: to.abbreviation.to_string(),
        });
    }

    // 先換算到類別絕對基準單位，再換算到目標基準單位
    let in_absolute_base = quantity * from.conversion_factor_to_base;
    Ok(in_absolute_base / to.conversion_factor_to_base)
}

/// 將數量換算為基準單位（邊界版本）
///
/// 缺少數量或單位、未知縮寫、類別不相容一律回傳零。
/// 零值會成為原料行的標準數量，由成本計算端的「用量無效」檢查承接；
/// 呼叫端不需要也無法區分「真的是零」與「換算失敗」。
pub fn convert_to_base(
    quantity: Option<Decimal>,
    from_unit: Option<&str>,
    to_base_unit: &str,
) -> Decimal {
    match (quantity, from_unit) {
        (Some(quantity), Some(from_unit)) => {
            try_convert_to_base(quantity, from_unit, to_base_unit).unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}
