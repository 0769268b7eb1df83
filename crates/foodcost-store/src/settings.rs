//! 使用者設定

use foodcost_core::CostStrategy;
use serde::{Deserialize, Serialize};

/// 成本計算設定
///
/// 唯一持久化的設定是啟用中的成本計算策略。外層持久化機制序列化
/// 整個結構；計算時由呼叫端把策略明確傳給計算器，而不是讓計算器
/// 讀取任何全域狀態。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSettings {
    /// 啟用中的成本計算策略
    pub strategy: CostStrategy,
}
