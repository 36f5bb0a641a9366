//! 展開節點模型

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 節點類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// 成品
    FinishedGood,
    /// 半成品
    SubAssembly,
    /// 原材料
    RawMaterial,
}

/// 含損耗的計劃數量
///
/// `planned_qty = base_qty / (1 - scrap / 100)`，結果在小數第 6 位無條件進位。
/// 這是引擎內唯一的捨入點，其餘中間運算一律保留完整精度。
/// 損耗率為 0 時回傳原數量，兩者相等。
pub fn qty_with_scrap(base_qty: Decimal, scrap_percentage: Decimal) -> Decimal {
    if scrap_percentage <= Decimal::ZERO {
        return base_qty;
    }

    let scrap_fraction = scrap_percentage / Decimal::ONE_HUNDRED;
    let planned = base_qty / (Decimal::ONE - scrap_fraction);

    planned.round_dp_with_strategy(6, RoundingStrategy::ToPositiveInfinity)
}

/// 展開後的計劃節點（成品或半成品）
///
/// 單次生成請求內的暫存值，不單獨持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedNode {
    /// 料號
    pub item_code: String,

    /// 品名
    pub item_name: String,

    /// 節點類型
    pub kind: NodeKind,

    /// 層級深度（根節點為 0）
    pub depth: u32,

    /// 父節點料號（根節點為 None）
    pub parent_item_code: Option<String>,

    /// 損耗前計劃數量 = 父節點計劃數量 × 單位用量
    pub planned_qty_before_scrap: Decimal,

    /// 損耗後計劃數量
    pub planned_qty: Decimal,

    /// 損耗率（百分比）
    pub scrap_percentage: Decimal,
}

impl PlannedNode {
    /// 創建新的計劃節點，損耗後數量由 [`qty_with_scrap`] 計算
    pub fn new(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        kind: NodeKind,
        depth: u32,
        planned_qty_before_scrap: Decimal,
        scrap_percentage: Decimal,
    ) -> Self {
        let planned_qty = qty_with_scrap(planned_qty_before_scrap, scrap_percentage);
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            kind,
            depth,
            parent_item_code: None,
            planned_qty_before_scrap,
            planned_qty,
            scrap_percentage,
        }
    }

    /// 建構器模式：設置父節點料號
    pub fn with_parent(mut self, parent_item_code: impl Into<String>) -> Self {
        self.parent_item_code = Some(parent_item_code.into());
        self
    }

    /// 檢查是否為根節點
    pub fn is_root(&self) -> bool {
        self.parent_item_code.is_none()
    }
}

/// 原材料葉節點貢獻
///
/// 展開過程中每條到達原材料的路徑產生一筆，由彙總器依料號加總。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeafContribution {
    /// 原材料料號
    pub item_code: String,

    /// 來源 BOM（直接父件料號）
    pub source_bom: String,

    /// 該路徑貢獻的需求數量
    pub qty: Decimal,
}

impl LeafContribution {
    /// 創建新的葉節點貢獻
    pub fn new(
        item_code: impl Into<String>,
        source_bom: impl Into<String>,
        qty: Decimal,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            source_bom: source_bom.into(),
            qty,
        }
    }
}
