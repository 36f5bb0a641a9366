//! 生產計劃模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::node::PlannedNode;
use crate::requirement::{OperationRequirement, RawMaterialRequirement};

/// 計劃狀態
///
/// 引擎只產生 `Draft`；`Released` 與 `Cancelled` 的轉換由外部控制器執行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// 草稿
    Draft,
    /// 已發布
    Released,
    /// 已取消
    Cancelled,
}

impl PlanStatus {
    /// 檢查狀態轉換是否合法（draft → released、draft → cancelled）
    pub fn can_transition_to(self, next: PlanStatus) -> bool {
        matches!(
            (self, next),
            (PlanStatus::Draft, PlanStatus::Released) | (PlanStatus::Draft, PlanStatus::Cancelled)
        )
    }
}

/// 計劃成品行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedGoodLine {
    /// 料號
    pub item_code: String,

    /// 品名
    pub item_name: String,

    /// 計劃數量
    pub planned_qty: Decimal,
}

impl FinishedGoodLine {
    /// 創建新的成品行
    pub fn new(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        planned_qty: Decimal,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            planned_qty,
        }
    }
}

/// 生產計劃
///
/// 一次生成請求的完整產出，只作為整體持久化，不存在部分寫入狀態。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 計劃編號
    pub plan_id: String,

    /// 來源銷售訂單編號
    pub sales_order_id: String,

    /// 計劃日期
    pub plan_date: NaiveDate,

    /// 計劃狀態
    pub status: PlanStatus,

    /// 成品行
    pub finished_goods: Vec<FinishedGoodLine>,

    /// 半成品計劃節點
    pub sub_assemblies: Vec<PlannedNode>,

    /// 原材料需求
    pub raw_materials: Vec<RawMaterialRequirement>,

    /// 半成品層級工序需求
    pub operations: Vec<OperationRequirement>,

    /// 成品層級工序需求（與 `operations` 不重疊）
    pub fg_operations: Vec<OperationRequirement>,
}

impl ProductionPlan {
    /// 原材料總金額
    pub fn total_material_amount(&self) -> Decimal {
        self.raw_materials.iter().map(|r| r.total_amount).sum()
    }

    /// 工序總成本（半成品層級 + 成品層級）
    pub fn total_operation_cost(&self) -> Decimal {
        self.operations
            .iter()
            .chain(self.fg_operations.iter())
            .map(|o| o.total_cost)
            .sum()
    }
}
