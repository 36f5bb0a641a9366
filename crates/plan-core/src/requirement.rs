//! 需求彙總結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原材料需求
///
/// 以料號為唯一鍵，`total_qty` 為樹中所有路徑貢獻的總和。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterialRequirement {
    /// 料號
    pub item_code: String,

    /// 品名
    pub item_name: String,

    /// 物料群組
    pub item_group: String,

    /// 需求總量
    pub total_qty: Decimal,

    /// 單價
    pub rate: Decimal,

    /// 總金額 = 需求總量 × 單價
    pub total_amount: Decimal,
}

impl RawMaterialRequirement {
    /// 創建新的原材料需求，總金額由數量與單價計算
    pub fn new(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        item_group: impl Into<String>,
        total_qty: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            item_group: item_group.into(),
            total_qty,
            rate,
            total_amount: total_qty * rate,
        }
    }
}

/// 工序需求
///
/// 以（工序名稱、工作站類型）為唯一鍵。
/// 成本以「總分鐘 × 時薪 ÷ 60」計算，先乘後除避免循環小數截斷。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRequirement {
    /// 工序名稱
    pub operation_name: String,

    /// 工作站類型
    pub workstation_type: String,

    /// 單位工時（分鐘），跨節點合併時為各行單位工時之和
    pub time_per_unit_minutes: Decimal,

    /// 總工時（分鐘）
    pub total_time_minutes: Decimal,

    /// 總工時（小時）= 總分鐘 ÷ 60
    pub total_hours: Decimal,

    /// 工作站時薪
    pub hourly_rate: Decimal,

    /// 總成本 = 總分鐘 × 時薪 ÷ 60
    pub total_cost: Decimal,
}

impl OperationRequirement {
    /// 創建新的工序需求，工時與成本由總分鐘和時薪計算
    pub fn new(
        operation_name: impl Into<String>,
        workstation_type: impl Into<String>,
        time_per_unit_minutes: Decimal,
        total_time_minutes: Decimal,
        hourly_rate: Decimal,
    ) -> Self {
        let sixty = Decimal::from(60);
        Self {
            operation_name: operation_name.into(),
            workstation_type: workstation_type.into(),
            time_per_unit_minutes,
            total_time_minutes,
            total_hours: total_time_minutes / sixty,
            hourly_rate,
            total_cost: total_time_minutes * hourly_rate / sixty,
        }
    }
}
