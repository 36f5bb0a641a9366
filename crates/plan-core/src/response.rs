//! UI 回應格式
//!
//! 前端計劃生成視窗消費的欄位名稱沿用舊系統，不可變動。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::plan::ProductionPlan;

/// 成品行回應
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedGoodEntry {
    pub item_code: String,
    pub item_name: String,
    pub planned_qty: Decimal,
}

/// 半成品行回應
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubAssemblyEntry {
    pub item_code: String,
    pub item_name: String,
    pub scrap_percentage: Decimal,
    pub planned_qty_before_scrap: Decimal,
    pub planned_qty: Decimal,
}

/// 原材料行回應
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterialEntry {
    pub item_code: String,
    pub item_name: String,
    pub item_group: String,
    pub total_qty: Decimal,
    pub rate: Decimal,
    pub total_amount: Decimal,
}

/// 工序行回應（半成品層級）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationEntry {
    pub operation_name: String,
    pub workstation_type: String,
    pub total_time: Decimal,
    pub total_hours: Decimal,
    pub hourly_rate: Decimal,
    pub total_cost: Decimal,
}

/// 工序行回應（成品層級）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FgOperationEntry {
    pub operation_name: String,
    pub workstation_type: String,
    pub operation_time_per_unit: Decimal,
    pub total_time: Decimal,
    pub total_cost: Decimal,
}

/// 計劃生成回應
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan_id: String,
    pub finished_goods: Vec<FinishedGoodEntry>,
    pub sub_assemblies: Vec<SubAssemblyEntry>,
    pub raw_materials: Vec<RawMaterialEntry>,
    pub operations: Vec<OperationEntry>,
    pub fg_operations: Vec<FgOperationEntry>,
}

impl From<&ProductionPlan> for PlanResponse {
    fn from(plan: &ProductionPlan) -> Self {
        Self {
            plan_id: plan.plan_id.clone(),
            finished_goods: plan
                .finished_goods
                .iter()
                .map(|fg| FinishedGoodEntry {
                    item_code: fg.item_code.clone(),
                    item_name: fg.item_name.clone(),
                    planned_qty: fg.planned_qty,
                })
                .collect(),
            sub_assemblies: plan
                .sub_assemblies
                .iter()
                .map(|sa| SubAssemblyEntry {
                    item_code: sa.item_code.clone(),
                    item_name: sa.item_name.clone(),
                    scrap_percentage: sa.scrap_percentage,
                    planned_qty_before_scrap: sa.planned_qty_before_scrap,
                    planned_qty: sa.planned_qty,
                })
                .collect(),
            raw_materials: plan
                .raw_materials
                .iter()
                .map(|rm| RawMaterialEntry {
                    item_code: rm.item_code.clone(),
                    item_name: rm.item_name.clone(),
                    item_group: rm.item_group.clone(),
                    total_qty: rm.total_qty,
                    rate: rm.rate,
                    total_amount: rm.total_amount,
                })
                .collect(),
            operations: plan
                .operations
                .iter()
                .map(|op| OperationEntry {
                    operation_name: op.operation_name.clone(),
                    workstation_type: op.workstation_type.clone(),
                    total_time: op.total_time_minutes,
                    total_hours: op.total_hours,
                    hourly_rate: op.hourly_rate,
                    total_cost: op.total_cost,
                })
                .collect(),
            fg_operations: plan
                .fg_operations
                .iter()
                .map(|op| FgOperationEntry {
                    operation_name: op.operation_name.clone(),
                    workstation_type: op.workstation_type.clone(),
                    operation_time_per_unit: op.time_per_unit_minutes,
                    total_time: op.total_time_minutes,
                    total_cost: op.total_cost,
                })
                .collect(),
        }
    }
}
