//! 計劃組裝

use chrono::NaiveDate;
use plan_core::{
    FinishedGoodLine, OperationRequirement, PlanError, PlanStatus, PlannedNode, ProductionPlan,
    RawMaterialRequirement, Result,
};

/// 計劃組裝器
pub struct PlanAssembler;

impl PlanAssembler {
    /// 組裝完整的生產計劃
    ///
    /// 沒有任何成品行的計劃無效，直接拒絕。
    /// 狀態一律為草稿；發布與取消由外部控制器轉換。
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        sales_order_id: &str,
        plan_id: String,
        plan_date: NaiveDate,
        finished_goods: Vec<FinishedGoodLine>,
        sub_assemblies: Vec<PlannedNode>,
        raw_materials: Vec<RawMaterialRequirement>,
        operations: Vec<OperationRequirement>,
        fg_operations: Vec<OperationRequirement>,
    ) -> Result<ProductionPlan> {
        if finished_goods.is_empty() {
            return Err(PlanError::EmptyPlan);
        }

        Ok(ProductionPlan {
            plan_id,
            sales_order_id: sales_order_id.to_string(),
            plan_date,
            status: PlanStatus::Draft,
            finished_goods,
            sub_assemblies,
            raw_materials,
            operations,
            fg_operations,
        })
    }
}
