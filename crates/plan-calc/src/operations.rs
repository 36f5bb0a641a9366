//! 工序工時彙總

use std::collections::{BTreeMap, HashSet};

use plan_core::{OperationRequirement, PlanWarning, PlannedNode};
use rust_decimal::Decimal;

use crate::snapshot::PlanningSnapshot;

/// 工序彙總結果
///
/// `operations` 為半成品層級、`fg_operations` 為成品層級，
/// 兩者互斥，成本不會重複申報。
#[derive(Debug, Clone)]
pub struct OperationTotals {
    pub operations: Vec<OperationRequirement>,
    pub fg_operations: Vec<OperationRequirement>,
    pub warnings: Vec<PlanWarning>,
}

/// 鍵為（工序名稱、工作站類型）的累計值
#[derive(Debug, Default, Clone)]
struct OperationAccum {
    time_per_unit_minutes: Decimal,
    total_time_minutes: Decimal,
}

/// 工序彙總器
pub struct OperationAggregator;

impl OperationAggregator {
    /// 彙總所有節點的工序工時
    ///
    /// 每個節點的每條工序行貢獻 `單位工時 × 節點計劃數量` 分鐘，
    /// 以（工序名稱、工作站類型）為鍵加總：兩個半成品在同一類
    /// 工作站做同名工序時必須合併。時薪取自快照，缺漏以 0 計並
    /// 附警告（每類工作站最多一則）。輸出依鍵升冪排序。
    pub fn aggregate(
        root_nodes: &[PlannedNode],
        sub_assemblies: &[PlannedNode],
        snapshot: &PlanningSnapshot,
    ) -> OperationTotals {
        let fg_accums = Self::accumulate(root_nodes, snapshot);
        let sa_accums = Self::accumulate(sub_assemblies, snapshot);

        let mut warnings = Vec::new();
        let mut warned: HashSet<String> = HashSet::new();

        let mut rate = |workstation_type: &str| -> Decimal {
            match snapshot.workstation_rate(workstation_type) {
                Some(rate) => rate,
                None => {
                    if warned.insert(workstation_type.to_string()) {
                        warnings.push(PlanWarning::warning(
                            workstation_type,
                            "找不到工作站時薪，以 0 計算",
                        ));
                    }
                    Decimal::ZERO
                }
            }
        };

        let operations = Self::finalize(sa_accums, &mut rate);
        let fg_operations = Self::finalize(fg_accums, &mut rate);

        OperationTotals {
            operations,
            fg_operations,
            warnings,
        }
    }

    /// 累計一組節點的工序分鐘數
    fn accumulate(
        nodes: &[PlannedNode],
        snapshot: &PlanningSnapshot,
    ) -> BTreeMap<(String, String), OperationAccum> {
        let mut accums: BTreeMap<(String, String), OperationAccum> = BTreeMap::new();

        for node in nodes {
            let Some(bom) = snapshot.bom(&node.item_code) else {
                continue;
            };

            for line in &bom.operations {
                let key = (line.operation_name.clone(), line.workstation_type.clone());
                let accum = accums.entry(key).or_default();
                accum.time_per_unit_minutes += line.time_per_unit_minutes;
                accum.total_time_minutes += line.time_per_unit_minutes * node.planned_qty;
            }
        }

        accums
    }

    fn finalize(
        accums: BTreeMap<(String, String), OperationAccum>,
        rate: &mut impl FnMut(&str) -> Decimal,
    ) -> Vec<OperationRequirement> {
        accums
            .into_iter()
            .map(|((operation_name, workstation_type), accum)| {
                let hourly_rate = rate(&workstation_type);
                OperationRequirement::new(
                    operation_name,
                    workstation_type,
                    accum.time_per_unit_minutes,
                    accum.total_time_minutes,
                    hourly_rate,
                )
            })
            .collect()
    }
}
