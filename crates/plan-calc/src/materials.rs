//! 原材料彙總

use std::collections::BTreeMap;

use plan_core::{LeafContribution, PlanWarning, RawMaterialRequirement};
use rust_decimal::Decimal;

use crate::snapshot::PlanningSnapshot;

/// 原材料彙總器
pub struct RawMaterialAggregator;

impl RawMaterialAggregator {
    /// 彙總葉節點貢獻
    ///
    /// 依料號加總所有路徑的貢獻（菱形相依必須相加，不得覆蓋），
    /// 單價與名稱取自快照中的物料主檔，每個料號只查一次。
    /// 耗材群組不列入需求；缺單價以 0 計並附警告。
    /// 輸出依料號升冪排序，確保結果可重現。
    pub fn aggregate(
        leaf_contributions: &[LeafContribution],
        snapshot: &PlanningSnapshot,
    ) -> (Vec<RawMaterialRequirement>, Vec<PlanWarning>) {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for leaf in leaf_contributions {
            *totals.entry(leaf.item_code.clone()).or_insert(Decimal::ZERO) += leaf.qty;
        }

        let mut requirements = Vec::with_capacity(totals.len());
        let mut warnings = Vec::new();

        for (item_code, total_qty) in totals {
            let item = snapshot.item(&item_code);

            if item.map(|i| i.is_consumable()).unwrap_or(false) {
                tracing::debug!("耗材 {} 不列入原材料需求", item_code);
                continue;
            }

            let rate = match item.and_then(|i| i.rate) {
                Some(rate) => rate,
                None => {
                    warnings.push(PlanWarning::warning(
                        item_code.clone(),
                        "找不到物料單價，以 0 計算",
                    ));
                    Decimal::ZERO
                }
            };

            requirements.push(RawMaterialRequirement::new(
                item_code.clone(),
                item.map(|i| i.item_name.clone()).unwrap_or_default(),
                item.map(|i| i.item_group.clone()).unwrap_or_default(),
                total_qty,
                rate,
            ));
        }

        (requirements, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_core::ItemRecord;

    fn snapshot_with_items(items: Vec<ItemRecord>) -> PlanningSnapshot {
        PlanningSnapshot::from_parts(Vec::new(), items, Vec::new())
    }

    #[test]
    fn test_diamond_contributions_sum() {
        // 兩條路徑各貢獻一次，結果只有一列且數量相加
        let leaves = vec![
            LeafContribution::new("STEEL-TUBE", "FRAME-001", Decimal::from(300)),
            LeafContribution::new("STEEL-TUBE", "WHEEL-001", Decimal::from(200)),
        ];
        let snapshot = snapshot_with_items(vec![ItemRecord::new("STEEL-TUBE", "鋼管")
            .with_group("Raw Material")
            .with_rate(Decimal::from(120))]);

        let (requirements, warnings) = RawMaterialAggregator::aggregate(&leaves, &snapshot);

        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].total_qty, Decimal::from(500));
        assert_eq!(requirements[0].total_amount, Decimal::from(60000));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_output_sorted_by_item_code() {
        let leaves = vec![
            LeafContribution::new("ZINC-PLATE", "X", Decimal::from(1)),
            LeafContribution::new("ALU-SHEET", "X", Decimal::from(2)),
            LeafContribution::new("BOLT-M6", "X", Decimal::from(3)),
        ];
        let snapshot = snapshot_with_items(vec![
            ItemRecord::new("ZINC-PLATE", "鋅板").with_rate(Decimal::ONE),
            ItemRecord::new("ALU-SHEET", "鋁板").with_rate(Decimal::ONE),
            ItemRecord::new("BOLT-M6", "M6 螺栓").with_rate(Decimal::ONE),
        ]);

        let (requirements, _) = RawMaterialAggregator::aggregate(&leaves, &snapshot);

        let codes: Vec<_> = requirements.iter().map(|r| r.item_code.as_str()).collect();
        assert_eq!(codes, vec!["ALU-SHEET", "BOLT-M6", "ZINC-PLATE"]);
    }

    #[test]
    fn test_missing_rate_warns_and_zeroes() {
        let leaves = vec![LeafContribution::new("MYSTERY", "X", Decimal::from(7))];
        let snapshot = snapshot_with_items(Vec::new());

        let (requirements, warnings) = RawMaterialAggregator::aggregate(&leaves, &snapshot);

        // 數量仍然正確，只有成本缺漏
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].total_qty, Decimal::from(7));
        assert_eq!(requirements[0].rate, Decimal::ZERO);
        assert_eq!(requirements[0].total_amount, Decimal::ZERO);
        assert_eq!(requirements[0].item_name, "");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].subject, "MYSTERY");
    }

    #[test]
    fn test_consumable_excluded() {
        let leaves = vec![
            LeafContribution::new("GLOVE-01", "X", Decimal::from(10)),
            LeafContribution::new("STEEL-TUBE", "X", Decimal::from(5)),
        ];
        let snapshot = snapshot_with_items(vec![
            ItemRecord::new("GLOVE-01", "手套").with_group("Consumable"),
            ItemRecord::new("STEEL-TUBE", "鋼管").with_rate(Decimal::from(120)),
        ]);

        let (requirements, _) = RawMaterialAggregator::aggregate(&leaves, &snapshot);

        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].item_code, "STEEL-TUBE");
    }

    mod conservation {
        use super::snapshot_with_items;
        use crate::materials::RawMaterialAggregator;
        use plan_core::{ItemRecord, LeafContribution};
        use proptest::prelude::*;
        use rust_decimal::Decimal;

        proptest! {
            /// 彙總後的總量必須等於所有貢獻的總和：不重複、不遺漏
            #[test]
            fn total_qty_is_conserved(
                contributions in prop::collection::vec((0usize..5, 1u32..10_000), 1..50)
            ) {
                let items: Vec<ItemRecord> = (0..5)
                    .map(|i| {
                        ItemRecord::new(format!("RM-{i}"), format!("料{i}"))
                            .with_rate(Decimal::from(10))
                    })
                    .collect();
                let snapshot = snapshot_with_items(items);

                let leaves: Vec<LeafContribution> = contributions
                    .iter()
                    .map(|(idx, qty)| {
                        LeafContribution::new(
                            format!("RM-{idx}"),
                            "SRC",
                            Decimal::from(*qty),
                        )
                    })
                    .collect();

                let (requirements, warnings) =
                    RawMaterialAggregator::aggregate(&leaves, &snapshot);

                let aggregated: Decimal = requirements.iter().map(|r| r.total_qty).sum();
                let expected: Decimal = leaves.iter().map(|l| l.qty).sum();

                prop_assert_eq!(aggregated, expected);
                prop_assert!(warnings.is_empty());

                // 每個料號最多一列
                let mut codes: Vec<_> =
                    requirements.iter().map(|r| r.item_code.clone()).collect();
                codes.dedup();
                prop_assert_eq!(codes.len(), requirements.len());
            }
        }
    }
}
