//! BOM 展開引擎
//!
//! 從成品根節點深度優先（前序）展開 BOM 樹，逐層計算含損耗的
//! 計劃數量。半成品產生計劃節點並繼續遞歸；原材料產生葉節點貢獻，
//! 交由彙總器依料號加總。純計算，不觸碰任何儲存庫。

use plan_core::{
    qty_with_scrap, BomRecord, CancelToken, ComponentLine, LeafContribution, NodeKind, PlanError,
    PlannedNode, Result,
};
use rust_decimal::Decimal;

use crate::snapshot::PlanningSnapshot;

/// 展開深度上限預設值
///
/// 獨立於循環偵測的防線，防止格式錯誤的超深 BOM 資料耗盡堆疊。
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// 展開結果
#[derive(Debug, Clone)]
pub struct Explosion {
    /// 成品根節點
    pub root: PlannedNode,

    /// 半成品計劃節點（前序攤平）
    pub sub_assemblies: Vec<PlannedNode>,

    /// 原材料葉節點貢獻
    pub leaf_contributions: Vec<LeafContribution>,
}

/// BOM 展開器
pub struct BomExploder<'a> {
    snapshot: &'a PlanningSnapshot,
    max_depth: u32,
}

/// 單次展開的累積狀態
struct ExplosionState {
    sub_assemblies: Vec<PlannedNode>,
    leaf_contributions: Vec<LeafContribution>,
    /// 目前根到節點路徑上的料號，用於循環偵測
    path: Vec<String>,
}

impl ExplosionState {
    fn on_path(&self, item_code: &str) -> bool {
        self.path.iter().any(|code| code == item_code)
    }

    fn cycle_path(&self, item_code: &str) -> Vec<String> {
        let mut path = self.path.clone();
        path.push(item_code.to_string());
        path
    }
}

impl<'a> BomExploder<'a> {
    /// 創建新的展開器
    pub fn new(snapshot: &'a PlanningSnapshot) -> Self {
        Self {
            snapshot,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// 建構器模式：設置深度上限
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 展開一個成品
    ///
    /// 根節點數量 = 訂購數量經物料層級損耗調整；
    /// 根料號沒有 BOM 不是錯誤，產出空的半成品與原材料集合。
    pub fn explode(
        &self,
        root_item_code: &str,
        order_qty: Decimal,
        cancel: &CancelToken,
    ) -> Result<Explosion> {
        if order_qty <= Decimal::ZERO {
            return Err(PlanError::InvalidQuantity {
                item_code: root_item_code.to_string(),
                qty: order_qty,
            });
        }

        let root_scrap = self.snapshot.item_scrap(root_item_code);
        validate_scrap(root_item_code, root_scrap)?;

        let root = PlannedNode::new(
            root_item_code,
            self.snapshot.item_name(root_item_code),
            NodeKind::FinishedGood,
            0,
            order_qty,
            root_scrap,
        );

        let mut state = ExplosionState {
            sub_assemblies: Vec::new(),
            leaf_contributions: Vec::new(),
            path: vec![root_item_code.to_string()],
        };

        if let Some(bom) = self.snapshot.bom(root_item_code) {
            self.walk(bom, root.planned_qty, 0, &mut state, cancel)?;
        } else {
            tracing::debug!("成品 {} 沒有 BOM，展開為空集合", root_item_code);
        }

        tracing::debug!(
            "展開完成: {}（半成品 {} 個、原材料貢獻 {} 筆）",
            root_item_code,
            state.sub_assemblies.len(),
            state.leaf_contributions.len()
        );

        Ok(Explosion {
            root,
            sub_assemblies: state.sub_assemblies,
            leaf_contributions: state.leaf_contributions,
        })
    }

    /// 遞歸展開一張 BOM 的所有用料行
    fn walk(
        &self,
        bom: &BomRecord,
        parent_planned_qty: Decimal,
        parent_depth: u32,
        state: &mut ExplosionState,
        cancel: &CancelToken,
    ) -> Result<()> {
        for line in &bom.components {
            cancel.check()?;
            validate_line(line)?;

            let before_scrap = parent_planned_qty * line.qty_per_unit;

            if line.is_sub_assembly() {
                self.walk_sub_assembly(bom, line, before_scrap, parent_depth, state, cancel)?;
            } else {
                // 原材料葉節點：不再遞歸，記錄該路徑的貢獻
                state.leaf_contributions.push(LeafContribution::new(
                    line.child_item_code.clone(),
                    bom.item_code.clone(),
                    qty_with_scrap(before_scrap, line.scrap_percentage),
                ));
            }
        }

        Ok(())
    }

    fn walk_sub_assembly(
        &self,
        parent_bom: &BomRecord,
        line: &ComponentLine,
        before_scrap: Decimal,
        parent_depth: u32,
        state: &mut ExplosionState,
        cancel: &CancelToken,
    ) -> Result<()> {
        let child_code = line.child_item_code.as_str();

        // 同一條根到節點路徑上重複出現即為循環
        if state.on_path(child_code) {
            return Err(PlanError::CycleDetected {
                item_code: child_code.to_string(),
                path: state.cycle_path(child_code),
            });
        }

        let depth = parent_depth + 1;
        if depth > self.max_depth {
            return Err(PlanError::MaxDepthExceeded {
                item_code: child_code.to_string(),
                max_depth: self.max_depth,
            });
        }

        // 標記為自製件就必須有 BOM，降級為原材料會同時汙染數量與成本
        let child_bom = self
            .snapshot
            .bom(child_code)
            .ok_or_else(|| PlanError::MissingBom {
                item_code: child_code.to_string(),
                parent_item_code: parent_bom.item_code.clone(),
            })?;

        let node = PlannedNode::new(
            child_code,
            line.child_item_name.clone(),
            NodeKind::SubAssembly,
            depth,
            before_scrap,
            line.scrap_percentage,
        )
        .with_parent(parent_bom.item_code.clone());

        let child_planned_qty = node.planned_qty;

        tracing::debug!(
            "BOM 展開: {} → {}（損耗前 {}、損耗後 {}）",
            parent_bom.item_code,
            child_code,
            node.planned_qty_before_scrap,
            node.planned_qty
        );

        state.sub_assemblies.push(node);
        state.path.push(child_code.to_string());
        self.walk(child_bom, child_planned_qty, depth, state, cancel)?;
        state.path.pop();

        Ok(())
    }
}

fn validate_scrap(item_code: &str, scrap_percentage: Decimal) -> Result<()> {
    if scrap_percentage < Decimal::ZERO || scrap_percentage >= Decimal::ONE_HUNDRED {
        return Err(PlanError::InvalidScrap {
            item_code: item_code.to_string(),
            scrap_percentage,
        });
    }
    Ok(())
}

fn validate_line(line: &ComponentLine) -> Result<()> {
    if line.qty_per_unit <= Decimal::ZERO {
        return Err(PlanError::InvalidQuantity {
            item_code: line.child_item_code.clone(),
            qty: line.qty_per_unit,
        });
    }
    validate_scrap(&line.child_item_code, line.scrap_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_core::{ItemRecord, OperationLine};

    fn bike_snapshot() -> PlanningSnapshot {
        // BIKE-001
        //   ├── FRAME-001 ×1（損耗 5%）
        //   │     └── STEEL-TUBE ×3
        //   └── WHEEL-001 ×2
        //         └── STEEL-TUBE ×1
        PlanningSnapshot::from_parts(
            vec![
                BomRecord::new("BIKE-001", "登山車")
                    .with_component(
                        ComponentLine::sub_assembly("FRAME-001", "車架", Decimal::from(1))
                            .with_scrap(Decimal::from(5)),
                    )
                    .with_component(ComponentLine::sub_assembly(
                        "WHEEL-001",
                        "輪組",
                        Decimal::from(2),
                    ))
                    .with_operation(OperationLine::new("Assembly", "ASSEMBLY-LINE", Decimal::from(30))),
                BomRecord::new("FRAME-001", "車架").with_component(
                    ComponentLine::raw_material("STEEL-TUBE", "鋼管", Decimal::from(3)),
                ),
                BomRecord::new("WHEEL-001", "輪組").with_component(
                    ComponentLine::raw_material("STEEL-TUBE", "鋼管", Decimal::from(1)),
                ),
            ],
            vec![ItemRecord::new("BIKE-001", "登山車")],
            Vec::new(),
        )
    }

    #[test]
    fn test_explode_multi_level() {
        let snapshot = bike_snapshot();
        let exploder = BomExploder::new(&snapshot);

        let explosion = exploder
            .explode("BIKE-001", Decimal::from(100), &CancelToken::new())
            .unwrap();

        assert_eq!(explosion.root.planned_qty, Decimal::from(100));
        assert_eq!(explosion.sub_assemblies.len(), 2);

        // FRAME：100 × 1 = 100，損耗 5% 後 105.263158
        let frame = &explosion.sub_assemblies[0];
        assert_eq!(frame.item_code, "FRAME-001");
        assert_eq!(frame.planned_qty_before_scrap, Decimal::from(100));
        assert_eq!(frame.planned_qty, "105.263158".parse::<Decimal>().unwrap());
        assert_eq!(frame.depth, 1);
        assert_eq!(frame.parent_item_code.as_deref(), Some("BIKE-001"));

        // WHEEL：100 × 2 = 200，無損耗
        let wheel = &explosion.sub_assemblies[1];
        assert_eq!(wheel.planned_qty_before_scrap, Decimal::from(200));
        assert_eq!(wheel.planned_qty, Decimal::from(200));

        // STEEL-TUBE 兩條路徑：車架 105.263158 × 3、輪組 200 × 1
        assert_eq!(explosion.leaf_contributions.len(), 2);
        assert_eq!(
            explosion.leaf_contributions[0].qty,
            "315.789474".parse::<Decimal>().unwrap()
        );
        assert_eq!(explosion.leaf_contributions[1].qty, Decimal::from(200));
    }

    #[test]
    fn test_explode_root_without_bom() {
        // 根料號沒有 BOM：不是錯誤，半成品與原材料為空
        let snapshot = PlanningSnapshot::from_parts(Vec::new(), Vec::new(), Vec::new());
        let exploder = BomExploder::new(&snapshot);

        let explosion = exploder
            .explode("LONELY-001", Decimal::from(10), &CancelToken::new())
            .unwrap();

        assert_eq!(explosion.root.planned_qty, Decimal::from(10));
        assert!(explosion.sub_assemblies.is_empty());
        assert!(explosion.leaf_contributions.is_empty());
    }

    #[test]
    fn test_explode_rejects_zero_qty() {
        let snapshot = bike_snapshot();
        let exploder = BomExploder::new(&snapshot);

        let err = exploder
            .explode("BIKE-001", Decimal::ZERO, &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_cycle_detected_with_path() {
        // A → B → A
        let snapshot = PlanningSnapshot::from_parts(
            vec![
                BomRecord::new("A", "甲").with_component(ComponentLine::sub_assembly(
                    "B",
                    "乙",
                    Decimal::ONE,
                )),
                BomRecord::new("B", "乙").with_component(ComponentLine::sub_assembly(
                    "A",
                    "甲",
                    Decimal::ONE,
                )),
            ],
            Vec::new(),
            Vec::new(),
        );
        let exploder = BomExploder::new(&snapshot);

        let err = exploder
            .explode("A", Decimal::from(10), &CancelToken::new())
            .unwrap_err();

        match err {
            PlanError::CycleDetected { item_code, path } => {
                assert_eq!(item_code, "A");
                assert_eq!(path, vec!["A", "B", "A"]);
            }
            other => panic!("預期 CycleDetected，實際為 {other:?}"),
        }
    }

    #[test]
    fn test_shared_sub_assembly_is_not_a_cycle() {
        // 菱形：TOP 經 LEFT 與 RIGHT 兩條路徑到 SHARED，不是循環
        let snapshot = PlanningSnapshot::from_parts(
            vec![
                BomRecord::new("TOP", "頂")
                    .with_component(ComponentLine::sub_assembly("LEFT", "左", Decimal::ONE))
                    .with_component(ComponentLine::sub_assembly("RIGHT", "右", Decimal::ONE)),
                BomRecord::new("LEFT", "左").with_component(ComponentLine::sub_assembly(
                    "SHARED",
                    "共用件",
                    Decimal::from(2),
                )),
                BomRecord::new("RIGHT", "右").with_component(ComponentLine::sub_assembly(
                    "SHARED",
                    "共用件",
                    Decimal::from(3),
                )),
                BomRecord::new("SHARED", "共用件").with_component(
                    ComponentLine::raw_material("RM-X", "料X", Decimal::ONE),
                ),
            ],
            Vec::new(),
            Vec::new(),
        );
        let exploder = BomExploder::new(&snapshot);

        let explosion = exploder
            .explode("TOP", Decimal::from(10), &CancelToken::new())
            .unwrap();

        // SHARED 兩次造訪，各自成為獨立節點
        let shared: Vec<_> = explosion
            .sub_assemblies
            .iter()
            .filter(|n| n.item_code == "SHARED")
            .collect();
        assert_eq!(shared.len(), 2);
        assert_eq!(shared[0].planned_qty, Decimal::from(20));
        assert_eq!(shared[1].planned_qty, Decimal::from(30));

        // RM-X 的兩筆貢獻也都保留
        let rm_total: Decimal = explosion
            .leaf_contributions
            .iter()
            .filter(|l| l.item_code == "RM-X")
            .map(|l| l.qty)
            .sum();
        assert_eq!(rm_total, Decimal::from(50));
    }

    #[test]
    fn test_missing_bom_is_fatal() {
        // GHOST 標記為自製件但快照中沒有它的 BOM
        let snapshot = PlanningSnapshot::from_parts(
            vec![BomRecord::new("TOP", "頂").with_component(
                ComponentLine::sub_assembly("GHOST", "幽靈件", Decimal::ONE),
            )],
            Vec::new(),
            Vec::new(),
        );
        let exploder = BomExploder::new(&snapshot);

        let err = exploder
            .explode("TOP", Decimal::from(5), &CancelToken::new())
            .unwrap_err();

        match err {
            PlanError::MissingBom {
                item_code,
                parent_item_code,
            } => {
                assert_eq!(item_code, "GHOST");
                assert_eq!(parent_item_code, "TOP");
            }
            other => panic!("預期 MissingBom，實際為 {other:?}"),
        }
    }

    #[test]
    fn test_max_depth_guard() {
        // 三層鏈 L0 → L1 → L2 → RM，深度上限 1 時 L2 超限
        let snapshot = PlanningSnapshot::from_parts(
            vec![
                BomRecord::new("L0", "層0").with_component(ComponentLine::sub_assembly(
                    "L1",
                    "層1",
                    Decimal::ONE,
                )),
                BomRecord::new("L1", "層1").with_component(ComponentLine::sub_assembly(
                    "L2",
                    "層2",
                    Decimal::ONE,
                )),
                BomRecord::new("L2", "層2").with_component(ComponentLine::raw_material(
                    "RM",
                    "料",
                    Decimal::ONE,
                )),
            ],
            Vec::new(),
            Vec::new(),
        );
        let exploder = BomExploder::new(&snapshot).with_max_depth(1);

        let err = exploder
            .explode("L0", Decimal::from(1), &CancelToken::new())
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::MaxDepthExceeded { max_depth: 1, .. }
        ));
    }

    #[test]
    fn test_cancelled_token_aborts() {
        let snapshot = bike_snapshot();
        let exploder = BomExploder::new(&snapshot);
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = exploder
            .explode("BIKE-001", Decimal::from(100), &cancel)
            .unwrap_err();
        assert!(matches!(err, PlanError::Cancelled));
    }

    #[test]
    fn test_invalid_scrap_rejected() {
        let snapshot = PlanningSnapshot::from_parts(
            vec![BomRecord::new("TOP", "頂").with_component(
                ComponentLine::raw_material("RM", "料", Decimal::ONE)
                    .with_scrap(Decimal::from(100)),
            )],
            Vec::new(),
            Vec::new(),
        );
        let exploder = BomExploder::new(&snapshot);

        let err = exploder
            .explode("TOP", Decimal::from(1), &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidScrap { .. }));
    }
}
