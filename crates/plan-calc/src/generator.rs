//! 計劃生成服務
//!
//! 入口層：讀取銷售訂單、載入快照、逐成品行展開、跨行合併彙總、
//! 組裝計劃並交給持久層。任何致命錯誤都發生在持久化之前，
//! 不存在部分寫入的計劃。

use chrono::Local;
use plan_core::{CancelToken, FinishedGoodLine, PlanError, PlanWarning, ProductionPlan, Result};
use plan_store::{
    BomRepository, ItemRepository, PlanStore, SalesOrderRepository, WorkstationRepository,
};
use rayon::prelude::*;

use crate::assembler::PlanAssembler;
use crate::explosion::{BomExploder, Explosion, DEFAULT_MAX_DEPTH};
use crate::materials::RawMaterialAggregator;
use crate::operations::OperationAggregator;
use crate::snapshot::PlanningSnapshot;

/// 計劃生成結果
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// 生成的計劃（草稿）
    pub plan: ProductionPlan,

    /// 非致命警告
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub elapsed_ms: Option<u128>,
}

/// 計劃生成服務
pub struct PlanningService<'a> {
    sales_orders: &'a dyn SalesOrderRepository,
    boms: &'a dyn BomRepository,
    items: &'a dyn ItemRepository,
    workstations: &'a dyn WorkstationRepository,
    store: &'a dyn PlanStore,
    max_depth: u32,
}

impl<'a> PlanningService<'a> {
    /// 創建新的生成服務
    pub fn new(
        sales_orders: &'a dyn SalesOrderRepository,
        boms: &'a dyn BomRepository,
        items: &'a dyn ItemRepository,
        workstations: &'a dyn WorkstationRepository,
        store: &'a dyn PlanStore,
    ) -> Self {
        Self {
            sales_orders,
            boms,
            items,
            workstations,
            store,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// 建構器模式：設置展開深度上限
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 由銷售訂單生成生產計劃（不持久化）
    pub fn generate(
        &self,
        sales_order_id: &str,
        cancel: &CancelToken,
    ) -> Result<GenerationResult> {
        tracing::info!("開始生成生產計劃：{}", sales_order_id);
        let start_time = std::time::Instant::now();

        // Step 1: 讀取銷售訂單
        let sales_order = self
            .sales_orders
            .get_sales_order(sales_order_id)
            .ok_or_else(|| PlanError::SalesOrderNotFound(sales_order_id.to_string()))?;

        if sales_order.lines.is_empty() {
            return Err(PlanError::EmptyPlan);
        }

        // Step 2: 載入請求範圍的快照（此後不再觸碰儲存庫）
        tracing::debug!("Step 2: 載入快照");
        let root_codes = sales_order.item_codes();
        let snapshot =
            PlanningSnapshot::load(&root_codes, self.boms, self.items, self.workstations);

        // Step 3: 逐成品行展開（各行互相獨立，並行計算）
        tracing::debug!("Step 3: BOM 展開（{} 個成品行）", sales_order.lines.len());
        let exploder = BomExploder::new(&snapshot).with_max_depth(self.max_depth);
        let explosions: Vec<Explosion> = sales_order
            .lines
            .par_iter()
            .map(|line| exploder.explode(&line.item_code, line.qty, cancel))
            .collect::<Result<Vec<_>>>()?;

        // Step 4: 跨行合併後彙總原材料與工序
        tracing::debug!("Step 4: 彙總原材料與工序");
        let finished_goods: Vec<FinishedGoodLine> = explosions
            .iter()
            .map(|e| {
                FinishedGoodLine::new(
                    e.root.item_code.clone(),
                    e.root.item_name.clone(),
                    e.root.planned_qty,
                )
            })
            .collect();

        let root_nodes: Vec<_> = explosions.iter().map(|e| e.root.clone()).collect();
        let sub_assemblies: Vec<_> = explosions
            .iter()
            .flat_map(|e| e.sub_assemblies.iter().cloned())
            .collect();
        let leaf_contributions: Vec<_> = explosions
            .into_iter()
            .flat_map(|e| e.leaf_contributions)
            .collect();

        let mut warnings = Vec::new();

        let (raw_materials, material_warnings) =
            RawMaterialAggregator::aggregate(&leaf_contributions, &snapshot);
        warnings.extend(material_warnings);

        let totals = OperationAggregator::aggregate(&root_nodes, &sub_assemblies, &snapshot);
        warnings.extend(totals.warnings);

        // Step 5: 組裝計劃
        tracing::debug!("Step 5: 組裝計劃");
        let plan = PlanAssembler::assemble(
            sales_order_id,
            self.store.next_plan_id(),
            Local::now().date_naive(),
            finished_goods,
            sub_assemblies,
            raw_materials,
            totals.operations,
            totals.fg_operations,
        )?;

        let elapsed = start_time.elapsed();
        tracing::info!(
            "計劃生成完成：{}（半成品 {} 個、原材料 {} 項、警告 {} 則，耗時 {:?}）",
            plan.plan_id,
            plan.sub_assemblies.len(),
            plan.raw_materials.len(),
            warnings.len(),
            elapsed
        );

        Ok(GenerationResult {
            plan,
            warnings,
            elapsed_ms: Some(elapsed.as_millis()),
        })
    }

    /// 生成並持久化
    ///
    /// 只有完整生成成功才會呼叫持久層，單次完整寫入。
    pub fn generate_and_save(
        &self,
        sales_order_id: &str,
        cancel: &CancelToken,
    ) -> Result<GenerationResult> {
        let result = self.generate(sales_order_id, cancel)?;

        let plan_id = self.store.save_plan(&result.plan)?;
        tracing::info!("計劃已儲存：{}", plan_id);

        Ok(result)
    }
}
