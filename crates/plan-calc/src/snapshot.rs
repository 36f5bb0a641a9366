//! 計劃快照
//!
//! 單次生成請求專屬的不可變資料視圖。展開前一次性預取所有
//! 可達的 BOM、物料與工作站時薪，展開過程不再進行任何儲存庫存取，
//! 同一份計劃的數量與成本因此反映同一個一致的資料版本。
//! 快照由單次請求持有，請求結束即丟棄，不跨請求共用。

use std::collections::{HashMap, HashSet, VecDeque};

use plan_core::{BomRecord, ItemRecord};
use plan_store::{BomRepository, ItemRepository, WorkstationRepository};
use rust_decimal::Decimal;

/// 計劃快照
#[derive(Debug, Clone)]
pub struct PlanningSnapshot {
    boms: HashMap<String, BomRecord>,
    items: HashMap<String, ItemRecord>,
    workstation_rates: HashMap<String, Decimal>,
}

impl PlanningSnapshot {
    /// 從儲存庫載入快照
    ///
    /// 以廣度優先從根料號批次抓取可達的 BOM（每層一次批次呼叫，
    /// 不是每節點一趟），再依發現的料號與工作站類型批次抓取
    /// 物料主檔與時薪。共用子件只抓取一次；循環資料不會造成
    /// 無限迴圈，留給展開引擎以致命錯誤回報。
    pub fn load(
        root_item_codes: &[String],
        boms: &dyn BomRepository,
        items: &dyn ItemRepository,
        workstations: &dyn WorkstationRepository,
    ) -> Self {
        let mut fetched_boms: HashMap<String, BomRecord> = HashMap::new();
        let mut seen_items: HashSet<String> = root_item_codes.iter().cloned().collect();
        // 每個料號最多抓取一次，循環或共用子件都不會重複入列
        let mut requested: HashSet<String> = root_item_codes.iter().cloned().collect();
        let mut frontier: VecDeque<String> = root_item_codes.iter().cloned().collect();

        while !frontier.is_empty() {
            let batch: Vec<String> = frontier.drain(..).collect();

            for (code, bom) in boms.get_boms(&batch) {
                for line in &bom.components {
                    seen_items.insert(line.child_item_code.clone());
                    if line.is_sub_assembly() && requested.insert(line.child_item_code.clone()) {
                        frontier.push_back(line.child_item_code.clone());
                    }
                }
                fetched_boms.insert(code, bom);
            }
        }

        let item_codes: Vec<String> = seen_items.into_iter().collect();
        let fetched_items = items.get_items(&item_codes);

        let workstation_types: Vec<String> = {
            let mut types: HashSet<String> = HashSet::new();
            for bom in fetched_boms.values() {
                for op in &bom.operations {
                    types.insert(op.workstation_type.clone());
                }
            }
            types.into_iter().collect()
        };
        let rates = workstations.hourly_rates(&workstation_types);

        tracing::debug!(
            "快照載入完成：BOM {} 張、物料 {} 筆、工作站 {} 類",
            fetched_boms.len(),
            fetched_items.len(),
            rates.len()
        );

        Self {
            boms: fetched_boms,
            items: fetched_items,
            workstation_rates: rates,
        }
    }

    /// 直接以資料建立快照（測試用）
    pub fn from_parts(
        boms: Vec<BomRecord>,
        items: Vec<ItemRecord>,
        workstation_rates: Vec<(String, Decimal)>,
    ) -> Self {
        Self {
            boms: boms
                .into_iter()
                .map(|b| (b.item_code.clone(), b))
                .collect(),
            items: items
                .into_iter()
                .map(|i| (i.item_code.clone(), i))
                .collect(),
            workstation_rates: workstation_rates.into_iter().collect(),
        }
    }

    /// 取得料號的 BOM
    pub fn bom(&self, item_code: &str) -> Option<&BomRecord> {
        self.boms.get(item_code)
    }

    /// 取得物料主檔
    pub fn item(&self, item_code: &str) -> Option<&ItemRecord> {
        self.items.get(item_code)
    }

    /// 取得工作站時薪
    pub fn workstation_rate(&self, workstation_type: &str) -> Option<Decimal> {
        self.workstation_rates.get(workstation_type).copied()
    }

    /// 物料層級損耗率，主檔缺漏時視為 0
    pub fn item_scrap(&self, item_code: &str) -> Decimal {
        self.items
            .get(item_code)
            .map(|i| i.scrap_percentage)
            .unwrap_or(Decimal::ZERO)
    }

    /// 物料品名，主檔缺漏時退回料號本身
    pub fn item_name(&self, item_code: &str) -> String {
        self.items
            .get(item_code)
            .map(|i| i.item_name.clone())
            .unwrap_or_else(|| item_code.to_string())
    }

    /// 快照內的 BOM 數量
    pub fn bom_count(&self) -> usize {
        self.boms.len()
    }
}
