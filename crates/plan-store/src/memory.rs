//! 記憶體實作
//!
//! 測試與示範用的儲存庫實作，資料直接以 HashMap 持有。

use std::collections::HashMap;
use std::sync::Mutex;

use plan_core::{BomRecord, ItemRecord, ProductionPlan, Result, SalesOrder};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::repository::{
    BomRepository, ItemRepository, PlanStore, SalesOrderRepository, WorkstationRepository,
};

/// 記憶體 BOM 儲存庫
#[derive(Debug, Default)]
pub struct MemoryBomRepository {
    boms: HashMap<String, BomRecord>,
}

impl MemoryBomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加 BOM
    pub fn with_bom(mut self, bom: BomRecord) -> Self {
        self.boms.insert(bom.item_code.clone(), bom);
        self
    }

    pub fn add_bom(&mut self, bom: BomRecord) {
        self.boms.insert(bom.item_code.clone(), bom);
    }
}

impl BomRepository for MemoryBomRepository {
    fn get_bom(&self, item_code: &str) -> Option<BomRecord> {
        self.boms.get(item_code).cloned()
    }
}

/// 記憶體物料主檔儲存庫
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    items: HashMap<String, ItemRecord>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加物料主檔
    pub fn with_item(mut self, item: ItemRecord) -> Self {
        self.items.insert(item.item_code.clone(), item);
        self
    }

    pub fn add_item(&mut self, item: ItemRecord) {
        self.items.insert(item.item_code.clone(), item);
    }
}

impl ItemRepository for MemoryItemRepository {
    fn get_item(&self, item_code: &str) -> Option<ItemRecord> {
        self.items.get(item_code).cloned()
    }
}

/// 記憶體工作站儲存庫
#[derive(Debug, Default)]
pub struct MemoryWorkstationRepository {
    rates: HashMap<String, Decimal>,
}

impl MemoryWorkstationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置工作站時薪
    pub fn with_rate(mut self, workstation_type: impl Into<String>, rate: Decimal) -> Self {
        self.rates.insert(workstation_type.into(), rate);
        self
    }
}

impl WorkstationRepository for MemoryWorkstationRepository {
    fn hourly_rate(&self, workstation_type: &str) -> Option<Decimal> {
        self.rates.get(workstation_type).copied()
    }
}

/// 記憶體銷售訂單儲存庫
#[derive(Debug, Default)]
pub struct MemorySalesOrderRepository {
    orders: HashMap<String, SalesOrder>,
}

impl MemorySalesOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加銷售訂單
    pub fn with_order(mut self, order: SalesOrder) -> Self {
        self.orders.insert(order.sales_order_id.clone(), order);
        self
    }
}

impl SalesOrderRepository for MemorySalesOrderRepository {
    fn get_sales_order(&self, sales_order_id: &str) -> Option<SalesOrder> {
        self.orders.get(sales_order_id).cloned()
    }
}

/// 記憶體計劃持久層
///
/// 保留所有已儲存的計劃供測試檢查；編號格式沿用舊系統的 `PP-` 前綴。
#[derive(Debug, Default)]
pub struct MemoryPlanStore {
    plans: Mutex<Vec<ProductionPlan>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已儲存的計劃數量
    pub fn save_count(&self) -> usize {
        self.plans.lock().map(|plans| plans.len()).unwrap_or(0)
    }

    /// 取出已儲存計劃的副本
    pub fn saved_plans(&self) -> Vec<ProductionPlan> {
        self.plans
            .lock()
            .map(|plans| plans.clone())
            .unwrap_or_default()
    }
}

impl PlanStore for MemoryPlanStore {
    fn next_plan_id(&self) -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("PP-{}", &uuid[..12])
    }

    fn save_plan(&self, plan: &ProductionPlan) -> Result<String> {
        let mut plans = self
            .plans
            .lock()
            .map_err(|e| plan_core::PlanError::Store(e.to_string()))?;
        plans.push(plan.clone());
        Ok(plan.plan_id.clone())
    }
}
