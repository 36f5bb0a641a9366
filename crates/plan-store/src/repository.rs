//! 儲存庫介面
//!
//! 計劃生成引擎透過這些介面讀取 BOM、物料與工作站資料，
//! 並把完成的計劃交給持久層。批次方法供快照預取使用，
//! 後端可覆寫為單趟查詢。

use std::collections::HashMap;

use plan_core::{BomRecord, ItemRecord, ProductionPlan, Result, SalesOrder};
use rust_decimal::Decimal;

/// BOM 儲存庫
pub trait BomRepository {
    /// 取得料號的 BOM，無 BOM 表示該料號非自製件
    fn get_bom(&self, item_code: &str) -> Option<BomRecord>;

    /// 批次取得 BOM
    fn get_boms(&self, item_codes: &[String]) -> HashMap<String, BomRecord> {
        item_codes
            .iter()
            .filter_map(|code| self.get_bom(code).map(|bom| (code.clone(), bom)))
            .collect()
    }
}

/// 物料主檔儲存庫
pub trait ItemRepository {
    /// 取得物料主檔
    fn get_item(&self, item_code: &str) -> Option<ItemRecord>;

    /// 批次取得物料主檔
    fn get_items(&self, item_codes: &[String]) -> HashMap<String, ItemRecord> {
        item_codes
            .iter()
            .filter_map(|code| self.get_item(code).map(|item| (code.clone(), item)))
            .collect()
    }
}

/// 工作站儲存庫
pub trait WorkstationRepository {
    /// 取得工作站類型的時薪
    fn hourly_rate(&self, workstation_type: &str) -> Option<Decimal>;

    /// 批次取得時薪
    fn hourly_rates(&self, workstation_types: &[String]) -> HashMap<String, Decimal> {
        workstation_types
            .iter()
            .filter_map(|ws| self.hourly_rate(ws).map(|rate| (ws.clone(), rate)))
            .collect()
    }
}

/// 銷售訂單儲存庫
pub trait SalesOrderRepository {
    /// 取得銷售訂單
    fn get_sales_order(&self, sales_order_id: &str) -> Option<SalesOrder>;
}

/// 計劃持久層
///
/// `save_plan` 是單次完整寫入；引擎在任何致命錯誤下都不會呼叫它。
pub trait PlanStore {
    /// 配發新的計劃編號（全域唯一性由持久層負責）
    fn next_plan_id(&self) -> String;

    /// 持久化完整計劃，回傳計劃編號
    fn save_plan(&self, plan: &ProductionPlan) -> Result<String>;
}
