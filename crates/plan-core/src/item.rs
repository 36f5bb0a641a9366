//! 物料主檔模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 排除於原材料彙總之外的物料群組
pub const CONSUMABLE_GROUP: &str = "Consumable";

/// 物料主檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// 料號
    pub item_code: String,

    /// 品名
    pub item_name: String,

    /// 物料群組
    pub item_group: String,

    /// 單價（None 表示主檔沒有維護單價）
    pub rate: Option<Decimal>,

    /// 物料層級損耗率（百分比），用於成品根節點
    pub scrap_percentage: Decimal,
}

impl ItemRecord {
    /// 創建新的物料主檔
    pub fn new(item_code: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            item_group: String::new(),
            rate: None,
            scrap_percentage: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置物料群組
    pub fn with_group(mut self, item_group: impl Into<String>) -> Self {
        self.item_group = item_group.into();
        self
    }

    /// 建構器模式：設置單價
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    /// 建構器模式：設置損耗率
    pub fn with_scrap(mut self, scrap_percentage: Decimal) -> Self {
        self.scrap_percentage = scrap_percentage;
        self
    }

    /// 檢查是否為耗材（不列入原材料需求）
    pub fn is_consumable(&self) -> bool {
        self.item_group == CONSUMABLE_GROUP
    }
}
