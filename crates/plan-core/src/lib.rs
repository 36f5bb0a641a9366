//! # Plan Core
//!
//! 生產計劃引擎的核心資料模型與類型定義

pub mod bom;
pub mod cancel;
pub mod item;
pub mod node;
pub mod order;
pub mod plan;
pub mod requirement;
pub mod response;
pub mod warning;

// Re-export 主要類型
pub use bom::{BomRecord, ComponentKind, ComponentLine, OperationLine};
pub use cancel::CancelToken;
pub use item::ItemRecord;
pub use node::{qty_with_scrap, LeafContribution, NodeKind, PlannedNode};
pub use order::{SalesOrder, SalesOrderLine};
pub use plan::{FinishedGoodLine, PlanStatus, ProductionPlan};
pub use requirement::{OperationRequirement, RawMaterialRequirement};
pub use response::PlanResponse;
pub use warning::{PlanWarning, WarningSeverity};

use rust_decimal::Decimal;

/// 計劃生成錯誤類型
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    #[error("BOM 存在循環引用: {item_code}（路徑: {path:?}）")]
    CycleDetected { item_code: String, path: Vec<String> },

    #[error("子件 {item_code} 標記為自製件但找不到 BOM（父件: {parent_item_code}）")]
    MissingBom {
        item_code: String,
        parent_item_code: String,
    },

    #[error("BOM 展開深度超過上限 {max_depth}: {item_code}")]
    MaxDepthExceeded { item_code: String, max_depth: u32 },

    #[error("計劃沒有任何成品項目")]
    EmptyPlan,

    #[error("找不到銷售訂單: {0}")]
    SalesOrderNotFound(String),

    #[error("無效的數量 {qty}: {item_code}")]
    InvalidQuantity { item_code: String, qty: Decimal },

    #[error("無效的損耗率 {scrap_percentage}: {item_code}")]
    InvalidScrap {
        item_code: String,
        scrap_percentage: Decimal,
    },

    #[error("計算已被取消")]
    Cancelled,

    #[error("儲存錯誤: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
