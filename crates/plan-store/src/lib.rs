//! # Plan Store
//!
//! 外部協作者的存取介面與測試用記憶體實作

pub mod memory;
pub mod repository;

// Re-export 主要類型
pub use memory::{
    MemoryBomRepository, MemoryItemRepository, MemoryPlanStore, MemorySalesOrderRepository,
    MemoryWorkstationRepository,
};
pub use repository::{
    BomRepository, ItemRepository, PlanStore, SalesOrderRepository, WorkstationRepository,
};
