//! # Production Plan
//!
//! 生產計劃生成引擎：由銷售訂單遞歸展開 BOM 樹，計算含損耗的
//! 各層計劃數量，彙總原材料與工序工時需求，組裝為草稿生產計劃。
//!
//! 對外入口為 [`PlanningService`]；儲存庫介面見 [`plan_store`]。

pub use plan_calc::{
    BomExploder, Explosion, GenerationResult, OperationAggregator, OperationTotals, PlanAssembler,
    PlanningService, PlanningSnapshot, RawMaterialAggregator, DEFAULT_MAX_DEPTH,
};
pub use plan_core::{
    qty_with_scrap, BomRecord, CancelToken, ComponentKind, ComponentLine, FinishedGoodLine,
    ItemRecord, LeafContribution, NodeKind, OperationLine, OperationRequirement, PlanError,
    PlanResponse, PlanStatus, PlanWarning, PlannedNode, ProductionPlan, RawMaterialRequirement,
    Result, SalesOrder, SalesOrderLine, WarningSeverity,
};
pub use plan_store::{
    BomRepository, ItemRepository, MemoryBomRepository, MemoryItemRepository, MemoryPlanStore,
    MemorySalesOrderRepository, MemoryWorkstationRepository, PlanStore, SalesOrderRepository,
    WorkstationRepository,
};
