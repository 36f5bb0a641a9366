//! # Plan Calculation Engine
//!
//! 生產計劃生成引擎：BOM 展開、原材料彙總、工序工時彙總與計劃組裝

pub mod assembler;
pub mod explosion;
pub mod generator;
pub mod materials;
pub mod operations;
pub mod snapshot;

// Re-export 主要類型
pub use assembler::PlanAssembler;
pub use explosion::{BomExploder, Explosion, DEFAULT_MAX_DEPTH};
pub use generator::{GenerationResult, PlanningService};
pub use materials::RawMaterialAggregator;
pub use operations::{OperationAggregator, OperationTotals};
pub use snapshot::PlanningSnapshot;
