//! BOM 資料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 子件類型
///
/// BOM 行上的標記，決定展開時是否向下遞歸。
/// 標記為自製件但找不到 BOM 是致命錯誤，不會降級為原材料處理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// 半成品（自製件，有自己的 BOM）
    SubAssembly,
    /// 原材料（採購件，展開的葉節點）
    RawMaterial,
}

/// BOM 用料行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentLine {
    /// 子件料號
    pub child_item_code: String,

    /// 子件名稱
    pub child_item_name: String,

    /// 子件類型
    pub kind: ComponentKind,

    /// 單位用量（每一單位父件所需數量）
    pub qty_per_unit: Decimal,

    /// 損耗率（百分比，[0, 100)）
    pub scrap_percentage: Decimal,
}

impl ComponentLine {
    /// 創建半成品用料行
    pub fn sub_assembly(
        child_item_code: impl Into<String>,
        child_item_name: impl Into<String>,
        qty_per_unit: Decimal,
    ) -> Self {
        Self {
            child_item_code: child_item_code.into(),
            child_item_name: child_item_name.into(),
            kind: ComponentKind::SubAssembly,
            qty_per_unit,
            scrap_percentage: Decimal::ZERO,
        }
    }

    /// 創建原材料用料行
    pub fn raw_material(
        child_item_code: impl Into<String>,
        child_item_name: impl Into<String>,
        qty_per_unit: Decimal,
    ) -> Self {
        Self {
            child_item_code: child_item_code.into(),
            child_item_name: child_item_name.into(),
            kind: ComponentKind::RawMaterial,
            qty_per_unit,
            scrap_percentage: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置損耗率
    pub fn with_scrap(mut self, scrap_percentage: Decimal) -> Self {
        self.scrap_percentage = scrap_percentage;
        self
    }

    /// 檢查是否為自製件
    pub fn is_sub_assembly(&self) -> bool {
        self.kind == ComponentKind::SubAssembly
    }
}

/// BOM 工序行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationLine {
    /// 工序名稱
    pub operation_name: String,

    /// 工作站類型
    pub workstation_type: String,

    /// 單位工時（分鐘）
    pub time_per_unit_minutes: Decimal,
}

impl OperationLine {
    /// 創建新的工序行
    pub fn new(
        operation_name: impl Into<String>,
        workstation_type: impl Into<String>,
        time_per_unit_minutes: Decimal,
    ) -> Self {
        Self {
            operation_name: operation_name.into(),
            workstation_type: workstation_type.into(),
            time_per_unit_minutes,
        }
    }
}

/// BOM 主檔
///
/// 一個料號對應一張 BOM，一個料號「有 BOM」即為自製件。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomRecord {
    /// 料號
    pub item_code: String,

    /// 品名
    pub item_name: String,

    /// 用料行（有序）
    pub components: Vec<ComponentLine>,

    /// 工序行（有序）
    pub operations: Vec<OperationLine>,
}

impl BomRecord {
    /// 創建新的 BOM
    pub fn new(item_code: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            components: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// 建構器模式：添加用料行
    pub fn with_component(mut self, line: ComponentLine) -> Self {
        self.components.push(line);
        self
    }

    /// 建構器模式：添加工序行
    pub fn with_operation(mut self, line: OperationLine) -> Self {
        self.operations.push(line);
        self
    }

    /// 列出所有半成品子件料號
    pub fn sub_assembly_codes(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter(|c| c.is_sub_assembly())
            .map(|c| c.child_item_code.as_str())
            .collect()
    }
}
