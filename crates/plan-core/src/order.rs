//! 銷售訂單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 銷售訂單成品行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrderLine {
    /// 成品料號
    pub item_code: String,

    /// 訂購數量
    pub qty: Decimal,
}

impl SalesOrderLine {
    /// 創建新的訂單行
    pub fn new(item_code: impl Into<String>, qty: Decimal) -> Self {
        Self {
            item_code: item_code.into(),
            qty,
        }
    }
}

/// 銷售訂單
///
/// 計劃生成的輸入，每一成品行獨立展開後再合併彙總。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    /// 訂單編號
    pub sales_order_id: String,

    /// 成品行
    pub lines: Vec<SalesOrderLine>,
}

impl SalesOrder {
    /// 創建新的銷售訂單
    pub fn new(sales_order_id: impl Into<String>) -> Self {
        Self {
            sales_order_id: sales_order_id.into(),
            lines: Vec::new(),
        }
    }

    /// 建構器模式：添加成品行
    pub fn with_line(mut self, item_code: impl Into<String>, qty: Decimal) -> Self {
        self.lines.push(SalesOrderLine::new(item_code, qty));
        self
    }

    /// 列出所有成品料號
    pub fn item_codes(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.item_code.clone()).collect()
    }
}
