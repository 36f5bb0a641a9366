//! 非致命警告

use serde::{Deserialize, Serialize};

/// 警告嚴重度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}

/// 計劃生成警告
///
/// 缺少單價、缺少工作站時薪等不影響數量正確性的情況，
/// 以警告形式隨計劃一併回傳，不中斷生成。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWarning {
    /// 警告對象（料號或工作站類型）
    pub subject: String,

    /// 警告訊息
    pub message: String,

    /// 嚴重度
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject.into(), message.into(), WarningSeverity::Info)
    }

    pub fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject.into(), message.into(), WarningSeverity::Warning)
    }

    pub fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject.into(), message.into(), WarningSeverity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_constructors() {
        let w = PlanWarning::warning("STEEL-TUBE", "找不到物料單價，以 0 計算");
        assert_eq!(w.subject, "STEEL-TUBE");
        assert_eq!(w.severity, WarningSeverity::Warning);

        let i = PlanWarning::info("DRILL-PRESS", "工作站未維護時薪");
        assert_eq!(i.severity, WarningSeverity::Info);
    }
}
