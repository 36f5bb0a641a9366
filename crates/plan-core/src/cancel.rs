//! 取消信號

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{PlanError, Result};

/// 取消權杖
///
/// 展開引擎在每次節點訪問之間檢查此權杖，
/// 病態或惡意深度的 BOM 資料不會讓單次請求無限執行。
/// 可複製，複製品共享同一旗標。
#[derive(Debug, Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// 創建永不逾時的權杖
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// 創建帶逾時的權杖
    pub fn with_deadline(timeout: Duration) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// 發出取消信號
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// 檢查是否已取消（含逾時）
    pub fn is_cancelled(&self) -> bool {
        if self.flag.load(Ordering::SeqCst) {
            return true;
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    /// 已取消時回傳 [`PlanError::Cancelled`]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(PlanError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
