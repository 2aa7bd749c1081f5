//! 统计模块 - 哈希表操作计数
//!
//! 只统计次数，不计时；计时属于外部的负载测试。

pub mod recorder;
pub mod operation;

use std::sync::Arc;

pub use recorder::{DisabledStatsRecorder, StatsRecorder};
pub use operation::{AtomicStatsRecorder, OperationStatsSnapshot};

/// 共享的禁用记录器，表的默认统计目标
pub static DISABLED_STATS: once_cell::sync::Lazy<Arc<dyn StatsRecorder>> =
    once_cell::sync::Lazy::new(|| Arc::new(DisabledStatsRecorder));

/// 获取默认（禁用）记录器
pub fn disabled_recorder() -> Arc<dyn StatsRecorder> {
    Arc::clone(&DISABLED_STATS)
}
