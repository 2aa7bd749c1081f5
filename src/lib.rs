//! 固定容量整数哈希表库
//!
//! 三种冲突解决策略实现同一个插入/删除/容量契约：
//! - [`ChainedTable`]：链表法，每个桶保存任意数量的冲突条目
//! - [`ProbingTable`]：线性探测，删除留下墓碑
//! - [`CuckooTable`]：双表Cuckoo哈希，踢出链有上限
//!
//! 表的容量在构造时固定，从不扩容或重哈希。插入失败（探测耗尽、踢出超限）
//! 和删除未命中都是静默的；需要成功指示时使用 [`KeyValueTable::try_insert`]。
//!
//! ## 快速开始
//!
//! ```rust
//! use collision_tables::*;
//!
//! let mut table = CuckooTable::new(1024);
//! table.insert(7, 8);
//! assert_eq!(table.get(7), Some(8));
//!
//! table.remove(7);
//! table.remove(7);
//! assert!(table.is_empty());
//! assert_eq!(table.capacity(), 1024);
//! ```

#![warn(clippy::all)]
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

// 关闭日志时仍对参数做类型检查，避免未使用变量
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}
// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod map;
pub mod stats;
pub mod workload;

// 公共接口导出
pub use crate::{
    error::TableError,
    hash::{ModuloHasher, ProbeSequence},
    map::{
        build_table,
        ChainedTable,
        CuckooTable,
        KeyValueTable,
        ProbingTable,
        TableConfig,
        DEFAULT_CAPACITY,
        DEFAULT_MAX_KICK_DEPTH,
    },
    stats::{AtomicStatsRecorder, DisabledStatsRecorder, OperationStatsSnapshot, StatsRecorder},
    types::{CuckooSide, Entry, InsertOutcome, Key, OperationType, ProbeSlot, TableKind, Value},
    workload::{run_phase, run_suite, value_for, PhaseTiming, Workload},
};

// 便捷功能函数

/// 批量插入，返回未被丢弃的插入次数
pub fn batch_insert<T: KeyValueTable + ?Sized>(
    table: &mut T,
    items: impl IntoIterator<Item = (Key, Value)>,
) -> usize {
    let mut count = 0;
    for (key, value) in items {
        if table.try_insert(key, value).is_ok() {
            count += 1;
        }
    }
    count
}

/// 批量删除，返回实际删除的条目数
pub fn batch_remove<T: KeyValueTable + ?Sized>(
    table: &mut T,
    keys: impl IntoIterator<Item = Key>,
) -> usize {
    keys.into_iter()
        .filter(|&key| table.remove_entry(key).is_some())
        .count()
}
