// src/stats/operation.rs
//! 操作统计 - 跟踪插入、删除、探测、踢出和丢弃次数

use crate::{stats::StatsRecorder, types::OperationType};
use std::sync::atomic::{AtomicU64, Ordering};

/// 操作统计快照
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    pub insert_count: u64,
    pub update_count: u64,
    pub remove_count: u64,
    pub miss_count: u64,
    pub probe_count: u64,
    pub kick_count: u64,
    pub drop_count: u64,
}

impl OperationStatsSnapshot {
    pub fn count(&self, op_type: OperationType) -> u64 {
        match op_type {
            OperationType::Insert => self.insert_count,
            OperationType::Update => self.update_count,
            OperationType::Remove => self.remove_count,
            OperationType::Miss => self.miss_count,
            OperationType::Probe => self.probe_count,
            OperationType::Kick => self.kick_count,
            OperationType::Drop => self.drop_count,
        }
    }
}

/// 原子操作统计
#[derive(Debug, Default)]
pub struct AtomicStatsRecorder {
    insert_count: AtomicU64,
    update_count: AtomicU64,
    remove_count: AtomicU64,
    miss_count: AtomicU64,
    probe_count: AtomicU64,
    kick_count: AtomicU64,
    drop_count: AtomicU64,
}

impl AtomicStatsRecorder {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, op_type: OperationType) -> &AtomicU64 {
        match op_type {
            OperationType::Insert => &self.insert_count,
            OperationType::Update => &self.update_count,
            OperationType::Remove => &self.remove_count,
            OperationType::Miss => &self.miss_count,
            OperationType::Probe => &self.probe_count,
            OperationType::Kick => &self.kick_count,
            OperationType::Drop => &self.drop_count,
        }
    }
}

impl StatsRecorder for AtomicStatsRecorder {
    fn record_many(&self, op_type: OperationType, count: u64) {
        self.counter(op_type).fetch_add(count, Ordering::Relaxed);
    }

    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot {
            insert_count: self.insert_count.load(Ordering::Relaxed),
            update_count: self.update_count.load(Ordering::Relaxed),
            remove_count: self.remove_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            probe_count: self.probe_count.load(Ordering::Relaxed),
            kick_count: self.kick_count.load(Ordering::Relaxed),
            drop_count: self.drop_count.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        for op in OperationType::ALL {
            self.counter(op).store(0, Ordering::Relaxed);
        }
    }

    fn export_prometheus(&self) -> String {
        let mut output = String::new();

        for op in OperationType::ALL {
            output.push_str(&format!(
                "# HELP kv_table_operation_{}_count Total {} operations\n",
                op.as_str(), op.as_str()
            ));
            output.push_str(&format!(
                "# TYPE kv_table_operation_{}_count counter\n",
                op.as_str()
            ));
            output.push_str(&format!(
                "kv_table_operation_{}_count {}\n",
                op.as_str(),
                self.counter(op).load(Ordering::Relaxed)
            ));
        }

        output
    }
}
