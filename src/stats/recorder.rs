// src/stats/recorder.rs
//! 统计记录器接口 - 定义统一统计API

use crate::{stats::operation::OperationStatsSnapshot, types::OperationType};

/// 统计记录器特征
pub trait StatsRecorder: Send + Sync {
    /// 记录一次操作
    fn record(&self, op_type: OperationType) {
        self.record_many(op_type, 1);
    }

    /// 批量记录同类操作
    fn record_many(&self, op_type: OperationType, count: u64);

    /// 获取操作统计快照
    fn snapshot(&self) -> OperationStatsSnapshot;

    /// 重置所有统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 禁用统计实现
#[derive(Debug, Default)]
pub struct DisabledStatsRecorder;

impl StatsRecorder for DisabledStatsRecorder {
    fn record_many(&self, _op_type: OperationType, _count: u64) {}

    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot::default()
    }

    fn reset(&self) {}

    fn export_prometheus(&self) -> String {
        String::new()
    }
}
