//! 统一错误处理
//!
//! 表的默认接口不返回错误：丢弃和未命中都是静默的。这里的错误只出现在
//! 配置校验和可选的 `try_insert` 成功指示上。

use crate::types::Key;

/// 哈希表可能发生的错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("探测序列已耗尽，插入被丢弃 (容量: {capacity}, 键: {key})")]
    TableFull {
        capacity: usize,
        key: Key,
    },

    #[error("踢出路径超过最大深度 {depth}，丢失键: {lost_key}")]
    KickPathExceeded {
        depth: usize,
        lost_key: Key,
    },
}

impl TableError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig { .. } => Some("检查配置参数"),
            Self::TableFull { .. } => Some("使用更大容量的表或先删除部分键"),
            Self::KickPathExceeded { .. } => Some("增加最大踢出深度或使用更大容量的表"),
        }
    }

    /// 判断错误是否可恢复
    ///
    /// 踢出失败时手中的键已丢失，重试原请求无法找回它。
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::KickPathExceeded { .. })
    }

    /// 插入是否被静默丢弃
    pub fn is_dropped_insert(&self) -> bool {
        matches!(self, Self::TableFull { .. } | Self::KickPathExceeded { .. })
    }
}
