//! 表接口与配置 - 三种冲突解决策略共享的契约

use crate::{
    error::TableError,
    types::{InsertOutcome, Key, TableKind, Value},
};

/// 默认最大踢出深度
pub const DEFAULT_MAX_KICK_DEPTH: usize = 50;

/// 默认容量
pub const DEFAULT_CAPACITY: usize = 1024;

/// 哈希表配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// 桶数量 / 槽位数量（Cuckoo为每张表的槽位数）
    pub capacity: usize,
    /// Cuckoo插入的最大踢出轮数，其他策略忽略
    pub max_kick_depth: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_kick_depth: DEFAULT_MAX_KICK_DEPTH,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn max_kick_depth(mut self, depth: usize) -> Self {
        self.max_kick_depth = depth;
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), TableError> {
        if self.capacity == 0 {
            return Err(TableError::InvalidConfig {
                reason: "容量必须大于0".into(),
            });
        }
        if self.max_kick_depth == 0 {
            return Err(TableError::InvalidConfig {
                reason: "最大踢出深度必须大于0".into(),
            });
        }
        Ok(())
    }
}

/// 固定容量键值表
///
/// `insert` 和 `remove` 是全函数：失败时静默丢弃或什么都不做。
/// 需要知道插入是否成功时使用 `try_insert`。
pub trait KeyValueTable {
    /// 插入或覆盖，返回是否成功
    fn try_insert(&mut self, key: Key, value: Value) -> Result<InsertOutcome, TableError>;

    /// 删除键，返回被删除的值
    fn remove_entry(&mut self, key: Key) -> Option<Value>;

    /// 查询键
    fn get(&self, key: Key) -> Option<Value>;

    /// 构造时确定的结构容量，不是元素数量
    fn capacity(&self) -> usize;

    /// 有效条目数
    fn len(&self) -> usize;

    /// 策略类型
    fn kind(&self) -> TableKind;

    /// 全部槽位数，用于计算负载因子
    fn slot_count(&self) -> usize {
        self.capacity()
    }

    /// 插入或覆盖，丢弃时不报告
    fn insert(&mut self, key: Key, value: Value) {
        let _ = self.try_insert(key, value);
    }

    /// 删除键，不存在时什么都不做
    fn remove(&mut self, key: Key) {
        self.remove_entry(key);
    }

    fn contains_key(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 负载因子，链表法可能大于1
    fn load_factor(&self) -> f32 {
        self.len() as f32 / self.slot_count() as f32
    }
}
