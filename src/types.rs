//! 核心类型定义 - 键值、槽位状态和操作类型

use std::fmt;

/// 键类型
///
/// 只支持非负整数键，负数键在类型层面不可表示，取模哈希始终落在 `0..N` 内。
pub type Key = u64;

/// 值类型
pub type Value = i64;

/// 键值对
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub key: Key,
    pub value: Value,
}

impl Entry {
    pub const fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}

/// 线性探测表的槽位
///
/// `Deleted` 是墓碑：保留原键值，查找时视为无效，探测时不终止，插入时可复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeSlot {
    #[default]
    Empty,
    Occupied(Entry),
    Deleted(Entry),
}

impl ProbeSlot {
    /// 从未被使用过的槽位
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 持有有效键
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// 墓碑槽位
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }

    /// 是否可写入新条目（空槽或墓碑）
    pub fn is_insertable(&self) -> bool {
        !self.is_occupied()
    }

    /// 有效条目
    pub fn live_entry(&self) -> Option<&Entry> {
        match self {
            Self::Occupied(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Cuckoo表的两张子表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CuckooSide {
    /// 由 `h1` 定位
    Primary,
    /// 由 `h2` 定位
    Secondary,
}

/// 冲突解决策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Chained,
    LinearProbe,
    Cuckoo,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Chained, TableKind::LinearProbe, TableKind::Cuckoo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chained => "separate_chaining",
            Self::LinearProbe => "linear_probing",
            Self::Cuckoo => "cuckoo",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 插入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// 新增条目
    Inserted,
    /// 覆盖已有键的值
    Updated,
}

/// 统计用操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Insert,
    Update,
    Remove,
    /// 删除时未找到键
    Miss,
    /// 线性探测访问的槽位
    Probe,
    /// Cuckoo踢出
    Kick,
    /// 静默丢弃的插入
    Drop,
}

impl OperationType {
    pub const ALL: [OperationType; 7] = [
        OperationType::Insert,
        OperationType::Update,
        OperationType::Remove,
        OperationType::Miss,
        OperationType::Probe,
        OperationType::Kick,
        OperationType::Drop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Remove => "remove",
            Self::Miss => "miss",
            Self::Probe => "probe",
            Self::Kick => "kick",
            Self::Drop => "drop",
        }
    }
}
