//! 链表法哈希表 - 每个桶保存任意数量的冲突条目

use crate::{
    error::TableError,
    hash::ModuloHasher,
    map::table::{KeyValueTable, TableConfig},
    stats::{disabled_recorder, StatsRecorder},
    types::{Entry, InsertOutcome, Key, OperationType, TableKind, Value},
};
use std::{fmt, sync::Arc};

/// 链表法哈希表
///
/// 桶内按插入顺序保存条目，没有冲突上限，插入总是成功。
pub struct ChainedTable {
    buckets: Vec<Vec<Entry>>,
    hasher: ModuloHasher,
    len: usize,
    stats: Arc<dyn StatsRecorder>,
}

impl ChainedTable {
    /// 创建 `capacity` 个桶的表
    ///
    /// # Panics
    ///
    /// `capacity` 为0时panic，需要错误返回时使用 [`ChainedTable::with_config`]。
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "容量必须大于0");
        Self::build(capacity)
    }

    pub fn with_config(config: &TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::build(config.capacity))
    }

    fn build(capacity: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); capacity],
            hasher: ModuloHasher::new(capacity),
            len: 0,
            stats: disabled_recorder(),
        }
    }

    /// 设置统计记录器
    pub fn with_stats(mut self, stats: Arc<dyn StatsRecorder>) -> Self {
        self.stats = stats;
        self
    }

    /// 桶内条目，按插入顺序
    pub fn bucket(&self, index: usize) -> &[Entry] {
        &self.buckets[index]
    }

    /// 键所在的桶
    pub fn bucket_index(&self, key: Key) -> usize {
        self.hasher.primary(key)
    }

    /// 最长桶的长度
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl KeyValueTable for ChainedTable {
    fn try_insert(&mut self, key: Key, value: Value) -> Result<InsertOutcome, TableError> {
        let idx = self.hasher.primary(key);
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
            self.stats.record(OperationType::Update);
            return Ok(InsertOutcome::Updated);
        }

        bucket.push(Entry::new(key, value));
        self.len += 1;
        self.stats.record(OperationType::Insert);
        log_debug!("chained insert key={} bucket={} chain_len={}", key, idx, bucket.len());
        Ok(InsertOutcome::Inserted)
    }

    fn remove_entry(&mut self, key: Key) -> Option<Value> {
        let idx = self.hasher.primary(key);
        let bucket = &mut self.buckets[idx];

        match bucket.iter().position(|entry| entry.key == key) {
            Some(pos) => {
                let entry = bucket.remove(pos);
                self.len -= 1;
                self.stats.record(OperationType::Remove);
                Some(entry.value)
            }
            None => {
                self.stats.record(OperationType::Miss);
                None
            }
        }
    }

    fn get(&self, key: Key) -> Option<Value> {
        self.buckets[self.hasher.primary(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }

    fn capacity(&self) -> usize {
        self.hasher.capacity()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn kind(&self) -> TableKind {
        TableKind::Chained
    }
}

impl fmt::Debug for ChainedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedTable")
            .field("size", &self.len)
            .field("capacity", &self.capacity())
            .field("longest_chain", &self.longest_chain())
            .finish()
    }
}
