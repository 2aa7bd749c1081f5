//! 线性探测哈希表 - 开放寻址，删除留下墓碑

use crate::{
    error::TableError,
    hash::ModuloHasher,
    map::table::{KeyValueTable, TableConfig},
    stats::{disabled_recorder, StatsRecorder},
    types::{Entry, InsertOutcome, Key, OperationType, ProbeSlot, TableKind, Value},
};
use std::{fmt, sync::Arc};

/// 线性探测哈希表
///
/// 探测序列为 `(k mod N + i) mod N`，`i = 0..N`。删除只把槽位标记为墓碑，
/// 墓碑之后的键仍可通过探测到达；空槽终止探测，因为任何键都不会越过空槽存放。
/// 探测序列耗尽时插入被静默丢弃。
pub struct ProbingTable {
    slots: Vec<ProbeSlot>,
    hasher: ModuloHasher,
    len: usize,
    stats: Arc<dyn StatsRecorder>,
}

impl ProbingTable {
    /// 创建 `capacity` 个槽位的表
    ///
    /// # Panics
    ///
    /// `capacity` 为0时panic，需要错误返回时使用 [`ProbingTable::with_config`]。
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
            slots: vec![ProbeSlot::Empty; capacity],
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

    pub fn slot(&self, index: usize) -> &ProbeSlot {
        &self.slots[index]
    }

    /// 有效键所在槽位
    pub fn find_slot(&self, key: Key) -> Option<usize> {
        for idx in self.hasher.probe_sequence(key) {
            match &self.slots[idx] {
                ProbeSlot::Empty => return None,
                ProbeSlot::Occupied(entry) if entry.key == key => return Some(idx),
                _ => {}
            }
        }
        None
    }

    /// 墓碑数量
    pub fn tombstone_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_deleted()).count()
    }
}

impl KeyValueTable for ProbingTable {
    fn try_insert(&mut self, key: Key, value: Value) -> Result<InsertOutcome, TableError> {
        // 第一个可写槽位（墓碑或空槽）；遇到墓碑后继续向后找同键，避免重复
        let mut target = None;
        let mut probes = 0;

        for idx in self.hasher.probe_sequence(key) {
            probes += 1;
            match &mut self.slots[idx] {
                ProbeSlot::Occupied(entry) if entry.key == key => {
                    entry.value = value;
                    self.stats.record_many(OperationType::Probe, probes);
                    self.stats.record(OperationType::Update);
                    return Ok(InsertOutcome::Updated);
                }
                ProbeSlot::Occupied(_) => {}
                ProbeSlot::Deleted(_) => {
                    target.get_or_insert(idx);
                }
                ProbeSlot::Empty => {
                    target.get_or_insert(idx);
                    break;
                }
            }
        }
        self.stats.record_many(OperationType::Probe, probes);

        match target {
            Some(idx) => {
                self.slots[idx] = ProbeSlot::Occupied(Entry::new(key, value));
                self.len += 1;
                self.stats.record(OperationType::Insert);
                Ok(InsertOutcome::Inserted)
            }
            None => {
                self.stats.record(OperationType::Drop);
                log_warn!("linear probe exhausted {} slots, dropping key={}", probes, key);
                Err(TableError::TableFull {
                    capacity: self.capacity(),
                    key,
                })
            }
        }
    }

    fn remove_entry(&mut self, key: Key) -> Option<Value> {
        let mut probes = 0;
        let mut found = None;

        for idx in self.hasher.probe_sequence(key) {
            probes += 1;
            match self.slots[idx] {
                ProbeSlot::Empty => break,
                ProbeSlot::Occupied(entry) if entry.key == key => {
                    found = Some((idx, entry));
                    break;
                }
                _ => {}
            }
        }
        self.stats.record_many(OperationType::Probe, probes);

        match found {
            Some((idx, entry)) => {
                self.slots[idx] = ProbeSlot::Deleted(entry);
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
        self.find_slot(key)
            .and_then(|idx| self.slots[idx].live_entry())
            .map(|entry| entry.value)
    }

    fn capacity(&self) -> usize {
        self.hasher.capacity()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn kind(&self) -> TableKind {
        TableKind::LinearProbe
    }
}

impl fmt::Debug for ProbingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbingTable")
            .field("size", &self.len)
            .field("capacity", &self.capacity())
            .field("tombstones", &self.tombstone_count())
            .field("load_factor", &self.load_factor())
            .finish()
    }
}
