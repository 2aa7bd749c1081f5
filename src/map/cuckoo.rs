//! Cuckoo哈希表 - 两张子表、两个哈希函数、有界踢出链

use crate::{
    error::TableError,
    hash::ModuloHasher,
    map::table::{KeyValueTable, TableConfig, DEFAULT_MAX_KICK_DEPTH},
    stats::{disabled_recorder, StatsRecorder},
    types::{CuckooSide, Entry, InsertOutcome, Key, OperationType, TableKind, Value},
};
use std::{fmt, sync::Arc};

/// Cuckoo哈希表
///
/// 有效键只可能位于 `primary[h1(k)]` 或 `secondary[h2(k)]` 之一，其中
/// `h1(k) = k mod N`，`h2(k) = (k div N) mod N`。
///
/// 插入时若目标槽位已被占用，占用者被踢出并放入另一张表，轮流进行，
/// 最多 `max_kick_depth` 轮。超过上限时手中的条目被静默丢弃，
/// 它可能是之前已插入的键而不是本次请求的键。
pub struct CuckooTable {
    primary: Vec<Option<Entry>>,
    secondary: Vec<Option<Entry>>,
    hasher: ModuloHasher,
    max_kick_depth: usize,
    len: usize,
    stats: Arc<dyn StatsRecorder>,
}

impl CuckooTable {
    /// 创建每张子表 `capacity` 个槽位的表，踢出上限为默认值
    ///
    /// # Panics
    ///
    /// `capacity` 为0时panic，需要错误返回时使用 [`CuckooTable::with_config`]。
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "容量必须大于0");
        Self::build(capacity, DEFAULT_MAX_KICK_DEPTH)
    }

    pub fn with_config(config: &TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::build(config.capacity, config.max_kick_depth))
    }

    fn build(capacity: usize, max_kick_depth: usize) -> Self {
        Self {
            primary: vec![None; capacity],
            secondary: vec![None; capacity],
            hasher: ModuloHasher::new(capacity),
            max_kick_depth,
            len: 0,
            stats: disabled_recorder(),
        }
    }

    /// 设置统计记录器
    pub fn with_stats(mut self, stats: Arc<dyn StatsRecorder>) -> Self {
        self.stats = stats;
        self
    }

    /// 单次插入允许的最大踢出次数
    pub fn max_kick_depth(&self) -> usize {
        self.max_kick_depth
    }

    /// 子表中的槽位
    pub fn slot(&self, side: CuckooSide, index: usize) -> Option<&Entry> {
        self.table(side)[index].as_ref()
    }

    /// 键所在的子表和位置
    pub fn locate(&self, key: Key) -> Option<(CuckooSide, usize)> {
        let (h1, h2) = self.hasher.locate_buckets(key);
        if holds(&self.primary[h1], key) {
            Some((CuckooSide::Primary, h1))
        } else if holds(&self.secondary[h2], key) {
            Some((CuckooSide::Secondary, h2))
        } else {
            None
        }
    }

    /// 所有有效条目，先主表后备表
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.primary.iter().chain(self.secondary.iter()).flatten()
    }

    fn table(&self, side: CuckooSide) -> &[Option<Entry>] {
        match side {
            CuckooSide::Primary => &self.primary,
            CuckooSide::Secondary => &self.secondary,
        }
    }
}

fn holds(slot: &Option<Entry>, key: Key) -> bool {
    slot.is_some_and(|entry| entry.key == key)
}

impl KeyValueTable for CuckooTable {
    fn try_insert(&mut self, key: Key, value: Value) -> Result<InsertOutcome, TableError> {
        if let Some((side, idx)) = self.locate(key) {
            let slot = match side {
                CuckooSide::Primary => &mut self.primary[idx],
                CuckooSide::Secondary => &mut self.secondary[idx],
            };
            *slot = Some(Entry::new(key, value));
            self.stats.record(OperationType::Update);
            return Ok(InsertOutcome::Updated);
        }

        let mut current = Entry::new(key, value);
        for depth in 0..self.max_kick_depth {
            // 主表：空槽直接放入，否则与占用者交换
            let p1 = self.hasher.primary(current.key);
            match self.primary[p1].replace(current) {
                None => return Ok(self.placed()),
                Some(evicted) => current = evicted,
            }
            self.stats.record(OperationType::Kick);

            // 被踢出的条目去备表
            let p2 = self.hasher.secondary(current.key);
            match self.secondary[p2].replace(current) {
                None => return Ok(self.placed()),
                Some(evicted) => current = evicted,
            }
            self.stats.record(OperationType::Kick);
            log_debug!("cuckoo kick depth={} p1={} p2={} in_hand={}", depth, p1, p2, current.key);
        }

        self.stats.record(OperationType::Drop);
        log_warn!(
            "cuckoo kick path exceeded {} rounds, dropping key={} (requested key={})",
            self.max_kick_depth, current.key, key
        );
        Err(TableError::KickPathExceeded {
            depth: self.max_kick_depth,
            lost_key: current.key,
        })
    }

    fn remove_entry(&mut self, key: Key) -> Option<Value> {
        let removed = match self.locate(key) {
            Some((CuckooSide::Primary, idx)) => self.primary[idx].take(),
            Some((CuckooSide::Secondary, idx)) => self.secondary[idx].take(),
            None => None,
        };

        match removed {
            Some(entry) => {
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
        self.locate(key)
            .and_then(|(side, idx)| self.slot(side, idx))
            .map(|entry| entry.value)
    }

    fn capacity(&self) -> usize {
        self.hasher.capacity()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn kind(&self) -> TableKind {
        TableKind::Cuckoo
    }

    fn slot_count(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }
}

impl CuckooTable {
    fn placed(&mut self) -> InsertOutcome {
        self.len += 1;
        self.stats.record(OperationType::Insert);
        InsertOutcome::Inserted
    }
}

impl fmt::Debug for CuckooTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CuckooTable")
            .field("size", &self.len)
            .field("capacity", &self.capacity())
            .field("max_kick_depth", &self.max_kick_depth)
            .field("load_factor", &self.load_factor())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AtomicStatsRecorder;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// 按踢出规则逐步模拟，返回两张子表中的键和被丢弃的键
    fn simulate(
        capacity: u64,
        max_kick_depth: usize,
        keys: &[Key],
    ) -> (Vec<Option<Key>>, Vec<Option<Key>>, Vec<Key>) {
        let n = capacity as usize;
        let mut t1 = vec![None; n];
        let mut t2 = vec![None; n];
        let mut dropped = Vec::new();

        'keys: for &key in keys {
            let mut hand = key;
            for _ in 0..max_kick_depth {
                let p1 = (hand % capacity) as usize;
                match t1[p1] {
                    None => {
                        t1[p1] = Some(hand);
                        continue 'keys;
                    }
                    Some(occupant) => {
                        t1[p1] = Some(hand);
                        hand = occupant;
                    }
                }
                let p2 = ((hand / capacity) % capacity) as usize;
                match t2[p2] {
                    None => {
                        t2[p2] = Some(hand);
                        continue 'keys;
                    }
                    Some(occupant) => {
                        t2[p2] = Some(hand);
                        hand = occupant;
                    }
                }
            }
            dropped.push(hand);
        }
        (t1, t2, dropped)
    }

    fn keys_in(table: &CuckooTable, side: CuckooSide) -> Vec<Option<Key>> {
        (0..table.capacity())
            .map(|idx| table.slot(side, idx).map(|entry| entry.key))
            .collect()
    }

    fn assert_location_invariant(table: &CuckooTable) {
        let hasher = ModuloHasher::new(table.capacity());
        for entry in table.entries() {
            let (h1, h2) = hasher.locate_buckets(entry.key);
            let in_primary = table.slot(CuckooSide::Primary, h1) == Some(entry);
            let in_secondary = table.slot(CuckooSide::Secondary, h2) == Some(entry);
            assert!(in_primary ^ in_secondary, "键 {} 应恰好位于一个计算位置", entry.key);
        }
    }

    #[test]
    fn test_colliding_keys_match_simulation() {
        let keys = [0, 4, 8, 12, 16];
        let mut table = CuckooTable::new(4);
        for key in keys {
            table.insert(key, key as Value + 1);
        }

        let (t1, t2, dropped) = simulate(4, DEFAULT_MAX_KICK_DEPTH, &keys);
        assert!(dropped.is_empty());
        assert_eq!(keys_in(&table, CuckooSide::Primary), t1);
        assert_eq!(keys_in(&table, CuckooSide::Secondary), t2);

        // 16 最终在主表0号位，其余键按 h2 分散到备表
        assert_eq!(t1, vec![Some(16), None, None, None]);
        assert_eq!(t2, vec![Some(0), Some(4), Some(8), Some(12)]);
        assert_eq!(table.len(), 5);
        for key in keys {
            assert_eq!(table.get(key), Some(key as Value + 1));
        }
        assert_location_invariant(&table);
    }

    #[test]
    fn test_cycle_drops_key_in_hand() {
        // 0、16、32 的 h1 和 h2 都是 0，第三个键必然形成循环
        let keys = [0, 16, 32];
        let mut table = CuckooTable::new(4);
        table.insert(0, 0);
        table.insert(16, 16);
        assert_eq!(
            table.try_insert(32, 32),
            Err(TableError::KickPathExceeded { depth: 50, lost_key: 16 })
        );

        let (t1, t2, dropped) = simulate(4, DEFAULT_MAX_KICK_DEPTH, &keys);
        assert_eq!(dropped, vec![16]);
        assert_eq!(keys_in(&table, CuckooSide::Primary), t1);
        assert_eq!(keys_in(&table, CuckooSide::Secondary), t2);

        assert_eq!(table.len(), 2, "有效条目应少于插入次数");
        assert_eq!(table.get(16), None);
        assert_eq!(table.locate(0), Some((CuckooSide::Primary, 0)));
        assert_eq!(table.locate(32), Some((CuckooSide::Secondary, 0)));
        assert_location_invariant(&table);
    }

    #[test]
    fn test_small_kick_bound() {
        let config = TableConfig::with_capacity(4).max_kick_depth(1);
        let mut table = CuckooTable::with_config(&config).unwrap();
        assert_eq!(table.max_kick_depth(), 1);
        assert_eq!(CuckooTable::new(4).max_kick_depth(), DEFAULT_MAX_KICK_DEPTH);
        table.insert(0, 0);
        table.insert(16, 16);
        assert_eq!(
            table.try_insert(32, 32),
            Err(TableError::KickPathExceeded { depth: 1, lost_key: 0 })
        );
        assert_eq!(table.locate(32), Some((CuckooSide::Primary, 0)));
        assert_eq!(table.locate(16), Some((CuckooSide::Secondary, 0)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_update_in_secondary_does_not_duplicate() {
        let mut table = CuckooTable::new(4);
        table.insert(0, 1);
        table.insert(4, 2);
        assert_eq!(table.locate(0), Some((CuckooSide::Secondary, 0)));

        assert_eq!(table.try_insert(0, 99), Ok(InsertOutcome::Updated));
        assert_eq!(table.locate(0), Some((CuckooSide::Secondary, 0)));
        assert_eq!(table.locate(4), Some((CuckooSide::Primary, 0)));
        assert_eq!(table.get(0), Some(99));
        assert_eq!(table.len(), 2);
        assert_location_invariant(&table);
    }

    #[test]
    fn test_remove_from_both_sides() {
        let mut table = CuckooTable::new(4);
        table.insert(0, 1);
        table.insert(4, 2);

        assert_eq!(table.remove_entry(0), Some(1));
        assert_eq!(table.slot(CuckooSide::Secondary, 0), None);
        assert_eq!(table.remove_entry(0), None, "重复删除应为空操作");
        assert_eq!(table.remove_entry(4), Some(2));
        assert!(table.is_empty());
    }

    #[test]
    fn test_location_invariant_random_keys() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut table = CuckooTable::new(64);
        for _ in 0..100 {
            let key = rng.gen_range(0..10_000u64);
            table.insert(key, key as Value);
            assert_location_invariant(&table);
        }
        assert!(table.len() <= 100);
        assert_eq!(table.entries().count(), table.len());
        assert_eq!(table.capacity(), 64);
        assert_eq!(table.slot_count(), 128);
    }

    #[test]
    fn test_kick_stats() {
        let stats = Arc::new(AtomicStatsRecorder::new());
        let mut table = CuckooTable::new(4).with_stats(stats.clone());
        table.insert(0, 0);
        table.insert(4, 0);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.insert_count, 2);
        assert_eq!(snapshot.kick_count, 1);
        assert_eq!(snapshot.drop_count, 0);
    }
}
