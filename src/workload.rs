//! 负载生成与计时
//!
//! 生成三类键序列（顺序、随机、人为冲突），对任意表执行先插入后删除并记录两阶段耗时。
//! 表本身从不调用这里的代码。

use crate::{
    map::KeyValueTable,
    types::{Key, Value},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fmt,
    time::{Duration, Instant},
};

/// 冲突负载的基准键
pub const COLLISION_BASE: Key = 42;

/// 随机键的上界倍数
pub const RANDOM_KEY_SPREAD: u64 = 10;

/// 负载类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workload {
    /// 互不相同的奇数键 `2i + 1`
    Sequential,
    /// `1..=10·count` 内均匀分布，可能重复
    Random,
    /// `42 + i·N`，全部落在同一个主位置
    Collision,
}

impl Workload {
    pub const ALL: [Workload; 3] = [Workload::Sequential, Workload::Random, Workload::Collision];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
            Self::Collision => "collision",
        }
    }

    /// 为容量 `capacity` 的表生成 `count` 个键
    pub fn keys<R: Rng + ?Sized>(&self, count: usize, capacity: usize, rng: &mut R) -> Vec<Key> {
        match self {
            Self::Sequential => sequential_keys(count),
            Self::Random => random_keys(count, rng),
            Self::Collision => collision_keys(count, capacity),
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn sequential_keys(count: usize) -> Vec<Key> {
    (0..count as u64).map(|i| i * 2 + 1).collect()
}

pub fn random_keys<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Key> {
    let upper = (count as u64 * RANDOM_KEY_SPREAD).max(1);
    (0..count).map(|_| rng.gen_range(1..=upper)).collect()
}

pub fn collision_keys(count: usize, capacity: usize) -> Vec<Key> {
    (0..count as u64)
        .map(|i| COLLISION_BASE + i * capacity as u64)
        .collect()
}

/// 单个负载的计时结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTiming {
    pub workload: Workload,
    pub insert: Duration,
    pub remove: Duration,
    /// 未被丢弃的插入次数
    pub accepted: usize,
    /// 删除阶段结束后仍存在的条目数
    pub remaining: usize,
}

impl fmt::Display for PhaseTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - insert: {} us, remove: {} us (accepted {})",
            self.workload,
            self.insert.as_micros(),
            self.remove.as_micros(),
            self.accepted
        )
    }
}

/// 负载写入键 `k` 时使用的值
///
/// 取 `k` 的位模式作为 `i64` 再加一，溢出时回绕：大于 `i64::MAX` 的键得到负值，
/// `i64::MAX` 本身得到 `i64::MIN`。
pub fn value_for(key: Key) -> Value {
    (key as Value).wrapping_add(1)
}

/// 插入 `(k, value_for(k))` 后逐个删除，分别计时
pub fn run_phase(table: &mut dyn KeyValueTable, workload: Workload, keys: &[Key]) -> PhaseTiming {
    let start = Instant::now();
    let mut accepted = 0;
    for &key in keys {
        if table.try_insert(key, value_for(key)).is_ok() {
            accepted += 1;
        }
    }
    let mid = Instant::now();
    for &key in keys {
        table.remove(key);
    }
    let end = Instant::now();

    let timing = PhaseTiming {
        workload,
        insert: mid - start,
        remove: end - mid,
        accepted,
        remaining: table.len(),
    };
    log_info!("{} [{}] {}", table.kind(), table.capacity(), timing);
    timing
}

/// 依次运行顺序、随机、冲突三类负载
pub fn run_suite(table: &mut dyn KeyValueTable, count: usize, seed: u64) -> Vec<PhaseTiming> {
    let mut rng = StdRng::seed_from_u64(seed);
    let capacity = table.capacity();
    Workload::ALL
        .iter()
        .map(|workload| {
            let keys = workload.keys(count, capacity, &mut rng);
            run_phase(table, *workload, &keys)
        })
        .collect()
}
