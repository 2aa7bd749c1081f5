//! 取模哈希 - 三种表共用的定位函数

use crate::{
    hash::{alternate_bucket, calculate_bucket, ProbeSequence},
    types::Key,
};

/// 固定容量的取模哈希器
///
/// `primary(k) = k mod N`，`secondary(k) = (k div N) mod N`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuloHasher {
    capacity: usize,
}

impl ModuloHasher {
    /// `capacity` 必须大于0，由表的配置校验保证
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 主位置（链表桶、探测起点、Cuckoo第一张表）
    pub fn primary(&self, key: Key) -> usize {
        calculate_bucket(key, self.capacity)
    }

    /// Cuckoo第二张表的位置
    pub fn secondary(&self, key: Key) -> usize {
        alternate_bucket(key, self.capacity)
    }

    /// 获取键对应的两个位置
    pub fn locate_buckets(&self, key: Key) -> (usize, usize) {
        (self.primary(key), self.secondary(key))
    }

    /// 从主位置开始的线性探测序列
    pub fn probe_sequence(&self, key: Key) -> ProbeSequence {
        ProbeSequence::new(self.primary(key), self.capacity)
    }
}
