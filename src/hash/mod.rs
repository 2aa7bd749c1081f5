//! 哈希模块 - 取模哈希与线性探测序列

pub mod modulo;
pub mod linear_probe;

pub use modulo::ModuloHasher;
pub use linear_probe::ProbeSequence;

/// 哈希工具函数
pub fn calculate_bucket(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// 计算备用位置 `(key div N) mod N`
pub fn alternate_bucket(hash: u64, capacity: usize) -> usize {
    calculate_bucket(hash / capacity as u64, capacity)
}
