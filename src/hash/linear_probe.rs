//! 线性探测序列

/// 线性探测序列迭代器
///
/// 依次产生 `(start + i) mod N`，`i = 0..N`，每个槽位恰好访问一次。
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    start: usize,
    capacity: usize,
    step: usize,
}

impl ProbeSequence {
    pub fn new(start: usize, capacity: usize) -> Self {
        Self {
            start,
            capacity,
            step: 0,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.capacity {
            return None;
        }
        let idx = (self.start + self.step) % self.capacity;
        self.step += 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
