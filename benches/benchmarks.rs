//! 三种冲突解决策略的插入/删除基准测试
//!
//! 对每种表容量，分别用顺序、随机、冲突三类键执行先插入后删除。

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use collision_tables::{
    build_table, value_for, KeyValueTable, TableConfig, TableKind, Workload,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// 基准测试配置
const SEED: u64 = 42;
const TABLE_SIZES: [usize; 3] = [1_000, 5_000, 10_000];

fn new_table(kind: TableKind, size: usize) -> Box<dyn KeyValueTable> {
    build_table(kind, &TableConfig::with_capacity(size)).unwrap()
}

/// 插入基准测试
fn bench_insert(c: &mut Criterion) {
    for workload in Workload::ALL {
        let mut group = c.benchmark_group(format!("Insert/{}", workload));

        for &size in TABLE_SIZES.iter() {
            let mut rng = StdRng::seed_from_u64(SEED);
            let keys = workload.keys(size, size, &mut rng);
            group.throughput(Throughput::Elements(size as u64));

            for kind in TableKind::ALL {
                group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &keys, |b, keys| {
                    b.iter_batched(
                        || new_table(kind, size),
                        |mut table| {
                            for &key in keys {
                                table.insert(key, value_for(key));
                            }
                            table
                        },
                        BatchSize::LargeInput,
                    );
                });
            }
        }
        group.finish();
    }
}

/// 删除基准测试
fn bench_remove(c: &mut Criterion) {
    for workload in Workload::ALL {
        let mut group = c.benchmark_group(format!("Remove/{}", workload));

        for &size in TABLE_SIZES.iter() {
            let mut rng = StdRng::seed_from_u64(SEED);
            let keys = workload.keys(size, size, &mut rng);
            group.throughput(Throughput::Elements(size as u64));

            for kind in TableKind::ALL {
                group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &keys, |b, keys| {
                    b.iter_batched(
                        || {
                            // 每个迭代创建新表并填充
                            let mut table = new_table(kind, size);
                            for &key in keys {
                                table.insert(key, value_for(key));
                            }
                            table
                        },
                        |mut table| {
                            for &key in keys {
                                table.remove(key);
                            }
                            black_box(table.len())
                        },
                        BatchSize::LargeInput,
                    );
                });
            }
        }
        group.finish();
    }
}

/// 查询基准测试
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("Get");
    for &size in TABLE_SIZES.iter() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let keys = Workload::Random.keys(size, size, &mut rng);
        group.throughput(Throughput::Elements(size as u64));

        for kind in TableKind::ALL {
            let mut table = new_table(kind, size);
            for &key in &keys {
                table.insert(key, value_for(key));
            }
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &keys, |b, keys| {
                b.iter(|| {
                    for &key in keys {
                        black_box(table.get(key));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_remove, bench_get);
criterion_main!(benches);
