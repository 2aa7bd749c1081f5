//! 哈希表核心模块 - 三种冲突解决策略

pub mod table;
pub mod chained;
pub mod probing;
pub mod cuckoo;

pub use table::{KeyValueTable, TableConfig, DEFAULT_CAPACITY, DEFAULT_MAX_KICK_DEPTH};
pub use chained::ChainedTable;
pub use probing::ProbingTable;
pub use cuckoo::CuckooTable;

use once_cell::sync::Lazy;

use crate::{error::TableError, types::TableKind};

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<TableConfig> = Lazy::new(TableConfig::default);

/// 按策略类型创建表
pub fn build_table(kind: TableKind, config: &TableConfig) -> Result<Box<dyn KeyValueTable>, TableError> {
    let table: Box<dyn KeyValueTable> = match kind {
        TableKind::Chained => Box::new(ChainedTable::with_config(config)?),
        TableKind::LinearProbe => Box::new(ProbingTable::with_config(config)?),
        TableKind::Cuckoo => Box::new(CuckooTable::with_config(config)?),
    };
    log_debug!("built {} table with capacity {}", kind, config.capacity);
    Ok(table)
}
