//! Account store adapters and the factory that selects between them.

pub mod factory;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
