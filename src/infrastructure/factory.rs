use crate::domain::ports::{AccountStoreBox, AccountStoreFactory};
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryAccountStore;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which of the two interchangeable account stores is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataStoreType {
    #[default]
    Primary,
    Backup,
}

/// Only `backup` (any case) selects the backup store; every other value,
/// including an empty one, selects the primary store.
impl FromStr for DataStoreType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("backup") {
            Ok(Self::Backup)
        } else {
            Ok(Self::Primary)
        }
    }
}

impl fmt::Display for DataStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Backup => write!(f, "backup"),
        }
    }
}

/// Builds the account store selected by a [`DataStoreType`].
///
/// Holds one constructor per store type; nothing is opened until
/// [`DataStoreFactory::get_data_store`] is called.
pub struct DataStoreFactory {
    primary: AccountStoreFactory,
    backup: AccountStoreFactory,
}

impl Default for DataStoreFactory {
    /// Both store types backed by separate in-memory stores.
    fn default() -> Self {
        Self::new(in_memory(), in_memory())
    }
}

impl DataStoreFactory {
    pub fn new(primary: AccountStoreFactory, backup: AccountStoreFactory) -> Self {
        Self { primary, backup }
    }

    /// Creates a factory from optional database locations.
    ///
    /// A store without a path is kept in memory. When a path is given but the
    /// `storage-rocksdb` feature is disabled, a warning is logged and the
    /// store falls back to memory as well.
    pub fn from_paths(primary: Option<PathBuf>, backup: Option<PathBuf>) -> Self {
        Self::new(path_or_memory(primary), path_or_memory(backup))
    }

    #[tracing::instrument(skip(self))]
    pub fn get_data_store(&self, data_store_type: DataStoreType) -> Result<AccountStoreBox> {
        tracing::debug!("opening account store");
        match data_store_type {
            DataStoreType::Primary => (self.primary)(),
            DataStoreType::Backup => (self.backup)(),
        }
    }
}

fn in_memory() -> AccountStoreFactory {
    Box::new(|| Ok(Box::new(InMemoryAccountStore::new()) as AccountStoreBox))
}

#[cfg(feature = "storage-rocksdb")]
fn path_or_memory(path: Option<PathBuf>) -> AccountStoreFactory {
    use crate::infrastructure::rocksdb::RocksDBAccountStore;

    match path {
        Some(path) => Box::new(move || {
            let store = RocksDBAccountStore::open(&path)?;
            Ok(Box::new(store) as AccountStoreBox)
        }),
        None => in_memory(),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn path_or_memory(path: Option<PathBuf>) -> AccountStoreFactory {
    if let Some(path) = path {
        tracing::warn!(
            path = %path.display(),
            "Persistent storage requested, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    in_memory()
}
