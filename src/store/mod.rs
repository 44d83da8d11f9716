//! Store Module
//!
//! Persistence for profile records, keyed by normalized ENS name.

mod memory;
mod sqlite;

use std::sync::Arc;

pub use memory::MemoryProfileStore;
pub use sqlite::SqliteProfileStore;

use crate::config::{Config, DatabaseLocation};
use crate::error::Result;
use crate::profile::ProfileRecord;

/// Create-or-update storage of profile records.
///
/// Calls block; async callers run them on the blocking pool.
pub trait ProfileStore: Send + Sync {
    /// Returns the record for `ens_name`, or [`ProfileError::RecordNotFound`](crate::error::ProfileError::RecordNotFound).
    fn get(&self, ens_name: &str) -> Result<ProfileRecord>;

    /// Inserts or replaces the record with the same `ens_name`, atomically.
    fn upsert(&self, record: &ProfileRecord) -> Result<()>;

    /// Number of stored records.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Opens the store selected by `config.database_url`.
pub fn open_store(config: &Config) -> Result<Arc<dyn ProfileStore>> {
    match config.database()? {
        DatabaseLocation::Memory => Ok(Arc::new(MemoryProfileStore::new())),
        DatabaseLocation::Sqlite(path) => Ok(Arc::new(SqliteProfileStore::open(path)?)),
    }
}
