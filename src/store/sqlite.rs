//! SQLite profile store.
//!
//! One `cached_profiles` table with a unique index on `ens_name`. The connection
//! sits behind a mutex; a call's session is the lock guard, released when it
//! drops on every exit path.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use tracing::info;

use crate::error::{ProfileError, Result};
use crate::profile::ProfileRecord;
use crate::store::ProfileStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS cached_profiles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ens_name TEXT NOT NULL,
    profile_data TEXT NOT NULL,
    last_updated TEXT NOT NULL
);
CREATE UNIQUE INDEX IF NOT EXISTS ix_cached_profiles_ens_name
    ON cached_profiles (ens_name);
";

const UPSERT: &str = "
INSERT INTO cached_profiles (ens_name, profile_data, last_updated)
VALUES (?1, ?2, ?3)
ON CONFLICT (ens_name) DO UPDATE SET
    profile_data = excluded.profile_data,
    last_updated = excluded.last_updated
";

// == SQLite Profile Store ==
#[derive(Debug)]
pub struct SqliteProfileStore {
    conn: Mutex<Connection>,
}

impl SqliteProfileStore {
    /// Opens (or creates) the database at `path` and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(read_err)?;
        info!("Opened SQLite profile store at {}", path.display());
        Self::with_connection(conn)
    }

    /// Private in-memory database, gone when the store drops.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory().map_err(read_err)?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5)).map_err(read_err)?;
        conn.execute_batch(SCHEMA).map_err(write_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn session(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}

fn read_err(e: rusqlite::Error) -> ProfileError {
    ProfileError::StoreReadFailed(e.to_string())
}

fn write_err(e: rusqlite::Error) -> ProfileError {
    ProfileError::StoreWriteFailed(e.to_string())
}

impl ProfileStore for SqliteProfileStore {
    fn get(&self, ens_name: &str) -> Result<ProfileRecord> {
        let conn = self.session();
        let row: Option<(Value, DateTime<Utc>)> = conn
            .query_row(
                "SELECT profile_data, last_updated FROM cached_profiles WHERE ens_name = ?1",
                params![ens_name],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(read_err)?;

        match row {
            Some((Value::Object(profile_data), last_updated)) => {
                Ok(ProfileRecord::new(ens_name, profile_data, last_updated))
            }
            Some((other, _)) => Err(ProfileError::Internal(format!(
                "Stored profile for {} is not a JSON object: {}",
                ens_name, other
            ))),
            None => Err(ProfileError::RecordNotFound(ens_name.to_string())),
        }
    }

    fn upsert(&self, record: &ProfileRecord) -> Result<()> {
        let mut conn = self.session();
        // Dropping the transaction without commit rolls it back
        let tx = conn.transaction().map_err(write_err)?;
        tx.execute(
            UPSERT,
            params![
                record.ens_name,
                Value::Object(record.profile_data.clone()),
                record.last_updated
            ],
        )
        .map_err(write_err)?;
        tx.commit().map_err(write_err)
    }

    fn len(&self) -> Result<usize> {
        let conn = self.session();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM cached_profiles", [], |row| row.get(0))
            .map_err(read_err)?;
        Ok(count as usize)
    }
}
